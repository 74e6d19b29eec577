//! `gs-output`: simulation output writers for glide_swarm.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                    |
//! |-----------|---------|--------------------------------------------------|
//! | *(none)*  | CSV     | `drone_snapshots.csv`, `tick_summaries.csv`      |
//! | `sqlite`  | SQLite  | `output.db`                                      |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `gs_sim::SimObserver`.  Density sweep results are written
//! separately, one row per density, with
//! [`SweepCsvWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod sweep;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DroneSnapshotRow, TickSummaryRow};
pub use sweep::SweepCsvWriter;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
