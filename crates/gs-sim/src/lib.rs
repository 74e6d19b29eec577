//! `gs-sim`: tick loop orchestrator for the glide_swarm simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..run.total_ticks:
//!   observer.on_tick_start(tick)
//!   stats = swarm.advance_all()          // every drone, creation order
//!   observer.on_tick_end(tick, &stats)
//!   every output_interval_ticks:
//!     observer.on_snapshot(tick, &swarm) // read-only, between ticks
//! observer.on_sim_end(end)
//! ```
//!
//! # Experiments
//!
//! | Item             | Purpose                                                 |
//! |------------------|---------------------------------------------------------|
//! | [`SpeedMeter`]   | Observer: mean speed over a window after a burn-in      |
//! | [`measure`]      | Repeated independent runs → averaged [`SpeedSummary`]   |
//! | [`DensitySweep`] | `measure` over a range of site densities                |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs density-sweep points on Rayon's thread pool.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on experiment configs.|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::{RunConfig, SwarmConfig};
//! use gs_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(RunConfig::default(), SwarmConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! println!("{:?}", sim.swarm.positions());
//! ```

pub mod builder;
pub mod error;
pub mod measure;
pub mod observer;
pub mod sim;
pub mod sweep;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use measure::{MeasureConfig, SpeedMeter, SpeedSummary, measure};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use sweep::{DensitySweep, SweepConfig, SweepRow};
