//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `drone_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DroneSnapshotRow, OutputResult, TickSummaryRow};

pub(crate) const SNAPSHOT_HEADER: [&str; 6] = ["drone_id", "tick", "row", "col", "on_site", "claims"];
pub(crate) const SUMMARY_HEADER: [&str; 6] =
    ["tick", "rejected", "direct", "recruited", "stranded", "mean_speed"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("drone_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[DroneSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.drone_id.to_string(),
                row.tick.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                (row.on_site as u8).to_string(),
                row.claims.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.rejected.to_string(),
            row.direct.to_string(),
            row.recruited.to_string(),
            row.stranded.to_string(),
            row.mean_speed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
