//! Density sweep results as CSV.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use gs_sim::SweepRow;

use crate::OutputResult;

pub(crate) const SWEEP_HEADER: [&str; 4] = ["density", "site_count", "mean_speed", "std_dev"];

/// Streams sweep rows to a CSV file, one flushed record per measured density,
/// so a partial sweep is still on disk if the run is interrupted.
pub struct SweepCsvWriter {
    writer: Writer<File>,
}

impl SweepCsvWriter {
    /// Create (or truncate) `path` and write the header line.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(SWEEP_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn write_row(&mut self, row: &SweepRow) -> OutputResult<()> {
        self.writer.write_record(&[
            row.density.to_string(),
            row.site_count.to_string(),
            row.mean_speed.to_string(),
            row.std_dev.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}
