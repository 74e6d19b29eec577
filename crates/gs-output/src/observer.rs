//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use gs_core::Tick;
use gs_sim::SimObserver;
use gs_swarm::{Swarm, TickStats};

use crate::row::{DroneSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes drone snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        let row = TickSummaryRow {
            tick:       tick.0,
            rejected:   stats.rejected,
            direct:     stats.direct,
            recruited:  stats.recruited,
            stranded:   stats.stranded,
            mean_speed: stats.mean_speed,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, swarm: &Swarm) {
        let field = swarm.field();
        let knowledge = swarm.knowledge();
        let rows: Vec<DroneSnapshotRow> = swarm
            .drone_ids()
            .zip(swarm.positions())
            .map(|(id, &cell)| DroneSnapshotRow {
                drone_id: id.0,
                tick:     tick.0,
                row:      cell.row,
                col:      cell.col,
                on_site:  field.has_site(cell),
                claims:   knowledge.count(cell),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
