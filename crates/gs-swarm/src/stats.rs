//! Per-tick movement statistics.

use crate::MoveOutcome;

/// Counts of each [`MoveOutcome`] over one tick, plus the mean speed.
///
/// Speed is the wrapped Euclidean displacement of a drone across the tick;
/// drones that stayed contribute zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickStats {
    pub rejected:   u32,
    pub direct:     u32,
    pub recruited:  u32,
    pub stranded:   u32,
    pub mean_speed: f64,
}

impl TickStats {
    /// Drones that claimed a (possibly unchanged) cell this tick.
    #[inline]
    pub fn moved(&self) -> u32 {
        self.direct + self.recruited
    }

    /// Total drones accounted for.
    #[inline]
    pub fn drones(&self) -> u32 {
        self.rejected + self.direct + self.recruited + self.stranded
    }

    /// Record one drone's outcome.  `displacement` feeds the running speed
    /// sum, which [`finish`](Self::finish) turns into a mean.
    #[inline]
    pub(crate) fn record(&mut self, outcome: MoveOutcome, displacement: f64) {
        match outcome {
            MoveOutcome::Rejected     => self.rejected += 1,
            MoveOutcome::Direct(_)    => self.direct += 1,
            MoveOutcome::Recruited(_) => self.recruited += 1,
            MoveOutcome::Stranded     => self.stranded += 1,
        }
        self.mean_speed += displacement;
    }

    pub(crate) fn finish(mut self) -> Self {
        let n = self.drones();
        if n > 0 {
            self.mean_speed /= n as f64;
        }
        self
    }
}
