//! The shared knowledge map: how many drones currently claim each cell.
//!
//! A cell is **known** while its claim count is positive.  Drones claim the
//! cell they occupy, so the map doubles as an occupancy count of known
//! cells and is what the recruitment step of the movement policy searches.
//!
//! # Window queries
//!
//! [`KnowledgeMap::candidates_in_window`] scans an inclusive rectangle
//! `[-half_rows, +half_rows] × [-half_cols, +half_cols]` around a centre
//! cell, wrapping both axes.  Offsets are visited row by row, each row left
//! to right, so the candidate order is fully determined by the arguments.
//! When a window is at least as wide as the grid on some axis, that axis is
//! scanned exactly once instead of revisiting cells, so every cell appears
//! at most once among the candidates.

use std::ops::RangeInclusive;

use gs_core::{Cell, Torus};

/// Per-cell claim counters on an `n × n` torus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeMap {
    torus:  Torus,
    counts: Vec<u32>,
}

impl KnowledgeMap {
    /// An all-zero map.
    pub fn new(torus: Torus) -> Self {
        Self { torus, counts: vec![0; torus.cell_count()] }
    }

    /// A map with one claim per entry of `cells` (repeats accumulate).
    pub fn tally<'a, I>(torus: Torus, cells: I) -> Self
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let mut map = Self::new(torus);
        for &cell in cells {
            map.increment(cell);
        }
        map
    }

    #[inline]
    fn slot(&self, cell: Cell) -> usize {
        assert!(
            self.torus.contains(cell),
            "cell {cell} outside {0}x{0} knowledge map",
            self.torus.size(),
        );
        self.torus.index(cell)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add one claim at `cell`.
    #[inline]
    pub fn increment(&mut self, cell: Cell) {
        let i = self.slot(cell);
        self.counts[i] += 1;
    }

    /// Remove one claim at `cell`.
    ///
    /// An underflow means the caller's bookkeeping is wrong: it panics in
    /// debug builds and saturates at zero in release builds.
    #[inline]
    pub fn decrement(&mut self, cell: Cell) {
        let i = self.slot(cell);
        let count = &mut self.counts[i];
        debug_assert!(*count > 0, "claim count underflow at {cell}");
        *count = count.saturating_sub(1);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn count(&self, cell: Cell) -> u32 {
        self.counts[self.slot(cell)]
    }

    /// `true` if at least one drone claims `cell`.
    #[inline]
    pub fn is_known(&self, cell: Cell) -> bool {
        self.count(cell) > 0
    }

    /// Number of cells with a positive count.
    pub fn known_cells(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Sum of all counts.
    pub fn total_claims(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Row-major view of every count.
    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[inline]
    pub fn torus(&self) -> Torus {
        self.torus
    }

    /// Known cells in the wrapped window around `center`.
    pub fn candidates_in_window(&self, center: Cell, half_rows: u32, half_cols: u32) -> Vec<Cell> {
        let mut out = Vec::new();
        self.collect_candidates_into(center, half_rows, half_cols, &mut out);
        out
    }

    /// Like [`candidates_in_window`](Self::candidates_in_window) but reuses
    /// `out` (cleared first) to avoid a per-call allocation.
    pub fn collect_candidates_into(
        &self,
        center:    Cell,
        half_rows: u32,
        half_cols: u32,
        out:       &mut Vec<Cell>,
    ) {
        out.clear();
        let n = self.torus.size();
        for d_row in window_offsets(half_rows, n) {
            let row = self.torus.wrap(center.row as i64 + d_row);
            for d_col in window_offsets(half_cols, n) {
                let cell = Cell::new(row, self.torus.wrap(center.col as i64 + d_col));
                if self.counts[self.torus.index(cell)] > 0 {
                    out.push(cell);
                }
            }
        }
    }
}

/// Offsets `-half ..= half`, truncated to `n` consecutive values so that no
/// cell is visited twice on a small grid.
fn window_offsets(half: u32, n: u32) -> RangeInclusive<i64> {
    let lo = -(half as i64);
    let span = (2 * half as u64 + 1).min(n as u64) as i64;
    lo..=lo + span - 1
}
