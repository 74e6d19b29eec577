//! The drone movement policy.
//!
//! One call to [`decide`] resolves one drone's move for one tick:
//!
//! ```text
//! draw d_row, d_col ∈ [0, max_move], u ∈ [0, 1)
//! if u >= exp(-max(d_row, d_col))        → Rejected   (stay)
//! t = (row + d_row, col + d_col) mod n
//! if t is a site                         → Direct(t)
//! C = known cells in t ± (d_row, d_col)
//! if C is empty                          → Stranded   (stay)
//! else                                   → Recruited(uniform pick from C)
//! ```
//!
//! Small steps are exponentially favoured; a zero step always passes the
//! acceptance test.  Steps only ever go down and to the right, the torus
//! supplies the other directions.
//!
//! `decide` only reads the grids.  The caller applies the returned
//! [`MoveOutcome`] (claim the destination, release the origin).

use gs_core::{Cell, DroneRng};
use gs_grid::{KnowledgeMap, SiteField};

// ── StepDraw ──────────────────────────────────────────────────────────────────

/// The three random draws a drone makes at the start of its move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepDraw {
    pub d_row: u32,
    pub d_col: u32,
    /// Uniform in `[0, 1)`, compared against [`acceptance`](Self::acceptance).
    pub u:     f64,
}

impl StepDraw {
    /// Draw `d_row`, `d_col` uniformly from `0..=max_move`, then `u`.
    #[inline]
    pub fn sample(rng: &mut DroneRng, max_move: u32) -> Self {
        let d_row = rng.gen_range(0..=max_move);
        let d_col = rng.gen_range(0..=max_move);
        let u = rng.random::<f64>();
        Self { d_row, d_col, u }
    }

    /// Chebyshev length of the step.
    #[inline]
    pub fn magnitude(&self) -> u32 {
        self.d_row.max(self.d_col)
    }

    /// `exp(-magnitude)`.
    #[inline]
    pub fn acceptance(&self) -> f64 {
        (-(self.magnitude() as f64)).exp()
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.u < self.acceptance()
    }
}

// ── MoveOutcome ───────────────────────────────────────────────────────────────

/// What a drone does this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The acceptance test failed; the drone stays put.
    Rejected,

    /// The tentative destination is a site; the drone moves onto it.
    Direct(Cell),

    /// The tentative destination is not a site; the drone joins a known cell
    /// from the probe window instead.  May be its own cell.
    Recruited(Cell),

    /// No known cell in the probe window; the drone stays put.
    Stranded,
}

impl MoveOutcome {
    /// The cell the drone claims after the move, or `None` if it stays
    /// without touching the knowledge map.
    #[inline]
    pub fn destination(self) -> Option<Cell> {
        match self {
            MoveOutcome::Direct(cell) | MoveOutcome::Recruited(cell) => Some(cell),
            MoveOutcome::Rejected | MoveOutcome::Stranded => None,
        }
    }
}

// ── decide ────────────────────────────────────────────────────────────────────

/// Resolve one drone's move.
///
/// `rng` is the drone's own stream; it is consumed only for the recruitment
/// pick.  `scratch` is a reusable candidate buffer.
pub fn decide(
    from:      Cell,
    draw:      &StepDraw,
    field:     &SiteField,
    knowledge: &KnowledgeMap,
    rng:       &mut DroneRng,
    scratch:   &mut Vec<Cell>,
) -> MoveOutcome {
    if !draw.is_accepted() {
        return MoveOutcome::Rejected;
    }

    let tentative = field.torus().offset(from, draw.d_row as i64, draw.d_col as i64);
    if field.has_site(tentative) {
        return MoveOutcome::Direct(tentative);
    }

    knowledge.collect_candidates_into(tentative, draw.d_row, draw.d_col, scratch);
    match rng.choose(scratch) {
        Some(&cell) => MoveOutcome::Recruited(cell),
        None => MoveOutcome::Stranded,
    }
}
