//! Bookkeeping invariants of a swarm.
//!
//! Every drone claims exactly the cell it occupies, so the knowledge map
//! must equal a fresh tally of drone positions.  A mismatch is a logic bug,
//! never a user error; [`Swarm::advance_all`](crate::Swarm::advance_all)
//! checks after every tick in debug builds and panics on failure.
//!
//! A negative count cannot be represented; the knowledge map itself catches
//! the underflow in debug builds.

use gs_core::{Cell, DroneId, Torus};
use gs_grid::KnowledgeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{drone} at {cell} is outside the {size}x{size} grid")]
    OutOfBounds { drone: DroneId, cell: Cell, size: u32 },

    #[error("claim count at {cell} is {claimed} but {occupants} drone(s) occupy it")]
    CountMismatch { cell: Cell, claimed: u32, occupants: u32 },
}

/// Verify `knowledge` against `positions`.  Reports the first violation in
/// drone order, then row-major cell order.
pub(crate) fn check(
    torus:     Torus,
    positions: &[Cell],
    knowledge: &KnowledgeMap,
) -> Result<(), InvariantViolation> {
    for (i, &cell) in positions.iter().enumerate() {
        if !torus.contains(cell) {
            return Err(InvariantViolation::OutOfBounds {
                drone: DroneId(i as u32),
                cell,
                size: torus.size(),
            });
        }
    }

    let expected = KnowledgeMap::tally(torus, positions);
    let mismatch = knowledge
        .counts()
        .iter()
        .zip(expected.counts())
        .position(|(claimed, occupants)| claimed != occupants);

    match mismatch {
        None => Ok(()),
        Some(i) => Err(InvariantViolation::CountMismatch {
            cell:      torus.cell_at(i),
            claimed:   knowledge.counts()[i],
            occupants: expected.counts()[i],
        }),
    }
}
