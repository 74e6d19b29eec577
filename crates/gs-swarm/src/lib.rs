//! `gs-swarm`: drones, their movement policy, and the swarm tick.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`store`]       | `DroneStore` (positions), `DroneRngs` (per-drone RNG)      |
//! | [`policy`]      | `StepDraw`, `MoveOutcome`, `decide`: one drone, one tick   |
//! | [`swarm`]       | `Swarm`: owns drones + knowledge map, runs `advance_all`   |
//! | [`builder`]     | `SwarmBuilder` (validation, sampling, injection)           |
//! | [`stats`]       | `TickStats` returned by every tick                         |
//! | [`invariant`]   | `InvariantViolation`: bookkeeping checks                   |
//! | [`error`]       | `SwarmError`, `SwarmResult<T>`                             |
//!
//! # Tick semantics
//!
//! Drones are advanced one at a time in creation order.  Each drone reads
//! the knowledge map as left by the drones before it in the same tick, so a
//! drone that just landed on a site can recruit later drones immediately.

pub mod builder;
pub mod error;
pub mod invariant;
pub mod policy;
pub mod stats;
pub mod store;
pub mod swarm;

#[cfg(test)]
mod tests;

pub use builder::SwarmBuilder;
pub use error::{SwarmError, SwarmResult};
pub use invariant::InvariantViolation;
pub use policy::{MoveOutcome, StepDraw, decide};
pub use stats::TickStats;
pub use store::{DroneRngs, DroneStore};
pub use swarm::Swarm;
