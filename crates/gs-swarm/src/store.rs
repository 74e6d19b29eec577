//! Drone storage: `DroneStore` (positions) and `DroneRngs` (per-drone RNG).
//!
//! # Why two structs?
//!
//! The tick loop needs `&mut DroneRngs` (each drone draws from its own
//! stream) while it also reads the store and the knowledge map.  Keeping the
//! RNGs in a separate struct lets the borrow checker see the disjoint
//! access without interior mutability:
//!
//! ```ignore
//! let rng  = swarm.rngs.get_mut(drone);
//! let from = swarm.store.positions[drone.index()];
//! ```

use gs_core::{Cell, DroneId, DroneRng};

// ── DroneRngs ─────────────────────────────────────────────────────────────────

/// Per-drone deterministic RNG state, indexed by `DroneId`.
pub struct DroneRngs {
    inner: Vec<DroneRng>,
}

impl DroneRngs {
    /// Allocate and seed `count` per-drone RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| DroneRng::new(global_seed, DroneId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one drone's RNG.
    #[inline]
    pub fn get_mut(&mut self, drone: DroneId) -> &mut DroneRng {
        &mut self.inner[drone.index()]
    }
}

// ── DroneStore ────────────────────────────────────────────────────────────────

/// Positions of every drone, in creation order.
///
/// `positions` has exactly `count` elements; the `DroneId` value is the
/// index.  A drone has no state besides its position: it always claims the
/// cell it occupies.
pub struct DroneStore {
    /// Number of drones.  Fixed for the lifetime of the swarm.
    pub count: usize,

    /// Current cell of each drone.
    pub positions: Vec<Cell>,
}

impl DroneStore {
    pub fn new(positions: Vec<Cell>) -> Self {
        Self { count: positions.len(), positions }
    }

    /// Iterator over all `DroneId`s in creation order.
    pub fn drone_ids(&self) -> impl Iterator<Item = DroneId> + '_ {
        (0..self.count as u32).map(DroneId)
    }
}
