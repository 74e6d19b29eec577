//! Deterministic per-drone and world-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! The world RNG ([`SimRng`]) is seeded directly from the run seed and is
//! used for site-field generation and initial drone placement.  Each drone
//! gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR ((drone_id + 1) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive drone IDs uniformly across the seed space.  The
//! `+ 1` keeps drone 0 off the world stream.  This means:
//!
//! - Drones never share RNG state, so a drone's draws do not depend on how
//!   many draws earlier drones consumed in the same tick.
//! - Two runs with the same seed and the same initial state produce identical
//!   trajectories.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::DroneId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Derive a well-spread seed from `seed` and a stream `offset`.
///
/// Used for per-drone streams and for independent repetitions of an
/// experiment (`offset` = repetition index).
#[inline]
pub fn mix_seed(seed: u64, offset: u64) -> u64 {
    seed ^ offset.wrapping_add(1).wrapping_mul(MIXING_CONSTANT)
}

// ── DroneRng ──────────────────────────────────────────────────────────────────

/// Per-drone deterministic RNG.
///
/// Create one per drone at swarm init; store in a parallel `Vec<DroneRng>`
/// alongside the positions array.
pub struct DroneRng(SmallRng);

impl DroneRng {
    /// Seed deterministically from the run's global seed and a drone ID.
    pub fn new(global_seed: u64, drone: DroneId) -> Self {
        DroneRng(SmallRng::seed_from_u64(mix_seed(global_seed, drone.0 as u64)))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    ///
    /// For `f64` this is uniform in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// World-level RNG for site generation and initial placement.
///
/// Used only in single-threaded contexts.  Parallel experiments give each
/// run its own `SimRng` seeded via [`mix_seed`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
