//! The `Swarm` struct and its synchronous tick.

use std::sync::Arc;

use gs_core::{Cell, DroneId, SwarmConfig, Torus};
use gs_grid::{KnowledgeMap, SiteField};

use crate::invariant::{self, InvariantViolation};
use crate::policy::{self, MoveOutcome, StepDraw};
use crate::{DroneRngs, DroneStore, SwarmBuilder, SwarmResult, TickStats};

/// A swarm of drones searching one site field.
///
/// Holds all mutable simulation state:
///
/// - the drone positions and per-drone RNGs (exclusively owned),
/// - the knowledge map (exclusively owned, never reset),
/// - a shared, read-only handle to the site field.
///
/// Create via [`SwarmBuilder`] or [`Swarm::initialize`].  Readers such as
/// renderers and output observers borrow the swarm between ticks; the
/// `&mut self` receiver of [`advance_all`](Self::advance_all) rules out
/// reads during a tick.
pub struct Swarm {
    pub(crate) config:    SwarmConfig,
    pub(crate) field:     Arc<SiteField>,
    pub(crate) knowledge: KnowledgeMap,
    pub(crate) store:     DroneStore,
    pub(crate) rngs:      DroneRngs,
    /// Reused recruitment candidate buffer.
    pub(crate) scratch:   Vec<Cell>,
}

impl Swarm {
    /// Build a swarm from `config`: sample the site field, place every drone
    /// on a uniformly chosen site and claim its cell.
    ///
    /// Fails with a configuration error if the parameters are invalid or the
    /// sampled field has no sites.
    pub fn initialize(config: &SwarmConfig) -> SwarmResult<Self> {
        SwarmBuilder::new(config.clone()).build()
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every drone by one tick, in creation order.
    ///
    /// Knowledge-map updates made by a drone are visible to every later
    /// drone in the same tick.
    ///
    /// # Panics
    /// In debug builds, panics if the claim counts no longer match the drone
    /// positions afterwards.
    pub fn advance_all(&mut self) -> TickStats {
        let torus = self.field.torus();
        let max_move = self.config.max_move;
        let mut stats = TickStats::default();

        for i in 0..self.store.count {
            let drone = DroneId(i as u32);
            let rng = self.rngs.get_mut(drone);
            let from = self.store.positions[i];

            let draw = StepDraw::sample(rng, max_move);
            let outcome = policy::decide(
                from,
                &draw,
                &self.field,
                &self.knowledge,
                rng,
                &mut self.scratch,
            );

            let displacement = match outcome.destination() {
                Some(dest) => {
                    self.knowledge.increment(dest);
                    self.knowledge.decrement(from);
                    self.store.positions[i] = dest;
                    torus.euclidean(from, dest)
                }
                None => 0.0,
            };

            if outcome == MoveOutcome::Stranded {
                tracing::debug!(%drone, %from, ?draw, "no known cell in probe window; staying put");
            }
            stats.record(outcome, displacement);
        }

        #[cfg(debug_assertions)]
        if let Err(violation) = self.check_invariants() {
            panic!("swarm bookkeeping broken after tick: {violation}");
        }

        stats.finish()
    }

    /// Verify that every drone is on the grid and that each claim count
    /// equals the number of drones on that cell.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        invariant::check(self.torus(), &self.store.positions, &self.knowledge)
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Drone positions in creation order.
    #[inline]
    pub fn positions(&self) -> &[Cell] {
        &self.store.positions
    }

    /// Position of one drone, or `None` for an unknown ID.
    #[inline]
    pub fn position(&self, drone: DroneId) -> Option<Cell> {
        self.store.positions.get(drone.index()).copied()
    }

    #[inline]
    pub fn drone_count(&self) -> usize {
        self.store.count
    }

    /// All drone IDs in creation order.
    pub fn drone_ids(&self) -> impl Iterator<Item = DroneId> + '_ {
        self.store.drone_ids()
    }

    #[inline]
    pub fn field(&self) -> &SiteField {
        &self.field
    }

    /// A clone of the shared site-field handle.
    pub fn shared_field(&self) -> Arc<SiteField> {
        Arc::clone(&self.field)
    }

    #[inline]
    pub fn knowledge(&self) -> &KnowledgeMap {
        &self.knowledge
    }

    #[inline]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    #[inline]
    pub fn torus(&self) -> Torus {
        self.field.torus()
    }

    /// Number of drones currently standing on a true site.
    pub fn drones_on_sites(&self) -> usize {
        self.store
            .positions
            .iter()
            .filter(|&&cell| self.field.has_site(cell))
            .count()
    }
}
