//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use gs_core::{Cell, RunConfig, SimClock, SwarmConfig};
use gs_grid::SiteField;
use gs_swarm::SwarmBuilder;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`RunConfig`]: total ticks, snapshot interval
/// - [`SwarmConfig`]: grid, sites, drones, step bound, seed
///
/// # Optional inputs (forwarded to [`SwarmBuilder`])
///
/// | Method                   | Default                          |
/// |--------------------------|----------------------------------|
/// | `.field(f)`              | Sampled from the swarm config    |
/// | `.shared_field(arc)`     | (same, but shares a field)       |
/// | `.positions(v)`          | Uniformly random sites           |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(run, swarm_config)
///     .field(field)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    run:   RunConfig,
    swarm: SwarmBuilder,
}

impl SimBuilder {
    pub fn new(run: RunConfig, swarm: SwarmConfig) -> Self {
        Self { run, swarm: SwarmBuilder::new(swarm) }
    }

    pub fn field(mut self, field: SiteField) -> Self {
        self.swarm = self.swarm.field(field);
        self
    }

    pub fn shared_field(mut self, field: Arc<SiteField>) -> Self {
        self.swarm = self.swarm.shared_field(field);
        self
    }

    pub fn positions(mut self, positions: Vec<Cell>) -> Self {
        self.swarm = self.swarm.positions(positions);
        self
    }

    /// Build the swarm and return a [`Sim`] positioned at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        let swarm = self.swarm.build()?;
        Ok(Sim {
            run:   self.run,
            clock: SimClock::new(),
            swarm,
        })
    }
}
