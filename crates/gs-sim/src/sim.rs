//! The `Sim` struct and its tick loop.

use gs_core::{RunConfig, SimClock, Tick};
use gs_swarm::{Swarm, TickStats};

use crate::SimObserver;

/// The main simulation runner.
///
/// `Sim` pairs a [`Swarm`] with a clock and a run length.  Each tick it
/// advances every drone once and reports to the observer; the swarm itself
/// knows nothing about ticks, output or display.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run length and snapshot interval.
    pub run: RunConfig,

    /// Simulation clock.
    pub clock: SimClock,

    /// All simulation state: drones, knowledge map, site field.
    pub swarm: Swarm,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `run.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let start = self.clock.current_tick;
        tracing::info!(
            from   = start.0,
            to     = self.run.total_ticks,
            drones = self.swarm.drone_count(),
            sites  = self.swarm.field().site_count(),
            "simulation started"
        );

        while self.clock.current_tick < self.run.end_tick() {
            self.process_tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);

        tracing::info!(
            ticks       = self.clock.current_tick.since(start),
            known_cells = self.swarm.knowledge().known_cells(),
            on_sites    = self.swarm.drones_on_sites(),
            "simulation finished"
        );
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests, incremental stepping and interactive drivers.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    /// Advance one tick without any observer.
    pub fn step(&mut self) -> TickStats {
        let stats = self.swarm.advance_all();
        self.clock.advance();
        stats
    }

    /// The tick the next call to `step` / `run_ticks` will process.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;

        observer.on_tick_start(now);
        let stats = self.swarm.advance_all();
        tracing::trace!(
            tick      = now.0,
            direct    = stats.direct,
            recruited = stats.recruited,
            rejected  = stats.rejected,
            stranded  = stats.stranded,
            speed     = stats.mean_speed,
            "tick"
        );
        observer.on_tick_end(now, &stats);

        if self.run.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.swarm);
        }

        self.clock.advance();
    }
}
