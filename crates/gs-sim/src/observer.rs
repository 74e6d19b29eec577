//! Simulation observer trait for progress reporting and data collection.

use gs_core::Tick;
use gs_swarm::{Swarm, TickStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only ever see the swarm between
/// ticks and only through a shared borrow.
///
/// # Example (progress printer)
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: mean speed {:.3}", stats.mean_speed);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any drone moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the movement statistics.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `run.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to drone positions, the site field and the
    /// knowledge map so that renderers and output writers can record state
    /// without the sim knowing about any display or file format.
    fn on_snapshot(&mut self, _tick: Tick, _swarm: &Swarm) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        (**self).on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, swarm: &Swarm) {
        (**self).on_snapshot(tick, swarm);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        (**self).on_sim_end(final_tick);
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.0.on_tick_end(tick, stats);
        self.1.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, swarm: &Swarm) {
        self.0.on_snapshot(tick, swarm);
        self.1.on_snapshot(tick, swarm);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
