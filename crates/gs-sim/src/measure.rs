//! Mean swarm speed, measured after a burn-in and averaged over repetitions.

use gs_core::{RunConfig, SwarmConfig, Tick};
use gs_swarm::TickStats;

use crate::{SimBuilder, SimError, SimObserver, SimResult};

/// How a single speed measurement is taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MeasureConfig {
    /// Ticks discarded before sampling starts.
    pub burn_in_ticks: u64,
    /// Ticks sampled after the burn-in.
    pub window_ticks:  u64,
    /// Independent runs to average over.
    pub repetitions:   u32,
}

impl MeasureConfig {
    /// Total ticks one repetition runs for.
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        self.burn_in_ticks + self.window_ticks
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.window_ticks == 0 {
            return Err(SimError::Config("window_ticks must be positive".into()));
        }
        if self.repetitions == 0 {
            return Err(SimError::Config("repetitions must be positive".into()));
        }
        Ok(())
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self { burn_in_ticks: 1000, window_ticks: 1000, repetitions: 4 }
    }
}

/// Result of a speed measurement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpeedSummary {
    /// Mean of the per-tick mean speeds.
    pub mean:    f64,
    /// Population standard deviation of the per-tick mean speeds.
    pub std_dev: f64,
    /// Number of tick samples behind the figures.
    pub samples: usize,
}

impl SpeedSummary {
    fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        Some(Self { mean, std_dev: var.sqrt(), samples: samples.len() })
    }
}

// ── SpeedMeter ────────────────────────────────────────────────────────────────

/// Samples reserved up front; longer windows grow on demand.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Observer that records `TickStats::mean_speed` for `window_ticks` ticks
/// once the tick index reaches `burn_in_ticks`.
#[derive(Clone, Debug)]
pub struct SpeedMeter {
    burn_in: u64,
    window:  usize,
    samples: Vec<f64>,
}

impl SpeedMeter {
    pub fn new(burn_in_ticks: u64, window_ticks: u64) -> Self {
        let window = usize::try_from(window_ticks).unwrap_or(usize::MAX);
        let samples = Vec::with_capacity(window.min(MAX_PREALLOCATED_SAMPLES));
        Self { burn_in: burn_in_ticks, window, samples }
    }

    /// `true` once the window is full.
    pub fn is_complete(&self) -> bool {
        self.samples.len() >= self.window
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// `None` until at least one sample was taken.
    pub fn summary(&self) -> Option<SpeedSummary> {
        SpeedSummary::from_samples(&self.samples)
    }
}

impl From<&MeasureConfig> for SpeedMeter {
    fn from(cfg: &MeasureConfig) -> Self {
        Self::new(cfg.burn_in_ticks, cfg.window_ticks)
    }
}

impl SimObserver for SpeedMeter {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        if tick.0 >= self.burn_in && !self.is_complete() {
            self.samples.push(stats.mean_speed);
        }
    }
}

// ── measure ──────────────────────────────────────────────────────────────────

/// Run `cfg.repetitions` independent simulations of `swarm` and average
/// their speed summaries.
///
/// Repetition `r` uses `swarm.reseeded(r)`, so both the field and the drones
/// differ between repetitions while the whole measurement stays reproducible.
/// The returned `mean` and `std_dev` are the plain averages of the
/// per-repetition figures; `samples` is the total across repetitions.
pub fn measure(swarm: &SwarmConfig, cfg: &MeasureConfig) -> SimResult<SpeedSummary> {
    cfg.validate()?;
    let run = RunConfig { total_ticks: cfg.total_ticks(), output_interval_ticks: 0 };

    let mut total = SpeedSummary::default();
    for rep in 0..cfg.repetitions {
        let mut sim = SimBuilder::new(run.clone(), swarm.reseeded(u64::from(rep))).build()?;
        let mut meter = SpeedMeter::from(cfg);
        sim.run(&mut meter);

        let Some(summary) = meter.summary() else {
            return Err(SimError::Config("measurement window produced no samples".into()));
        };
        tracing::debug!(
            rep,
            mean    = summary.mean,
            std_dev = summary.std_dev,
            "repetition measured"
        );
        total.mean += summary.mean;
        total.std_dev += summary.std_dev;
        total.samples += summary.samples;
    }

    let reps = f64::from(cfg.repetitions);
    total.mean /= reps;
    total.std_dev /= reps;
    Ok(total)
}
