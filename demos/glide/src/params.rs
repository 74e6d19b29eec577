//! Parameter file loading and CLI overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use gs_core::{RunConfig, SwarmConfig};
use gs_sim::{MeasureConfig, SweepConfig};

/// Everything a `glide` invocation can be configured with.
///
/// Missing sections and keys fall back to their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    pub swarm:   SwarmConfig,
    pub run:     RunConfig,
    pub measure: MeasureConfig,
    pub sweep:   SweepConfig,
    pub output:  OutputParams,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputParams {
    /// Directory for snapshot/summary files written by `glide run`.
    pub dir:       Option<PathBuf>,
    /// Destination of the `glide sweep` table.
    pub sweep_csv: Option<PathBuf>,
}

impl Params {
    /// Read `path`, or return defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading parameter file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing parameter file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

// ── CLI overrides ─────────────────────────────────────────────────────────────

/// Swarm flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct SwarmArgs {
    /// Grid side length N (the torus has N × N cells)
    #[arg(long)]
    pub grid_size: Option<u32>,

    /// Number of thermal sites; density is sites / N²
    #[arg(long)]
    pub sites: Option<u64>,

    /// Number of drones
    #[arg(long)]
    pub drones: Option<u32>,

    /// Largest per-axis step a drone may attempt
    #[arg(long)]
    pub max_move: Option<u32>,

    /// Random seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SwarmArgs {
    pub fn apply(&self, cfg: &mut SwarmConfig) {
        if let Some(v) = self.grid_size { cfg.grid_size = v; }
        if let Some(v) = self.sites     { cfg.site_count = v; }
        if let Some(v) = self.drones    { cfg.drone_count = v; }
        if let Some(v) = self.max_move  { cfg.max_move = v; }
        if let Some(v) = self.seed      { cfg.seed = v; }
    }
}

/// Measurement flags for `glide sweep`.
#[derive(Args, Debug, Default)]
pub struct MeasureArgs {
    /// Ticks discarded before sampling
    #[arg(long)]
    pub burn_in: Option<u64>,

    /// Ticks sampled per repetition
    #[arg(long)]
    pub window: Option<u64>,

    /// Independent runs per density
    #[arg(long)]
    pub reps: Option<u32>,
}

impl MeasureArgs {
    pub fn apply(&self, cfg: &mut MeasureConfig) {
        if let Some(v) = self.burn_in { cfg.burn_in_ticks = v; }
        if let Some(v) = self.window  { cfg.window_ticks = v; }
        if let Some(v) = self.reps    { cfg.repetitions = v; }
    }
}
