//! Swarm construction parameters.

use crate::{CoreError, CoreResult, mix_seed};

/// Parameters for building a swarm: grid, sites, drones, step bound, seed.
///
/// Typically loaded from the `[swarm]` table of a TOML parameter file by the
/// driver crate, then overridden by command-line flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SwarmConfig {
    /// Side length `n` of the square torus.
    pub grid_size: u32,

    /// Target number of sites `S`.  Each cell is a site with probability
    /// `S / n²`, so the sampled count only matches `S` on average.
    pub site_count: u64,

    /// Number of drones.  Fixed for the lifetime of the swarm.
    pub drone_count: u32,

    /// Upper bound (inclusive) of each per-axis step draw.
    pub max_move: u32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl SwarmConfig {
    /// Number of cells in the grid, `n²`.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.grid_size as u64 * self.grid_size as u64
    }

    /// Site probability per cell, `ρ = S / n²`.  `0.0` for an empty grid.
    pub fn density(&self) -> f64 {
        match self.cell_count() {
            0 => 0.0,
            cells => self.site_count as f64 / cells as f64,
        }
    }

    /// Same configuration with `site_count` chosen so that `density()` is as
    /// close to `rho` as the grid allows.
    pub fn with_density(&self, rho: f64) -> Self {
        let site_count = (rho.clamp(0.0, 1.0) * self.cell_count() as f64).round() as u64;
        Self { site_count, ..self.clone() }
    }

    /// Same configuration with an independent seed for repetition `rep`.
    pub fn reseeded(&self, rep: u64) -> Self {
        Self { seed: mix_seed(self.seed, rep), ..self.clone() }
    }

    /// Reject parameter combinations that can never produce a valid swarm.
    ///
    /// An empty *sampled* field is detected later, at construction, because
    /// it depends on the RNG.
    pub fn validate(&self) -> CoreResult<()> {
        if self.grid_size == 0 {
            return Err(CoreError::Config("grid_size must be positive".into()));
        }
        if self.drone_count == 0 {
            return Err(CoreError::Config("drone_count must be positive".into()));
        }
        if self.site_count > self.cell_count() {
            return Err(CoreError::Config(format!(
                "site_count {} exceeds the {} cells of a {}x{} grid",
                self.site_count,
                self.cell_count(),
                self.grid_size,
                self.grid_size,
            )));
        }
        Ok(())
    }
}

impl Default for SwarmConfig {
    /// 40×40 torus, 400 target sites, 100 drones, steps of at most 5.
    fn default() -> Self {
        Self {
            grid_size:   40,
            site_count:  400,
            drone_count: 100,
            max_move:    5,
            seed:        42,
        }
    }
}
