//! Speed measurements over a range of site densities.
//!
//! Each point builds its own swarms from `swarm.with_density(rho)`, so points
//! are independent of each other and of evaluation order.  With the
//! `parallel` feature they run on Rayon's thread pool; results are identical
//! to a sequential sweep.

use gs_core::SwarmConfig;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{MeasureConfig, SimError, SimResult, measure};

/// Density range: `steps` points starting at `start_density`, spaced
/// `(end_density - start_density) / steps` apart.  `end_density` itself is
/// not measured.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SweepConfig {
    pub start_density: f64,
    pub end_density:   f64,
    pub steps:         u32,
}

impl SweepConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.steps == 0 {
            return Err(SimError::Config("sweep needs at least one step".into()));
        }
        let range = 0.0..=1.0;
        if !range.contains(&self.start_density) || !range.contains(&self.end_density) {
            return Err(SimError::Config(format!(
                "sweep densities must lie in [0, 1] (got {} .. {})",
                self.start_density, self.end_density
            )));
        }
        if self.start_density >= self.end_density {
            return Err(SimError::Config(format!(
                "sweep start {} must be below end {}",
                self.start_density, self.end_density
            )));
        }
        Ok(())
    }

    /// The densities measured, in increasing order.
    pub fn densities(&self) -> Vec<f64> {
        let step = (self.end_density - self.start_density) / f64::from(self.steps);
        (0..self.steps)
            .map(|i| self.start_density + f64::from(i) * step)
            .collect()
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { start_density: 0.05, end_density: 0.5, steps: 9 }
    }
}

/// One measured point of a density sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepRow {
    /// Requested density.
    pub density:    f64,
    /// Site count the density resolved to.
    pub site_count: u64,
    pub mean_speed: f64,
    pub std_dev:    f64,
}

/// A density sweep: one [`measure`] per density.
#[derive(Clone, Debug)]
pub struct DensitySweep {
    pub swarm:   SwarmConfig,
    pub measure: MeasureConfig,
    pub sweep:   SweepConfig,
}

impl DensitySweep {
    pub fn new(swarm: SwarmConfig, measure: MeasureConfig, sweep: SweepConfig) -> Self {
        Self { swarm, measure, sweep }
    }

    /// Measure every density.  Rows come back in increasing density order.
    ///
    /// A point whose field comes out empty fails the whole sweep with
    /// [`SimError::SweepPoint`].
    pub fn run(&self) -> SimResult<Vec<SweepRow>> {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), calling `on_row` with each row in density
    /// order.  Sequentially, each row is reported as soon as it is measured;
    /// with the `parallel` feature, rows are reported once every point is done.
    pub fn run_with<F>(&self, mut on_row: F) -> SimResult<Vec<SweepRow>>
    where
        F: FnMut(&SweepRow),
    {
        self.sweep.validate()?;
        self.measure.validate()?;
        let densities = self.sweep.densities();

        tracing::info!(
            points      = densities.len(),
            grid_size   = self.swarm.grid_size,
            drones      = self.swarm.drone_count,
            repetitions = self.measure.repetitions,
            "density sweep started"
        );

        #[cfg(feature = "parallel")]
        let rows = {
            let rows = densities
                .par_iter()
                .map(|&rho| self.run_point(rho))
                .collect::<SimResult<Vec<_>>>()?;
            for row in &rows {
                on_row(row);
            }
            rows
        };

        #[cfg(not(feature = "parallel"))]
        let rows = densities
            .iter()
            .map(|&rho| {
                let row = self.run_point(rho)?;
                on_row(&row);
                Ok(row)
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Measure a single density.
    pub fn run_point(&self, density: f64) -> SimResult<SweepRow> {
        let config = self.swarm.with_density(density);
        let summary = measure(&config, &self.measure).map_err(|e| match e {
            SimError::Swarm(source) => SimError::SweepPoint { density, source },
            other => other,
        })?;

        tracing::info!(
            density,
            sites      = config.site_count,
            mean_speed = summary.mean,
            std_dev    = summary.std_dev,
            "sweep point"
        );

        Ok(SweepRow {
            density,
            site_count: config.site_count,
            mean_speed: summary.mean,
            std_dev:    summary.std_dev,
        })
    }
}
