//! Fluent builder for constructing a [`Swarm`].

use std::sync::Arc;

use gs_core::{Cell, CoreError, SimRng, SwarmConfig};
use gs_grid::{GridError, KnowledgeMap, SiteField};

use crate::{DroneRngs, DroneStore, Swarm, SwarmError, SwarmResult};

/// Fluent builder for [`Swarm`].
///
/// # Required inputs
///
/// - [`SwarmConfig`]: grid size, site count, drone count, step bound, seed
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                          |
/// |------------------------|--------------------------------------------------|
/// | `.field(f)`            | Sampled with density `config.density()`          |
/// | `.shared_field(arc)`   | (same, but shares an existing field)             |
/// | `.positions(v)`        | Each drone on a uniformly random site            |
///
/// Injected positions need not be sites; each drone still claims its cell.
///
/// # Example
///
/// ```rust,ignore
/// let field = SiteField::from_cells(10, [Cell::new(5, 5)])?;
/// let swarm = SwarmBuilder::new(config)
///     .field(field)
///     .positions(vec![Cell::new(5, 5)])
///     .build()?;
/// ```
pub struct SwarmBuilder {
    config:    SwarmConfig,
    field:     Option<Arc<SiteField>>,
    positions: Option<Vec<Cell>>,
}

impl SwarmBuilder {
    pub fn new(config: SwarmConfig) -> Self {
        Self { config, field: None, positions: None }
    }

    /// Use `field` instead of sampling one.  Its size must equal
    /// `config.grid_size`; `config.site_count` is then ignored.
    pub fn field(self, field: SiteField) -> Self {
        self.shared_field(Arc::new(field))
    }

    /// Like [`field`](Self::field) for a field already shared elsewhere.
    pub fn shared_field(mut self, field: Arc<SiteField>) -> Self {
        self.field = Some(field);
        self
    }

    /// Supply the initial cell of each drone (length `config.drone_count`).
    pub fn positions(mut self, positions: Vec<Cell>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, sample whatever was not injected, claim every
    /// initial cell and return a ready-to-run [`Swarm`].
    ///
    /// The world RNG is seeded from `config.seed` and draws the field first,
    /// then one site index per drone.  Per-drone RNGs are seeded from the
    /// same seed but never share the world stream.
    pub fn build(self) -> SwarmResult<Swarm> {
        let config = self.config;
        config.validate()?;

        let mut world = SimRng::new(config.seed);

        // ── Site field ────────────────────────────────────────────────────
        let field = match self.field {
            Some(f) => {
                if f.size() != config.grid_size {
                    return Err(SwarmError::GridSizeMismatch {
                        expected: config.grid_size,
                        got:      f.size(),
                    });
                }
                f
            }
            None => Arc::new(SiteField::generate(config.grid_size, config.density(), &mut world)),
        };

        if field.is_empty() {
            return Err(CoreError::NoSites {
                grid_size:  config.grid_size,
                site_count: config.site_count,
            }
            .into());
        }

        // ── Initial positions ─────────────────────────────────────────────
        let drone_count = config.drone_count as usize;
        let torus = field.torus();
        let positions = match self.positions {
            Some(p) => {
                if p.len() != drone_count {
                    return Err(SwarmError::DroneCountMismatch {
                        expected: drone_count,
                        got:      p.len(),
                    });
                }
                if let Some(&cell) = p.iter().find(|&&c| !torus.contains(c)) {
                    return Err(GridError::OutOfBounds { cell, size: torus.size() }.into());
                }
                p
            }
            None => {
                let sites = field.sites();
                (0..drone_count)
                    .map(|_| sites[world.gen_range(0..sites.len())])
                    .collect()
            }
        };

        let knowledge = KnowledgeMap::tally(torus, &positions);

        tracing::debug!(
            grid_size = config.grid_size,
            sites     = field.site_count(),
            drones    = drone_count,
            known     = knowledge.known_cells(),
            "swarm initialised"
        );

        Ok(Swarm {
            rngs:      DroneRngs::new(drone_count, config.seed),
            store:     DroneStore::new(positions),
            scratch:   Vec::new(),
            config,
            field,
            knowledge,
        })
    }
}
