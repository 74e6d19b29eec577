//! The site field: which cells hold a discoverable thermal.
//!
//! # Data layout
//!
//! Two views of the same set are kept side by side:
//!
//! - `mask`: one `bool` per cell in row-major order, for the O(1)
//!   `has_site` lookup on the per-drone hot path.
//! - `sites`: the site cells in row-major order, so initial placement can
//!   pick a uniformly random site with one index draw.
//!
//! Both are built once and never mutated.

use gs_core::{Cell, SimRng, Torus};

use crate::{GridError, GridResult};

/// Immutable `n × n` site mask.
#[derive(Clone, Debug)]
pub struct SiteField {
    torus: Torus,
    mask:  Vec<bool>,
    sites: Vec<Cell>,
}

impl SiteField {
    /// Sample a field where every cell is independently a site with
    /// probability `rho` (clamped to `[0, 1]`).
    ///
    /// Cells are visited in row-major order with one RNG draw each, so the
    /// result depends only on `size`, `rho` and the RNG state.  `rho = 0`
    /// yields an empty field.
    pub fn generate(size: u32, rho: f64, rng: &mut SimRng) -> Self {
        let torus = Torus::new(size);
        let mask: Vec<bool> = (0..torus.cell_count()).map(|_| rng.gen_bool(rho)).collect();
        Self::from_mask(torus, mask)
    }

    /// Build a field containing exactly `cells`.  Duplicates collapse.
    pub fn from_cells<I>(size: u32, cells: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let torus = Torus::new(size);
        let mut mask = vec![false; torus.cell_count()];
        for cell in cells {
            if !torus.contains(cell) {
                return Err(GridError::OutOfBounds { cell, size });
            }
            mask[torus.index(cell)] = true;
        }
        Ok(Self::from_mask(torus, mask))
    }

    fn from_mask(torus: Torus, mask: Vec<bool>) -> Self {
        let sites = mask
            .iter()
            .enumerate()
            .filter(|&(_, &site)| site)
            .map(|(i, _)| torus.cell_at(i))
            .collect();
        Self { torus, mask, sites }
    }

    /// `true` if `cell` holds a site.
    ///
    /// # Panics
    /// Panics if `cell` is outside the grid.
    #[inline]
    pub fn has_site(&self, cell: Cell) -> bool {
        assert!(
            self.torus.contains(cell),
            "cell {cell} outside {0}x{0} site field",
            self.torus.size(),
        );
        self.mask[self.torus.index(cell)]
    }

    // ── Dimensions and views ──────────────────────────────────────────────

    #[inline]
    pub fn torus(&self) -> Torus {
        self.torus
    }

    /// Side length `n`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.torus.size()
    }

    /// Number of sites actually sampled.
    #[inline]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// All site cells in row-major order.
    #[inline]
    pub fn sites(&self) -> &[Cell] {
        &self.sites
    }

    /// Observed fraction of cells that are sites.
    pub fn density(&self) -> f64 {
        self.sites.len() as f64 / self.torus.cell_count() as f64
    }
}
