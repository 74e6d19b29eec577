//! Grid cells and toroidal geometry.
//!
//! A `Cell` is a `(row, col)` pair of grid indices.  All wrap-around
//! arithmetic lives on [`Torus`], which knows the side length `n`: every
//! offset is reduced modulo `n` on both axes, and distances use the shorter
//! way around.

/// A grid cell addressed by row and column.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Torus ─────────────────────────────────────────────────────────────────────

/// An `n × n` grid whose coordinates wrap on both axes.
///
/// `Torus` is `Copy` and holds only the side length, so grids and the swarm
/// hand it around by value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Torus {
    size: u32,
}

impl Torus {
    /// # Panics
    /// Panics if `size == 0`.  Configuration validation rejects zero-sized
    /// grids before any `Torus` is built.
    #[inline]
    pub fn new(size: u32) -> Self {
        assert!(size > 0, "torus side length must be positive");
        Self { size }
    }

    /// Side length `n`.
    #[inline]
    pub fn size(self) -> u32 {
        self.size
    }

    /// Total number of cells, `n²`.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.size as usize * self.size as usize
    }

    /// `true` if both coordinates are valid indices (no wrapping applied).
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Row-major linear index of `cell`.  Coordinates must be in range.
    #[inline]
    pub fn index(self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {cell} outside {0}x{0} grid", self.size);
        cell.row as usize * self.size as usize + cell.col as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn cell_at(self, index: usize) -> Cell {
        let n = self.size as usize;
        Cell::new((index / n) as u32, (index % n) as u32)
    }

    /// Reduce an arbitrary signed coordinate onto `0..n`.
    #[inline]
    pub fn wrap(self, coord: i64) -> u32 {
        coord.rem_euclid(self.size as i64) as u32
    }

    /// `cell` shifted by a signed offset, wrapped on both axes.
    #[inline]
    pub fn offset(self, cell: Cell, d_row: i64, d_col: i64) -> Cell {
        Cell::new(
            self.wrap(cell.row as i64 + d_row),
            self.wrap(cell.col as i64 + d_col),
        )
    }

    /// Shortest signed displacement from `from` to `to` along one axis, in
    /// `(-n/2, n/2]`.
    #[inline]
    pub fn axis_delta(self, from: u32, to: u32) -> i64 {
        let n = self.size as i64;
        let d = (to as i64 - from as i64).rem_euclid(n);
        if d > n / 2 { d - n } else { d }
    }

    /// Shortest signed `(d_row, d_col)` displacement from `from` to `to`.
    #[inline]
    pub fn delta(self, from: Cell, to: Cell) -> (i64, i64) {
        (self.axis_delta(from.row, to.row), self.axis_delta(from.col, to.col))
    }

    /// Wrapped Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, a: Cell, b: Cell) -> u32 {
        let (dr, dc) = self.delta(a, b);
        dr.unsigned_abs().max(dc.unsigned_abs()) as u32
    }

    /// Wrapped Euclidean distance.
    #[inline]
    pub fn euclidean(self, a: Cell, b: Cell) -> f64 {
        let (dr, dc) = self.delta(a, b);
        ((dr * dr + dc * dc) as f64).sqrt()
    }

    /// Iterator over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let n = self.size;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }
}
