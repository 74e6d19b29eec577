//! Grid error type.

use thiserror::Error;

use gs_core::Cell;

/// Errors produced by `gs-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {cell} lies outside the {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
