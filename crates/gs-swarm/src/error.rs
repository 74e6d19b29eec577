use gs_core::CoreError;
use gs_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("swarm configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("invalid grid input: {0}")]
    Grid(#[from] GridError),

    #[error("site field is {got}x{got} but the swarm is configured for {expected}x{expected}")]
    GridSizeMismatch { expected: u32, got: u32 },

    #[error("{got} initial positions supplied for {expected} drones")]
    DroneCountMismatch { expected: usize, got: usize },
}

pub type SwarmResult<T> = Result<T, SwarmError>;
