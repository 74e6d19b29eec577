use gs_swarm::SwarmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("swarm error: {0}")]
    Swarm(#[from] SwarmError),

    #[error("sweep point at density {density:.4} failed: {source}")]
    SweepPoint { density: f64, source: SwarmError },
}

pub type SimResult<T> = Result<T, SimError>;
