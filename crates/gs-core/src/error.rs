//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `gs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    /// Sampling the site field with the configured density produced no sites,
    /// so drones have nowhere to start.
    #[error("no sites sampled on a {grid_size}x{grid_size} grid (target site count {site_count})")]
    NoSites { grid_size: u32, site_count: u64 },
}

impl CoreError {
    /// `true` for errors caused by invalid initialization parameters.
    pub fn is_configuration(&self) -> bool {
        matches!(self, CoreError::Config(_) | CoreError::NoSites { .. })
    }
}

/// Shorthand result type for all `gs-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
