//! `gs-grid`: the two grids every drone reads each tick.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`field`]       | `SiteField`: immutable site mask + site list             |
//! | [`knowledge`]   | `KnowledgeMap`: per-cell claim counts, window queries    |
//! | [`error`]       | `GridError`, `GridResult<T>`                             |

pub mod error;
pub mod field;
pub mod knowledge;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use field::SiteField;
pub use knowledge::KnowledgeMap;
