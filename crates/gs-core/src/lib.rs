//! `gs-core`: foundational types for the `glide_swarm` simulator.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no
//! `gs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DroneId`                                             |
//! | [`cell`]        | `Cell`, `Torus` (wrapped offsets and distances)       |
//! | [`time`]        | `Tick`, `SimClock`, `RunConfig`                       |
//! | [`config`]      | `SwarmConfig`                                         |
//! | [`rng`]         | `DroneRng` (per-drone), `SimRng` (world)              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `Cell`, `Tick` and configs.   |
//!
//! The `glide` parameter-file loader enables `serde`.

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Torus};
pub use config::SwarmConfig;
pub use error::{CoreError, CoreResult};
pub use ids::DroneId;
pub use rng::{DroneRng, SimRng, mix_seed};
pub use time::{RunConfig, SimClock, Tick};
