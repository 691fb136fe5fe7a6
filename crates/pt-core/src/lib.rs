//! `pt-core` — foundational types for the patrol engine.
//!
//! This crate is a dependency of every other `pt-*` crate.  It has no `pt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `TargetId`                                     |
//! | [`geo`]     | `WorldPos`, angle normalisation and shortest-arc helpers  |
//! | [`time`]    | `Tick`, `TickClock`                                       |
//! | [`config`]  | `PatrolConfig` (per-agent tuning), `SimConfig` (per run)  |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`error`]   | `PtError`, `PtResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_MAX_EXPANSIONS, PatrolConfig, SimConfig};
pub use error::{PtError, PtResult};
pub use geo::{WorldPos, angle_between, normalize_angle};
pub use ids::{AgentId, TargetId};
pub use rng::{AgentRng, SimRng};
pub use time::{Tick, TickClock};
