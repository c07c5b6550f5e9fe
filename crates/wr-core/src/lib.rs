//! `wr-core`: foundational types for the waste-relay simulation.
//!
//! This crate is a dependency of every other `wr-*` crate.  It has no `wr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `WasteId`                                     |
//! | [`pos`]      | `Pos` grid coordinate, greedy `step_toward`              |
//! | [`color`]    | `Color` (green < yellow < red) and tier promotion        |
//! | [`zone`]     | `Zone`, `ZoneLayout` (three equal x-bands)               |
//! | [`entity`]   | `Entity`, `EntityKind`: what a grid cell can hold       |
//! | [`time`]     | `Round` counter                                          |
//! | [`rng`]      | `AgentRng` (per-robot), `SimRng` (global)                |
//! | [`config`]   | `WorldConfig`                                            |
//! | [`error`]    | `WrError`, `WrResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod color;
pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use config::WorldConfig;
pub use entity::{Entity, EntityKind};
pub use error::{WrError, WrResult};
pub use ids::{AgentId, WasteId};
pub use pos::Pos;
pub use rng::{AgentRng, SimRng};
pub use time::Round;
pub use zone::{Zone, ZoneLayout};
