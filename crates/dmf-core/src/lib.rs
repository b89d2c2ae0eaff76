//! `dmf-core` — foundational types for the `dmf` droplet-routing framework.
//!
//! This crate is a dependency of every other `dmf-*` crate.  It intentionally
//! has no `dmf-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                   |
//! |--------------|--------------------------------------------|
//! | [`ids`]      | `RouteId`, `SiteId`                        |
//! | [`time`]     | `Tick`                                     |
//! | [`config`]   | `ExecuteConfig`                            |
//! | [`error`]    | `DmfError`, `DmfResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ExecuteConfig;
pub use error::{DmfError, DmfResult};
pub use ids::{RouteId, SiteId};
pub use time::Tick;
