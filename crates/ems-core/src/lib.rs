//! `ems-core` — foundational types for the EMS route planner.
//!
//! This crate is a dependency of every other `ems-*` crate.  It has no
//! `ems-*` dependencies and only `thiserror` (plus optional `serde`) as
//! external ones.
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `NodeId`, `RequestId`                             |
//! | [`config`] | `PlannerConfig`                                   |
//! | [`error`]  | `EmsError`, `EmsResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{EmsError, EmsResult};
pub use ids::{NodeId, RequestId};
