//! `ems-network` — road graph, traffic overlay, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`graph`]   | `RoadGraph`, `Location`, `Road`, `Connect`               |
//! | [`traffic`] | `TrafficOverlay` (directional multiplier overrides)      |
//! | [`router`]  | `Router`/`Heuristic` traits, `Route`, `AStarRouter`      |
//! | [`loader`]  | CSV loaders for locations and roads                      |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.       |

pub mod error;
pub mod graph;
pub mod loader;
pub mod router;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use graph::{check_weights, Connect, Location, Road, RoadGraph};
pub use loader::{load_locations_csv, load_locations_reader, load_roads_csv, load_roads_reader};
pub use router::{AStarRouter, ConstantHeuristic, Heuristic, Route, Router};
pub use traffic::TrafficOverlay;
