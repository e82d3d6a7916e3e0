//! `ems-dispatch` — nearest-facility selection and priority dispatch.
//!
//! # Dispatch pass
//!
//! ```text
//! dispatch_all():
//!   ① Drain    — take every pending request, stable-sorted by ascending
//!                priority (lower = more urgent).
//!   ② Select   — for each request, search from its origin to every
//!                facility with capacity and keep the least adjusted cost.
//!   ③ Commit   — decrement the chosen facility's capacity by one.
//!   ④ Report   — emit (request id, Routed | NoRoute) to the caller and
//!                the DispatchObserver.
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`planner`]     | `RoutePlanner` facade, `Outcome`                    |
//! | [`builder`]     | `PlannerBuilder`                                    |
//! | [`selector`]    | `FacilitySelector`, `Selection`                     |
//! | [`reservation`] | `CapacityLedger`, `Reservation` (hold/commit/release) |
//! | [`queue`]       | `Request`, `RequestQueue`                           |
//! | [`observer`]    | `DispatchObserver`, `NoopObserver`                  |
//! | [`snapshot`]    | `PlannerSnapshot` read-only views                   |
//! | [`error`]       | `DispatchError`, `DispatchResult<T>`                |
//!
//! # Quick-start
//!
//! ```
//! use ems_dispatch::{Outcome, RoutePlanner};
//!
//! let mut planner = RoutePlanner::new();
//! planner.create_location("A");
//! planner.create_facility("H1", 1);
//! planner.create_facility("H2", 1);
//! planner.connect("A", "H1", 10.0, 1.0);
//! planner.connect("A", "H2", 5.0, 1.0);
//!
//! let outcome = planner.find_nearest_facility("A");
//! assert_eq!(outcome.cost(), 5.0);
//! assert_eq!(outcome.facility(), Some("H2"));
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;
pub mod queue;
pub mod reservation;
pub mod selector;
pub mod snapshot;


pub use builder::PlannerBuilder;
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use planner::{Outcome, RoutePlanner};
pub use queue::{Request, RequestQueue};
pub use reservation::{CapacityLedger, Reservation, ReservationId};
pub use selector::{FacilitySelector, Selection};
pub use snapshot::{LocationView, PlannerSnapshot, RoadView, TrafficView};
