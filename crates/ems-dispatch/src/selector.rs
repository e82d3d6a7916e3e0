//! Nearest-facility selection.
//!
//! # Policy
//!
//! Facilities are visited in graph enumeration (insertion) order, skipping
//! any without remaining capacity.  For each one the router searches from
//! the origin; the candidate's *adjusted cost* is then re-derived from the
//! returned path with [`RoadGraph::path_cost`], which resolves multipliers
//! exactly the way the search does.  A candidate replaces the current best
//! only if its adjusted cost is strictly lower, so the earliest of several
//! equal-cost facilities wins.
//!
//! # High-cost cutoff
//!
//! A candidate above [`PlannerConfig::high_cost_cutoff`] is reported at
//! `trace` level after the comparison and otherwise ignored: it may still
//! become the best, and later candidates are still evaluated.  Setting
//! [`PlannerConfig::enforce_cutoff`] turns the cutoff into a real filter
//! applied before the comparison.

use tracing::{debug, trace};

use ems_core::{NodeId, PlannerConfig};
use ems_network::{RoadGraph, Router, TrafficOverlay};

/// The facility chosen for one origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub facility: NodeId,
    /// Origin to facility inclusive.
    pub path:     Vec<NodeId>,
    /// Adjusted cost of `path`.
    pub cost:     f64,
}

/// Evaluates every eligible facility from an origin and picks the cheapest.
///
/// Selection is read-only; capacity is changed by the caller (see
/// [`CapacityLedger`](crate::CapacityLedger)).
#[derive(Clone, Debug)]
pub struct FacilitySelector<R: Router> {
    router: R,
    config: PlannerConfig,
}

impl<R: Router> FacilitySelector<R> {
    pub fn new(router: R, config: PlannerConfig) -> Self {
        Self { router, config }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Pick the reachable facility with capacity and least adjusted cost.
    ///
    /// Returns `None` if `origin` is not a known location or no facility
    /// with capacity is reachable from it.
    pub fn select(&self, graph: &RoadGraph, overlay: &TrafficOverlay, origin: &str) -> Option<Selection> {
        let Some(from) = graph.node_id(origin) else {
            debug!(origin, "unknown origin, no facility selected");
            return None;
        };

        let cutoff = self.config.high_cost_cutoff;
        let mut best: Option<Selection> = None;
        let mut best_cost = f64::INFINITY;

        for facility in graph.available_facilities() {
            let route = match self.router.route(graph, overlay, from, facility) {
                Ok(route) => route,
                Err(e) => {
                    trace!(origin, facility = graph.name(facility), error = %e, "candidate unreachable");
                    continue;
                }
            };
            let Some(cost) = graph.path_cost(&route.nodes, overlay) else {
                continue;
            };

            if self.config.enforce_cutoff && cost > cutoff {
                debug!(origin, facility = graph.name(facility), cost, cutoff, "candidate excluded by cutoff");
                continue;
            }

            if cost < best_cost {
                best_cost = cost;
                best = Some(Selection { facility, path: route.nodes, cost });
            }

            if cost > cutoff {
                trace!(origin, facility = graph.name(facility), cost, cutoff, "candidate above high-cost cutoff");
            }
        }

        best
    }
}
