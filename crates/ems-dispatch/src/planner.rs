//! `RoutePlanner` — the owning store and its external operations.
//!
//! The planner exclusively owns the road graph, the traffic overlay, the
//! request queue, and the capacity ledger.  Every operation takes `&mut self`
//! or `&self`, so a planner shared between threads needs one lock around it;
//! that lock then also covers the capacity check, selection, and decrement
//! of a lookup as one unit.

use tracing::{info, warn};

use ems_core::{PlannerConfig, RequestId};
use ems_network::{AStarRouter, ConstantHeuristic, Connect, RoadGraph, Router, TrafficOverlay};

use crate::observer::{DispatchObserver, NoopObserver};
use crate::reservation::{CapacityLedger, Reservation};
use crate::selector::{FacilitySelector, Selection};
use crate::snapshot::PlannerSnapshot;
use crate::{DispatchResult, PlannerBuilder, Request, RequestQueue};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Result of one nearest-facility lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// `path` runs from the origin to the chosen facility inclusive.
    Routed { path: Vec<String>, cost: f64 },
    NoRoute,
}

impl Outcome {
    /// Adjusted cost of the route, `+inf` for [`Outcome::NoRoute`].
    pub fn cost(&self) -> f64 {
        match self {
            Outcome::Routed { cost, .. } => *cost,
            Outcome::NoRoute => f64::INFINITY,
        }
    }

    pub fn is_routed(&self) -> bool {
        matches!(self, Outcome::Routed { .. })
    }

    pub fn path(&self) -> Option<&[String]> {
        match self {
            Outcome::Routed { path, .. } => Some(path.as_slice()),
            Outcome::NoRoute => None,
        }
    }

    /// Name of the chosen facility (the last location on the path).
    pub fn facility(&self) -> Option<&str> {
        self.path().and_then(|p| p.last()).map(String::as_str)
    }

    fn from_selection(graph: &RoadGraph, selection: &Selection) -> Self {
        Outcome::Routed {
            path: selection.path.iter().map(|&id| graph.name(id).to_owned()).collect(),
            cost: selection.cost,
        }
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

pub struct RoutePlanner<R: Router = AStarRouter> {
    pub(crate) graph:    RoadGraph,
    pub(crate) overlay:  TrafficOverlay,
    pub(crate) queue:    RequestQueue,
    pub(crate) ledger:   CapacityLedger,
    pub(crate) selector: FacilitySelector<R>,
}

impl RoutePlanner {
    /// Empty planner with the default configuration.
    pub fn new() -> Self {
        let config = PlannerConfig::default();
        let router = AStarRouter::new(ConstantHeuristic(config.heuristic_estimate));
        Self::from_parts(RoadGraph::new(), TrafficOverlay::new(), router, config)
    }

    /// Empty planner whose router uses `config.heuristic_estimate`.
    pub fn with_config(config: PlannerConfig) -> DispatchResult<Self> {
        PlannerBuilder::from_config(config).build()
    }
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Router> RoutePlanner<R> {
    pub(crate) fn from_parts(
        graph:   RoadGraph,
        overlay: TrafficOverlay,
        router:  R,
        config:  PlannerConfig,
    ) -> Self {
        Self {
            graph,
            overlay,
            queue:    RequestQueue::new(),
            ledger:   CapacityLedger::new(),
            selector: FacilitySelector::new(router, config),
        }
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// Add (or totally replace) a plain location.
    ///
    /// Replacing a location also drops any reservations held on it; they
    /// can no longer be committed or released.
    pub fn create_location(&mut self, name: &str) {
        self.replace_node(name, false, 0);
    }

    /// Add (or totally replace) a facility with `capacity` units.
    pub fn create_facility(&mut self, name: &str, capacity: u32) {
        self.replace_node(name, true, capacity);
    }

    fn replace_node(&mut self, name: &str, is_facility: bool, capacity: u32) {
        // Replacement keeps the id, so held units would land on the new node.
        if let Some(id) = self.graph.node_id(name) {
            self.ledger.forget(id);
        }
        self.graph.add_node(name, is_facility, capacity);
    }

    /// Connect two existing locations.  Missing endpoints are ignored.
    pub fn connect(&mut self, a: &str, b: &str, distance: f64, traffic: f64) -> Connect {
        self.graph.add_road(a, b, distance, traffic)
    }

    // ── Traffic ───────────────────────────────────────────────────────────

    /// Override the multiplier of the road `a`–`b` in both directions.
    ///
    /// Fails with a "no such road" error, leaving state unchanged, if the
    /// two locations are not connected.
    pub fn set_traffic(&mut self, a: &str, b: &str, multiplier: f64) -> DispatchResult<()> {
        self.overlay.set_for_road(&self.graph, a, b, multiplier)?;
        Ok(())
    }

    /// Update an existing road.
    ///
    /// A new `traffic` value is written to the stored multiplier and to the
    /// overlay in both directions, so it also supersedes any earlier
    /// override.  `None` leaves a field untouched.
    pub fn update_road(
        &mut self,
        a: &str,
        b: &str,
        distance: Option<f64>,
        traffic: Option<f64>,
    ) -> DispatchResult<()> {
        let (ia, ib) = self.graph.road_endpoints(a, b)?;
        self.graph.update_road(a, b, distance, traffic)?;
        if let Some(t) = traffic {
            self.overlay.set_symmetric(ia, ib, t);
        }
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Find the cheapest reachable facility with capacity from `origin` and
    /// take one unit of its capacity.
    pub fn find_nearest_facility(&mut self, origin: &str) -> Outcome {
        let Some(selection) = self.selector.select(&self.graph, &self.overlay, origin) else {
            return Outcome::NoRoute;
        };
        CapacityLedger::consume(&mut self.graph, selection.facility);
        info!(
            origin,
            facility = self.graph.name(selection.facility),
            cost = selection.cost,
            "facility selected"
        );
        Outcome::from_selection(&self.graph, &selection)
    }

    /// Like [`find_nearest_facility`](Self::find_nearest_facility), but the
    /// capacity unit is only held.  Settle it with [`commit`](Self::commit)
    /// or [`release`](Self::release).
    pub fn reserve_nearest_facility(&mut self, origin: &str) -> Option<(Reservation, Outcome)> {
        let selection = self.selector.select(&self.graph, &self.overlay, origin)?;
        let reservation = self.ledger.hold(&mut self.graph, selection.facility)?;
        Some((reservation, Outcome::from_selection(&self.graph, &selection)))
    }

    pub fn commit(&mut self, reservation: Reservation) -> DispatchResult<()> {
        self.ledger.commit(reservation)?;
        Ok(())
    }

    pub fn release(&mut self, reservation: Reservation) -> DispatchResult<()> {
        self.ledger.release(&mut self.graph, reservation)?;
        Ok(())
    }

    // ── Requests ──────────────────────────────────────────────────────────

    pub fn enqueue_request(&mut self, id: impl Into<RequestId>, origin: &str, priority: i64) {
        self.queue.push(Request::new(id, origin, priority));
    }

    /// Run one dispatch pass over every pending request.
    pub fn dispatch_all(&mut self) -> Vec<(RequestId, Outcome)> {
        self.dispatch_all_with(&mut NoopObserver)
    }

    /// Run one dispatch pass, reporting each result to `observer`.
    ///
    /// Requests are handled in ascending priority order (ties keep arrival
    /// order).  Each is consumed; a request without a route is reported and
    /// not requeued.
    pub fn dispatch_all_with<O: DispatchObserver>(&mut self, observer: &mut O) -> Vec<(RequestId, Outcome)> {
        let requests = self.queue.drain_by_priority();
        observer.on_pass_start(requests.len());

        let mut results = Vec::with_capacity(requests.len());
        let (mut routed, mut failed) = (0, 0);
        for request in requests {
            let outcome = self.find_nearest_facility(&request.origin);
            if outcome.is_routed() {
                routed += 1;
                observer.on_routed(&request, &outcome);
            } else {
                failed += 1;
                warn!(request = %request.id, origin = %request.origin, "no route to a facility");
                observer.on_no_route(&request);
            }
            results.push((request.id, outcome));
        }

        observer.on_pass_end(routed, failed);
        info!(routed, failed, "dispatch pass complete");
        results
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot::capture(&self.graph, &self.overlay, &self.queue)
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn overlay(&self) -> &TrafficOverlay {
        &self.overlay
    }

    pub fn pending(&self) -> &RequestQueue {
        &self.queue
    }

    pub fn config(&self) -> &PlannerConfig {
        self.selector.config()
    }

    /// Reservations held but not yet committed or released.
    pub fn held_reservations(&self) -> usize {
        self.ledger.held_count()
    }
}
