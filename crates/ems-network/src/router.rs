//! Routing traits and the default best-first search.
//!
//! # Pluggability
//!
//! `ems-dispatch` calls routing via the [`Router`] trait, and the default
//! [`AStarRouter`] takes its remaining-cost estimate from a [`Heuristic`].
//! The stock [`ConstantHeuristic`] returns the same value for every pair,
//! which makes the search behave as a uniform-cost search.  Swap in a
//! geographic heuristic only together with coordinates on the graph.
//!
//! # Cost units
//!
//! Costs are `distance × effective multiplier`, summed along the path, in
//! whatever units the caller used for distances.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use ems_core::NodeId;

use crate::graph::RoadGraph;
use crate::traffic::TrafficOverlay;
use crate::{NetworkError, NetworkResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Locations in travel order, origin and goal inclusive.
    pub nodes: Vec<NodeId>,
    /// Accumulated traversal cost (heuristic excluded).
    pub cost: f64,
}

impl Route {
    /// `true` if the origin and goal are the same location.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn origin(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }
}

// ── Traits ────────────────────────────────────────────────────────────────────

/// Estimate of the remaining cost from `from` to `to`.
pub trait Heuristic {
    fn estimate(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> f64;
}

/// The same estimate for every pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantHeuristic(pub f64);

impl Default for ConstantHeuristic {
    fn default() -> Self {
        ConstantHeuristic(1.0)
    }
}

impl Heuristic for ConstantHeuristic {
    #[inline]
    fn estimate(&self, _graph: &RoadGraph, _from: NodeId, _to: NodeId) -> f64 {
        self.0
    }
}

/// Pluggable single-pair routing engine.
pub trait Router {
    /// Compute the least-cost route from `from` to `to` under the current
    /// road weights and traffic overrides.
    ///
    /// `from == to` is answered with a single-node route of cost `0.0`.
    /// Distances and multipliers are assumed non-negative.
    fn route(
        &self,
        graph: &RoadGraph,
        overlay: &TrafficOverlay,
        from: NodeId,
        to: NodeId,
    ) -> NetworkResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// Best-first search with frontier key `g + h`.
#[derive(Clone, Debug, Default)]
pub struct AStarRouter<H = ConstantHeuristic> {
    heuristic: H,
}

impl AStarRouter<ConstantHeuristic> {
    /// Router using the stock [`ConstantHeuristic`] of `1.0`.
    pub fn constant() -> Self {
        Self { heuristic: ConstantHeuristic::default() }
    }
}

impl<H: Heuristic> AStarRouter<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H: Heuristic> Router for AStarRouter<H> {
    fn route(
        &self,
        graph: &RoadGraph,
        overlay: &TrafficOverlay,
        from: NodeId,
        to: NodeId,
    ) -> NetworkResult<Route> {
        for id in [from, to] {
            if !graph.contains(id) {
                return Err(NetworkError::UnknownNode(id));
            }
        }
        search(graph, overlay, &self.heuristic, from, to)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

fn search<H: Heuristic>(
    graph: &RoadGraph,
    overlay: &TrafficOverlay,
    heuristic: &H,
    from: NodeId,
    to: NodeId,
) -> NetworkResult<Route> {
    let n = graph.node_count();
    // g[v] = best known accumulated cost to reach v.
    let mut g    = vec![f64::INFINITY; n];
    let mut prev = vec![NodeId::INVALID; n];
    g[from.index()] = 0.0;

    // Min-heap on f = g + h.  A node may sit in the heap several times; no
    // visited set is kept.  Only a strict improvement of g[v] pushes v again,
    // which bounds the number of pushes and keeps stale entries harmless.
    let mut frontier: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();
    frontier.push(Reverse((OrderedFloat(0.0), from)));

    while let Some(Reverse((_, current))) = frontier.pop() {
        if current == to {
            return Ok(reconstruct(prev, from, to, g[to.index()]));
        }

        let base = g[current.index()];
        for (neighbour, road) in graph.roads(current) {
            let multiplier = overlay.effective(current, neighbour, road.traffic);
            let tentative = base + road.distance * multiplier;

            if tentative < g[neighbour.index()] {
                prev[neighbour.index()] = current;
                g[neighbour.index()] = tentative;
                let f = tentative + heuristic.estimate(graph, neighbour, to);
                frontier.push(Reverse((OrderedFloat(f), neighbour)));
            }
        }
    }

    Err(NetworkError::NoRoute { from, to })
}

fn reconstruct(prev: Vec<NodeId>, from: NodeId, to: NodeId, cost: f64) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Route { nodes, cost }
}
