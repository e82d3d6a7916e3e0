//! Road graph storage.
//!
//! # Data layout
//!
//! Locations are stored densely in insertion order and addressed by
//! [`NodeId`]; a name index maps each unique name to its id.  Each location
//! owns an adjacency list of `(neighbour, Road)` pairs, also in insertion
//! order.
//!
//! Roads are undirected but stored as two directed adjacency entries.  Every
//! mutation writes both entries with the same payload, so for any road
//! `road(a, b) == road(b, a)` holds at all times.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use ems_core::NodeId;

use crate::traffic::TrafficOverlay;
use crate::{NetworkError, NetworkResult};

// ── Road / Location ───────────────────────────────────────────────────────────

/// Payload of one directed adjacency entry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    /// Base length of the road (cost units before traffic).
    pub distance: f64,
    /// Stored traffic multiplier.  Superseded per direction by the
    /// [`TrafficOverlay`] when an override exists.
    pub traffic: f64,
}

impl Road {
    pub fn new(distance: f64, traffic: f64) -> Self {
        Self { distance, traffic }
    }
}

/// A named point in the graph, optionally a facility with finite capacity.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub name:        String,
    pub is_facility: bool,
    /// Remaining capacity.  Only meaningful when `is_facility` is set.
    pub capacity:    u32,
    roads:           Vec<(NodeId, Road)>,
}

impl Location {
    fn new(name: String, is_facility: bool, capacity: u32) -> Self {
        Self { name, is_facility, capacity, roads: Vec::new() }
    }

    /// `true` if this location can currently be chosen as a destination.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.is_facility && self.capacity > 0
    }

    /// Outgoing adjacency entries in insertion order.
    pub fn roads(&self) -> &[(NodeId, Road)] {
        &self.roads
    }

    fn road(&self, to: NodeId) -> Option<&Road> {
        self.roads.iter().find(|(n, _)| *n == to).map(|(_, r)| r)
    }

    fn road_mut(&mut self, to: NodeId) -> Option<&mut Road> {
        self.roads.iter_mut().find(|(n, _)| *n == to).map(|(_, r)| r)
    }

    fn upsert_road(&mut self, to: NodeId, road: Road) {
        match self.road_mut(to) {
            Some(r) => *r = road,
            None => self.roads.push((to, road)),
        }
    }
}

/// Result of [`RoadGraph::add_road`].
///
/// Connecting a missing endpoint (or with unusable weights) is not an error:
/// the call is ignored and reported as [`Connect::Ignored`] so callers can
/// tell the two apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Connect {
    Applied,
    Ignored,
}

/// Reject weights the search cannot handle: a distance must be finite and
/// `>= 0`, a multiplier finite and `> 0`.  `None` fields are not checked.
///
/// With a negative segment cost the strict-improvement relaxation in
/// [`AStarRouter`](crate::AStarRouter) can loop forever.
pub fn check_weights(
    a: &str,
    b: &str,
    distance: Option<f64>,
    traffic: Option<f64>,
) -> NetworkResult<()> {
    let invalid = |field, value| NetworkError::InvalidWeight {
        from: a.to_owned(),
        to: b.to_owned(),
        field,
        value,
    };
    if let Some(d) = distance.filter(|d| !(d.is_finite() && *d >= 0.0)) {
        return Err(invalid("distance", d));
    }
    if let Some(t) = traffic.filter(|t| !(t.is_finite() && *t > 0.0)) {
        return Err(invalid("traffic multiplier", t));
    }
    Ok(())
}

/// Id for the location stored at `index`, or `None` once the `u32` id space
/// (minus the [`NodeId::INVALID`] sentinel) is used up.
pub(crate) fn next_node_id(index: usize) -> Option<NodeId> {
    NodeId::try_from(index).ok().filter(|id| *id != NodeId::INVALID)
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Mutable undirected road graph keyed by location name.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    locations: Vec<Location>,
    index:     FxHashMap<String, NodeId>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert a location, or replace the one with the same name.
    ///
    /// Replacement is total: the existing location keeps its `NodeId` and
    /// enumeration position, but its attributes are overwritten and all of
    /// its roads (including the mirror entries at its neighbours) are
    /// dropped.
    ///
    /// Returns [`NodeId::INVALID`] without storing anything once the id
    /// space is exhausted.
    pub fn add_node(&mut self, name: &str, is_facility: bool, capacity: u32) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            let old = std::mem::take(&mut self.locations[id.index()].roads);
            for (neighbour, _) in old {
                self.locations[neighbour.index()].roads.retain(|(n, _)| *n != id);
            }
            self.locations[id.index()] = Location::new(name.to_owned(), is_facility, capacity);
            debug!(location = name, is_facility, capacity, "replaced location");
            return id;
        }

        let Some(id) = next_node_id(self.locations.len()) else {
            warn!(location = name, "location ignored: node id space exhausted");
            return NodeId::INVALID;
        };
        self.locations.push(Location::new(name.to_owned(), is_facility, capacity));
        self.index.insert(name.to_owned(), id);
        debug!(location = name, is_facility, capacity, "added location");
        id
    }

    /// Add a plain (non-facility) location.
    pub fn add_location(&mut self, name: &str) -> NodeId {
        self.add_node(name, false, 0)
    }

    /// Add a facility with the given capacity.
    pub fn add_facility(&mut self, name: &str, capacity: u32) -> NodeId {
        self.add_node(name, true, capacity)
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// If either endpoint does not exist, or the weights fail
    /// [`check_weights`], nothing is written and [`Connect::Ignored`] is
    /// returned.  Re-adding an existing road overwrites its payload in place.
    pub fn add_road(&mut self, a: &str, b: &str, distance: f64, traffic: f64) -> Connect {
        let (Some(ia), Some(ib)) = (self.node_id(a), self.node_id(b)) else {
            warn!(from = a, to = b, "road ignored: endpoint missing");
            return Connect::Ignored;
        };
        if let Err(e) = check_weights(a, b, Some(distance), Some(traffic)) {
            warn!(from = a, to = b, distance, traffic, "road ignored: {e}");
            return Connect::Ignored;
        }
        let road = Road::new(distance, traffic);
        self.locations[ia.index()].upsert_road(ib, road);
        self.locations[ib.index()].upsert_road(ia, road);
        debug!(from = a, to = b, distance, traffic, "added road");
        Connect::Applied
    }

    /// Update the distance and/or stored multiplier of an existing road,
    /// keeping both directions in sync.  Invalid weights fail with
    /// [`NetworkError::InvalidWeight`] before anything is written.
    pub fn update_road(
        &mut self,
        a: &str,
        b: &str,
        distance: Option<f64>,
        traffic: Option<f64>,
    ) -> NetworkResult<()> {
        let (ia, ib) = self.road_endpoints(a, b)?;
        check_weights(a, b, distance, traffic)?;
        for (from, to) in [(ia, ib), (ib, ia)] {
            // Present in both directions: `road_endpoints` checked it.
            if let Some(road) = self.locations[from.index()].road_mut(to) {
                if let Some(d) = distance {
                    road.distance = d;
                }
                if let Some(t) = traffic {
                    road.traffic = t;
                }
            }
        }
        debug!(from = a, to = b, ?distance, ?traffic, "updated road");
        Ok(())
    }

    /// Resolve `a` and `b` to ids, failing with [`NetworkError::NoSuchRoad`]
    /// unless a road joins them in both directions.
    pub fn road_endpoints(&self, a: &str, b: &str) -> NetworkResult<(NodeId, NodeId)> {
        let no_road = || NetworkError::NoSuchRoad { from: a.to_owned(), to: b.to_owned() };
        let (ia, ib) = match (self.node_id(a), self.node_id(b)) {
            (Some(ia), Some(ib)) => (ia, ib),
            _ => return Err(no_road()),
        };
        if self.road(ia, ib).is_some() && self.road(ib, ia).is_some() {
            Ok((ia, ib))
        } else {
            Err(no_road())
        }
    }

    /// Mutable access to a facility's remaining capacity.
    pub fn capacity_mut(&mut self, id: NodeId) -> Option<&mut u32> {
        self.locations.get_mut(id.index()).map(|l| &mut l.capacity)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed adjacency entries (twice the number of roads).
    pub fn road_count(&self) -> usize {
        self.locations.iter().map(|l| l.roads.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.locations.len()
    }

    pub fn location(&self, id: NodeId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.node_id(name).and_then(|id| self.location(id))
    }

    /// Name of `id`, or `""` for an id not in this graph.
    pub fn name(&self, id: NodeId) -> &str {
        self.location(id).map_or("", |l| l.name.as_str())
    }

    /// Payload of the directed entry `from → to`, if any.
    pub fn road(&self, from: NodeId, to: NodeId) -> Option<&Road> {
        self.location(from)?.road(to)
    }

    /// Outgoing roads of `id` in insertion order (empty for unknown ids).
    pub fn roads(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Road)> + '_ {
        self.location(id)
            .map(|l| l.roads.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    /// All locations with their ids, in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = (NodeId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (NodeId(i as u32), l))
    }

    /// Facilities that still have capacity, in insertion order.
    pub fn available_facilities(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.locations()
            .filter(|(_, l)| l.has_capacity())
            .map(|(id, _)| id)
    }

    // ── Costs ─────────────────────────────────────────────────────────────

    /// Cost of traversing `from → to`: `distance × effective multiplier`.
    #[inline]
    pub fn segment_cost(&self, from: NodeId, to: NodeId, overlay: &TrafficOverlay) -> Option<f64> {
        let road = self.road(from, to)?;
        Some(road.distance * overlay.effective(from, to, road.traffic))
    }

    /// Adjusted cost of `path`: the sum of [`segment_cost`](Self::segment_cost)
    /// over consecutive pairs.
    ///
    /// Returns `None` if some consecutive pair is not joined by a road.  A
    /// single-node path costs `0.0`.
    pub fn path_cost(&self, path: &[NodeId], overlay: &TrafficOverlay) -> Option<f64> {
        path.windows(2)
            .map(|w| self.segment_cost(w[0], w[1], overlay))
            .sum()
    }
}
