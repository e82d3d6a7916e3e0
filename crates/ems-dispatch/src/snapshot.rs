//! Read-only copy of planner state for inspection and printing.

use std::fmt;

use ems_network::{RoadGraph, TrafficOverlay};

use crate::{Request, RequestQueue};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocationView {
    pub name:        String,
    pub is_facility: bool,
    pub capacity:    u32,
}

/// One directed adjacency entry.  Each road appears twice, once per
/// direction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoadView {
    pub from:     String,
    pub to:       String,
    pub distance: f64,
    pub traffic:  f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrafficView {
    pub from:       String,
    pub to:         String,
    pub multiplier: f64,
}

/// Everything the planner holds, in enumeration order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlannerSnapshot {
    pub locations: Vec<LocationView>,
    pub roads:     Vec<RoadView>,
    pub requests:  Vec<Request>,
    pub traffic:   Vec<TrafficView>,
}

impl PlannerSnapshot {
    pub fn capture(graph: &RoadGraph, overlay: &TrafficOverlay, queue: &RequestQueue) -> Self {
        let locations = graph
            .locations()
            .map(|(_, l)| LocationView {
                name:        l.name.clone(),
                is_facility: l.is_facility,
                capacity:    l.capacity,
            })
            .collect();

        let roads = graph
            .locations()
            .flat_map(|(_, l)| {
                l.roads().iter().map(move |(to, road)| RoadView {
                    from:     l.name.clone(),
                    to:       graph.name(*to).to_owned(),
                    distance: road.distance,
                    traffic:  road.traffic,
                })
            })
            .collect();

        let traffic = overlay
            .iter()
            .map(|((from, to), multiplier)| TrafficView {
                from: graph.name(from).to_owned(),
                to:   graph.name(to).to_owned(),
                multiplier,
            })
            .collect();

        Self {
            locations,
            roads,
            requests: queue.iter().cloned().collect(),
            traffic,
        }
    }
}

impl fmt::Display for PlannerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Locations and facilities:")?;
        for l in &self.locations {
            if l.is_facility {
                writeln!(f, "  Facility: {}, capacity: {}", l.name, l.capacity)?;
            } else {
                writeln!(f, "  Location: {}", l.name)?;
            }
        }

        writeln!(f, "Roads:")?;
        for r in &self.roads {
            writeln!(
                f,
                "  {} -> {}: distance = {}, traffic = {}",
                r.from, r.to, r.distance, r.traffic
            )?;
        }

        writeln!(f, "Requests:")?;
        for r in &self.requests {
            writeln!(f, "  {}: origin = {}, priority = {}", r.id, r.origin, r.priority)?;
        }

        writeln!(f, "Traffic overrides:")?;
        for t in &self.traffic {
            writeln!(f, "  {} -> {}: {}", t.from, t.to, t.multiplier)?;
        }
        Ok(())
    }
}
