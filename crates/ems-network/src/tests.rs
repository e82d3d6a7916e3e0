//! Unit tests for ems-network.
//!
//! All tests use hand-built graphs; no CSV files are read from disk.

#[cfg(test)]
mod helpers {
    use crate::RoadGraph;

    /// Small diamond-with-tail graph.
    ///
    /// ```text
    ///   A ──1── B ──1── D ──4── E
    ///   │               │
    ///   └──5─── C ──1───┘
    /// ```
    ///
    /// All multipliers are 1.0, so A→D is 2 via B and 6 via C.
    pub fn diamond() -> RoadGraph {
        let mut g = RoadGraph::new();
        for name in ["A", "B", "C", "D", "E"] {
            g.add_location(name);
        }
        g.add_road("A", "B", 1.0, 1.0);
        g.add_road("B", "D", 1.0, 1.0);
        g.add_road("A", "C", 5.0, 1.0);
        g.add_road("C", "D", 1.0, 1.0);
        g.add_road("D", "E", 4.0, 1.0);
        g
    }

    pub fn names(g: &RoadGraph, path: &[ems_core::NodeId]) -> Vec<String> {
        path.iter().map(|&id| g.name(id).to_owned()).collect()
    }
}

// ── Graph store ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use crate::{Connect, NetworkError, Road, RoadGraph};

    #[test]
    fn empty_graph() {
        let g = RoadGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.road_count(), 0);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut g = RoadGraph::new();
        let a = g.add_location("A");
        let h = g.add_facility("H", 3);
        assert_eq!(a.0, 0);
        assert_eq!(h.0, 1);
        let order: Vec<_> = g.locations().map(|(_, l)| l.name.clone()).collect();
        assert_eq!(order, vec!["A", "H"]);
        assert!(g.location(h).unwrap().has_capacity());
        assert!(!g.location(a).unwrap().has_capacity());
    }

    #[test]
    fn road_is_written_both_directions() {
        let g = super::helpers::diamond();
        let a = g.node_id("A").unwrap();
        let c = g.node_id("C").unwrap();
        assert_eq!(g.road(a, c), Some(&Road::new(5.0, 1.0)));
        assert_eq!(g.road(a, c), g.road(c, a));
        assert_eq!(g.road_count(), 10);
    }

    #[test]
    fn missing_endpoint_is_ignored() {
        let mut g = RoadGraph::new();
        g.add_location("A");
        assert_eq!(g.add_road("A", "nowhere", 1.0, 1.0), Connect::Ignored);
        assert_eq!(g.road_count(), 0);
    }

    #[test]
    fn re_adding_road_overwrites_payload() {
        let mut g = super::helpers::diamond();
        assert_eq!(g.add_road("A", "B", 7.0, 2.0), Connect::Applied);
        let a = g.node_id("A").unwrap();
        let b = g.node_id("B").unwrap();
        assert_eq!(g.road(a, b), Some(&Road::new(7.0, 2.0)));
        assert_eq!(g.road(b, a), Some(&Road::new(7.0, 2.0)));
        assert_eq!(g.road_count(), 10);
    }

    #[test]
    fn update_road_keeps_directions_in_sync() {
        let mut g = super::helpers::diamond();
        g.update_road("C", "D", Some(3.0), None).unwrap();
        g.update_road("D", "C", None, Some(2.5)).unwrap();
        let c = g.node_id("C").unwrap();
        let d = g.node_id("D").unwrap();
        assert_eq!(g.road(c, d), Some(&Road::new(3.0, 2.5)));
        assert_eq!(g.road(d, c), Some(&Road::new(3.0, 2.5)));
    }

    #[test]
    fn update_missing_road_fails() {
        let mut g = super::helpers::diamond();
        let err = g.update_road("A", "E", Some(1.0), None).unwrap_err();
        assert!(matches!(err, NetworkError::NoSuchRoad { .. }));
        let err = g.update_road("A", "Z", Some(1.0), None).unwrap_err();
        assert!(matches!(err, NetworkError::NoSuchRoad { .. }));
    }

    #[test]
    fn replacing_location_drops_its_roads_everywhere() {
        let mut g = super::helpers::diamond();
        let d_before = g.node_id("D").unwrap();
        let d = g.add_facility("D", 2);
        assert_eq!(d, d_before, "replacement keeps the id");
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.roads(d).count(), 0);
        // Mirror entries at B, C and E are gone too.
        for name in ["B", "C", "E"] {
            let n = g.node_id(name).unwrap();
            assert!(g.road(n, d).is_none(), "{name} still points at D");
        }
        assert_eq!(g.location(d).unwrap().capacity, 2);
    }

    #[test]
    fn negative_or_nan_weights_are_ignored() {
        let mut g = RoadGraph::new();
        g.add_location("A");
        g.add_location("B");
        assert_eq!(g.add_road("A", "B", -1.0, 1.0), Connect::Ignored);
        assert_eq!(g.add_road("A", "B", f64::NAN, 1.0), Connect::Ignored);
        assert_eq!(g.add_road("A", "B", 1.0, 0.0), Connect::Ignored);
        assert_eq!(g.add_road("A", "B", 1.0, -2.0), Connect::Ignored);
        assert_eq!(g.road_count(), 0);
        // Zero distance is a valid road.
        assert_eq!(g.add_road("A", "B", 0.0, 1.0), Connect::Applied);
    }

    #[test]
    fn update_with_invalid_weight_changes_nothing() {
        let mut g = super::helpers::diamond();
        let err = g.update_road("A", "B", Some(2.0), Some(-1.0)).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWeight { field: "traffic multiplier", .. }));
        let err = g.update_road("A", "B", Some(f64::INFINITY), None).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWeight { field: "distance", .. }));

        let a = g.node_id("A").unwrap();
        let b = g.node_id("B").unwrap();
        assert_eq!(g.road(a, b), Some(&Road::new(1.0, 1.0)));
        assert_eq!(g.road(b, a), Some(&Road::new(1.0, 1.0)));
    }

    #[test]
    fn node_ids_stop_short_of_the_sentinel() {
        use crate::graph::next_node_id;
        use ems_core::NodeId;

        assert_eq!(next_node_id(0), Some(NodeId(0)));
        assert_eq!(next_node_id(u32::MAX as usize - 1), Some(NodeId(u32::MAX - 1)));
        assert_eq!(next_node_id(u32::MAX as usize), None);
    }

    #[test]
    fn available_facilities_skip_empty_ones() {
        let mut g = RoadGraph::new();
        g.add_facility("H1", 0);
        let h2 = g.add_facility("H2", 1);
        g.add_location("A");
        let avail: Vec<_> = g.available_facilities().collect();
        assert_eq!(avail, vec![h2]);
    }
}

// ── Traffic overlay ───────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use crate::{NetworkError, TrafficOverlay};

    #[test]
    fn override_applies_both_directions() {
        let g = super::helpers::diamond();
        let mut overlay = TrafficOverlay::new();
        overlay.set_for_road(&g, "A", "C", 2.0).unwrap();

        let a = g.node_id("A").unwrap();
        let c = g.node_id("C").unwrap();
        assert_eq!(g.segment_cost(a, c, &overlay), Some(10.0));
        assert_eq!(g.segment_cost(c, a, &overlay), Some(10.0));
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn effective_falls_back_without_entry() {
        let g = super::helpers::diamond();
        let a = g.node_id("A").unwrap();
        let c = g.node_id("C").unwrap();
        let mut overlay = TrafficOverlay::new();
        overlay.set_symmetric(a, c, 3.0);
        assert_eq!(overlay.effective(a, c, 1.0), 3.0);
        assert_eq!(overlay.effective(c, a, 1.0), 3.0);
        assert_eq!(overlay.effective(a, a, 1.5), 1.5);
    }

    #[test]
    fn override_on_missing_road_is_rejected() {
        let g = super::helpers::diamond();
        let mut overlay = TrafficOverlay::new();
        let err = overlay.set_for_road(&g, "A", "E", 2.0).unwrap_err();
        assert!(matches!(err, NetworkError::NoSuchRoad { .. }));
        assert!(overlay.is_empty());
    }

    #[test]
    fn non_positive_override_is_rejected() {
        let g = super::helpers::diamond();
        let mut overlay = TrafficOverlay::new();
        for bad in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let err = overlay.set_for_road(&g, "A", "B", bad).unwrap_err();
            assert!(matches!(err, NetworkError::InvalidWeight { .. }), "{bad} accepted");
        }
        assert!(overlay.is_empty());
    }

    #[test]
    fn stored_multiplier_is_fallback() {
        let mut g = super::helpers::diamond();
        g.update_road("A", "B", None, Some(4.0)).unwrap();
        let a = g.node_id("A").unwrap();
        let b = g.node_id("B").unwrap();
        let overlay = TrafficOverlay::new();
        assert_eq!(g.segment_cost(a, b, &overlay), Some(4.0));
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use crate::{AStarRouter, ConstantHeuristic, NetworkError, RoadGraph, Router, TrafficOverlay};

    #[test]
    fn trivial_same_node() {
        let g = super::helpers::diamond();
        let a = g.node_id("A").unwrap();
        let r = AStarRouter::constant().route(&g, &TrafficOverlay::new(), a, a).unwrap();
        assert!(r.is_trivial());
        assert_eq!(r.nodes, vec![a]);
        assert_eq!(r.cost, 0.0);
    }

    #[test]
    fn shortest_path_correct() {
        let g = super::helpers::diamond();
        let a = g.node_id("A").unwrap();
        let e = g.node_id("E").unwrap();
        let r = AStarRouter::constant().route(&g, &TrafficOverlay::new(), a, e).unwrap();
        assert_eq!(super::helpers::names(&g, &r.nodes), vec!["A", "B", "D", "E"]);
        assert_eq!(r.cost, 6.0);
        assert_eq!(r.origin(), Some(a));
        assert_eq!(r.goal(), Some(e));
    }

    #[test]
    fn traffic_override_reroutes() {
        let g = super::helpers::diamond();
        let mut overlay = TrafficOverlay::new();
        // A–B now costs 10, so A→D goes via C (5 + 1 = 6 < 10 + 1).
        overlay.set_for_road(&g, "A", "B", 10.0).unwrap();
        let a = g.node_id("A").unwrap();
        let d = g.node_id("D").unwrap();
        let r = AStarRouter::constant().route(&g, &overlay, a, d).unwrap();
        assert_eq!(super::helpers::names(&g, &r.nodes), vec!["A", "C", "D"]);
        assert_eq!(r.cost, 6.0);
    }

    #[test]
    fn cost_matches_recomputed_path_cost() {
        let mut g = super::helpers::diamond();
        g.update_road("D", "E", None, Some(1.5)).unwrap();
        let mut overlay = TrafficOverlay::new();
        overlay.set_for_road(&g, "B", "D", 2.0).unwrap();
        let a = g.node_id("A").unwrap();
        let e = g.node_id("E").unwrap();
        let r = AStarRouter::constant().route(&g, &overlay, a, e).unwrap();
        assert_eq!(g.path_cost(&r.nodes, &overlay), Some(r.cost));
    }

    #[test]
    fn no_route_disconnected() {
        let mut g = RoadGraph::new();
        let a = g.add_location("A");
        let b = g.add_location("B");
        let c = g.add_location("C");
        g.add_road("A", "B", 1.0, 1.0);
        let err = AStarRouter::constant().route(&g, &TrafficOverlay::new(), a, c).unwrap_err();
        assert!(matches!(err, NetworkError::NoRoute { .. }));
        assert_eq!(err.cost(), f64::INFINITY);
        let _ = b;
    }

    #[test]
    fn unknown_node_rejected() {
        let g = super::helpers::diamond();
        let a = g.node_id("A").unwrap();
        let err = AStarRouter::constant()
            .route(&g, &TrafficOverlay::new(), a, ems_core::NodeId(99))
            .unwrap_err();
        assert!(matches!(err, NetworkError::UnknownNode(_)));
    }

    #[test]
    fn heuristic_does_not_leak_into_cost() {
        let g = super::helpers::diamond();
        let a = g.node_id("A").unwrap();
        let d = g.node_id("D").unwrap();
        let r = AStarRouter::new(ConstantHeuristic(100.0))
            .route(&g, &TrafficOverlay::new(), a, d)
            .unwrap();
        assert_eq!(r.cost, 2.0);
    }

    #[test]
    fn zero_distance_cycle_terminates() {
        let mut g = RoadGraph::new();
        let a = g.add_location("A");
        g.add_location("B");
        g.add_location("C");
        let d = g.add_location("D");
        g.add_road("A", "B", 0.0, 1.0);
        g.add_road("B", "C", 0.0, 1.0);
        g.add_road("C", "A", 0.0, 1.0);
        let err = AStarRouter::constant().route(&g, &TrafficOverlay::new(), a, d).unwrap_err();
        assert!(matches!(err, NetworkError::NoRoute { .. }));
    }

    #[test]
    fn path_cost_of_non_road_is_none() {
        let g = super::helpers::diamond();
        let a = g.node_id("A").unwrap();
        let e = g.node_id("E").unwrap();
        let overlay = TrafficOverlay::new();
        assert_eq!(g.path_cost(&[a, e], &overlay), None);
        assert_eq!(g.path_cost(&[a], &overlay), Some(0.0));
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use tempfile::TempDir;

    use crate::{
        NetworkError, RoadGraph, load_locations_csv, load_locations_reader, load_roads_csv,
        load_roads_reader,
    };

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    const LOCATIONS: &str = "\
name,is_facility,capacity\n\
Ganga Hospital,true,10\n\
Rathinapuri,false,0\n\
Ukkadam,false,\n\
";

    const ROADS: &str = "\
from,to,distance,traffic\n\
Rathinapuri,Ganga Hospital,4,1.1\n\
Ukkadam,Ganga Hospital,6,1.2\n\
Ukkadam,Nowhere,1,1.0\n\
";

    #[test]
    fn loads_locations_and_roads() {
        let mut g = RoadGraph::new();
        let n = load_locations_reader(Cursor::new(LOCATIONS), &mut g).unwrap();
        assert_eq!(n, 3);
        assert_eq!(g.location_by_name("Ganga Hospital").unwrap().capacity, 10);
        assert!(g.location_by_name("Ganga Hospital").unwrap().is_facility);
        assert_eq!(g.location_by_name("Ukkadam").unwrap().capacity, 0);

        let applied = load_roads_reader(Cursor::new(ROADS), &mut g).unwrap();
        assert_eq!(applied, 2, "road to a missing location is skipped");
        assert_eq!(g.road_count(), 4);
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let mut g = RoadGraph::new();
        let bad = "from,to,distance,traffic\nA,B,far,1.0\n";
        let err = load_roads_reader(Cursor::new(bad), &mut g).unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn loads_from_files() {
        let dir = tmp();
        let locations = dir.path().join("locations.csv");
        let roads = dir.path().join("roads.csv");
        std::fs::write(&locations, LOCATIONS).unwrap();
        std::fs::write(&roads, ROADS).unwrap();

        let mut g = RoadGraph::new();
        assert_eq!(load_locations_csv(&locations, &mut g).unwrap(), 3);
        assert_eq!(load_roads_csv(&roads, &mut g).unwrap(), 2);
        assert_eq!(g.road_count(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tmp();
        let mut g = RoadGraph::new();
        let err = load_locations_csv(&dir.path().join("absent.csv"), &mut g).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
        let err = load_roads_csv(&dir.path().join("absent.csv"), &mut g).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
        assert!(g.is_empty());
    }

    #[test]
    fn road_row_with_negative_distance_is_skipped() {
        let mut g = RoadGraph::new();
        load_locations_reader(Cursor::new(LOCATIONS), &mut g).unwrap();
        let rows = "from,to,distance,traffic\nRathinapuri,Ukkadam,-3,1.0\nRathinapuri,Ukkadam,3,1.0\n";
        assert_eq!(load_roads_reader(Cursor::new(rows), &mut g).unwrap(), 1);
    }
}
