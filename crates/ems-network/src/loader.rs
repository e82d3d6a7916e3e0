//! CSV loaders for locations and roads.
//!
//! # CSV formats
//!
//! Locations, one row per location:
//!
//! ```csv
//! name,is_facility,capacity
//! Ganga Hospital,true,10
//! Rathinapuri,false,
//! ```
//!
//! Roads, one row per undirected road:
//!
//! ```csv
//! from,to,distance,traffic
//! Rathinapuri,Ganga Hospital,4,1.1
//! ```
//!
//! Roads whose endpoints are missing, or whose weights are unusable, are
//! skipped the same way [`RoadGraph::add_road`] skips them; load locations
//! first.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::graph::{Connect, RoadGraph};
use crate::{NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name:        String,
    is_facility: bool,
    capacity:    Option<u32>,
}

#[derive(Deserialize)]
struct RoadRecord {
    from:     String,
    to:       String,
    distance: f64,
    traffic:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load locations from a CSV file into `graph`.  Returns the number of rows.
pub fn load_locations_csv(path: &Path, graph: &mut RoadGraph) -> NetworkResult<usize> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file, graph)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
pub fn load_locations_reader<R: Read>(reader: R, graph: &mut RoadGraph) -> NetworkResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut count = 0;
    for result in csv_reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        graph.add_node(row.name.trim(), row.is_facility, row.capacity.unwrap_or(0));
        count += 1;
    }
    Ok(count)
}

/// Load roads from a CSV file into `graph`.  Returns the number of roads
/// actually applied.
pub fn load_roads_csv(path: &Path, graph: &mut RoadGraph) -> NetworkResult<usize> {
    let file = std::fs::File::open(path)?;
    load_roads_reader(file, graph)
}

/// Like [`load_roads_csv`] but accepts any `Read` source.
pub fn load_roads_reader<R: Read>(reader: R, graph: &mut RoadGraph) -> NetworkResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut applied = 0;
    for result in csv_reader.deserialize::<RoadRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        if graph.add_road(row.from.trim(), row.to.trim(), row.distance, row.traffic) == Connect::Applied {
            applied += 1;
        }
    }
    Ok(applied)
}
