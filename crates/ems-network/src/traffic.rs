//! Directional traffic overrides.
//!
//! The overlay is a sparse table keyed by ordered `(from, to)` pairs.  When
//! an entry exists it supersedes the road's stored multiplier for that
//! direction of travel only.  Writes through [`TrafficOverlay::set_for_road`]
//! are symmetric; reads are always per-direction.
//!
//! Entries are not tied to the graph's lifetime: an entry for a pair that is
//! no longer a road is simply never consulted.

use std::collections::BTreeMap;

use tracing::debug;

use ems_core::NodeId;

use crate::graph::{check_weights, RoadGraph};
use crate::NetworkResult;

/// Sparse `(from, to) → multiplier` override table.
///
/// Backed by a `BTreeMap` so iteration (and therefore snapshots) is
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct TrafficOverlay {
    inner: BTreeMap<(NodeId, NodeId), f64>,
}

impl TrafficOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `multiplier` for both `a → b` and `b → a`.
    pub fn set_symmetric(&mut self, a: NodeId, b: NodeId, multiplier: f64) {
        self.inner.insert((a, b), multiplier);
        self.inner.insert((b, a), multiplier);
    }

    /// Like [`set_symmetric`](Self::set_symmetric), but only if `a` and `b`
    /// name locations joined by a road and `multiplier` is finite and
    /// positive.  Fails with [`NoSuchRoad`](crate::NetworkError::NoSuchRoad)
    /// or [`InvalidWeight`](crate::NetworkError::InvalidWeight) otherwise and
    /// leaves the overlay unchanged.
    pub fn set_for_road(
        &mut self,
        graph: &RoadGraph,
        a: &str,
        b: &str,
        multiplier: f64,
    ) -> NetworkResult<()> {
        let (ia, ib) = graph.road_endpoints(a, b)?;
        check_weights(a, b, None, Some(multiplier))?;
        self.set_symmetric(ia, ib, multiplier);
        debug!(from = a, to = b, multiplier, "traffic override set");
        Ok(())
    }

    /// Override for the directed pair, if any.
    #[inline]
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.inner.get(&(from, to)).copied()
    }

    /// Multiplier to use for `from → to`: the override if present, else
    /// `stored`.
    #[inline]
    pub fn effective(&self, from: NodeId, to: NodeId, stored: f64) -> f64 {
        self.get(from, to).unwrap_or(stored)
    }

    /// All entries in `(from, to)` order.
    pub fn iter(&self) -> impl Iterator<Item = ((NodeId, NodeId), f64)> + '_ {
        self.inner.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
