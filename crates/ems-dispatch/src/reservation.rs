//! Two-phase capacity changes.
//!
//! [`CapacityLedger::hold`] takes one unit of a facility's capacity at once,
//! so later searches already see the reduced value.  The resulting
//! [`Reservation`] must then be either committed (the unit stays taken) or
//! released (the unit is returned).  [`CapacityLedger::consume`] is the
//! single-step variant used by plain nearest-facility lookups and dispatch.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use ems_core::NodeId;
use ems_network::RoadGraph;

use crate::{DispatchError, DispatchResult};

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ReservationId(pub u64);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// A held unit of capacity.  Not `Clone`: it is settled exactly once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a held reservation must be committed or released"]
pub struct Reservation {
    id:       ReservationId,
    facility: NodeId,
}

impl Reservation {
    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn facility(&self) -> NodeId {
        self.facility
    }
}

/// Tracks outstanding reservations.
#[derive(Debug, Default)]
pub struct CapacityLedger {
    next_id: u64,
    held:    FxHashMap<ReservationId, NodeId>,
}

impl CapacityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take one unit of `facility`'s capacity immediately.
    ///
    /// Returns `false` (and changes nothing) if the location is unknown,
    /// not a facility, or already at zero.
    pub fn consume(graph: &mut RoadGraph, facility: NodeId) -> bool {
        let eligible = graph.location(facility).is_some_and(|l| l.has_capacity());
        if !eligible {
            return false;
        }
        let mut remaining = 0;
        if let Some(capacity) = graph.capacity_mut(facility) {
            *capacity -= 1;
            remaining = *capacity;
        }
        debug!(facility = graph.name(facility), remaining, "capacity consumed");
        true
    }

    /// Take one unit of `facility`'s capacity and track it until it is
    /// committed or released.
    pub fn hold(&mut self, graph: &mut RoadGraph, facility: NodeId) -> Option<Reservation> {
        if !Self::consume(graph, facility) {
            return None;
        }
        let id = ReservationId(self.next_id);
        self.next_id += 1;
        self.held.insert(id, facility);
        debug!(reservation = %id, facility = graph.name(facility), "capacity held");
        Some(Reservation { id, facility })
    }

    /// Make a held unit permanent.
    pub fn commit(&mut self, reservation: Reservation) -> DispatchResult<NodeId> {
        let facility = self
            .held
            .remove(&reservation.id)
            .ok_or(DispatchError::UnknownReservation(reservation.id))?;
        debug!(reservation = %reservation.id, "reservation committed");
        Ok(facility)
    }

    /// Return a held unit to its facility.
    ///
    /// If the location at that id is no longer a facility the unit is
    /// dropped instead.
    pub fn release(&mut self, graph: &mut RoadGraph, reservation: Reservation) -> DispatchResult<NodeId> {
        let facility = self
            .held
            .remove(&reservation.id)
            .ok_or(DispatchError::UnknownReservation(reservation.id))?;
        let still_facility = graph.location(facility).is_some_and(|l| l.is_facility);
        if still_facility {
            if let Some(capacity) = graph.capacity_mut(facility) {
                *capacity += 1;
            }
            debug!(reservation = %reservation.id, facility = graph.name(facility), "reservation released");
        } else {
            debug!(reservation = %reservation.id, location = graph.name(facility), "released unit dropped: not a facility");
        }
        Ok(facility)
    }

    /// Drop every held reservation on `facility`, e.g. after the location
    /// was replaced and its capacity reset.  Returns how many were dropped.
    pub fn forget(&mut self, facility: NodeId) -> usize {
        let before = self.held.len();
        self.held.retain(|_, held| *held != facility);
        let dropped = before - self.held.len();
        if dropped > 0 {
            debug!(%facility, dropped, "held reservations dropped");
        }
        dropped
    }

    /// Number of reservations neither committed nor released yet.
    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}
