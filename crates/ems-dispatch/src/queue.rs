//! `RequestQueue` — pending dispatch requests.
//!
//! Requests are kept in arrival order.  A dispatch pass drains the whole
//! queue at once, stable-sorted by priority, so each request is handed out
//! exactly once and requests of equal priority keep their arrival order.

use ems_core::RequestId;

/// One pending request for the nearest facility.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Request {
    pub id:       RequestId,
    /// Name of the origin location.  Need not exist when the request is
    /// queued; an unknown origin simply yields no route.
    pub origin:   String,
    /// Lower is more urgent.
    pub priority: i64,
}

impl Request {
    pub fn new(id: impl Into<RequestId>, origin: impl Into<String>, priority: i64) -> Self {
        Self { id: id.into(), origin: origin.into(), priority }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestQueue {
    pending: Vec<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: Request) {
        self.pending.push(request);
    }

    /// Pending requests in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Request> + '_ {
        self.pending.iter()
    }

    /// Remove every pending request and return them in ascending priority
    /// order (stable).
    pub fn drain_by_priority(&mut self) -> Vec<Request> {
        let mut drained = std::mem::take(&mut self.pending);
        drained.sort_by_key(|r| r.priority);
        drained
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
