//! Dispatch observer trait for progress reporting.

use crate::{Outcome, Request};

/// Callbacks invoked by [`RoutePlanner::dispatch_all_with`][crate::RoutePlanner::dispatch_all_with]
/// during a dispatch pass.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console reporter
///
/// ```rust,ignore
/// struct Printer;
///
/// impl DispatchObserver for Printer {
///     fn on_routed(&mut self, request: &Request, outcome: &Outcome) {
///         println!("{} → {:?} ({:.1})", request.id, outcome.path(), outcome.cost());
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called once before the first request, with the number of requests
    /// drained from the queue.
    fn on_pass_start(&mut self, _pending: usize) {}

    /// Called after a request was routed to a facility.
    fn on_routed(&mut self, _request: &Request, _outcome: &Outcome) {}

    /// Called after a request found no reachable facility with capacity.
    fn on_no_route(&mut self, _request: &Request) {}

    /// Called once after the last request.
    fn on_pass_end(&mut self, _routed: usize, _failed: usize) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
