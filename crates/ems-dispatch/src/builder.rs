//! Fluent builder for constructing a [`RoutePlanner`].

use ems_core::PlannerConfig;
use ems_network::{AStarRouter, ConstantHeuristic, RoadGraph, Router, TrafficOverlay};

use crate::{DispatchResult, RoutePlanner};

/// Fluent builder for [`RoutePlanner<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                     |
/// |-----------------|-----------------------------|
/// | `.config(c)`    | `PlannerConfig::default()`  |
/// | `.graph(g)`     | empty `RoadGraph`           |
/// | `.overlay(o)`   | empty `TrafficOverlay`      |
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::from_config(config)
///     .graph(graph)
///     .build()?;
/// ```
///
/// `config.heuristic_estimate` only shapes the router made by
/// [`from_config`](PlannerBuilder::from_config).  A router handed to
/// [`new`](PlannerBuilder::new) keeps its own heuristic.
pub struct PlannerBuilder<R: Router> {
    router:  R,
    config:  PlannerConfig,
    graph:   Option<RoadGraph>,
    overlay: Option<TrafficOverlay>,
}

impl<R: Router> PlannerBuilder<R> {
    pub fn new(router: R) -> Self {
        Self {
            router,
            config:  PlannerConfig::default(),
            graph:   None,
            overlay: None,
        }
    }

    /// Selection settings.  Does not reconfigure the router.
    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a pre-built graph (e.g. one loaded from CSV).
    pub fn graph(mut self, graph: RoadGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn overlay(mut self, overlay: TrafficOverlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Validate the configuration and return a ready planner.
    pub fn build(self) -> DispatchResult<RoutePlanner<R>> {
        self.config.validate()?;
        Ok(RoutePlanner::from_parts(
            self.graph.unwrap_or_default(),
            self.overlay.unwrap_or_default(),
            self.router,
            self.config,
        ))
    }
}

impl PlannerBuilder<AStarRouter> {
    /// Builder over an [`AStarRouter`] whose constant heuristic is
    /// `config.heuristic_estimate`.
    pub fn from_config(config: PlannerConfig) -> Self {
        let router = AStarRouter::new(ConstantHeuristic(config.heuristic_estimate));
        Self::new(router).config(config)
    }
}
