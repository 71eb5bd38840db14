//! Name-level route planning.
//!
//! This module provides:
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! The graph operates on integer ids for performance; this layer resolves
//! human-entered names on the way in (attaching fuzzy suggestions when a
//! name is unknown) and leaves translation back to display names to
//! [`crate::output::RouteSummary`].

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{LocationGraph, NodeId};
use crate::path::shortest_path;

/// Number of fuzzy suggestions attached to unknown-location errors.
const SUGGESTION_LIMIT: usize = 3;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    /// Convenience constructor.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    pub total_distance: u64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a location name to an id, returning an error with suggestions for
/// unknown names.
fn resolve_location(graph: &LocationGraph, name: &str) -> Result<NodeId> {
    graph.resolve(name).ok_or_else(|| {
        let suggestions = graph.fuzzy_matches(name, SUGGESTION_LIMIT);
        Error::UnknownLocation {
            name: name.to_string(),
            suggestions,
        }
    })
}

/// Compute the lowest-weight route between the requested locations.
///
/// Resolves both names case-insensitively, runs Dijkstra's algorithm over
/// the current graph snapshot, and reports [`Error::RouteNotFound`] when the
/// endpoints lie in different components.
pub fn plan_route(graph: &LocationGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let start_id = resolve_location(graph, &request.start)?;
    let goal_id = resolve_location(graph, &request.goal)?;

    let (steps, total_distance) =
        shortest_path(graph, start_id, goal_id).ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    Ok(RoutePlan {
        start: start_id,
        goal: goal_id,
        steps,
        total_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            start: 1,
            goal: 3,
            steps: vec![1, 2, 3],
            total_distance: 7,
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn route_plan_single_step_hop_count() {
        let plan = RoutePlan {
            start: 1,
            goal: 1,
            steps: vec![1],
            total_distance: 0,
        };
        assert_eq!(plan.hop_count(), 0);
    }

    #[test]
    fn unknown_start_reports_suggestions() {
        let mut graph = LocationGraph::new();
        graph.connect("Mumbai", "Delhi", 1400);

        let request = RouteRequest::new("Mumbay", "Delhi");
        let error = plan_route(&graph, &request).expect_err("unknown start");
        match error {
            Error::UnknownLocation { name, suggestions } => {
                assert_eq!(name, "Mumbay");
                assert!(suggestions.contains(&"Mumbai".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
