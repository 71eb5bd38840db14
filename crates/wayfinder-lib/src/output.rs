use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{LocationGraph, NodeId};
use crate::routing::RoutePlan;

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    /// Display name, falling back to a placeholder for unresolvable ids.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteStep {
    /// Display name, falling back to a placeholder for unresolvable ids.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub hops: usize,
    pub total_distance: u64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved
    /// location names.
    pub fn from_plan(graph: &LocationGraph, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, id)| RouteStep {
                index,
                id: *id,
                name: graph.name(*id).map(|name| name.to_string()),
            })
            .collect::<Vec<_>>();

        let start = RouteEndpoint {
            id: plan.start,
            name: graph.name(plan.start).map(|name| name.to_string()),
        };
        let goal = RouteEndpoint {
            id: plan.goal,
            name: graph.name(plan.goal).map(|name| name.to_string()),
        };

        Ok(Self {
            hops: plan.hop_count(),
            total_distance: plan.total_distance,
            start,
            goal,
            steps,
        })
    }
}
