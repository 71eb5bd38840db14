use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::graph::{LocationGraph, NodeId};

/// Supported traversal orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Level-order visit using a FIFO frontier.
    #[default]
    BreadthFirst,
    /// Pre-order visit using an explicit stack.
    DepthFirst,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TraversalOrder::BreadthFirst => "breadth-first",
            TraversalOrder::DepthFirst => "depth-first",
        };
        f.write_str(value)
    }
}

/// Visit every location reachable from `start` in the requested order.
pub fn traverse(graph: &LocationGraph, start: &str, order: TraversalOrder) -> Vec<String> {
    match order {
        TraversalOrder::BreadthFirst => breadth_first(graph, start),
        TraversalOrder::DepthFirst => depth_first(graph, start),
    }
}

/// Level-order traversal from `start`, returning canonical names in discovery
/// order. Unknown start names yield an empty sequence. Neighbour order
/// follows adjacency insertion order.
pub fn breadth_first(graph: &LocationGraph, start: &str) -> Vec<String> {
    let Some(start) = graph.resolve(start) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        push_name(graph, current, &mut result);
        for edge in graph.neighbours(current) {
            if !visited[edge.target] {
                visited[edge.target] = true;
                queue.push_back(edge.target);
            }
        }
    }

    result
}

/// Pre-order traversal from `start`, returning canonical names in discovery
/// order. Unknown start names yield an empty sequence.
///
/// Uses an explicit stack rather than recursion so deep graphs cannot
/// overflow the call stack. Neighbours are pushed in reverse so the
/// first-inserted neighbour is explored first, matching the order a
/// recursive visit would produce.
pub fn depth_first(graph: &LocationGraph, start: &str) -> Vec<String> {
    let Some(start) = graph.resolve(start) else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut visited = vec![false; graph.node_count()];
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        push_name(graph, current, &mut result);

        for edge in graph.neighbours(current).iter().rev() {
            if !visited[edge.target] {
                stack.push(edge.target);
            }
        }
    }

    result
}

/// Whether every location is reachable from every other.
///
/// Runs a breadth-first sweep from node 0 and checks that it reached the
/// whole graph. An empty graph is connected.
pub fn is_connected(graph: &LocationGraph) -> bool {
    if graph.is_empty() {
        return true;
    }

    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    visited[0] = true;
    queue.push_back(0);

    let mut reached = 1usize;
    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbours(current) {
            if !visited[edge.target] {
                visited[edge.target] = true;
                reached += 1;
                queue.push_back(edge.target);
            }
        }
    }

    reached == graph.node_count()
}

fn push_name(graph: &LocationGraph, id: NodeId, result: &mut Vec<String>) {
    if let Some(name) = graph.name(id) {
        result.push(name.to_string());
    }
}
