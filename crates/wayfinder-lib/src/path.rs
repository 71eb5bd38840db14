use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{LocationGraph, NodeId};

/// Sentinel for "not yet reached" tentative distances.
const UNREACHED: u64 = u64::MAX;

/// Run Dijkstra's algorithm between two location ids.
///
/// Returns the lowest-cost path from `start` to `goal` together with its
/// total weight, or `None` when the two ids lie in different components.
///
/// The frontier uses lazy deletion: relaxing a node pushes a fresh entry
/// rather than re-keying the old one, and stale entries are skipped via the
/// visited check on extraction. The search runs the frontier dry instead of
/// stopping at the goal, so every call is an independent sweep over the
/// current graph snapshot.
pub fn shortest_path(
    graph: &LocationGraph,
    start: NodeId,
    goal: NodeId,
) -> Option<(Vec<NodeId>, u64)> {
    let n = graph.node_count();
    if start >= n || goal >= n {
        return None;
    }

    let mut dist = vec![UNREACHED; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = BinaryHeap::new();

    dist[start] = 0;
    frontier.push(QueueEntry {
        node: start,
        cost: 0,
    });

    while let Some(entry) = frontier.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;

        for edge in graph.neighbours(entry.node) {
            // Saturating keeps the sentinel stable under pathological weights.
            let candidate = dist[entry.node].saturating_add(edge.weight);
            if candidate < dist[edge.target] {
                dist[edge.target] = candidate;
                parent[edge.target] = Some(entry.node);
                frontier.push(QueueEntry {
                    node: edge.target,
                    cost: candidate,
                });
            }
        }
    }

    if dist[goal] == UNREACHED {
        return None;
    }

    Some((reconstruct_path(&parent, start, goal), dist[goal]))
}

fn reconstruct_path(parent: &[Option<NodeId>], start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parent[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
