//! Best-first search shared by Dijkstra and A*.
//!
//! Dijkstra is A* with a zero heuristic, so both run through [`search`].
//! The frontier is a binary heap with lazy deletion: stale entries are
//! skipped when popped instead of being decreased in place.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};

use crate::model::{NodeId, SegmentId, StreetGraph};
use super::{Method, Route, RouteStep};

/// Frontier entry ordered so that `BinaryHeap` pops the lowest `f` first.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    f: f64,
    g: f64,
    node: NodeId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest route from `start` to `end` avoiding `excluded` segments.
///
/// Both ids must exist in `graph`. Returns `None` when `end` is unreachable.
pub(crate) fn search(
    graph: &StreetGraph,
    start: NodeId,
    end: NodeId,
    method: Method,
    excluded: &HashSet<SegmentId>,
) -> Option<Route> {
    if start == end {
        return Some(Route::single(start));
    }

    let target = graph.node(end)?;
    let heuristic = |id: NodeId| match method {
        Method::Dijkstra => 0.0,
        Method::AStar => graph.node(id).map_or(0.0, |n| n.distance_to(target)),
    };

    let mut best: HashMap<NodeId, f64> = HashMap::new();
    // node → (predecessor, index of the edge taken in the predecessor's list)
    let mut came_from: HashMap<NodeId, (NodeId, usize)> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut settled = 0usize;

    best.insert(start, 0.0);
    frontier.push(Frontier { f: heuristic(start), g: 0.0, node: start });

    while let Some(Frontier { g, node, .. }) = frontier.pop() {
        if best.get(&node).is_some_and(|&b| g > b) {
            continue;
        }
        settled += 1;
        if node == end {
            tracing::debug!(%method, %start, %end, settled, distance = g, "route found");
            return Some(reconstruct(graph, start, end, &came_from));
        }

        let Some(current) = graph.node(node) else { continue };
        for (idx, edge) in current.edges.iter().enumerate() {
            if excluded.contains(&edge.segment) {
                continue;
            }
            let tentative = g + edge.weight;
            if best.get(&edge.dest).is_none_or(|&b| tentative < b) {
                best.insert(edge.dest, tentative);
                came_from.insert(edge.dest, (node, idx));
                frontier.push(Frontier {
                    f: tentative + heuristic(edge.dest),
                    g: tentative,
                    node: edge.dest,
                });
            }
        }
    }

    tracing::debug!(%method, %start, %end, settled, "no route");
    None
}

/// Walk `came_from` back from `end` and replay the exact edges relaxed.
fn reconstruct(
    graph: &StreetGraph,
    start: NodeId,
    end: NodeId,
    came_from: &HashMap<NodeId, (NodeId, usize)>,
) -> Route {
    let mut steps = Vec::new();
    let mut current = end;
    while current != start {
        let Some(&(prev, idx)) = came_from.get(&current) else { break };
        if let Some(edge) = graph.node(prev).and_then(|n| n.edges.get(idx)) {
            steps.push(RouteStep {
                from: prev,
                to: current,
                segment: edge.segment,
                weight: edge.weight,
                rua: edge.rua.clone(),
            });
        }
        current = prev;
    }
    steps.reverse();
    Route::from_steps(start, steps)
}
