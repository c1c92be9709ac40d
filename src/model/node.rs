//! Node in the street network.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use super::Edge;

/// Opaque node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incident edges of a node. Street intersections rarely have more than four.
pub type EdgeList = SmallVec<[Edge; 4]>;

/// A vertex of the street network at planar coordinates.
///
/// `x` is longitude and `y` latitude when the network comes from GeoJSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    /// Outgoing edges in insertion order.
    pub edges: EdgeList,
}

impl Node {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self { id, x, y, edges: SmallVec::new() }
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Straight-line distance to another node, in coordinate units.
    pub fn distance_to(&self, other: &Node) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
