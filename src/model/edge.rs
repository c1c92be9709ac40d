//! Edge — one direction of a street segment.

use serde::{Deserialize, Serialize};
use super::NodeId;

/// Opaque street-segment identifier.
///
/// Both directions of an undirected segment share the same id, so excluding
/// a segment from a search removes it in both directions at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(pub u64);

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed half of a street segment, stored on its source node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub segment: SegmentId,
    pub dest: NodeId,
    pub weight: f64,
    /// Street name ("rua"). May be absent, empty, or the unknown-street sentinel.
    pub rua: Option<String>,
}

impl Edge {
    pub fn new(segment: SegmentId, dest: NodeId, weight: f64) -> Self {
        Self { segment, dest, weight, rua: None }
    }

    pub fn with_rua(mut self, rua: impl Into<String>) -> Self {
        self.rua = Some(rua.into());
        self
    }
}
