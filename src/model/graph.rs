//! In-memory street network.
//!
//! Nodes are keyed by their coordinate pair: adding the same coordinate
//! twice yields the same node, which is how consecutive LineStrings that
//! share an endpoint get stitched into one network.
//!
//! Every segment is undirected. `add_edge` stores one [`Edge`] on each
//! endpoint and both halves share a [`SegmentId`].

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{resolve_street_name, Edge, Node, NodeId, SegmentId};
use crate::{Error, Result};

/// Axis-aligned bounding box of the network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Undirected, weighted street network.
#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    nodes: HashMap<NodeId, Node>,
    /// (x bits, y bits) → node
    by_coord: HashMap<(u64, u64), NodeId>,
    next_node_id: u64,
    next_segment_id: u64,
}

impl StreetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex at `(x, y)`, or return the one already there.
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let key = coord_key(x, y);
        if let Some(id) = self.by_coord.get(&key) {
            return *id;
        }

        self.next_node_id += 1;
        let id = NodeId(self.next_node_id);
        self.nodes.insert(id, Node::new(id, x, y));
        self.by_coord.insert(key, id);
        id
    }

    /// Connect two vertices with an undirected street segment.
    pub fn add_edge(
        &mut self,
        src: NodeId,
        dst: NodeId,
        weight: f64,
        rua: Option<String>,
    ) -> Result<SegmentId> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }
        for id in [src, dst] {
            if !self.nodes.contains_key(&id) {
                return Err(Error::NodeNotFound(id));
            }
        }

        self.next_segment_id += 1;
        let segment = SegmentId(self.next_segment_id);

        let forward = Edge { segment, dest: dst, weight, rua: rua.clone() };
        let backward = Edge { segment, dest: src, weight, rua };
        if let Some(node) = self.nodes.get_mut(&src) {
            node.edges.push(forward);
        }
        if let Some(node) = self.nodes.get_mut(&dst) {
            node.edges.push(backward);
        }

        Ok(segment)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Look up the vertex at an exact coordinate.
    pub fn node_at(&self, x: f64, y: f64) -> Option<NodeId> {
        self.by_coord.get(&coord_key(x, y)).copied()
    }

    /// All vertices, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn segment_count(&self) -> usize {
        self.next_segment_id as usize
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Vertex closest to `(x, y)`. Ties go to the lower id.
    pub fn nearest_node(&self, x: f64, y: f64) -> Option<NodeId> {
        self.nodes
            .values()
            .map(|n| {
                let (dx, dy) = (n.x - x, n.y - y);
                (dx * dx + dy * dy, n.id)
            })
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, id)| id)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut nodes = self.nodes.values();
        let first = nodes.next()?;
        let init = Bounds { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        Some(nodes.fold(init, |b, n| Bounds {
            min_x: b.min_x.min(n.x),
            min_y: b.min_y.min(n.y),
            max_x: b.max_x.max(n.x),
            max_y: b.max_y.max(n.y),
        }))
    }

    /// Display street name of a vertex. Unknown ids resolve like absent nodes.
    pub fn street_name(&self, id: NodeId) -> &str {
        resolve_street_name(self.node(id))
    }
}

/// `-0.0` and `0.0` must land on the same vertex.
fn coord_key(x: f64, y: f64) -> (u64, u64) {
    let norm = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
    (norm(x), norm(y))
}
