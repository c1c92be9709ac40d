//! # Street Network Model
//!
//! Plain data for the routing engine: vertices, directed edge halves, the
//! undirected network that owns them, and the street-name resolver.
//!
//! Design rule: no I/O and no logging here. Loading lives in
//! [`crate::geojson`], searching in [`crate::routing`].

pub mod node;
pub mod edge;
pub mod graph;
pub mod street;

pub use node::{Node, NodeId, EdgeList};
pub use edge::{Edge, SegmentId};
pub use graph::{StreetGraph, Bounds};
pub use street::{
    resolve_street_name, is_present, StreetEdges, StreetLabel,
    UNKNOWN_STREET, UNKNOWN_LOCATION,
};
