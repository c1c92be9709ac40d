//! # street-router — Urban Street-Network Routing
//!
//! Load a street network from GeoJSON, find the shortest route between two
//! points and an alternative that shares no street segment with it, and
//! label vertices with the street they sit on.
//!
//! ## Design Principles
//!
//! 1. **Plain data model**: `StreetGraph`, `Node`, `Edge` carry no I/O
//! 2. **Pure resolver**: street labelling is a total function over a borrowed node
//! 3. **Immutable search**: alternatives exclude segments instead of mutating the graph
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use street_router::{geojson, routing, Method};
//!
//! # fn example() -> street_router::Result<()> {
//! let graph = geojson::load_path("ruas.geojson")?;
//!
//! let start = graph.nearest_node(-46.6550, -23.5610).expect("empty network");
//! let end = graph.nearest_node(-46.6330, -23.5500).expect("empty network");
//! println!("from {} to {}", graph.street_name(start), graph.street_name(end));
//!
//! let pair = routing::shortest_two_paths(&graph, start, end, Method::AStar)?;
//! if let Some(route) = &pair.primary {
//!     println!("{:.2} via {:?}", route.distance(), route.streets());
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod geojson;
pub mod routing;
pub mod export;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Node, Edge, StreetGraph, Bounds,
    NodeId, SegmentId,
    resolve_street_name, is_present, StreetEdges, StreetLabel,
    UNKNOWN_STREET, UNKNOWN_LOCATION,
};

// ============================================================================
// Re-exports: Routing
// ============================================================================

pub use routing::{Method, Route, RouteStep, RoutePair, shortest_path, shortest_two_paths};

pub use config::RouterConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Invalid segment weight: {0}")]
    InvalidWeight(f64),

    #[error("Unknown routing method '{0}' (expected D or A)")]
    UnknownMethod(String),

    #[error("GeoJSON error: {0}")]
    GeoJson(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
