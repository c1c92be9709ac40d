//! # Routing
//!
//! Shortest paths over a [`StreetGraph`] and the edge-disjoint alternative
//! used to offer a second option.
//!
//! ```text
//! shortest_two_paths(start, end)
//!   primary     = search(start, end, excluded = {})
//!   alternative = search(start, end, excluded = segments(primary))
//! ```
//!
//! The graph is never mutated; exclusion is a set passed to the search.

pub mod route;
mod search;

use std::fmt;
use std::str::FromStr;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::{NodeId, SegmentId, StreetGraph};
use crate::{Error, Result};

pub use route::{Route, RouteStep};

/// Search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Method {
    #[default]
    Dijkstra,
    /// A* with the straight-line distance to the target as heuristic.
    /// Exact as long as no segment is shorter than the straight line
    /// between its endpoints, which holds for networks loaded from GeoJSON.
    AStar,
}

impl Method {
    pub fn letter(&self) -> char {
        match self {
            Method::Dijkstra => 'D',
            Method::AStar => 'A',
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "dijkstra" => Ok(Method::Dijkstra),
            "a" | "astar" | "a*" => Ok(Method::AStar),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for Method {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Method> for String {
    fn from(m: Method) -> Self {
        m.letter().to_string()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Dijkstra => write!(f, "Dijkstra"),
            Method::AStar => write!(f, "A*"),
        }
    }
}

/// The best route and the best route sharing no segment with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePair {
    pub primary: Option<Route>,
    pub alternative: Option<Route>,
}

/// Shortest route from `start` to `end`.
///
/// `Ok(None)` when `end` cannot be reached; a zero-length route when
/// `start == end`.
pub fn shortest_path(
    graph: &StreetGraph,
    start: NodeId,
    end: NodeId,
    method: Method,
) -> Result<Option<Route>> {
    shortest_path_excluding(graph, start, end, method, &HashSet::new())
}

/// Shortest route that avoids every segment in `excluded`, in both directions.
pub fn shortest_path_excluding(
    graph: &StreetGraph,
    start: NodeId,
    end: NodeId,
    method: Method,
    excluded: &HashSet<SegmentId>,
) -> Result<Option<Route>> {
    ensure_node(graph, start)?;
    ensure_node(graph, end)?;
    Ok(search::search(graph, start, end, method, excluded))
}

/// Shortest route plus an alternative that shares no segment with it.
pub fn shortest_two_paths(
    graph: &StreetGraph,
    start: NodeId,
    end: NodeId,
    method: Method,
) -> Result<RoutePair> {
    let primary = shortest_path(graph, start, end, method)?;

    let alternative = match &primary {
        None => None,
        Some(route) if route.is_empty() => Some(route.clone()),
        Some(route) => {
            let excluded: HashSet<SegmentId> = route.segments().collect();
            shortest_path_excluding(graph, start, end, method, &excluded)?
        }
    };

    tracing::debug!(
        %method,
        %start,
        %end,
        primary = primary.as_ref().map(Route::distance),
        alternative = alternative.as_ref().map(Route::distance),
        "two routes computed"
    );

    Ok(RoutePair { primary, alternative })
}

fn ensure_node(graph: &StreetGraph, id: NodeId) -> Result<()> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(Error::NodeNotFound(id))
    }
}
