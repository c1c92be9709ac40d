//! Street-name resolution for a network vertex.
//!
//! A vertex has no name of its own; it is labelled by the streets that meet
//! there. [`resolve_street_name`] picks the first incident edge that carries a
//! known street name and degrades to fixed placeholder strings otherwise.
//!
//! The resolver works over any node-like value through [`StreetEdges`] and
//! [`StreetLabel`], so callers with their own graph types can use it too.

use super::{Edge, Node};

/// Placeholder for an edge whose street is unknown.
pub const UNKNOWN_STREET: &str = "Rua desconhecida";

/// Placeholder for a vertex that has no incident edges at all.
pub const UNKNOWN_LOCATION: &str = "Localização desconhecida";

/// Something that may carry a street name.
pub trait StreetLabel {
    fn rua(&self) -> Option<&str>;
}

/// A node-like value exposing its incident edges in order.
pub trait StreetEdges {
    type Edge: StreetLabel;

    fn street_edges(&self) -> &[Self::Edge];
}

impl StreetLabel for Edge {
    fn rua(&self) -> Option<&str> {
        self.rua.as_deref()
    }
}

impl StreetLabel for Option<String> {
    fn rua(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl StreetLabel for Option<&str> {
    fn rua(&self) -> Option<&str> {
        *self
    }
}

impl StreetEdges for Node {
    type Edge = Edge;

    fn street_edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl<E: StreetLabel> StreetEdges for [E] {
    type Edge = E;

    fn street_edges(&self) -> &[E] {
        self
    }
}

impl<E: StreetLabel> StreetEdges for Vec<E> {
    type Edge = E;

    fn street_edges(&self) -> &[E] {
        self
    }
}

/// A street name counts only when it exists and is non-empty.
///
/// Absent and empty are the same "blank" case. Whitespace is not trimmed.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

/// Resolve the display street name of a vertex.
///
/// - no node, or a node without edges: [`UNKNOWN_LOCATION`];
/// - otherwise the first edge (in order) whose name is present and is not
///   [`UNKNOWN_STREET`];
/// - failing that, the first edge's name if present, else [`UNKNOWN_STREET`].
///
/// Total and side-effect free.
pub fn resolve_street_name<'a, N>(node: Option<&'a N>) -> &'a str
where
    N: StreetEdges + ?Sized,
{
    let Some(edges) = node.map(N::street_edges) else {
        return UNKNOWN_LOCATION;
    };
    let Some(first) = edges.first() else {
        return UNKNOWN_LOCATION;
    };

    edges
        .iter()
        .filter_map(StreetLabel::rua)
        .find(|rua| is_present(Some(*rua)) && *rua != UNKNOWN_STREET)
        .or_else(|| first.rua().filter(|rua| is_present(Some(*rua))))
        .unwrap_or(UNKNOWN_STREET)
}
