//! End-to-end tests for street-name resolution.
//!
//! Covers the fixed scenarios of the resolver, resolution through a loaded
//! network, and property tests against a straightforward reference model.

use proptest::prelude::*;
use street_router::{
    resolve_street_name, geojson, Edge, Node, NodeId, SegmentId,
    UNKNOWN_LOCATION, UNKNOWN_STREET,
};

fn node(ruas: &[Option<&str>]) -> Node {
    let mut n = Node::new(NodeId(1), 0.0, 0.0);
    for (i, rua) in ruas.iter().enumerate() {
        let mut edge = Edge::new(SegmentId(i as u64 + 1), NodeId(i as u64 + 2), 1.0);
        edge.rua = rua.map(str::to_owned);
        n.edges.push(edge);
    }
    n
}

// ============================================================================
// 1. Fixed scenarios
// ============================================================================

#[test]
fn test_absent_node() {
    assert_eq!(resolve_street_name::<Node>(None), "Localização desconhecida");
}

#[test]
fn test_empty_edges() {
    assert_eq!(resolve_street_name(Some(&node(&[]))), "Localização desconhecida");
}

#[test]
fn test_unknown_then_named() {
    let n = node(&[Some("Rua desconhecida"), Some("Avenida Brasil")]);
    assert_eq!(resolve_street_name(Some(&n)), "Avenida Brasil");
}

#[test]
fn test_only_unknown() {
    let n = node(&[Some("Rua desconhecida")]);
    assert_eq!(resolve_street_name(Some(&n)), "Rua desconhecida");
}

#[test]
fn test_edge_without_rua() {
    assert_eq!(resolve_street_name(Some(&node(&[None]))), "Rua desconhecida");
}

#[test]
fn test_single_named() {
    let n = node(&[Some("Avenida Paulista")]);
    assert_eq!(resolve_street_name(Some(&n)), "Avenida Paulista");
}

#[test]
fn test_sentinels_match_literals() {
    assert_eq!(UNKNOWN_STREET, "Rua desconhecida");
    assert_eq!(UNKNOWN_LOCATION, "Localização desconhecida");
}

#[test]
fn test_idempotent() {
    let n = node(&[None, Some("Rua Augusta")]);
    let first = resolve_street_name(Some(&n));
    let second = resolve_street_name(Some(&n));
    assert_eq!(first, second);
}

// ============================================================================
// 2. Through a loaded network
// ============================================================================

#[test]
fn test_intersection_label() {
    let graph = geojson::from_str(
        r#"{"type": "FeatureCollection", "features": [
            {"properties": {"name": "Rua desconhecida"},
             "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 0]]}},
            {"properties": {"name": "Avenida Brasil"},
             "geometry": {"type": "LineString", "coordinates": [[1, 0], [2, 0]]}},
            {"properties": {},
             "geometry": {"type": "LineString", "coordinates": [[5, 5], [6, 5]]}}
        ]}"#,
    )
    .unwrap();

    let corner = graph.node_at(1.0, 0.0).unwrap();
    let west_end = graph.node_at(0.0, 0.0).unwrap();
    let nameless = graph.node_at(5.0, 5.0).unwrap();

    assert_eq!(graph.street_name(corner), "Avenida Brasil");
    assert_eq!(graph.street_name(west_end), UNKNOWN_STREET);
    assert_eq!(graph.street_name(nameless), UNKNOWN_STREET);
    assert_eq!(graph.street_name(NodeId(999)), UNKNOWN_LOCATION);
}

// ============================================================================
// 3. Properties
// ============================================================================

/// Reference model written as the plain three-step rule.
fn reference(ruas: &[Option<String>]) -> String {
    if ruas.is_empty() {
        return UNKNOWN_LOCATION.to_string();
    }
    for rua in ruas {
        if let Some(r) = rua {
            if !r.is_empty() && r != UNKNOWN_STREET {
                return r.clone();
            }
        }
    }
    match &ruas[0] {
        Some(r) if !r.is_empty() => r.clone(),
        _ => UNKNOWN_STREET.to_string(),
    }
}

fn rua_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some(UNKNOWN_STREET.to_string())),
        "[A-Za-z ]{1,12}".prop_map(Some),
    ]
}

fn blank_or_unknown() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some(UNKNOWN_STREET.to_string())),
    ]
}

proptest! {
    #[test]
    fn prop_matches_reference(ruas in prop::collection::vec(rua_strategy(), 0..8)) {
        let got = resolve_street_name(Some(&ruas));
        prop_assert_eq!(got, reference(&ruas));
    }

    #[test]
    fn prop_first_known_street_wins(
        prefix in prop::collection::vec(blank_or_unknown(), 0..5),
        name in "[A-Z][a-z]{2,10}",
        suffix in prop::collection::vec(rua_strategy(), 0..5),
    ) {
        let mut ruas = prefix;
        ruas.push(Some(name.clone()));
        ruas.extend(suffix);
        prop_assert_eq!(resolve_street_name(Some(&ruas)), name.as_str());
    }

    #[test]
    fn prop_all_blank_or_unknown(
        ruas in prop::collection::vec(blank_or_unknown(), 1..8),
    ) {
        let expected = match &ruas[0] {
            Some(r) if !r.is_empty() => r.as_str(),
            _ => UNKNOWN_STREET,
        };
        prop_assert_eq!(resolve_street_name(Some(&ruas)), expected);
        prop_assert_eq!(resolve_street_name(Some(&ruas)), UNKNOWN_STREET);
    }
}
