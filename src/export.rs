//! Route export — serialize computed routes as GeoJSON.
//!
//! Produces a `FeatureCollection` that any map viewer can overlay on the
//! source network. Routes are coloured the way the interactive viewer
//! highlighted them: first red, second blue.
//!
//! Each feature is named after its label, so the export can be loaded back
//! with [`crate::geojson`] as a network of its own.
//!
//! ```text
//! [("C1", &primary), ("C2", &alternative)]
//!   → routes_to_geojson() → FeatureCollection of LineStrings
//!   → write_routes() → pretty JSON on any writer
//! ```

use std::io::Write;

use serde_json::{json, Value};

use crate::model::StreetGraph;
use crate::routing::Route;
use crate::Result;

const STROKES: [&str; 2] = ["red", "blue"];
const FALLBACK_STROKE: &str = "gray";

/// Build a GeoJSON `FeatureCollection` with one `LineString` per route.
///
/// Empty routes have no line to draw and are left out.
pub fn routes_to_geojson(graph: &StreetGraph, routes: &[(&str, &Route)]) -> Value {
    let features: Vec<Value> = routes
        .iter()
        .enumerate()
        .filter(|(_, (_, route))| !route.is_empty())
        .map(|(i, (label, route))| {
            let coordinates: Vec<[f64; 2]> = route
                .nodes()
                .into_iter()
                .filter_map(|id| graph.node(id))
                .map(|n| [n.x, n.y])
                .collect();

            json!({
                "type": "Feature",
                "properties": {
                    "name": label,
                    "label": label,
                    "distance": route.distance(),
                    "streets": route.streets(),
                    "stroke": STROKES.get(i).copied().unwrap_or(FALLBACK_STROKE),
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": coordinates,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Pretty-print the route collection to `writer`.
pub fn write_routes(
    writer: &mut dyn Write,
    graph: &StreetGraph,
    routes: &[(&str, &Route)],
) -> Result<()> {
    let doc = routes_to_geojson(graph, routes);
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

/// One-line console summary: `C1: 12.34, [Rua A, Rua B]`.
pub fn format_summary(label: &str, route: Option<&Route>) -> String {
    match route {
        Some(route) => format!(
            "{label}: {:.2}, [{}]",
            route.distance(),
            route.streets().join(", ")
        ),
        None => format!("{label}: no route"),
    }
}
