//! GeoJSON street-network loader.
//!
//! Reads a `FeatureCollection` whose features are street centre lines:
//!
//! ```text
//! Feature { properties.name = "Rua A", geometry = LineString [p0, p1, p2] }
//!   → nodes p0, p1, p2
//!   → segments p0–p1, p1–p2, each named "Rua A", weight = straight-line length
//! ```
//!
//! Vertices are shared by coordinate, so streets that meet at the same
//! position form an intersection. Non-line geometries are skipped.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::{NodeId, StreetGraph};
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

type Position = Vec<f64>;

/// Parse a GeoJSON document into a new street network.
pub fn from_str(json: &str) -> Result<StreetGraph> {
    let collection: FeatureCollection =
        serde_json::from_str(json).map_err(|e| Error::GeoJson(e.to_string()))?;
    build(collection)
}

/// Parse GeoJSON from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<StreetGraph> {
    let collection: FeatureCollection =
        serde_json::from_reader(reader).map_err(|e| Error::GeoJson(e.to_string()))?;
    build(collection)
}

/// Read and parse a GeoJSON file, logging how long it took.
pub fn load_path(path: impl AsRef<Path>) -> Result<StreetGraph> {
    let path = path.as_ref();
    let started = Instant::now();
    let json = std::fs::read_to_string(path)?;
    let graph = from_str(&json)?;

    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        segments = graph.segment_count(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "street network loaded"
    );
    Ok(graph)
}

fn build(collection: FeatureCollection) -> Result<StreetGraph> {
    let mut graph = StreetGraph::new();

    for (index, feature) in collection.features.into_iter().enumerate() {
        let name = feature
            .properties
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        let Some(geometry) = feature.geometry else {
            tracing::warn!(feature = index, "feature without geometry skipped");
            continue;
        };

        match geometry.kind.as_str() {
            "LineString" => {
                let line: Vec<Position> = coordinates(index, geometry.coordinates)?;
                add_line(&mut graph, index, &line, &name)?;
            }
            "MultiLineString" => {
                let lines: Vec<Vec<Position>> = coordinates(index, geometry.coordinates)?;
                for line in &lines {
                    add_line(&mut graph, index, line, &name)?;
                }
            }
            other => {
                tracing::warn!(feature = index, geometry = other, "non-line geometry skipped");
            }
        }
    }

    Ok(graph)
}

fn coordinates<T: serde::de::DeserializeOwned>(index: usize, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::GeoJson(format!("feature {index}: invalid coordinates: {e}")))
}

fn add_line(
    graph: &mut StreetGraph,
    index: usize,
    line: &[Position],
    name: &Option<String>,
) -> Result<()> {
    let points = line
        .iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] => Ok((*x, *y)),
            _ => Err(Error::GeoJson(format!(
                "feature {index}: position needs at least two numbers, got {}",
                p.len()
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    let ids: Vec<NodeId> = points.iter().map(|&(x, y)| graph.add_node(x, y)).collect();

    for (pair, ids) in points.windows(2).zip(ids.windows(2)) {
        let [(x1, y1), (x2, y2)] = [pair[0], pair[1]];
        let (u, v) = (ids[0], ids[1]);
        if u == v {
            continue;
        }
        let weight = (x2 - x1).hypot(y2 - y1);
        if !weight.is_finite() {
            return Err(Error::GeoJson(format!(
                "feature {index}: segment length overflows between ({x1}, {y1}) and ({x2}, {y2})"
            )));
        }
        graph.add_edge(u, v, weight, name.clone())?;
    }
    Ok(())
}
