use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use street_router::{export, geojson, routing, Method, NodeId, RouterConfig, StreetGraph};

#[derive(Parser, Debug)]
#[command(name = "street-router")]
#[command(about = "Shortest and alternative routes over a GeoJSON street network")]
struct Args {
    /// JSON configuration file (method, log_filter)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route and an alternative between two points
    Route {
        /// GeoJSON FeatureCollection of street centre lines
        network: PathBuf,

        /// Origin as X,Y (longitude,latitude); snapped to the nearest vertex
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: (f64, f64),

        /// Destination as X,Y; snapped to the nearest vertex
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: (f64, f64),

        /// D for Dijkstra, A for A*
        #[arg(short, long)]
        method: Option<Method>,

        /// Write both routes as a GeoJSON FeatureCollection
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the street name of the vertex nearest to a point
    Street {
        network: PathBuf,

        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        at: (f64, f64),
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RouterConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Route { network, from, to, method, output } => {
            let method = method.unwrap_or(config.method);
            run_route(&network, from, to, method, output.as_deref())
        }
        Command::Street { network, at } => {
            let graph = load(&network)?;
            let id = snap(&graph, at)?;
            println!("{}", graph.street_name(id));
            Ok(())
        }
    }
}

fn run_route(
    network: &Path,
    from: (f64, f64),
    to: (f64, f64),
    method: Method,
    output: Option<&Path>,
) -> Result<()> {
    let graph = load(network)?;
    let start = snap(&graph, from)?;
    let end = snap(&graph, to)?;

    println!("Start: {start} ({})", graph.street_name(start));
    println!("End: {end} ({})", graph.street_name(end));

    let pair = routing::shortest_two_paths(&graph, start, end, method)
        .with_context(|| format!("Routing from {start} to {end} failed"))?;

    println!("{}", export::format_summary("C1", pair.primary.as_ref()));
    println!("{}", export::format_summary("C2", pair.alternative.as_ref()));

    if let Some(path) = output {
        let labelled = [("C1", &pair.primary), ("C2", &pair.alternative)];
        let routes: Vec<(&str, &routing::Route)> = labelled
            .into_iter()
            .filter_map(|(label, route)| route.as_ref().map(|r| (label, r)))
            .collect();

        let file = File::create(path)
            .with_context(|| format!("Cannot create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        export::write_routes(&mut writer, &graph, &routes)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), routes = routes.len(), "routes written");
    }

    Ok(())
}

fn load(network: &Path) -> Result<StreetGraph> {
    geojson::load_path(network)
        .with_context(|| format!("Failed to load street network {}", network.display()))
}

fn snap(graph: &StreetGraph, (x, y): (f64, f64)) -> Result<NodeId> {
    graph
        .nearest_node(x, y)
        .with_context(|| format!("Street network is empty; cannot snap ({x}, {y})"))
}

fn parse_point(s: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{v}': {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NETWORK: &str = r#"{"features": [
        {"properties": {"name": "Avenida Paulista"},
         "geometry": {"type": "LineString", "coordinates": [[-46.66, -23.56], [-46.65, -23.56]]}},
        {"properties": {"name": "Rua Augusta"},
         "geometry": {"type": "LineString",
                      "coordinates": [[-46.66, -23.56], [-46.66, -23.55], [-46.65, -23.55], [-46.65, -23.56]]}}
    ]}"#;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1.5,2"), Ok((1.5, 2.0)));
        assert_eq!(parse_point("-46.6, -23.5"), Ok((-46.6, -23.5)));
    }

    #[test]
    fn test_parse_point_rejects_bad_input() {
        assert!(parse_point("1").unwrap_err().contains("expected X,Y"));
        assert!(parse_point("a,b").unwrap_err().contains("invalid coordinate 'a'"));
        assert!(parse_point("1,").is_err());
    }

    #[test]
    fn test_negative_coordinates_parse_as_values() {
        let args = Args::try_parse_from([
            "street-router", "route", "net.geojson",
            "--from", "-46.6,-23.5",
            "--to", "-46.0,-23.0",
            "-m", "a",
        ])
        .unwrap();

        match args.command {
            Command::Route { network, from, to, method, output } => {
                assert_eq!(network, PathBuf::from("net.geojson"));
                assert_eq!(from, (-46.6, -23.5));
                assert_eq!(to, (-46.0, -23.0));
                assert_eq!(method, Some(Method::AStar));
                assert_eq!(output, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let args = Args::try_parse_from(["street-router", "street", "net.geojson", "--at", "-1,-2"])
            .unwrap();
        match args.command {
            Command::Street { at, .. } => assert_eq!(at, (-1.0, -2.0)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let bad_point = ["street-router", "street", "n.geojson", "--at", "x,1"];
        assert!(Args::try_parse_from(bad_point).is_err());

        let bad_method = [
            "street-router", "route", "n.geojson", "--from", "0,0", "--to", "1,1", "-m", "q",
        ];
        assert!(Args::try_parse_from(bad_method).is_err());

        let missing_to = ["street-router", "route", "n.geojson", "--from", "0,0"];
        assert!(Args::try_parse_from(missing_to).is_err());
    }

    #[test]
    fn test_run_route_writes_export() {
        let dir = TempDir::new().unwrap();
        let network = dir.path().join("net.geojson");
        let output = dir.path().join("routes.geojson");
        std::fs::write(&network, NETWORK).unwrap();

        run_route(&network, (-46.661, -23.56), (-46.649, -23.56), Method::Dijkstra, Some(&output))
            .unwrap();

        let reloaded = geojson::load_path(&output).unwrap();
        assert_eq!(reloaded.node_count(), 4);
        assert_eq!(reloaded.segment_count(), 4);
    }

    #[test]
    fn test_run_route_missing_network() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.geojson");
        let err = run_route(&missing, (0.0, 0.0), (1.0, 1.0), Method::AStar, None).unwrap_err();
        assert!(err.to_string().contains("Failed to load street network"));
    }
}
