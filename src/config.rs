//! Router configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! is a valid configuration. Command-line flags override file values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::routing::Method;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Search algorithm used when none is given on the command line.
    pub method: Method,
    /// `tracing-subscriber` filter directive, e.g. `"info"` or `"street_router=debug"`.
    pub log_filter: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            method: Method::Dijkstra,
            log_filter: "info".to_string(),
        }
    }
}

impl RouterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(RouterConfig::from_json("{}").unwrap(), RouterConfig::default());
        assert_eq!(RouterConfig::load(None).unwrap(), RouterConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let cfg = RouterConfig::from_json(r#"{"method": "A"}"#).unwrap();
        assert_eq!(cfg.method, Method::AStar);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(RouterConfig::from_json(r#"{"method": "Z"}"#), Err(Error::Config(_))));
        assert!(matches!(RouterConfig::from_json(r#"{"threads": 4}"#), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("street-router.json");
        assert!(matches!(RouterConfig::load(Some(missing.as_path())), Err(Error::Io(_))));
    }
}
