//! Configuration schema definitions.
//!
//! This module defines the route file structure. All types derive Serde
//! traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration for a route table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Segment delimiter (e.g., "/").
    pub delimiter: String,

    /// Route definitions, inserted in file order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            routes: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

fn default_delimiter() -> String {
    "/".to_string()
}

/// A single pattern and the value it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging and error reports.
    pub name: String,

    /// Pattern such as "/sum/{a}/{b}".
    pub pattern: String,

    /// Value returned when the pattern matches.
    pub value: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "param_trie=info".to_string(),
        }
    }
}
