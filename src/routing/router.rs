//! Route lookup.
//!
//! # Responsibilities
//! - Compile configured routes into a prefix tree
//! - Look up the route matching a subject
//! - Return the matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shareable via Arc without locks)
//! - Routes are inserted in file order; the first conflicting one aborts the build
//! - Explicit NoMatch rather than silent default

use serde::Serialize;
use thiserror::Error;

use crate::config::schema::{RouteConfig, TrieConfig};
use crate::routing::error::TrieError;
use crate::routing::param::Parameter;
use crate::routing::tree::PrefixTree;

/// Error raised when compiling a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Trie(#[from] TrieError),

    #[error("route {name:?} rejected: {source}")]
    Route {
        name: String,
        #[source]
        source: TrieError,
    },
}

/// A compiled, read-only route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    tree: PrefixTree<String>,
    routes: Vec<RouteConfig>,
}

/// A matched route with its captured parameters.
#[derive(Debug, Clone, Serialize)]
pub struct RouteMatch<'t, 's> {
    /// Value registered for the matched pattern.
    pub value: &'t str,
    /// Parameters in anchor order.
    pub params: Vec<Parameter<'t>>,
    #[serde(skip)]
    subject: &'s str,
}

impl<'t, 's> RouteMatch<'t, 's> {
    /// Get a parameter value by name.
    pub fn get_param(&self, name: &str) -> Option<&'s str> {
        self.params
            .iter()
            .find(|p| p.name() == name)
            .and_then(|p| p.value(self.subject))
    }

    /// All parameters as `(name, value)` pairs.
    pub fn param_values(&self) -> Vec<(&'t str, &'s str)> {
        self.params
            .iter()
            .filter_map(|p| p.value(self.subject).map(|v| (p.name(), v)))
            .collect()
    }
}

impl RouteTable {
    /// Compile the routes of `config`.
    pub fn from_config(config: &TrieConfig) -> Result<Self, BuildError> {
        let mut tree = PrefixTree::new(config.delimiter.as_str())?;

        for route in &config.routes {
            tree.insert(&route.pattern, route.value.clone())
                .map_err(|source| BuildError::Route {
                    name: route.name.clone(),
                    source,
                })?;
        }

        tracing::info!(
            delimiter = %tree.delimiter(),
            routes = tree.len(),
            nodes = tree.node_count(),
            "Route table compiled"
        );

        Ok(Self {
            tree,
            routes: config.routes.clone(),
        })
    }

    /// Look up the route matching `subject`.
    pub fn lookup<'t, 's>(&'t self, subject: &'s str) -> Option<RouteMatch<'t, 's>> {
        let mut params = Vec::new();
        match self.tree.find(subject, &mut params) {
            Some(value) => Some(RouteMatch {
                value: value.as_str(),
                params,
                subject,
            }),
            None => {
                tracing::debug!(subject, "No route matched");
                None
            }
        }
    }

    /// Routes in registration order.
    pub fn routes(&self) -> &[RouteConfig] {
        &self.routes
    }

    pub fn tree(&self) -> &PrefixTree<String> {
        &self.tree
    }
}
