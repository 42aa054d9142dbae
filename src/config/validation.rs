//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject an empty delimiter and patterns with no segments
//! - Detect duplicate route names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TrieConfig → Result<(), Vec<ValidationError>>
//! - Overlapping patterns are left to the tree, which owns that rule

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::TrieConfig;
use crate::routing::Delimiter;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route name {name:?} is used more than once")]
    DuplicateName { name: String },

    #[error("route {name:?} pattern {pattern:?} has no segments")]
    EmptyPattern { name: String, pattern: String },
}

/// Check `config` and collect every problem found.
pub fn validate_config(config: &TrieConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let delimiter = Delimiter::new(config.delimiter.as_str());
    if delimiter.is_none() {
        errors.push(ValidationError::EmptyDelimiter);
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: route.name.clone(),
            });
        }

        if let Some(d) = &delimiter {
            if d.split(&route.pattern).len() < 2 {
                errors.push(ValidationError::EmptyPattern {
                    name: route.name.clone(),
                    pattern: route.pattern.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
