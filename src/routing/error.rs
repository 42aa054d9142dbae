//! Trie error types.

use thiserror::Error;

/// Errors raised while building a prefix tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The delimiter passed at construction was empty.
    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    /// The pattern has no segment after the leading one.
    #[error("pattern {pattern:?} has no segments after the leading delimiter")]
    EmptyPattern { pattern: String },

    /// The pattern duplicates, ends inside, or extends through a registered chain.
    #[error("pattern {pattern:?} overlaps with an existing route")]
    RouteConflict { pattern: String },
}
