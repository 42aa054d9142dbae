//! Captured path parameters.

use serde::Serialize;
use std::ops::Range;

/// A parameter captured during lookup.
///
/// Holds only the parameter name and a byte range into the subject that was
/// matched. The value is recovered with [`Parameter::value`] and is only
/// meaningful for that same subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter<'t> {
    name: &'t str,
    start_index: usize,
    length: usize,
}

impl<'t> Parameter<'t> {
    pub fn new(name: &'t str, start_index: usize, length: usize) -> Self {
        Self {
            name,
            start_index,
            length,
        }
    }

    pub fn name(&self) -> &'t str {
        self.name
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.length
    }

    /// The captured text, or `None` if the range does not fit `subject`.
    pub fn value<'s>(&self, subject: &'s str) -> Option<&'s str> {
        subject.get(self.range())
    }
}
