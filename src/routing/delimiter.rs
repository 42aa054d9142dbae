//! Delimiter scanning.
//!
//! # Responsibilities
//! - Split patterns into segments at insertion time
//! - Find the end of a parameter value during lookup
//! - Check that a span is bounded by a delimiter or the end of the subject
//!
//! # Design Decisions
//! - Operates on bytes; a complete delimiter match always starts on a char boundary
//! - `scan_to_next` is a single-counter scan with no fallback. A broken partial
//!   match is not re-examined, so self-overlapping delimiters (e.g. `"aab"`
//!   against `"aaab"`) can be missed. Lookups rely on this exact behavior.

use std::fmt;

/// A non-empty delimiter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter(String);

impl Delimiter {
    /// Create a delimiter. Returns `None` for an empty string.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Delimiter length in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Split a pattern into segments.
    ///
    /// Trailing empty segments are dropped, so `"/a/b/"` yields `["", "a", "b"]`.
    pub fn split<'p>(&self, pattern: &'p str) -> Vec<&'p str> {
        let mut segments: Vec<&str> = pattern.split(self.as_str()).collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        segments
    }

    /// Offset of the next delimiter at or after `from`, or `subject.len()` if none.
    pub fn scan_to_next(&self, subject: &str, from: usize) -> usize {
        let needle = self.0.as_bytes();
        let mut matched = 0;

        for (i, &byte) in subject.as_bytes().iter().enumerate().skip(from) {
            if byte != needle[matched] {
                matched = 0;
                continue;
            }
            matched += 1;
            if matched == needle.len() {
                return i + 1 - needle.len();
            }
        }

        subject.len()
    }

    /// True when `subject` holds `segment` at `offset`, followed by the
    /// delimiter or by the end of the subject.
    pub fn bounds(&self, segment: &str, subject: &str, offset: usize) -> bool {
        let Some(rest) = subject.as_bytes().get(offset..) else {
            return false;
        };
        let Some(after) = rest.strip_prefix(segment.as_bytes()) else {
            return false;
        };
        after.is_empty() || after.starts_with(self.0.as_bytes())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
