//! Parametrized prefix tree.
//!
//! # Responsibilities
//! - Grow the trie one pattern at a time, rejecting overlapping chains
//! - Match a subject against the trie, capturing parameters by offset
//!
//! # Design Decisions
//! - Parameter segments use an anchor/value protocol: a `{name}` segment
//!   requires the literal `name` in the subject and captures the token that
//!   follows it. `/sum/{a}` matches `/sum/a/42` with `a = "42"`.
//! - Keys compare by text only; `{id}` and `id` share a node
//! - A node is either a branch point or a terminus, never both
//! - The first segment (before the first delimiter) is skipped on both
//!   insertion and lookup
//! - Lookup never re-ascends: once a node matches, only its subtree is tried

use crate::routing::delimiter::Delimiter;
use crate::routing::error::TrieError;
use crate::routing::node::{parse_segment, Arena, Node, NodeId};
use crate::routing::param::Parameter;

/// Where the next node hangs off the trie.
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Child(NodeId),
    Sibling(NodeId),
}

/// A prefix tree over delimiter-segmented keys.
///
/// Built by sequential [`insert`](Self::insert) calls, then queried with
/// [`find`](Self::find). Lookups take `&self` and may run concurrently once
/// insertion is finished.
#[derive(Debug, Clone)]
pub struct PrefixTree<V> {
    nodes: Arena<V>,
    root: Option<NodeId>,
    delimiter: Delimiter,
    routes: usize,
}

impl<V> PrefixTree<V> {
    /// Create an empty tree splitting on `delimiter`.
    pub fn new(delimiter: impl Into<String>) -> Result<Self, TrieError> {
        let delimiter = Delimiter::new(delimiter).ok_or(TrieError::EmptyDelimiter)?;
        Ok(Self {
            nodes: Arena::new(),
            root: None,
            delimiter,
            routes: 0,
        })
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes == 0
    }

    /// Number of nodes allocated so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Register `pattern` with `value`.
    ///
    /// Fails with [`TrieError::RouteConflict`] if the pattern duplicates a
    /// registered one, ends where another pattern continues, or continues
    /// past another pattern's end.
    pub fn insert(&mut self, pattern: &str, value: V) -> Result<(), TrieError> {
        let segments = self.delimiter.split(pattern);
        let segments = segments.get(1..).unwrap_or_default();
        if segments.is_empty() {
            return Err(TrieError::EmptyPattern {
                pattern: pattern.to_string(),
            });
        }

        let mut link = Link::Root;
        let mut terminal = None;

        for (depth, segment) in segments.iter().enumerate() {
            let is_last = depth + 1 == segments.len();
            let (key, is_param) = parse_segment(segment);

            let mut cursor = self.follow(link);
            let existing = loop {
                match cursor {
                    None => break None,
                    Some(id) if self.nodes[id].key == key => break Some(id),
                    Some(id) => {
                        link = Link::Sibling(id);
                        cursor = self.nodes[id].sibling;
                    }
                }
            };

            let id = match existing {
                Some(id) => {
                    if is_last || self.nodes[id].is_leaf() {
                        tracing::debug!(
                            pattern,
                            segment = %segment,
                            depth,
                            "route overlaps with an existing one"
                        );
                        return Err(TrieError::RouteConflict {
                            pattern: pattern.to_string(),
                        });
                    }
                    id
                }
                None => {
                    let id = self.nodes.push(Node::new(key, is_param));
                    self.attach(link, id);
                    id
                }
            };

            link = Link::Child(id);
            terminal = Some(id);
        }

        // Reaching here means the last segment created a fresh, childless node.
        if let Some(id) = terminal {
            self.nodes[id].value = Some(value);
        }
        self.routes += 1;

        tracing::debug!(pattern, nodes = self.nodes.len(), "route inserted");
        Ok(())
    }

    /// Match `subject` and return the value of the registered pattern.
    ///
    /// Captured parameters are appended to `params` in the order their
    /// anchors appear. Entries already in `params` are left untouched; on a
    /// miss, parameters captured along the abandoned path may remain.
    pub fn find<'t>(&'t self, subject: &str, params: &mut Vec<Parameter<'t>>) -> Option<&'t V> {
        let step = self.delimiter.len();
        let mut offset = step;
        let mut cursor = self.root;

        while let Some(id) = cursor {
            if offset >= subject.len() {
                return None;
            }

            let node = &self.nodes[id];
            if !self.delimiter.bounds(&node.key, subject, offset) {
                cursor = node.sibling;
                continue;
            }

            let mut next = offset + node.key.len() + step;
            if node.is_param {
                if next >= subject.len() {
                    return None;
                }
                let end = self.delimiter.scan_to_next(subject, next);
                params.push(Parameter::new(&node.key, next, end - next));
                next = end + step;
            }

            if node.is_leaf() && next >= subject.len() {
                return node.value.as_ref();
            }

            offset = next;
            cursor = node.child;
        }

        None
    }

    fn follow(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Root => self.root,
            Link::Child(id) => self.nodes[id].child,
            Link::Sibling(id) => self.nodes[id].sibling,
        }
    }

    fn attach(&mut self, link: Link, id: NodeId) {
        match link {
            Link::Root => self.root = Some(id),
            Link::Child(parent) => self.nodes[parent].child = Some(id),
            Link::Sibling(prev) => self.nodes[prev].sibling = Some(id),
        }
    }
}
