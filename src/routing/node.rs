//! Trie node storage.
//!
//! Nodes are held in a flat arena owned by the tree and refer to each other
//! through [`NodeId`] handles. `child` is the next segment, `sibling` the
//! alternative segment at the same depth.

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A single trie node.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    /// Segment text, or the parameter name for a parameter node.
    pub(crate) key: String,
    pub(crate) is_param: bool,
    /// Set only on the terminus of a registered chain.
    pub(crate) value: Option<V>,
    pub(crate) child: Option<NodeId>,
    pub(crate) sibling: Option<NodeId>,
}

/// Split a raw pattern segment into its key and parameter flag.
///
/// A segment wrapped in `{` and `}` is a parameter named by the inner text;
/// anything else is a literal.
pub(crate) fn parse_segment(segment: &str) -> (&str, bool) {
    match segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
    {
        Some(name) => (name, true),
        None => (segment, false),
    }
}

impl<V> Node<V> {
    pub(crate) fn new(key: &str, is_param: bool) -> Self {
        Self {
            key: key.to_string(),
            is_param,
            value: None,
            child: None,
            sibling: None,
        }
    }

    #[cfg(test)]
    fn from_segment(segment: &str) -> Self {
        let (key, is_param) = parse_segment(segment);
        Self::new(key, is_param)
    }

    #[cfg(test)]
    fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    fn is_param(&self) -> bool {
        self.is_param
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    #[cfg(test)]
    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

/// Append-only node arena.
#[derive(Debug, Clone)]
pub(crate) struct Arena<V> {
    nodes: Vec<Node<V>>,
}

impl<V> Arena<V> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn push(&mut self, node: Node<V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<V> std::ops::Index<NodeId> for Arena<V> {
    type Output = Node<V>;

    fn index(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.index()]
    }
}

impl<V> std::ops::IndexMut<NodeId> for Arena<V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.index()]
    }
}
