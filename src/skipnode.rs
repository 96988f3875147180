use std::fmt;

// ////////////////////////////////////////////////////////////////////////////
// NodeId
// ////////////////////////////////////////////////////////////////////////////

/// A handle to a node stored in the list's arena.
///
/// Nodes are compared by handle and never by value, so duplicated values
/// remain distinguishable when links are fixed up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    /// The handle reserved for the head node.
    pub(crate) const HEAD: NodeId = NodeId(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// SkipNodes make up the SkipList. The SkipList owns the head-node (which has
/// no value) and, through its arena, every other node.
///
/// A node of height `n` participates in levels `0..n` and so has `n` forward
/// links; `links[i]` is the next node at level `i`, or `None` at the tail of
/// that level.
#[derive(Debug)]
pub(crate) struct SkipNode<V> {
    // value should never be None, with the sole exception being the head node.
    pub(crate) value: Option<V>,
    // Links to the next node at the respective level. The length of this
    // vector is the height of the node and never changes.
    pub(crate) links: Vec<Option<NodeId>>,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<V> SkipNode<V> {
    /// Create a new head node.
    pub(crate) fn head(total_levels: usize) -> Self {
        SkipNode {
            value: None,
            links: vec![None; total_levels],
        }
    }

    /// Create a new SkipNode with the given value, unlinked at every level.
    pub(crate) fn new(value: V, height: usize) -> Self {
        debug_assert!(height >= 1, "a node occupies at least level 0");
        SkipNode {
            value: Some(value),
            links: vec![None; height],
        }
    }

    /// Consumes the node returning the value it contains.
    pub(crate) fn into_inner(self) -> Option<V> {
        self.value
    }

    /// Returns `true` is the node is a head-node.
    pub(crate) fn is_head(&self) -> bool {
        self.value.is_none()
    }

    /// The number of levels the node occupies.
    pub(crate) fn height(&self) -> usize {
        self.links.len()
    }

    /// The next node at `level`, if the node reaches that high and is not the
    /// last one at that level.
    pub(crate) fn next_at(&self, level: usize) -> Option<NodeId> {
        self.links.get(level).copied().flatten()
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<V> fmt::Display for SkipNode<V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref v) = self.value {
            write!(f, "{v}")
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn head_has_every_level() {
        let head = SkipNode::<u8>::head(4);
        assert!(head.is_head());
        assert_eq!(head.height(), 4);
        assert_eq!(head.to_string(), "");
        for level in 0..4 {
            assert_eq!(head.next_at(level), None);
        }
    }

    #[test]
    fn node_links_start_empty() {
        let mut node = SkipNode::new("gibbon", 2);
        assert!(!node.is_head());
        assert_eq!(node.height(), 2);
        assert_eq!(node.to_string(), "gibbon");

        node.links[1] = Some(NodeId(7));
        assert_eq!(node.next_at(0), None);
        assert_eq!(node.next_at(1), Some(NodeId(7)));
        // Above the node's own tower.
        assert_eq!(node.next_at(2), None);
        assert_eq!(node.into_inner(), Some("gibbon"));
    }

    #[test]
    fn ids_are_zero_padded() {
        assert_eq!(NodeId::HEAD.to_string(), "0000");
        assert_eq!(NodeId(42).to_string(), "0042");
    }
}
