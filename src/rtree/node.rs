//! R-tree node representation.
//!
//! Nodes live in the tree's arena and reference each other by [`NodeId`].
//! A leaf owns its items; an internal node holds child ids in a small
//! inline vector (fanouts are small, so children rarely spill to the heap).
//! Every node caches `bounds`, the MBR of its entries, which queries use
//! for pruning.

use smallvec::SmallVec;

use super::geometry::Rect;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A stored rectangle with its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    pub bounds: Rect,
    pub data: T,
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) parent: Option<NodeId>,
    /// MBR of the entries below; stale only while an update is in flight.
    pub(crate) bounds: Rect,
    pub(crate) kind: NodeKind<T>,
}

#[derive(Debug)]
pub(crate) enum NodeKind<T> {
    Leaf(Vec<Item<T>>),
    Internal(SmallVec<[NodeId; 8]>),
}

impl<T> Node<T> {
    pub(crate) fn new_leaf(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            bounds: Rect::default(),
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Number of entries: items for a leaf, children for an internal node.
    pub(crate) fn entry_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(items) => items.len(),
            NodeKind::Internal(children) => children.len(),
        }
    }
}
