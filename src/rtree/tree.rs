//! R-tree public operations.
//!
//! ## Insert Algorithm
//!
//! ```text
//! 1. Descend: at each internal node take the child whose bounds need the
//!    least enlargement to cover the new rectangle (ties: smaller area,
//!    then first encountered).
//! 2. Append the item to the leaf and recompute bounds up the parent chain.
//! 3. An overflowing node splits by the R*-style plan; the new sibling
//!    joins the parent, which may overflow and split in turn. A splitting
//!    root gains a fresh root above it and the tree grows by one level.
//! ```
//!
//! ## Queries
//!
//! Window and point searches are depth-first, skipping any subtree whose
//! bounds cannot intersect the window (or contain the point), then
//! filtering items at the leaves by the exact predicate. k-NN is best-first
//! over a distance-keyed heap; see the `search` module.

use std::collections::BinaryHeap;

use eyre::{ensure, Result};
use smallvec::smallvec;

use super::geometry::{Point, Rect};
use super::node::{Item, Node, NodeId, NodeKind};
use super::search::{Candidate, Target};
use super::split;

/// Spatial index over axis-aligned 2D rectangles.
///
/// Every node holds at most `max_entries` entries and every non-root node
/// at least `min_entries`. A `min_entries` below 1 or above
/// `max_entries / 2` is silently replaced by `max_entries / 2`.
#[derive(Debug)]
pub struct RTree<T> {
    arena: Vec<Node<T>>,
    root: NodeId,
    min_entries: usize,
    max_entries: usize,
    size: usize,
}

impl<T> RTree<T> {
    pub fn new(min_entries: usize, max_entries: usize) -> Self {
        let min_entries = if min_entries < 1 || min_entries > max_entries / 2 {
            max_entries / 2
        } else {
            min_entries
        };
        Self {
            arena: vec![Node::new_leaf(None)],
            root: NodeId(0),
            min_entries,
            max_entries,
            size: 0,
        }
    }

    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Number of items stored.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Nodes on the path from the root to a leaf; a single-leaf tree has
    /// height 1.
    pub fn height(&self) -> usize {
        let mut id = self.root;
        let mut height = 1;
        loop {
            match &self.node(id).kind {
                NodeKind::Leaf(_) => return height,
                NodeKind::Internal(children) => {
                    id = children[0];
                    height += 1;
                }
            }
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        &self.arena[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.arena[id.index()]
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId(self.arena.len() as u32);
        self.arena.push(node);
        id
    }

    /// Adds an item. Duplicates are permitted; nothing is replaced.
    pub fn insert(&mut self, bounds: Rect, data: T) {
        self.size += 1;
        let leaf_id = self.choose_leaf(bounds);
        match &mut self.node_mut(leaf_id).kind {
            NodeKind::Leaf(items) => items.push(Item { bounds, data }),
            NodeKind::Internal(_) => unreachable!("choose_leaf returned an internal node"),
        }
        self.update_bounds(leaf_id);

        if self.node(leaf_id).entry_count() > self.max_entries {
            self.split_node(leaf_id);
        }
    }

    /// Descends to the leaf whose bounds need the least enlargement to
    /// cover `bounds`, breaking ties by smaller area, then encounter order.
    fn choose_leaf(&self, bounds: Rect) -> NodeId {
        let mut id = self.root;
        loop {
            match &self.node(id).kind {
                NodeKind::Leaf(_) => return id,
                NodeKind::Internal(children) => {
                    let mut best = children[0];
                    let mut best_enlargement = f64::INFINITY;
                    let mut best_area = f64::INFINITY;
                    for &child in children {
                        let child_bounds = self.node(child).bounds;
                        let enlargement = child_bounds.enlargement(&bounds);
                        let area = child_bounds.area();
                        if enlargement < best_enlargement
                            || (enlargement == best_enlargement && area < best_area)
                        {
                            best_enlargement = enlargement;
                            best_area = area;
                            best = child;
                        }
                    }
                    id = best;
                }
            }
        }
    }

    /// Recomputes the MBR of `id` and of every ancestor up to the root.
    /// Empty nodes keep their previous bounds.
    fn update_bounds(&mut self, id: NodeId) {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if let Some(bounds) = self.compute_bounds(current) {
                self.node_mut(current).bounds = bounds;
            }
            cursor = self.node(current).parent;
        }
    }

    fn compute_bounds(&self, id: NodeId) -> Option<Rect> {
        match &self.node(id).kind {
            NodeKind::Leaf(items) => items.iter().map(|item| item.bounds).reduce(|a, b| a.union(&b)),
            NodeKind::Internal(children) => children
                .iter()
                .map(|&child| self.node(child).bounds)
                .reduce(|a, b| a.union(&b)),
        }
    }

    /// Splits an overflowing node along the R*-style plan and hands the new
    /// sibling to the parent, splitting upward as needed.
    fn split_node(&mut self, id: NodeId) {
        let parent = self.node(id).parent;
        let min = self.min_entries;

        let new_id = if self.node(id).is_leaf() {
            let mut items = match &mut self.node_mut(id).kind {
                NodeKind::Leaf(items) => std::mem::take(items),
                NodeKind::Internal(_) => unreachable!(),
            };
            let at = split::plan_split(&mut items, |item| item.bounds, min);
            let right_items = items.split_off(at);
            match &mut self.node_mut(id).kind {
                NodeKind::Leaf(slot) => *slot = items,
                NodeKind::Internal(_) => unreachable!(),
            }
            self.alloc(Node {
                parent,
                bounds: Rect::default(),
                kind: NodeKind::Leaf(right_items),
            })
        } else {
            let mut children: Vec<NodeId> = match &mut self.node_mut(id).kind {
                NodeKind::Internal(children) => children.drain(..).collect(),
                NodeKind::Leaf(_) => unreachable!(),
            };
            let at = split::plan_split(&mut children, |&child| self.node(child).bounds, min);
            let right_children: Vec<NodeId> = children.split_off(at);
            match &mut self.node_mut(id).kind {
                NodeKind::Internal(slot) => slot.extend(children),
                NodeKind::Leaf(_) => unreachable!(),
            }
            let new_id = self.alloc(Node {
                parent,
                bounds: Rect::default(),
                kind: NodeKind::Internal(right_children.iter().copied().collect()),
            });
            for child in right_children {
                self.node_mut(child).parent = Some(new_id);
            }
            new_id
        };

        self.update_bounds(id);
        self.update_bounds(new_id);

        match parent {
            None => {
                let new_root = self.alloc(Node {
                    parent: None,
                    bounds: Rect::default(),
                    kind: NodeKind::Internal(smallvec![id, new_id]),
                });
                self.node_mut(id).parent = Some(new_root);
                self.node_mut(new_id).parent = Some(new_root);
                self.root = new_root;
                self.update_bounds(new_root);
            }
            Some(parent_id) => {
                match &mut self.node_mut(parent_id).kind {
                    NodeKind::Internal(children) => children.push(new_id),
                    NodeKind::Leaf(_) => unreachable!("leaf listed as a parent"),
                }
                if self.node(parent_id).entry_count() > self.max_entries {
                    self.split_node(parent_id);
                } else {
                    self.update_bounds(parent_id);
                }
            }
        }
    }

    /// Every item whose rectangle intersects `window` (closed bounds, so
    /// touching counts). Deterministic order, not sorted.
    pub fn search(&self, window: Rect) -> Vec<&Item<T>> {
        let mut out = Vec::new();
        self.search_node(self.root, &window, &mut out);
        out
    }

    fn search_node<'a>(&'a self, id: NodeId, window: &Rect, out: &mut Vec<&'a Item<T>>) {
        let node = self.node(id);
        if !node.bounds.intersects(window) {
            return;
        }
        match &node.kind {
            NodeKind::Leaf(items) => {
                for item in items {
                    if item.bounds.intersects(window) {
                        out.push(item);
                    }
                }
            }
            NodeKind::Internal(children) => {
                for &child in children {
                    self.search_node(child, window, out);
                }
            }
        }
    }

    /// Every item whose rectangle contains `point` (inclusive bounds).
    pub fn search_point(&self, point: Point) -> Vec<&Item<T>> {
        let mut out = Vec::new();
        self.search_point_node(self.root, point, &mut out);
        out
    }

    fn search_point_node<'a>(&'a self, id: NodeId, point: Point, out: &mut Vec<&'a Item<T>>) {
        let node = self.node(id);
        if !node.bounds.contains_point(point) {
            return;
        }
        match &node.kind {
            NodeKind::Leaf(items) => {
                for item in items {
                    if item.bounds.contains_point(point) {
                        out.push(item);
                    }
                }
            }
            NodeKind::Internal(children) => {
                for &child in children {
                    self.search_point_node(child, point, out);
                }
            }
        }
    }

    /// Up to `k` items in nondecreasing distance from `point`. Returns
    /// fewer when the tree holds fewer than `k` items.
    pub fn nearest_neighbor(&self, point: Point, k: usize) -> Vec<&Item<T>> {
        let mut heap: BinaryHeap<Candidate<'_, T>> = BinaryHeap::new();
        let mut seq = 0u64;
        heap.push(Candidate {
            distance: self.node(self.root).bounds.distance(point),
            seq,
            target: Target::Node(self.root),
        });

        let mut out = Vec::new();
        while out.len() < k {
            let Some(candidate) = heap.pop() else {
                break;
            };
            match candidate.target {
                Target::Item(item) => out.push(item),
                Target::Node(id) => match &self.node(id).kind {
                    NodeKind::Leaf(items) => {
                        for item in items {
                            seq += 1;
                            heap.push(Candidate {
                                distance: item.bounds.distance(point),
                                seq,
                                target: Target::Item(item),
                            });
                        }
                    }
                    NodeKind::Internal(children) => {
                        for &child in children {
                            seq += 1;
                            heap.push(Candidate {
                                distance: self.node(child).bounds.distance(point),
                                seq,
                                target: Target::Node(child),
                            });
                        }
                    }
                },
            }
        }
        out
    }

    /// Walks the whole structure and reports the first violated rule:
    /// occupancy bounds, a bounds rectangle that is not the exact MBR of
    /// its entries, a stale parent link, unequal leaf depth, or an item
    /// count that disagrees with `size()`.
    pub fn verify(&self) -> Result<()> {
        ensure!(
            self.node(self.root).parent.is_none(),
            "root has a parent link"
        );
        let mut items = 0;
        self.verify_node(self.root, true, &mut items)?;
        ensure!(
            items == self.size,
            "tree reports {} items but holds {}",
            self.size,
            items
        );
        Ok(())
    }

    fn verify_node(&self, id: NodeId, is_root: bool, items: &mut usize) -> Result<usize> {
        let node = self.node(id);
        let count = node.entry_count();

        ensure!(
            count <= self.max_entries,
            "node holds {} entries, max is {}",
            count,
            self.max_entries
        );
        if !is_root {
            ensure!(
                count >= self.min_entries,
                "non-root node holds {} entries, min is {}",
                count,
                self.min_entries
            );
        }
        if count > 0 {
            let expected = self.compute_bounds(id).unwrap(); // INVARIANT: node is non-empty
            ensure!(
                node.bounds == expected,
                "node bounds are not the MBR of its entries"
            );
        }

        match &node.kind {
            NodeKind::Leaf(leaf_items) => {
                *items += leaf_items.len();
                Ok(1)
            }
            NodeKind::Internal(children) => {
                if is_root {
                    ensure!(
                        children.len() >= 2,
                        "internal root holds {} children",
                        children.len()
                    );
                }
                let mut depth = None;
                for &child in children {
                    ensure!(
                        self.node(child).parent == Some(id),
                        "child {} does not point back at its parent {}",
                        child.0,
                        id.0
                    );
                    let d = self.verify_node(child, false, items)?;
                    match depth {
                        None => depth = Some(d),
                        Some(prev) => ensure!(prev == d, "leaves at unequal depth"),
                    }
                }
                Ok(depth.unwrap() + 1) // INVARIANT: internal nodes have at least one child
            }
        }
    }
}
