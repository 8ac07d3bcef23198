//! B-tree public operations.
//!
//! ## Insert Algorithm
//!
//! ```text
//! 1. Root full (2t-1 keys)? Hang it under a fresh root and split it;
//!    this is the only way the tree grows in height.
//! 2. Descend. Before entering a full child, split it around its median,
//!    pushing the median into the current node.
//! 3. If the probe key is met anywhere on the way down (including as a
//!    just-promoted median), replace its value and stop.
//! 4. Insert into the leaf at its sorted position.
//! ```
//!
//! ## Delete Algorithm
//!
//! ```text
//! 1. Descend, fixing any child at the t-1 minimum before entering it
//!    (borrow from a rich sibling, else merge).
//! 2. Key in a leaf: remove in place.
//! 3. Key in an internal node: promote the in-order predecessor (left child
//!    rich) or successor (right child rich) out of the subtree; else merge
//!    the two children around the key and remove it from the merged node.
//! 4. An internal root left with zero keys collapses into its only child;
//!    this is the only way the tree shrinks in height.
//! ```
//!
//! Height counts edges to the leaf level: an empty or single-node tree has
//! height 0.

use std::fmt;
use std::mem;

use eyre::{ensure, Result};

use super::node::Node;

/// Balanced multiway search tree with upsert semantics.
///
/// `degree` is the minimum degree `t`: nodes hold at most `2t - 1` keys and
/// non-root nodes at least `t - 1`. Degrees below 2 are clamped to 2.
#[derive(Debug)]
pub struct BTree<K, V> {
    root: Box<Node<K, V>>,
    degree: usize,
}

impl<K: Ord, V> BTree<K, V> {
    pub fn new(degree: usize) -> Self {
        Self {
            root: Box::new(Node::new()),
            degree: degree.max(2),
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    fn max_keys(&self) -> usize {
        2 * self.degree - 1
    }

    /// Inserts a key-value pair. If the key is already present anywhere in
    /// the tree its value is replaced and the old value returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.root.keys.len() == self.max_keys() {
            let old_root = mem::replace(&mut self.root, Box::new(Node::new()));
            self.root.children.push(old_root);
            Node::split_child(&mut self.root, 0, self.degree);
        }
        Node::insert_non_full(&mut self.root, key, value, self.degree)
    }

    /// Point lookup.
    pub fn search(&self, key: &K) -> Option<&V> {
        let mut node = self.root.as_ref();
        loop {
            match node.keys.binary_search(key) {
                Ok(pos) => return Some(&node.values[pos]),
                Err(pos) => {
                    if node.is_leaf() {
                        return None;
                    }
                    node = &node.children[pos];
                }
            }
        }
    }

    /// Removes a key, returning its value, or `None` if absent. The tree is
    /// untouched when the key is absent.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let removed = Node::delete_from(&mut self.root, key, self.degree);
        if self.root.keys.is_empty() && !self.root.is_leaf() {
            let only_child = self.root.children.remove(0);
            self.root = only_child;
        }
        removed
    }

    /// All entries in strictly ascending key order, materialized.
    pub fn in_order(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.size());
        Node::in_order(&self.root, &mut out);
        out
    }

    /// Number of keys in the tree.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Edges from the root down to the leaf level.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn is_empty(&self) -> bool {
        self.root.keys.is_empty()
    }

    /// Walks the whole tree and reports the first violated structural rule:
    /// key ordering, occupancy bounds, child counts, or unequal leaf depth.
    pub fn verify(&self) -> Result<()> {
        self.verify_node(&self.root, true, None, None)?;
        Ok(())
    }

    fn verify_node(
        &self,
        node: &Node<K, V>,
        is_root: bool,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<usize> {
        let max = self.max_keys();
        let min = self.degree - 1;

        ensure!(
            node.keys.len() <= max,
            "node holds {} keys, max is {}",
            node.keys.len(),
            max
        );
        if !is_root {
            ensure!(
                node.keys.len() >= min,
                "non-root node holds {} keys, min is {}",
                node.keys.len(),
                min
            );
        }
        ensure!(
            node.keys.len() == node.values.len(),
            "node holds {} keys but {} values",
            node.keys.len(),
            node.values.len()
        );
        for pair in node.keys.windows(2) {
            ensure!(pair[0] < pair[1], "keys within a node are out of order");
        }
        if let (Some(lower), Some(first)) = (lower, node.keys.first()) {
            ensure!(lower < first, "key at or below the separator of its left neighbor");
        }
        if let (Some(upper), Some(last)) = (upper, node.keys.last()) {
            ensure!(last < upper, "key at or above the separator of its right neighbor");
        }

        if node.is_leaf() {
            return Ok(0);
        }

        ensure!(
            node.children.len() == node.keys.len() + 1,
            "internal node holds {} keys but {} children",
            node.keys.len(),
            node.children.len()
        );

        let mut depth = None;
        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(&node.keys[i - 1]) };
            let child_upper = if i == node.keys.len() {
                upper
            } else {
                Some(&node.keys[i])
            };
            let d = self.verify_node(child, false, child_lower, child_upper)?;
            match depth {
                None => depth = Some(d),
                Some(prev) => ensure!(prev == d, "leaves at unequal depth"),
            }
        }
        Ok(depth.unwrap() + 1) // INVARIANT: internal nodes have at least one child
    }
}

impl<K: Ord + fmt::Debug, V> fmt::Display for BTree<K, V> {
    /// One node per line, indented two spaces per level, keys in debug form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn dump<K: fmt::Debug, V>(
            node: &Node<K, V>,
            level: usize,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            writeln!(
                f,
                "{:indent$}Node(leaf={}): {:?}",
                "",
                node.children.is_empty(),
                node.keys,
                indent = level * 2
            )?;
            for child in &node.children {
                dump(child, level + 1, f)?;
            }
            Ok(())
        }
        dump(&self.root, 0, f)
    }
}
