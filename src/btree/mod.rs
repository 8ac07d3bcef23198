//! # B-Tree Implementation
//!
//! This module implements a classical B-tree: a balanced multiway search
//! tree keyed by any ordered type, mapping each key to a value. Keys and
//! values live in every node, interior and leaf alike.
//!
//! ## Structure
//!
//! A node with `n` keys holds `n` values and, unless it is a leaf, `n + 1`
//! children. With minimum degree `t` (configured at construction, at least
//! 2), every node holds at most `2t - 1` keys and every non-root node holds
//! at least `t - 1`:
//!
//! ```text
//!                 [      17      ]
//!                /                \
//!        [ 5  10 ]                [ 25  40 ]
//!       /    |    \              /    |     \
//! [2 3] [6 7 8] [12 15]    [20 22] [30 35] [50 60]
//! ```
//!
//! All leaves sit at the same depth, and an in-order walk yields the keys in
//! strictly ascending order.
//!
//! ## Insert: Preemptive Top-Down Split
//!
//! Insertion splits full nodes on the way *down*, so the leaf that finally
//! receives the key always has room:
//!
//! ```text
//! 1. Root full? Split it under a fresh root (the only way height grows).
//! 2. Descend; before entering a full child, split it around its median,
//!    pushing the median into the current node.
//! 3. Insert into the leaf at its sorted position.
//! ```
//!
//! Inserting a key that already exists replaces its value in place, anywhere
//! in the tree, and leaves the size unchanged.
//!
//! ## Delete: Fix-Before-Descend
//!
//! Deletion maintains the mirror-image invariant: every node entered, other
//! than the root, carries at least `t` keys so it can absorb a removal.
//! Before descending into a child at the `t - 1` minimum, the child is
//! *fixed*: borrow a key from a rich sibling (rotating through the parent
//! separator), or merge with a sibling, pulling the separator down. At the
//! key itself there are three cases: remove in place (leaf), promote the
//! in-order predecessor or successor (internal with a rich child), or merge
//! the two children around the key and recurse.
//!
//! ## Ownership
//!
//! Children are owned `Box` links and the tree owns the root; there are no
//! parent pointers, so the structure is a plain ownership tree and all
//! mutation is recursive.
//!
//! ## Thread Safety
//!
//! Not thread-safe. Concurrent readers are fine (`&self`); mutation needs
//! exclusive access (`&mut self`).

mod node;
mod tree;

pub use tree::BTree;
