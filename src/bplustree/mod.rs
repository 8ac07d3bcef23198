//! # B+Tree Implementation
//!
//! This module implements a B+tree: a balanced multiway tree in which all
//! data lives in leaf nodes and interior nodes carry separator keys only.
//! Leaves are linked into a forward chain in ascending key order, which
//! makes range scans and full scans a single pointer walk.
//!
//! ```text
//!                  [Internal: 10 | 20]
//!                  /       |        \
//!        [Leaf 1..9] → [Leaf 10..19] → [Leaf 20..]   (next links)
//! ```
//!
//! ## Arena Storage
//!
//! Nodes are stored in a `Vec` arena owned by the tree and reference each
//! other by `NodeId`, a `u32` index - parents, children, and the leaf chain
//! are all ids, so back-links never imply ownership and no reference cycles
//! exist. Slots vacated by merges and root collapses go onto a free list and
//! are handed back out by later splits.
//!
//! ## Separator Convention
//!
//! A separator `K[i]` routes keys: everything `< K[i]` descends left of it,
//! everything `>= K[i]` descends right. A separator equals the smallest key
//! the right subtree held when the separator was created; deletions may
//! leave it smaller than the subtree's current minimum, which routing
//! tolerates.
//!
//! ## Splitting and Rebalancing
//!
//! Inserts split bottom-up: an overfull leaf moves its upper half into a new
//! leaf spliced into the chain, and the new leaf's first key climbs into the
//! parent; an overfull internal node promotes its median, which is *removed*
//! from both halves, unlike the B-tree. Deletes rebalance both levels:
//! borrow one entry (or one key+child pair) from a richer sibling, rotating
//! through the parent separator, else merge with a sibling and drop the
//! separator. An internal root with no keys left collapses into its only
//! child; an emptied root leaf empties the tree.
//!
//! ## Thread Safety
//!
//! Not thread-safe. Concurrent readers are fine (`&self`); mutation needs
//! exclusive access (`&mut self`).

mod node;
mod tree;

pub use tree::BPlusTree;
