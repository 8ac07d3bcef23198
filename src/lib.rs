//! # Tridex - In-Memory Ordered and Spatial Indexes
//!
//! Tridex is a library of three self-contained, in-memory index structures
//! sharing a common style but no code:
//!
//! - **B-Tree**: classical balanced multiway search tree mapping ordered keys
//!   to values, with point lookup, upsert, deletion, and in-order traversal
//! - **B+Tree**: the same key-value contract plus efficient range scans over
//!   a linked chain of leaves
//! - **R-Tree**: a spatial index over axis-aligned 2D rectangles, with window
//!   queries, point containment queries, and k-nearest-neighbor search
//!
//! ## Quick Start
//!
//! ```ignore
//! use tridex::bplustree::BPlusTree;
//!
//! let mut tree = BPlusTree::new(3);
//! tree.insert(10, "Value-10");
//! tree.insert(20, "Value-20");
//!
//! assert_eq!(tree.search(&10), Some(&"Value-10"));
//! for (key, value) in tree.range(&10, &25) {
//!     println!("{key} -> {value}");
//! }
//! ```
//!
//! ## Architecture
//!
//! Each component is an independent module; the calling program picks one
//! per use case:
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┐
//! │    btree     │  bplustree   │    rtree     │
//! ├──────────────┼──────────────┼──────────────┤
//! │ owned Box    │ node arena + │ node arena + │
//! │ children     │ free list    │ best-first   │
//! │              │ + leaf chain │ k-NN queue   │
//! └──────────────┴──────────────┴──────────────┘
//! ```
//!
//! The B+tree and R-tree need non-owning parent back-links, so their nodes
//! live in a `Vec` arena owned by the tree and reference each other by a
//! `u32` node id. The classical B-tree has no back-links and owns its
//! children directly through `Box`.
//!
//! ## Concurrency
//!
//! The trees carry no internal synchronization. Shared readers (`&self`) are
//! safe; mutation (`&mut self`) requires exclusive access. The borrow checker
//! enforces exactly this contract.
//!
//! ## Error Handling
//!
//! Normal operation never fails: absent keys surface as `None`, empty-tree
//! queries as empty vectors, and out-of-range construction parameters are
//! silently clamped. Each tree exposes a `verify()` walk that reports the
//! first violated structural rule, for use in tests and debugging.
//!
//! ## Module Overview
//!
//! - [`btree`]: B-tree with top-down splits and three-case deletion
//! - [`bplustree`]: B+tree with leaf chain and two-level rebalancing
//! - [`rtree`]: R-tree with R*-style splits and best-first k-NN

pub mod bplustree;
pub mod btree;
pub mod rtree;

pub use bplustree::BPlusTree;
pub use btree::BTree;
pub use rtree::{Item, Point, RTree, Rect};
