//! # R-Tree Implementation
//!
//! This module implements an R-tree: a balanced spatial index over
//! axis-aligned rectangles in 2D Euclidean space. Every node covers its
//! subtree with a minimum bounding rectangle (MBR), and queries prune whole
//! subtrees whose MBR cannot contain a result.
//!
//! ```text
//!                 [root MBR]
//!                /          \
//!        [MBR north]      [MBR south]
//!        /    |              |     \
//!   [items] [items]       [items] [items]     (leaves hold the data)
//! ```
//!
//! ## Supported Queries
//!
//! - **Window search**: every item whose rectangle intersects a query window
//!   (closed rectangles - touching edges count)
//! - **Point search**: every item whose rectangle contains a query point
//! - **k-nearest-neighbor**: up to `k` items in nondecreasing distance from
//!   a query point, via best-first traversal over a distance-keyed heap
//!
//! ## Insertion
//!
//! Descent picks, at each level, the child needing the least area
//! enlargement to cover the new rectangle (ties: smaller area, then first
//! encountered). After the leaf accepts the item, bounds are recomputed up
//! the parent chain. An overflowing node splits; splits propagate upward,
//! and a splitting root grows the tree by one level.
//!
//! ## R*-Style Splitting
//!
//! A split decides in two phases:
//!
//! ```text
//! 1. Axis: for X and Y, sort entries by lower bound and sum the margins
//!    (half-perimeters) of both groups over every legal partition; the
//!    axis with the smaller sum wins (X on a tie).
//! 2. Index: along the winning axis, pick the partition minimizing the
//!    overlap area of the two group MBRs, then the sum of their areas.
//! ```
//!
//! ## Arena Storage
//!
//! Nodes live in a `Vec` arena owned by the tree and reference parents and
//! children by `u32` node id, so the parent back-links carried for upward
//! bounds maintenance never imply ownership. There is no delete operation,
//! so arena slots are never vacated.
//!
//! ## Thread Safety
//!
//! Not thread-safe. Concurrent readers are fine (`&self`); mutation needs
//! exclusive access (`&mut self`).

mod geometry;
mod node;
mod search;
mod split;
mod tree;

pub use geometry::{Point, Rect};
pub use node::Item;
pub use tree::RTree;
