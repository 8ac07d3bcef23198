//! Best-first k-nearest-neighbor machinery.
//!
//! The k-NN traversal keeps a single priority queue holding both unexpanded
//! subtrees (keyed by the distance from the query point to their bounds)
//! and individual items (keyed by the distance to their rectangles). The
//! minimum always pops first, so a subtree is never expanded while a closer
//! one waits, and items surface in nondecreasing distance order.
//!
//! `BinaryHeap` is a max-heap, so [`Candidate`] inverts its ordering:
//! smaller distances compare greater. Among equal distances the smaller
//! sequence number (earlier encounter) compares greater, which makes tie
//! order deterministic.

use std::cmp::Ordering;

use super::node::{Item, NodeId};

pub(crate) enum Target<'a, T> {
    Node(NodeId),
    Item(&'a Item<T>),
}

pub(crate) struct Candidate<'a, T> {
    pub(crate) distance: f64,
    pub(crate) seq: u64,
    pub(crate) target: Target<'a, T>,
}

impl<T> PartialEq for Candidate<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}

impl<T> Eq for Candidate<'_, T> {}

impl<T> PartialOrd for Candidate<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Candidate<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn node_candidate(distance: f64, seq: u64) -> Candidate<'static, ()> {
        Candidate {
            distance,
            seq,
            target: Target::Node(NodeId(seq as u32)),
        }
    }

    #[test]
    fn heap_pops_nearest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(node_candidate(9.0, 0));
        heap.push(node_candidate(1.0, 1));
        heap.push(node_candidate(4.0, 2));

        let order: Vec<f64> = std::iter::from_fn(|| heap.pop().map(|c| c.distance)).collect();
        assert_eq!(order, vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn equal_distances_pop_in_encounter_order() {
        let mut heap = BinaryHeap::new();
        heap.push(node_candidate(5.0, 2));
        heap.push(node_candidate(5.0, 0));
        heap.push(node_candidate(5.0, 1));

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|c| c.seq)).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
