// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Bound-ordered priority frontier.
//!
//! The frontier holds every open (not yet expanded) search state and always
//! yields the one with the smallest lower bound. Ties are broken by depth —
//! deeper states are preferred, since they are closer to a complete tour and
//! tighten the incumbent sooner — and finally by insertion order (FIFO), so
//! the ordering is total and runs are reproducible.
//!
//! Comparisons are defined exclusively over the extracted `(bound, depth,
//! seq)` keys stored on each entry, never over the node itself. The frontier
//! also records the largest size it ever reached, which the driver reports
//! as a search statistic.

use crate::{node::SearchNode, num::SolverNumeric};
use std::collections::BinaryHeap;

/// One frontier entry: the extracted ordering keys plus the owned node.
struct FrontierEntry<T>
where
    T: SolverNumeric,
{
    bound: T,
    depth: usize,
    seq: u64,
    node: SearchNode<T>,
}

impl<T> FrontierEntry<T>
where
    T: SolverNumeric,
{
    /// The ordering key tuple. `std::cmp::Reverse` on bound and seq turns
    /// the max-heap into "smallest bound first, FIFO on full ties".
    #[inline(always)]
    fn key(&self) -> (std::cmp::Reverse<T>, usize, std::cmp::Reverse<u64>) {
        (
            std::cmp::Reverse(self.bound),
            self.depth,
            std::cmp::Reverse(self.seq),
        )
    }
}

impl<T> PartialEq for FrontierEntry<T>
where
    T: SolverNumeric,
{
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for FrontierEntry<T> where T: SolverNumeric {}

impl<T> PartialOrd for FrontierEntry<T>
where
    T: SolverNumeric,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T>
where
    T: SolverNumeric,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

/// A min-priority queue of search states ordered by lower bound.
pub struct Frontier<T>
where
    T: SolverNumeric,
{
    heap: BinaryHeap<FrontierEntry<T>>,
    next_seq: u64,
    max_len: usize,
}

impl<T> Default for Frontier<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T>
where
    T: SolverNumeric,
{
    /// Creates a new, empty frontier.
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            max_len: 0,
        }
    }

    /// Creates a new frontier with preallocated storage for `capacity`
    /// entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
            max_len: 0,
        }
    }

    /// Pushes an open state onto the frontier.
    #[inline]
    pub fn push(&mut self, node: SearchNode<T>) {
        let entry = FrontierEntry {
            bound: node.bound(),
            depth: node.depth(),
            seq: self.next_seq,
            node,
        };
        self.next_seq += 1;
        self.heap.push(entry);
        self.max_len = self.max_len.max(self.heap.len());
    }

    /// Removes and returns the best open state: smallest bound, then
    /// greatest depth, then earliest insertion.
    #[inline]
    pub fn pop(&mut self) -> Option<SearchNode<T>> {
        self.heap.pop().map(|entry| entry.node)
    }

    /// Returns the number of open states.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no open states remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the largest number of open states ever held at once.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Clears the frontier, keeping allocated capacity. The maximum-size and
    /// insertion counters restart as well.
    #[inline]
    pub fn reset(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
        self.max_len = 0;
    }
}

impl<T> std::fmt::Debug for Frontier<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frontier(len: {}, max_len: {})", self.len(), self.max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peddler_model::{index::CityIndex, matrix::CostMatrix};

    type IntegerType = i64;

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    /// Builds nodes with controlled bounds by walking a uniform-cost matrix
    /// and picking different depths; bounds are then compared relatively.
    fn sample_nodes() -> Vec<SearchNode<IntegerType>> {
        // Costs chosen so each expansion strictly raises the bound.
        let matrix = CostMatrix::<IntegerType>::from_fn(5, |from, to| {
            Some(1 + ((from.get() + 2 * to.get()) % 4) as IntegerType)
        })
        .unwrap();
        let root = SearchNode::root(&matrix, ci(0));
        let child = root.child(ci(1)).unwrap();
        let grandchild = child.child(ci(2)).unwrap();
        vec![root, child, grandchild]
    }

    #[test]
    fn test_pop_returns_smallest_bound_first() {
        let nodes = sample_nodes();
        let mut frontier = Frontier::new();
        // Insert out of order.
        frontier.push(nodes[2].clone());
        frontier.push(nodes[0].clone());
        frontier.push(nodes[1].clone());

        let mut last_bound = IntegerType::MIN;
        while let Some(node) = frontier.pop() {
            assert!(node.bound() >= last_bound);
            last_bound = node.bound();
        }
    }

    #[test]
    fn test_equal_bounds_prefer_deeper_states() {
        let matrix = CostMatrix::<IntegerType>::from_fn(4, |_, _| Some(1)).unwrap();
        let root = SearchNode::root(&matrix, ci(0));
        let child = root.child(ci(1)).unwrap();
        // Uniform matrix: the child's bound equals the root's.
        assert_eq!(root.bound(), child.bound());

        let mut frontier = Frontier::new();
        frontier.push(root);
        frontier.push(child);
        assert_eq!(frontier.pop().unwrap().depth(), 2);
        assert_eq!(frontier.pop().unwrap().depth(), 1);
    }

    #[test]
    fn test_full_ties_pop_in_insertion_order() {
        let matrix = CostMatrix::<IntegerType>::from_fn(4, |_, _| Some(1)).unwrap();
        let root = SearchNode::root(&matrix, ci(0));
        // Two children at the same depth with identical bounds.
        let via_1 = root.child(ci(1)).unwrap();
        let via_2 = root.child(ci(2)).unwrap();
        assert_eq!(via_1.bound(), via_2.bound());

        let mut frontier = Frontier::new();
        frontier.push(via_1);
        frontier.push(via_2);
        assert_eq!(frontier.pop().unwrap().last(), ci(1));
        assert_eq!(frontier.pop().unwrap().last(), ci(2));
    }

    #[test]
    fn test_max_len_tracks_high_water_mark() {
        let nodes = sample_nodes();
        let mut frontier = Frontier::new();
        assert_eq!(frontier.max_len(), 0);

        frontier.push(nodes[0].clone());
        frontier.push(nodes[1].clone());
        frontier.push(nodes[2].clone());
        assert_eq!(frontier.max_len(), 3);

        frontier.pop();
        frontier.pop();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.max_len(), 3);
    }

    #[test]
    fn test_reset_clears_state_and_counters() {
        let nodes = sample_nodes();
        let mut frontier = Frontier::new();
        frontier.push(nodes[0].clone());
        frontier.push(nodes[1].clone());
        frontier.reset();
        assert!(frontier.is_empty());
        assert_eq!(frontier.max_len(), 0);
    }
}
