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

//! Immutable search states of the branch-and-bound tree.
//!
//! A `SearchNode<T>` is a value-type record of one partial tour: the ordered
//! path so far, the set of unvisited cities, an owned reduced working matrix
//! reflecting every exclusion the path implies, and the accumulated lower
//! bound. Nodes are never mutated after construction; expansion derives
//! fresh child values, so the frontier can own, reorder, and drop nodes
//! without any aliasing concerns.
//!
//! Invariants:
//! - `path.len() + unvisited count == num_cities` at all times.
//! - `bound` never decreases from parent to child.
//! - A node is *terminal* when `unvisited` is empty; its finalized bound
//!   (bound + closing edge back to the origin) equals the true tour cost.

use crate::{num::SolverNumeric, reduce::ReducedMatrix};
use fixedbitset::FixedBitSet;
use peddler_model::{index::CityIndex, matrix::CostMatrix};
use smallvec::{SmallVec, smallvec};

/// Inline path capacity; paths longer than this spill to the heap.
const INLINE_PATH_LEN: usize = 16;

/// One immutable partial-tour state of the search tree.
#[derive(Clone, Debug)]
pub struct SearchNode<T>
where
    T: SolverNumeric,
{
    matrix: ReducedMatrix<T>,
    path: SmallVec<[CityIndex; INLINE_PATH_LEN]>,
    unvisited: FixedBitSet,
    bound: T,
}

impl<T> SearchNode<T>
where
    T: SolverNumeric,
{
    /// Creates the root state: the origin committed, everything else open,
    /// and the fully reduced matrix establishing the root lower bound.
    pub fn root(matrix: &CostMatrix<T>, origin: CityIndex) -> Self {
        debug_assert!(
            origin.get() < matrix.num_cities(),
            "called `SearchNode::root` with origin out of bounds: the len is {} but the index is {}",
            matrix.num_cities(),
            origin.get()
        );

        let mut reduced = ReducedMatrix::from_cost_matrix(matrix);
        let bound = reduced.reduce();

        let mut unvisited = FixedBitSet::with_capacity(matrix.num_cities());
        unvisited.insert_range(..);
        unvisited.set(origin.get(), false);

        Self {
            matrix: reduced,
            path: smallvec![origin],
            unvisited,
            bound,
        }
    }

    /// Returns the accumulated lower bound of this state.
    #[inline]
    pub fn bound(&self) -> T {
        self.bound
    }

    /// Returns the number of cities committed to the path so far.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns the committed path, origin first.
    #[inline]
    pub fn path(&self) -> &[CityIndex] {
        &self.path
    }

    /// Returns the tour origin of this search tree.
    #[inline]
    pub fn origin(&self) -> CityIndex {
        self.path[0]
    }

    /// Returns the most recently committed city.
    #[inline]
    pub fn last(&self) -> CityIndex {
        self.path[self.path.len() - 1]
    }

    /// Checks whether every city has been committed.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.unvisited.is_clear()
    }

    /// Iterates over the cities not yet committed to the path.
    #[inline]
    pub fn unvisited(&self) -> impl Iterator<Item = CityIndex> + '_ {
        self.unvisited.ones().map(CityIndex::new)
    }

    /// Derives the child state that commits the edge `last -> next`, or
    /// `None` when that edge is ∞ in this state's matrix.
    ///
    /// The child matrix excludes the committed row and column, and — while
    /// cities remain unvisited — the edge from `next` back to the origin, so
    /// no descendant can close the cycle prematurely. (At the root transition
    /// this is the reverse 2-edge back to the origin.) The child is then
    /// reduced, and the reduction delta tightens its bound.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `next` is not an unvisited city.
    pub fn child(&self, next: CityIndex) -> Option<Self> {
        debug_assert!(
            self.unvisited.contains(next.get()),
            "called `SearchNode::child` with an already visited city: {}",
            next
        );

        let last = self.last();
        let edge = self.matrix.cost(last, next);
        let edge = edge.into_option()?;

        let mut matrix = self.matrix.clone();
        matrix.exclude_row(last);
        matrix.exclude_column(next);

        let mut unvisited = self.unvisited.clone();
        unvisited.set(next.get(), false);

        if !unvisited.is_clear() {
            matrix.exclude_edge(next, self.origin());
        }

        let mut bound = self.bound.saturating_add(edge);
        let delta = matrix.reduce();
        bound = bound.saturating_add(delta);

        let mut path = self.path.clone();
        path.push(next);

        Some(Self {
            matrix,
            path,
            unvisited,
            bound,
        })
    }

    /// Finalizes a terminal state by adding the closing edge back to the
    /// origin. Returns the exact tour cost, or `None` when the closing edge
    /// is ∞ (the state is infeasible and must be discarded).
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the state is not terminal.
    pub fn finalized_bound(&self) -> Option<T> {
        debug_assert!(
            self.is_terminal(),
            "called `SearchNode::finalized_bound` on a non-terminal state at depth {}",
            self.depth()
        );

        let closing = self.matrix.cost(self.last(), self.origin());
        closing
            .into_option()
            .map(|edge| self.bound.saturating_add(edge))
    }

    /// Consumes the state and returns its path as a tour cycle.
    #[inline]
    pub fn into_cycle(self) -> Vec<CityIndex> {
        self.path.into_vec()
    }
}

impl<T> std::fmt::Display for SearchNode<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchNode(depth: {}, bound: {}, last: {})",
            self.depth(),
            self.bound,
            self.last()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    fn four_city_matrix() -> CostMatrix<IntegerType> {
        CostMatrix::from_rows(&[
            vec![None, Some(1), None, Some(4)],
            vec![Some(1), None, Some(2), None],
            vec![None, Some(2), None, Some(1)],
            vec![Some(4), None, Some(1), None],
        ])
        .unwrap()
    }

    fn root() -> SearchNode<IntegerType> {
        SearchNode::root(&four_city_matrix(), ci(0))
    }

    #[test]
    fn test_root_state_shape() {
        let root = root();
        assert_eq!(root.bound(), 4);
        assert_eq!(root.depth(), 1);
        assert_eq!(root.path(), &[ci(0)]);
        assert_eq!(root.origin(), ci(0));
        assert_eq!(root.last(), ci(0));
        assert!(!root.is_terminal());
        let open: Vec<_> = root.unvisited().collect();
        assert_eq!(open, vec![ci(1), ci(2), ci(3)]);
    }

    #[test]
    fn test_path_plus_unvisited_covers_all_cities() {
        let root = root();
        let child = root.child(ci(1)).unwrap();
        let grandchild = child.child(ci(2)).unwrap();
        for node in [&root, &child, &grandchild] {
            assert_eq!(node.depth() + node.unvisited().count(), 4);
        }
    }

    #[test]
    fn test_child_over_missing_edge_is_none() {
        // 0 -> 2 does not exist in the instance.
        assert!(root().child(ci(2)).is_none());
    }

    #[test]
    fn test_child_bound_is_monotone() {
        let root = root();
        for next in root.unvisited() {
            if let Some(child) = root.child(next) {
                assert!(
                    child.bound() >= root.bound(),
                    "child via {} lowered the bound: {} < {}",
                    next,
                    child.bound(),
                    root.bound()
                );
                for grandchild_city in child.unvisited() {
                    if let Some(grandchild) = child.child(grandchild_city) {
                        assert!(grandchild.bound() >= child.bound());
                    }
                }
            }
        }
    }

    #[test]
    fn test_optimal_path_finalizes_to_true_cost() {
        // 0 -> 1 -> 2 -> 3 -> 0 costs exactly 8.
        let terminal = root()
            .child(ci(1))
            .unwrap()
            .child(ci(2))
            .unwrap()
            .child(ci(3))
            .unwrap();
        assert!(terminal.is_terminal());
        assert_eq!(terminal.finalized_bound(), Some(8));
        assert_eq!(terminal.into_cycle(), vec![ci(0), ci(1), ci(2), ci(3)]);
    }

    #[test]
    fn test_root_child_bound_stays_admissible() {
        // Both feasible tours of the instance cost 8; no depth-2 bound on
        // their branches may exceed that.
        let root = root();
        let via_1 = root.child(ci(1)).unwrap();
        let via_3 = root.child(ci(3)).unwrap();
        assert!(via_1.bound() <= 8);
        assert!(via_3.bound() <= 8);
    }

    #[test]
    fn test_reverse_two_cycle_is_excluded_at_root() {
        // After committing 0 -> 1 the child must not allow 1 -> 0 until all
        // cities are visited: expanding the child back to the origin is not
        // even an option (origin is no longer unvisited), and the premature
        // closing edge is ∞ in its matrix.
        let matrix = CostMatrix::<IntegerType>::from_fn(4, |_, _| Some(1)).unwrap();
        let root = SearchNode::root(&matrix, ci(0));
        let child = root.child(ci(1)).unwrap();
        // The closing edge 1 -> 0 was excluded, so a tour fragment cannot
        // pay for it: walk to a terminal and check the bound is a real tour
        // cost (4 edges of cost 1).
        let terminal = child.child(ci(2)).unwrap().child(ci(3)).unwrap();
        assert_eq!(terminal.finalized_bound(), Some(4));
    }

    #[test]
    fn test_infeasible_closing_edge_discards_terminal() {
        // 1 -> 0 exists but 3 -> 0 removed: the path 0-1-2-3 cannot close.
        let matrix = CostMatrix::<IntegerType>::from_rows(&[
            vec![None, Some(1), Some(9), Some(9)],
            vec![Some(1), None, Some(2), Some(9)],
            vec![Some(9), Some(2), None, Some(1)],
            vec![None, Some(9), Some(1), None],
        ])
        .unwrap();
        let terminal = SearchNode::root(&matrix, ci(0))
            .child(ci(1))
            .unwrap()
            .child(ci(2))
            .unwrap()
            .child(ci(3))
            .unwrap();
        assert!(terminal.is_terminal());
        assert_eq!(terminal.finalized_bound(), None);
    }

    #[test]
    fn test_two_city_round_trip() {
        let matrix = CostMatrix::<IntegerType>::from_rows(&[
            vec![None, Some(3)],
            vec![Some(5), None],
        ])
        .unwrap();
        let root = SearchNode::root(&matrix, ci(0));
        let terminal = root.child(ci(1)).unwrap();
        assert!(terminal.is_terminal());
        assert_eq!(terminal.finalized_bound(), Some(8));
    }
}
