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

use crate::num::SolverNumeric;
use std::time::Duration;

/// Statistics collected during the execution of the Peddler-BnB solver.
///
/// Counters are explicit fields threaded through the driver's session —
/// never globals — so a search run stays testable in isolation. All of
/// these are part of the result contract even when a caller ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnbSolverStatistics<T> {
    /// Total search states materialized (root plus every constructed child).
    pub states_created: u64,
    /// States popped from the frontier and expanded into children.
    pub states_expanded: u64,
    /// States discarded without full expansion: bound-dominated at pop or at
    /// creation, or infeasible/non-improving terminals.
    pub states_pruned: u64,
    /// Feasible, strictly improving complete tours found during the search.
    /// A warm-start seed never counts.
    pub solutions_found: u64,
    /// The largest number of open states the frontier ever held.
    pub max_frontier_size: u64,
    /// Total wall-clock time spent in the search loop.
    pub time_total: Duration,
    /// The lower bound at the root state, for optimality-gap reporting.
    pub root_lower_bound: T,
}

impl<T> Default for BnbSolverStatistics<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self {
            states_created: 0,
            states_expanded: 0,
            states_pruned: 0,
            solutions_found: 0,
            max_frontier_size: 0,
            time_total: Duration::ZERO,
            root_lower_bound: T::zero(),
        }
    }
}

impl<T> BnbSolverStatistics<T> {
    #[inline]
    pub fn on_state_created(&mut self) {
        self.states_created = self.states_created.saturating_add(1);
    }

    #[inline]
    pub fn on_state_expanded(&mut self) {
        self.states_expanded = self.states_expanded.saturating_add(1);
    }

    #[inline]
    pub fn on_state_pruned(&mut self) {
        self.states_pruned = self.states_pruned.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_size(&mut self, size: u64) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn set_root_lower_bound(&mut self, bound: T) {
        self.root_lower_bound = bound;
    }
}

impl<T> std::fmt::Display for BnbSolverStatistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Peddler-BnB Solver Statistics:")?;
        writeln!(f, "  States created:       {}", self.states_created)?;
        writeln!(f, "  States expanded:      {}", self.states_expanded)?;
        writeln!(f, "  States pruned:        {}", self.states_pruned)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Max frontier size:    {}", self.max_frontier_size)?;
        writeln!(f, "  Root lower bound:     {}", self.root_lower_bound)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_default_is_all_zero() {
        let stats = BnbSolverStatistics::<IntegerType>::default();
        assert_eq!(stats.states_created, 0);
        assert_eq!(stats.states_expanded, 0);
        assert_eq!(stats.states_pruned, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.max_frontier_size, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
        assert_eq!(stats.root_lower_bound, 0);
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = BnbSolverStatistics::<IntegerType>::default();
        stats.on_state_created();
        stats.on_state_created();
        stats.on_state_expanded();
        stats.on_state_pruned();
        stats.on_solution_found();
        assert_eq!(stats.states_created, 2);
        assert_eq!(stats.states_expanded, 1);
        assert_eq!(stats.states_pruned, 1);
        assert_eq!(stats.solutions_found, 1);
    }

    #[test]
    fn test_frontier_size_keeps_maximum() {
        let mut stats = BnbSolverStatistics::<IntegerType>::default();
        stats.on_frontier_size(3);
        stats.on_frontier_size(7);
        stats.on_frontier_size(5);
        assert_eq!(stats.max_frontier_size, 7);
    }

    #[test]
    fn test_display_lists_all_counters() {
        let mut stats = BnbSolverStatistics::<IntegerType>::default();
        stats.set_root_lower_bound(42);
        let rendered = format!("{}", stats);
        assert!(rendered.contains("States created"));
        assert!(rendered.contains("Max frontier size"));
        assert!(rendered.contains("42"));
    }
}
