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

//! Best-first branch-and-bound driver for the TSP.
//!
//! This module implements the search engine that explores partial tours in
//! lower-bound order while pruning against the incumbent. The `BnbSolver`
//! owns the reusable frontier storage and supports warm starts via an
//! externally constructed seed tour. A search session object encapsulates
//! per-run state, statistics, and timing.
//!
//! The loop per iteration: consult the monitor (cooperative cancellation),
//! pop the open state with the smallest bound, discard it if the incumbent
//! already dominates it, otherwise expand it. Terminal children are closed,
//! run through the tour validator, and offered to the incumbent; open
//! children are queued only while their bound still beats the incumbent.
//! Exhausting the frontier proves optimality (or infeasibility when no tour
//! was ever found) because every discarded state was provably no better than
//! the incumbent.

use crate::{
    frontier::Frontier,
    incumbent::Incumbent,
    monitor::search_monitor::{PruneReason, SearchCommand, SearchMonitor},
    node::SearchNode,
    num::SolverNumeric,
    result::{BnbSolverOutcome, TerminationReason},
    stats::BnbSolverStatistics,
};
use peddler_model::{index::CityIndex, matrix::CostMatrix, tour::Tour};

/// A best-first branch-and-bound solver for the Traveling Salesperson
/// Problem. The solver instance owns reusable frontier storage; per-run
/// state lives in an internal search session.
pub struct BnbSolver<T>
where
    T: SolverNumeric,
{
    frontier: Frontier<T>,
}

impl<T> Default for BnbSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: SolverNumeric,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            frontier: Frontier::new(),
        }
    }

    /// Creates a new solver instance with preallocated frontier storage.
    ///
    /// # Note
    ///
    /// This only moves allocation cost to construction time; the solver
    /// grows its storage on demand either way.
    #[inline]
    pub fn with_frontier_capacity(capacity: usize) -> Self {
        Self {
            frontier: Frontier::with_capacity(capacity),
        }
    }

    /// Solves the given scenario to proven optimality or until the monitor
    /// requests termination. The incumbent starts empty; the first feasible
    /// terminal state found becomes the initial best solution.
    #[inline]
    pub fn solve<S>(&mut self, matrix: &CostMatrix<T>, monitor: S) -> BnbSolverOutcome<T>
    where
        S: SearchMonitor<T>,
    {
        self.solve_internal(matrix, None, monitor)
    }

    /// Solves the given scenario with a warm start: the seed tour becomes
    /// the initial incumbent, so the search starts pruning against its cost
    /// immediately. The seed does not count as a solution found by the
    /// search.
    #[inline]
    pub fn solve_with_warm_start<S>(
        &mut self,
        matrix: &CostMatrix<T>,
        monitor: S,
        warm_start: &Tour<T>,
    ) -> BnbSolverOutcome<T>
    where
        S: SearchMonitor<T>,
    {
        debug_assert!(
            warm_start.num_cities() == matrix.num_cities(),
            "called `BnbSolver::solve_with_warm_start` with a seed for {} cities on a {}-city scenario",
            warm_start.num_cities(),
            matrix.num_cities()
        );

        self.solve_internal(matrix, Some(warm_start), monitor)
    }

    #[inline(always)]
    fn solve_internal<S>(
        &mut self,
        matrix: &CostMatrix<T>,
        warm_start: Option<&Tour<T>>,
        mut monitor: S,
    ) -> BnbSolverOutcome<T>
    where
        S: SearchMonitor<T>,
    {
        let session = BnbSearchSession::new(self, matrix, warm_start, &mut monitor);
        let outcome = session.run();
        self.frontier.reset();
        outcome
    }
}

/// A search session encapsulating the state and logic of a single run.
struct BnbSearchSession<'a, T, S>
where
    T: SolverNumeric,
{
    solver: &'a mut BnbSolver<T>,
    matrix: &'a CostMatrix<T>,
    monitor: &'a mut S,
    incumbent: Incumbent<T>,
    stats: BnbSolverStatistics<T>,
    start_time: std::time::Instant,
}

impl<'a, T, S> BnbSearchSession<'a, T, S>
where
    T: SolverNumeric,
    S: SearchMonitor<T>,
{
    /// Creates a new search session, seeding the incumbent from the warm
    /// start when one is given.
    fn new(
        solver: &'a mut BnbSolver<T>,
        matrix: &'a CostMatrix<T>,
        warm_start: Option<&Tour<T>>,
        monitor: &'a mut S,
    ) -> Self {
        let mut incumbent = Incumbent::new();
        if let Some(seed) = warm_start {
            // The seed enters without touching the solutions-found counter.
            incumbent.try_install(seed.clone());
        }

        Self {
            solver,
            matrix,
            monitor,
            incumbent,
            stats: BnbSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the search session.
    fn run(mut self) -> BnbSolverOutcome<T> {
        self.monitor.on_enter_search(self.matrix, &self.stats);
        self.initialize();

        let termination_reason: TerminationReason = loop {
            self.monitor.on_step(&self.stats);

            if let SearchCommand::Terminate(reason) = self.monitor.search_command(&self.stats) {
                break TerminationReason::Aborted(reason);
            }

            let Some(node) = self.solver.frontier.pop() else {
                break if self.incumbent.has_solution() {
                    TerminationReason::OptimalityProven
                } else {
                    TerminationReason::InfeasibilityProven
                };
            };

            // Bounds are admissible: no descendant of this state can beat
            // the incumbent, so the whole subtree is discarded at once.
            if node.bound() >= self.incumbent.upper_bound() {
                self.stats.on_state_pruned();
                self.monitor.on_prune(PruneReason::BoundDominated, &self.stats);
                continue;
            }

            self.expand(node);
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize_result(termination_reason)
    }

    /// Builds the root state and queues it.
    ///
    /// The tour origin is fixed to city 0: a Hamiltonian cycle visits every
    /// city, so the optimum does not depend on where the cycle is rooted.
    fn initialize(&mut self) {
        let root = SearchNode::root(self.matrix, CityIndex::new(0));
        self.stats.set_root_lower_bound(root.bound());
        self.stats.on_state_created();
        self.solver.frontier.push(root);
        self.stats.on_frontier_size(self.solver.frontier.len() as u64);
    }

    /// Expands a popped state into its children.
    fn expand(&mut self, node: SearchNode<T>) {
        self.stats.on_state_expanded();

        for next in node.unvisited() {
            // Children over ∞ edges are never materialized.
            let Some(child) = node.child(next) else {
                continue;
            };
            self.stats.on_state_created();

            if child.is_terminal() {
                self.try_complete(child);
            } else if child.bound() < self.incumbent.upper_bound() {
                self.solver.frontier.push(child);
            } else {
                // Dominated children are dropped instead of queued; this
                // keeps the frontier small without changing the result.
                self.stats.on_state_pruned();
                self.monitor.on_prune(PruneReason::BoundDominated, &self.stats);
            }
        }

        self.stats.on_frontier_size(self.solver.frontier.len() as u64);
    }

    /// Closes a terminal state, validates it as a tour, and offers it to the
    /// incumbent.
    fn try_complete(&mut self, terminal: SearchNode<T>) {
        let Some(cost) = terminal.finalized_bound() else {
            // The closing edge back to the origin is ∞.
            self.stats.on_state_pruned();
            self.monitor.on_prune(PruneReason::Infeasible, &self.stats);
            return;
        };

        if cost >= self.incumbent.upper_bound() {
            self.stats.on_state_pruned();
            self.monitor.on_prune(PruneReason::BoundDominated, &self.stats);
            return;
        }

        // Run the candidate through the tour validator before accepting it.
        match Tour::from_cycle(self.matrix, terminal.into_cycle()) {
            Ok(tour) => {
                debug_assert_eq!(
                    tour.cost(),
                    cost,
                    "finalized bound of a terminal state must equal the validated tour cost"
                );

                self.stats.on_solution_found();
                self.monitor.on_solution_found(&tour, &self.stats);
                let installed = self.incumbent.try_install(tour);
                debug_assert!(
                    installed,
                    "a terminal state cheaper than the incumbent must install"
                );
            }
            Err(_) => {
                self.stats.on_state_pruned();
                self.monitor.on_prune(PruneReason::Infeasible, &self.stats);
            }
        }
    }

    /// Finalizes the solver result based on the incumbent and the
    /// termination reason.
    ///
    /// # Note
    ///
    /// This consumes self.
    fn finalize_result(self, reason: TerminationReason) -> BnbSolverOutcome<T> {
        match reason {
            TerminationReason::OptimalityProven => {
                let tour = self
                    .incumbent
                    .into_tour()
                    .expect("expected an incumbent solution when termination is OptimalityProven");
                BnbSolverOutcome::optimal(tour, self.stats)
            }
            TerminationReason::InfeasibilityProven => BnbSolverOutcome::infeasible(self.stats),
            TerminationReason::Aborted(reason) => {
                BnbSolverOutcome::aborted(self.incumbent.into_tour(), reason, self.stats)
            }
        }
    }
}
