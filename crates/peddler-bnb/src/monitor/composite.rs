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

//! Monitoring combinators.
//!
//! Provides `CompositeMonitor`, a fan-out monitor that forwards every event
//! to its children. This lets you mix logging, time limits, and custom early
//! stopping without coupling them to the solver.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::search_monitor::{PruneReason, SearchCommand, SearchMonitor},
    num::SolverNumeric,
    stats::BnbSolverStatistics,
};
use peddler_model::{matrix::CostMatrix, tour::Tour};

/// A monitor that aggregates multiple monitors and forwards events to all of
/// them.
pub struct CompositeMonitor<'a, T>
where
    T: SolverNumeric,
{
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: SolverNumeric,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of child monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, matrix: &CostMatrix<T>, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(matrix, statistics);
        }
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline]
    fn on_step(&mut self, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_step(statistics);
        }
    }

    fn on_prune(&mut self, reason: PruneReason, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_prune(reason, statistics);
        }
    }

    fn on_solution_found(&mut self, tour: &Tour<T>, statistics: &BnbSolverStatistics<T>) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(tour, statistics);
        }
    }

    #[inline]
    fn search_command(&mut self, statistics: &BnbSolverStatistics<T>) -> SearchCommand {
        for monitor in &mut self.monitors {
            let command = monitor.search_command(statistics);
            if command != SearchCommand::Continue {
                return command;
            }
        }
        SearchCommand::Continue
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: SolverNumeric,
{
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;

    type IntegerType = i64;

    /// A monitor that can be configured to request termination.
    #[derive(Default)]
    struct ProbeMonitor {
        terminate: bool,
    }

    impl SearchMonitor<IntegerType> for ProbeMonitor {
        fn name(&self) -> &str {
            "ProbeMonitor"
        }

        fn on_enter_search(
            &mut self,
            _matrix: &CostMatrix<IntegerType>,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
        }

        fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics<IntegerType>) {}

        fn on_step(&mut self, _statistics: &BnbSolverStatistics<IntegerType>) {}

        fn on_prune(
            &mut self,
            _reason: PruneReason,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
        }

        fn on_solution_found(
            &mut self,
            _tour: &Tour<IntegerType>,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) {
        }

        fn search_command(
            &mut self,
            _statistics: &BnbSolverStatistics<IntegerType>,
        ) -> SearchCommand {
            if self.terminate {
                SearchCommand::Terminate("probe".to_string())
            } else {
                SearchCommand::Continue
            }
        }
    }

    fn stats() -> BnbSolverStatistics<IntegerType> {
        BnbSolverStatistics::default()
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        assert!(composite.is_empty());
        assert_eq!(composite.search_command(&stats()), SearchCommand::Continue);
    }

    #[test]
    fn test_events_fan_out_to_all_children() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(ProbeMonitor::default());
        composite.add_monitor(NoOperationMonitor::new());
        assert_eq!(composite.len(), 2);

        composite.on_step(&stats());
        composite.on_step(&stats());
        composite.on_prune(PruneReason::BoundDominated, &stats());
        assert_eq!(composite.search_command(&stats()), SearchCommand::Continue);
    }

    #[test]
    fn test_search_command_short_circuits_on_terminate() {
        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(ProbeMonitor { terminate: true });
        composite.add_monitor(NoOperationMonitor::new());

        match composite.search_command(&stats()) {
            SearchCommand::Terminate(reason) => assert_eq!(reason, "probe"),
            other => panic!("expected Terminate, got {:?}", other),
        }
    }
}
