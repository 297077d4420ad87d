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

use crate::{
    monitor::search_monitor::{PruneReason, SearchMonitor},
    num::SolverNumeric,
    stats::BnbSolverStatistics,
};
use peddler_model::{matrix::CostMatrix, tour::Tour};
use std::time::{Duration, Instant};

/// A monitor that prints a progress table to stdout at a fixed interval.
///
/// Clock reads are throttled by a step bitmask so the hot loop stays cheap;
/// a line is emitted at most once per `log_interval`.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    steps: u64,
    best_cost: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: SolverNumeric,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            steps: 0,
            best_cost: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<12} | {:<12} | {:<12} | {:<12} | {:<12}",
            "Elapsed", "Created", "Expanded", "Pruned", "Frontier", "Best"
        );
        println!("{}", "-".repeat(82));
    }

    #[inline(always)]
    fn log_line(&mut self, stats: &BnbSolverStatistics<T>) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_cost_str = match &self.best_cost {
            Some(cost) => format!("{}", cost),
            None => "Inf".to_string(),
        };

        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<12} | {:<12} | {:<12} | {:<12} | {:<12}",
            elapsed_field,
            stats.states_created,
            stats.states_expanded,
            stats.states_pruned,
            stats.max_frontier_size,
            best_cost_str
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 0xFFF)
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, _matrix: &CostMatrix<T>, _statistics: &BnbSolverStatistics<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.steps = 0;
        self.best_cost = None;
        self.print_header();
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>) {
        self.log_line(statistics);
        println!("{}", "-".repeat(82));
        println!("Search finished.");
    }

    #[inline(always)]
    fn on_step(&mut self, statistics: &BnbSolverStatistics<T>) {
        self.steps = self.steps.wrapping_add(1);
        if (self.steps & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(statistics);
        }
    }

    fn on_prune(&mut self, _reason: PruneReason, _statistics: &BnbSolverStatistics<T>) {}

    fn on_solution_found(&mut self, tour: &Tour<T>, _statistics: &BnbSolverStatistics<T>) {
        self.best_cost = Some(tour.cost());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_solution_updates_best_cost() {
        let mut monitor = LogMonitor::<IntegerType>::default();
        assert!(monitor.best_cost.is_none());

        let matrix =
            peddler_model::matrix::CostMatrix::<IntegerType>::from_fn(3, |_, _| Some(2)).unwrap();
        let tour = Tour::from_cycle(
            &matrix,
            (0..3).map(peddler_model::index::CityIndex::new).collect(),
        )
        .unwrap();

        monitor.on_solution_found(&tour, &BnbSolverStatistics::default());
        assert_eq!(monitor.best_cost, Some(6));
    }

    #[test]
    fn test_enter_search_resets_state() {
        let mut monitor = LogMonitor::<IntegerType>::new(Duration::from_secs(1), 0xF);
        monitor.steps = 99;
        monitor.best_cost = Some(5);

        let matrix =
            peddler_model::matrix::CostMatrix::<IntegerType>::from_fn(2, |_, _| Some(1)).unwrap();
        monitor.on_enter_search(&matrix, &BnbSolverStatistics::default());
        assert_eq!(monitor.steps, 0);
        assert!(monitor.best_cost.is_none());
    }
}
