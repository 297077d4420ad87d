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

use crate::stats::BnbSolverStatistics;
use peddler_model::tour::Tour;

/// The qualitative outcome of one solve call.
///
/// Infeasibility is a valid result, not an error: a scenario where no
/// Hamiltonian cycle exists exhausts the frontier without ever producing a
/// feasible terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// No feasible tour exists (proven), or none was found before an abort.
    Infeasible,
    /// The returned tour is a proven global optimum.
    Optimal(Tour<T>),
    /// The returned tour is feasible but not proven optimal.
    Feasible(Tour<T>),
    /// The solver aborted before finding any feasible tour and without
    /// proving infeasibility.
    Unknown,
}

impl<T> SolverResult<T> {
    /// Returns the tour carried by this result, if any.
    #[inline]
    pub fn solution(&self) -> Option<&Tour<T>> {
        match self {
            SolverResult::Optimal(tour) | SolverResult::Feasible(tour) => Some(tour),
            SolverResult::Infeasible | SolverResult::Unknown => None,
        }
    }

    /// Unwraps the optimal tour.
    ///
    /// # Panics
    ///
    /// Panics if this result is not `Optimal`.
    pub fn unwrap_optimal(&self) -> &Tour<T> {
        match self {
            SolverResult::Optimal(tour) => tour,
            _ => panic!("called `SolverResult::unwrap_optimal` on a non-optimal result"),
        }
    }

    /// Unwraps the carried tour, optimal or merely feasible.
    ///
    /// # Panics
    ///
    /// Panics if this result carries no tour.
    pub fn unwrap_feasible(&self) -> &Tour<T> {
        self.solution()
            .expect("called `SolverResult::unwrap_feasible` on a result without a tour")
    }
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: num_traits::PrimInt + num_traits::Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Infeasible => write!(f, "Infeasible"),
            SolverResult::Optimal(tour) => write!(f, "Optimal(cost={})", tour.cost()),
            SolverResult::Feasible(tour) => write!(f, "Feasible(cost={})", tour.cost()),
            SolverResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why the search loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The frontier was exhausted with an incumbent installed: every
    /// remaining possibility was proven no better.
    OptimalityProven,
    /// The frontier was exhausted without any feasible tour ever appearing.
    InfeasibilityProven,
    /// A monitor requested termination (time limit, external interrupt, ...).
    /// The string describes the reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of the solver after termination: the qualitative result, the
/// reason the loop stopped, and the collected statistics.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics<T>,
}

impl<T> BnbSolverOutcome<T> {
    #[inline]
    pub fn optimal(tour: Tour<T>, statistics: BnbSolverStatistics<T>) -> Self {
        Self {
            result: SolverResult::Optimal(tour),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: BnbSolverStatistics<T>) -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(tour: Option<Tour<T>>, reason: R, statistics: BnbSolverStatistics<T>) -> Self
    where
        R: Into<String>,
    {
        let result = match tour {
            Some(tour) => SolverResult::Feasible(tour),
            None => SolverResult::Unknown,
        };

        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics<T> {
        &self.statistics
    }

    /// Returns the best tour found, if any.
    #[inline]
    pub fn best_tour(&self) -> Option<&Tour<T>> {
        self.result.solution()
    }
}
