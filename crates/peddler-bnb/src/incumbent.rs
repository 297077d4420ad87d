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

//! # Incumbent (Best Solution So Far)
//!
//! Holder for the best complete feasible tour discovered at any point during
//! one solve call. The upper bound starts at the sentinel `T::max_value()`
//! meaning "no incumbent yet" and only ever decreases: a candidate is
//! installed exactly when its cost is strictly smaller than the current
//! bound.
//!
//! The search loop is single-threaded by contract, so the incumbent is a
//! plain value owned by the driver — the fast-path upper-bound read used for
//! pruning is just a field access, no synchronization involved.

use crate::num::SolverNumeric;
use peddler_model::tour::Tour;

/// The best solution found so far, with its cost as a pruning upper bound.
#[derive(Debug, Clone)]
pub struct Incumbent<T>
where
    T: SolverNumeric,
{
    upper_bound: T,
    tour: Option<Tour<T>>,
}

impl<T> Default for Incumbent<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Incumbent<T>
where
    T: SolverNumeric,
{
    /// Creates a new incumbent with no solution installed.
    /// The initial upper bound is the sentinel `T::max_value()`.
    #[inline]
    pub fn new() -> Self {
        Self {
            upper_bound: T::max_value(),
            tour: None,
        }
    }

    /// Returns the current upper bound. Every open state whose lower bound
    /// reaches this value can be pruned.
    #[inline]
    pub fn upper_bound(&self) -> T {
        self.upper_bound
    }

    /// Checks whether a solution has been installed.
    #[inline]
    pub fn has_solution(&self) -> bool {
        self.tour.is_some()
    }

    /// Returns the current best tour, if any.
    #[inline]
    pub fn tour(&self) -> Option<&Tour<T>> {
        self.tour.as_ref()
    }

    /// Attempts to install the candidate as the new best solution.
    /// Returns `true` exactly when the candidate's cost is strictly smaller
    /// than the current upper bound.
    #[inline]
    pub fn try_install(&mut self, candidate: Tour<T>) -> bool {
        if candidate.cost() >= self.upper_bound {
            return false;
        }

        self.upper_bound = candidate.cost();
        self.tour = Some(candidate);
        true
    }

    /// Consumes the incumbent and returns the best tour, if any.
    #[inline]
    pub fn into_tour(self) -> Option<Tour<T>> {
        self.tour
    }
}

impl<T> std::fmt::Display for Incumbent<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_solution() {
            write!(f, "Incumbent(upper_bound: {})", self.upper_bound)
        } else {
            write!(f, "Incumbent(none)")
        }
    }
}
