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

//! Validated Hamiltonian cycles.
//!
//! `Tour<T>` is the solution type of the solver: a cycle visiting every city
//! of a scenario exactly once, together with its exact total cost. The only
//! way to obtain a `Tour` is through `Tour::from_cycle`, which recomputes the
//! cost from the matrix and rejects infeasible or malformed cycles — this is
//! the tour validator of the pipeline, and it is what the search driver runs
//! every candidate through before accepting it as the new best solution.

use crate::{index::CityIndex, matrix::CostMatrix};
use num_traits::{PrimInt, SaturatingAdd, Signed};

/// The error type for tour validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// The cycle does not contain exactly one entry per city.
    LengthMismatch { cycle_len: usize, num_cities: usize },
    /// The cycle names a city the scenario does not have.
    UnknownCity { city: CityIndex },
    /// A city appears more than once in the cycle.
    DuplicateCity { city: CityIndex },
    /// The cycle uses an edge that does not exist (∞ cost).
    MissingEdge { from: CityIndex, to: CityIndex },
}

impl std::fmt::Display for TourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch {
                cycle_len,
                num_cities,
            } => {
                write!(
                    f,
                    "Cycle visits {} cities but the scenario has {}",
                    cycle_len, num_cities
                )
            }
            Self::UnknownCity { city } => {
                write!(f, "Cycle names the unknown city {}", city)
            }
            Self::DuplicateCity { city } => {
                write!(f, "Cycle visits {} more than once", city)
            }
            Self::MissingEdge { from, to } => {
                write!(f, "Cycle uses the missing edge {} -> {}", from, to)
            }
        }
    }
}

impl std::error::Error for TourError {}

/// A complete, feasible tour: every city exactly once, closed back to the
/// origin.
///
/// The cycle stores each city exactly once; the closing edge from the last
/// entry back to `cycle()[0]` is implicit. The stored cost is the exact sum
/// of all N edge costs, including the closing edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour<T> {
    cost: T,
    cycle: Vec<CityIndex>,
}

impl<T> Tour<T>
where
    T: PrimInt + Signed + SaturatingAdd,
{
    /// Validates a cycle against the matrix and constructs the tour.
    ///
    /// Checks that the cycle has exactly one entry per city with no
    /// duplicates, and that every edge — including the implicit closing edge —
    /// is finite. The returned tour carries the recomputed exact cost.
    ///
    /// # Errors
    ///
    /// Returns a `TourError` describing the first violated condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use peddler_model::matrix::CostMatrix;
    /// # use peddler_model::index::CityIndex;
    /// # use peddler_model::tour::Tour;
    ///
    /// let matrix = CostMatrix::<i64>::from_fn(3, |_, _| Some(1)).unwrap();
    /// let cycle = vec![CityIndex::new(0), CityIndex::new(1), CityIndex::new(2)];
    /// let tour = Tour::from_cycle(&matrix, cycle).unwrap();
    /// assert_eq!(tour.cost(), 3);
    /// ```
    pub fn from_cycle(matrix: &CostMatrix<T>, cycle: Vec<CityIndex>) -> Result<Self, TourError> {
        let num_cities = matrix.num_cities();
        if cycle.len() != num_cities {
            return Err(TourError::LengthMismatch {
                cycle_len: cycle.len(),
                num_cities,
            });
        }

        let mut seen = vec![false; num_cities];
        for &city in &cycle {
            if city.get() >= num_cities {
                return Err(TourError::UnknownCity { city });
            }
            if seen[city.get()] {
                return Err(TourError::DuplicateCity { city });
            }
            seen[city.get()] = true;
        }

        let mut cost = T::zero();
        for leg in 0..num_cities {
            let from = cycle[leg];
            let to = cycle[(leg + 1) % num_cities];
            let edge = matrix.cost(from, to);
            if edge.is_infinite() {
                return Err(TourError::MissingEdge { from, to });
            }
            cost = cost.saturating_add(edge.unwrap());
        }

        Ok(Self { cost, cycle })
    }
}

impl<T> Tour<T>
where
    T: Copy,
{
    /// Returns the exact total cost of this tour.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Returns the cycle, one entry per city, closure implicit.
    #[inline]
    pub fn cycle(&self) -> &[CityIndex] {
        &self.cycle
    }

    /// Returns the origin city of this tour.
    #[inline]
    pub fn origin(&self) -> CityIndex {
        self.cycle[0]
    }

    /// Returns the number of cities visited by this tour.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.cycle.len()
    }
}

impl<T> std::fmt::Display for Tour<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tour(cost: {}, cycle: ", self.cost)?;
        for (position, city) in self.cycle.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", city.get())?;
        }
        // Closure back to the origin is implicit in storage, explicit in output.
        if let Some(origin) = self.cycle.first() {
            write!(f, " -> {}", origin.get())?;
        }
        write!(f, ")")
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

    #[test]
    fn test_valid_cycle_cost_is_exact() {
        let matrix = four_city_matrix();
        let tour = Tour::from_cycle(&matrix, vec![ci(0), ci(1), ci(2), ci(3)]).unwrap();
        // 0->1 (1) + 1->2 (2) + 2->3 (1) + 3->0 (4)
        assert_eq!(tour.cost(), 8);
        assert_eq!(tour.origin(), ci(0));
        assert_eq!(tour.num_cities(), 4);
    }

    #[test]
    fn test_cycle_with_missing_edge_is_rejected() {
        let matrix = four_city_matrix();
        // 0 -> 2 does not exist.
        let err = Tour::from_cycle(&matrix, vec![ci(0), ci(2), ci(1), ci(3)]).unwrap_err();
        assert_eq!(
            err,
            TourError::MissingEdge {
                from: ci(0),
                to: ci(2)
            }
        );
    }

    #[test]
    fn test_short_cycle_is_rejected() {
        let matrix = four_city_matrix();
        let err = Tour::from_cycle(&matrix, vec![ci(0), ci(1)]).unwrap_err();
        assert_eq!(
            err,
            TourError::LengthMismatch {
                cycle_len: 2,
                num_cities: 4
            }
        );
    }

    #[test]
    fn test_duplicate_city_is_rejected() {
        let matrix = four_city_matrix();
        let err = Tour::from_cycle(&matrix, vec![ci(0), ci(1), ci(1), ci(3)]).unwrap_err();
        assert_eq!(err, TourError::DuplicateCity { city: ci(1) });
    }

    #[test]
    fn test_out_of_range_city_is_rejected() {
        let matrix = four_city_matrix();
        let err = Tour::from_cycle(&matrix, vec![ci(0), ci(1), ci(2), ci(9)]).unwrap_err();
        assert_eq!(err, TourError::UnknownCity { city: ci(9) });
    }

    #[test]
    fn test_display_shows_explicit_closure() {
        let matrix = four_city_matrix();
        let tour = Tour::from_cycle(&matrix, vec![ci(0), ci(1), ci(2), ci(3)]).unwrap();
        let rendered = format!("{}", tour);
        assert!(rendered.contains("0 -> 1 -> 2 -> 3 -> 0"));
        assert!(rendered.contains("cost: 8"));
    }
}
