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

//! Validated travel-cost matrix for TSP instances.
//!
//! `CostMatrix<T>` is the immutable contract between scenario construction and
//! the search engine: an N×N matrix of `EdgeCost<T>` entries in flat row-major
//! storage, with the diagonal forced to ∞ (no self-loops). Costs may be
//! asymmetric and need not satisfy the triangle inequality.
//!
//! Construction validates the scenario and fails fast with a `ScenarioError`
//! before any search can start: fewer than two cities, ragged rows, and
//! negative costs are all rejected here, so downstream code never has to
//! re-check instance shape.

use crate::{cost::EdgeCost, index::CityIndex};
use num_traits::{PrimInt, Signed};

#[inline(always)]
fn flatten_index(num_cities: usize, from: CityIndex, to: CityIndex) -> usize {
    from.get() * num_cities + to.get()
}

/// The error type for scenario validation.
///
/// Any of these conditions rejects a solve request before the search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// The scenario has fewer than two cities; no tour exists.
    TooFewCities { num_cities: usize },
    /// A row of the cost table does not have exactly N entries.
    NotSquare {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// A finite cost entry is negative.
    NegativeCost { from: CityIndex, to: CityIndex },
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewCities { num_cities } => {
                write!(
                    f,
                    "A scenario needs at least 2 cities, but {} were given",
                    num_cities
                )
            }
            Self::NotSquare {
                row,
                width,
                expected,
            } => {
                write!(
                    f,
                    "Cost table is not square: row {} has {} entries, expected {}",
                    row, width, expected
                )
            }
            Self::NegativeCost { from, to } => {
                write!(f, "Negative travel cost from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for ScenarioError {}

/// The immutable N×N travel-cost matrix of a TSP scenario.
///
/// Entries are stored row-major: `cost(from, to)` is the cost of travelling
/// from city `from` to city `to`. The diagonal is always ∞. The matrix never
/// changes after construction; the search engine works on its own reduced
/// working copies.
#[derive(Clone, PartialEq, Eq)]
pub struct CostMatrix<T>
where
    T: PrimInt + Signed,
{
    entries: Vec<EdgeCost<T>>, // len = num_cities * num_cities
    num_cities: usize,
}

impl<T> CostMatrix<T>
where
    T: PrimInt + Signed,
{
    /// Builds a matrix from a cost accessor, the in-process equivalent of a
    /// city list with a pairwise cost function. The accessor returns `None`
    /// for forbidden edges (∞). Diagonal entries are forced to ∞ regardless
    /// of what the accessor returns.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::TooFewCities` for `num_cities < 2` and
    /// `ScenarioError::NegativeCost` if the accessor yields a negative value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use peddler_model::matrix::CostMatrix;
    /// # use peddler_model::index::CityIndex;
    ///
    /// let matrix = CostMatrix::<i64>::from_fn(3, |from, to| {
    ///     Some((from.get() as i64 + 1) * (to.get() as i64 + 1))
    /// })
    /// .unwrap();
    /// assert_eq!(matrix.num_cities(), 3);
    /// assert!(matrix.cost(CityIndex::new(1), CityIndex::new(1)).is_infinite());
    /// ```
    pub fn from_fn<F>(num_cities: usize, mut cost_fn: F) -> Result<Self, ScenarioError>
    where
        F: FnMut(CityIndex, CityIndex) -> Option<T>,
    {
        if num_cities < 2 {
            return Err(ScenarioError::TooFewCities { num_cities });
        }

        let mut entries = Vec::with_capacity(num_cities * num_cities);
        for i in 0..num_cities {
            for j in 0..num_cities {
                let from = CityIndex::new(i);
                let to = CityIndex::new(j);

                if i == j {
                    entries.push(EdgeCost::infinite());
                    continue;
                }

                match cost_fn(from, to) {
                    Some(value) if value < T::zero() => {
                        return Err(ScenarioError::NegativeCost { from, to });
                    }
                    Some(value) => entries.push(EdgeCost::from_option(Some(value))),
                    None => entries.push(EdgeCost::infinite()),
                }
            }
        }

        Ok(Self {
            entries,
            num_cities,
        })
    }

    /// Builds a matrix from explicit rows, `None` meaning ∞.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::TooFewCities`, `ScenarioError::NotSquare`, or
    /// `ScenarioError::NegativeCost` for malformed input.
    pub fn from_rows(rows: &[Vec<Option<T>>]) -> Result<Self, ScenarioError> {
        let num_cities = rows.len();
        if num_cities < 2 {
            return Err(ScenarioError::TooFewCities { num_cities });
        }

        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != num_cities {
                return Err(ScenarioError::NotSquare {
                    row,
                    width: entries.len(),
                    expected: num_cities,
                });
            }
        }

        Self::from_fn(num_cities, |from, to| rows[from.get()][to.get()])
    }

    /// Returns the number of cities in this scenario.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Returns the travel cost from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, from: CityIndex, to: CityIndex) -> EdgeCost<T> {
        debug_assert!(
            from.get() < self.num_cities && to.get() < self.num_cities,
            "called `CostMatrix::cost` with city index out of bounds: the len is {} but the indices are ({}, {})",
            self.num_cities,
            from.get(),
            to.get()
        );

        self.entries[flatten_index(self.num_cities, from, to)]
    }

    /// Returns the flat row-major entry slice.
    #[inline]
    pub fn entries(&self) -> &[EdgeCost<T>] {
        &self.entries
    }

    /// Iterates over all city indices of this scenario.
    #[inline]
    pub fn cities(&self) -> impl Iterator<Item = CityIndex> + use<T> {
        (0..self.num_cities).map(CityIndex::new)
    }
}

impl<T> std::fmt::Debug for CostMatrix<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CostMatrix(num_cities: {})", self.num_cities)
    }
}

impl<T> std::fmt::Display for CostMatrix<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CostMatrix ({} cities)", self.num_cities)?;
        for i in 0..self.num_cities {
            write!(f, "  ")?;
            for j in 0..self.num_cities {
                let entry = self.entries[i * self.num_cities + j];
                write!(f, "{:>8} ", format!("{}", entry))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn ci(i: usize) -> CityIndex {
        CityIndex::new(i)
    }

    /// The four-city instance used throughout the solver tests:
    /// optimal tour 0-1-2-3-0 (or its reverse) with cost 8.
    fn four_city_rows() -> Vec<Vec<Option<IntegerType>>> {
        vec![
            vec![None, Some(1), None, Some(4)],
            vec![Some(1), None, Some(2), None],
            vec![None, Some(2), None, Some(1)],
            vec![Some(4), None, Some(1), None],
        ]
    }

    #[test]
    fn test_from_rows_valid_instance() {
        let matrix = CostMatrix::<IntegerType>::from_rows(&four_city_rows()).unwrap();
        assert_eq!(matrix.num_cities(), 4);
        assert_eq!(matrix.cost(ci(0), ci(1)).unwrap(), 1);
        assert_eq!(matrix.cost(ci(3), ci(0)).unwrap(), 4);
        assert!(matrix.cost(ci(0), ci(2)).is_infinite());
    }

    #[test]
    fn test_single_city_is_rejected() {
        let rows: Vec<Vec<Option<IntegerType>>> = vec![vec![None]];
        let err = CostMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(err, ScenarioError::TooFewCities { num_cities: 1 });
    }

    #[test]
    fn test_empty_scenario_is_rejected() {
        let rows: Vec<Vec<Option<IntegerType>>> = Vec::new();
        let err = CostMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(err, ScenarioError::TooFewCities { num_cities: 0 });
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let rows: Vec<Vec<Option<IntegerType>>> = vec![
            vec![None, Some(1), Some(2)],
            vec![Some(1), None],
            vec![Some(2), Some(1), None],
        ];
        let err = CostMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            ScenarioError::NotSquare {
                row: 1,
                width: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let rows: Vec<Vec<Option<IntegerType>>> = vec![
            vec![None, Some(1)],
            vec![Some(-1), None],
        ];
        let err = CostMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            ScenarioError::NegativeCost {
                from: ci(1),
                to: ci(0)
            }
        );
    }

    #[test]
    fn test_diagonal_is_forced_infinite() {
        // The accessor claims a finite self-loop cost; the matrix must ignore it.
        let matrix = CostMatrix::<IntegerType>::from_fn(3, |_, _| Some(1)).unwrap();
        for city in matrix.cities() {
            assert!(matrix.cost(city, city).is_infinite());
        }
    }

    #[test]
    fn test_asymmetric_costs_are_preserved() {
        let matrix = CostMatrix::<IntegerType>::from_fn(3, |from, to| {
            Some((from.get() * 10 + to.get()) as IntegerType)
        })
        .unwrap();
        assert_eq!(matrix.cost(ci(0), ci(1)).unwrap(), 1);
        assert_eq!(matrix.cost(ci(1), ci(0)).unwrap(), 10);
    }

    #[test]
    fn test_error_display() {
        let err = ScenarioError::TooFewCities { num_cities: 1 };
        assert!(format!("{}", err).contains("at least 2 cities"));
    }
}
