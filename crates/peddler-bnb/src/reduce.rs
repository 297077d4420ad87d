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

//! Reduced working matrix for lower-bound computation.
//!
//! `ReducedMatrix<T>` is the per-node mutable counterpart of the immutable
//! `CostMatrix<T>`: every search node owns one copy, excludes the rows,
//! columns, and single edges its committed path rules out, and then reduces
//! it. Reduction subtracts the minimum finite value of every row and then of
//! every column (when that minimum is nonzero), accumulating the subtracted
//! amounts. The accumulated delta is an admissible lower-bound increment:
//! every completing tour must still use exactly one finite outgoing edge per
//! live row and one finite incoming edge per live column, so subtracting the
//! minimum cannot overestimate the cheapest completion.
//!
//! A matrix is *reduced* when every row and column that is not entirely ∞
//! contains at least one zero; reducing a reduced matrix yields a zero delta.

use crate::num::SolverNumeric;
use peddler_model::{cost::EdgeCost, index::CityIndex, matrix::CostMatrix};

/// A mutable N×N working matrix carried by one search node.
///
/// Entries excluded by the committed partial tour are set to ∞; all-∞ rows
/// and columns are skipped by reduction. Cloning a `ReducedMatrix` is the
/// way child nodes derive their own copy.
#[derive(Clone, PartialEq, Eq)]
pub struct ReducedMatrix<T>
where
    T: SolverNumeric,
{
    entries: Vec<EdgeCost<T>>, // len = num_cities * num_cities
    num_cities: usize,
}

impl<T> ReducedMatrix<T>
where
    T: SolverNumeric,
{
    /// Creates a working copy of the immutable scenario matrix.
    #[inline]
    pub fn from_cost_matrix(matrix: &CostMatrix<T>) -> Self {
        Self {
            entries: matrix.entries().to_vec(),
            num_cities: matrix.num_cities(),
        }
    }

    /// Returns the number of cities of the underlying scenario.
    #[inline]
    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    /// Returns the current entry for the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, from: CityIndex, to: CityIndex) -> EdgeCost<T> {
        debug_assert!(
            from.get() < self.num_cities && to.get() < self.num_cities,
            "called `ReducedMatrix::cost` with city index out of bounds: the len is {} but the indices are ({}, {})",
            self.num_cities,
            from.get(),
            to.get()
        );

        self.entries[from.get() * self.num_cities + to.get()]
    }

    /// Excludes every outgoing edge of `row` (the city's one outgoing edge
    /// has been committed).
    #[inline]
    pub fn exclude_row(&mut self, row: CityIndex) {
        let start = row.get() * self.num_cities;
        for entry in &mut self.entries[start..start + self.num_cities] {
            *entry = EdgeCost::infinite();
        }
    }

    /// Excludes every incoming edge of `column` (the city's one incoming edge
    /// has been committed).
    #[inline]
    pub fn exclude_column(&mut self, column: CityIndex) {
        let mut offset = column.get();
        for _ in 0..self.num_cities {
            self.entries[offset] = EdgeCost::infinite();
            offset += self.num_cities;
        }
    }

    /// Excludes the single edge `from -> to`.
    #[inline]
    pub fn exclude_edge(&mut self, from: CityIndex, to: CityIndex) {
        self.entries[from.get() * self.num_cities + to.get()] = EdgeCost::infinite();
    }

    /// Reduces the matrix in place and returns the accumulated bound delta.
    ///
    /// Rows first, then columns: for each line whose minimum finite entry is
    /// nonzero, that minimum is subtracted from every finite entry of the
    /// line and added to the delta. Lines that are entirely ∞ contribute
    /// nothing. Calling `reduce` on an already reduced matrix returns zero.
    pub fn reduce(&mut self) -> T {
        let n = self.num_cities;
        let mut delta = T::zero();

        for row in 0..n {
            let start = row * n;
            let min = Self::line_min(self.entries[start..start + n].iter().copied());
            if let Some(min) = min {
                if min > T::zero() {
                    for entry in &mut self.entries[start..start + n] {
                        if entry.is_finite() {
                            *entry = EdgeCost::finite(entry.unwrap() - min);
                        }
                    }
                    delta = delta.saturating_add(min);
                }
            }
        }

        for column in 0..n {
            let min = Self::line_min((0..n).map(|row| self.entries[row * n + column]));
            if let Some(min) = min {
                if min > T::zero() {
                    for row in 0..n {
                        let entry = &mut self.entries[row * n + column];
                        if entry.is_finite() {
                            *entry = EdgeCost::finite(entry.unwrap() - min);
                        }
                    }
                    delta = delta.saturating_add(min);
                }
            }
        }

        delta
    }

    /// Minimum finite value of one line, or `None` when the line is all ∞.
    #[inline]
    fn line_min(line: impl Iterator<Item = EdgeCost<T>>) -> Option<T> {
        let mut min: Option<T> = None;
        for entry in line {
            if let Some(value) = entry.into_option() {
                min = Some(match min {
                    Some(current) => current.min(value),
                    None => value,
                });
            }
        }
        min
    }
}

impl<T> std::fmt::Debug for ReducedMatrix<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReducedMatrix(num_cities: {})", self.num_cities)
    }
}
