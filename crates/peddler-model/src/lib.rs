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

//! Peddler-Model: problem data for the Traveling Salesperson Problem
//!
//! This crate holds the validated, immutable inputs and outputs shared by the
//! peddler solver crates. It contains no search logic.
//!
//! Module map
//! - `index`: `CityIndex`, a zero-cost strongly typed city index.
//! - `cost`: `EdgeCost<T>`, a sentinel-encoded finite-or-infinite edge cost.
//! - `matrix`: `CostMatrix<T>`, the validated N×N travel-cost matrix, and the
//!   `ScenarioError` taxonomy for malformed instances.
//! - `tour`: `Tour<T>`, a validated Hamiltonian cycle with its exact cost.
//!
//! Construction of a `CostMatrix` fails fast on invalid scenarios (fewer than
//! two cities, ragged rows, negative costs); everything downstream may assume
//! a well-formed instance.

pub mod cost;
pub mod index;
pub mod matrix;
pub mod tour;
