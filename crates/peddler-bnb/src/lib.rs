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

//! Peddler-BnB: best-first branch-and-bound for the TSP
//!
//! Exact solver engine over `peddler_model::matrix::CostMatrix<T>`. Partial
//! tours are explored best-first: a bound-ordered frontier always yields the
//! most promising open state, lower bounds come from row/column matrix
//! reduction, and an incumbent (best solution so far) prunes everything that
//! provably cannot improve on it.
//!
//! Core flow
//! - Build a validated `CostMatrix<T>`.
//! - Optionally produce a warm-start `Tour<T>` with an external heuristic.
//! - Run `bnb::BnbSolver`, optionally wiring `monitor` implementations for
//!   time limits, logging, or custom early stopping.
//! - Inspect the returned `result::BnbSolverOutcome` for the tour,
//!   termination reason, and search statistics.
//!
//! Design highlights
//! - Value-type search nodes: each node owns its reduced matrix copy; nothing
//!   is mutated after construction, so frontier ownership is trivial.
//! - The frontier is a total order over extracted `(bound, depth, seq)` keys,
//!   never over node identity, which makes runs reproducible.
//! - Counters are explicit fields on `stats::BnbSolverStatistics`, threaded
//!   through the driver, never globals.
//!
//! Guarantees
//! - Reduction deltas are admissible lower-bound increments; child bounds are
//!   monotonically non-decreasing.
//! - Exhausting the frontier proves optimality (or infeasibility when no
//!   feasible tour was ever found). A monitor abort yields the best feasible
//!   tour found so far without an optimality claim.
//!
//! Module map
//! - `reduce`: per-node working matrix with row/column reduction.
//! - `node`: immutable search nodes, expansion, finalization.
//! - `frontier`: bound-ordered priority frontier.
//! - `incumbent`: best-solution-so-far holder.
//! - `bnb`: the solver engine and session orchestration.
//! - `monitor`: search monitors (time limit, log, composite, no-op).
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.
//! - `num`: numeric bounds for the objective type.

pub mod bnb;
pub mod frontier;
pub mod incumbent;
pub mod monitor;
pub mod node;
pub mod num;
pub mod reduce;
pub mod result;
pub mod stats;
