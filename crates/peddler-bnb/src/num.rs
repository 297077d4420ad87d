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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the engine. `SolverNumeric` collects the
//! integer capabilities the solver needs — intrinsic traits (`PrimInt`,
//! `Signed`), saturating and checked arithmetic, and formatting — into a
//! single alias so generic signatures stay readable and overflow handling
//! stays consistent.
//!
//! The engine remains generic over signed integer objective types (`i16`,
//! `i32`, `i64`, `isize`). Bound accumulation uses saturating addition, so a
//! bound that would overflow clamps to `T::max_value()`, which is also the
//! "no incumbent yet" sentinel — an overflowing branch simply prunes itself.

use num_traits::{CheckedAdd, CheckedSub, FromPrimitive, PrimInt, SaturatingAdd, SaturatingSub, Signed};
use std::hash::Hash;

/// A trait alias for numeric types that can be used as the solver objective.
/// These are usually the signed integer types `i16`, `i32`, `i64`, and
/// `isize`.
///
/// # Note
///
/// `i128` is intentionally not recommended for performance reasons, though
/// nothing here excludes it.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + SaturatingAdd
    + SaturatingSub
    + CheckedAdd
    + CheckedSub
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + Hash
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + SaturatingAdd
        + SaturatingSub
        + CheckedAdd
        + CheckedSub
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + Hash
{
}
