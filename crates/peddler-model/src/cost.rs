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

use num_traits::Signed;

/// A travel cost that may be infinite (no edge between two cities).
///
/// Instead of using `Option<T>`, this type uses a sentinel encoding to avoid
/// the additional discriminant that `Option` typically introduces for integer
/// types. Search nodes each carry an N×N matrix of these values, so keeping
/// every entry to a single machine word matters for memory traffic during
/// expansion and reduction.
///
/// Encoding:
/// - Non-negative values (>= 0) represent a concrete finite travel cost.
/// - Negative values (<= -1) are reserved to indicate "no edge" (∞).
///
/// Valid travel costs are non-negative by the scenario contract; negative
/// inputs are rejected during matrix construction, never stored.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeCost<T>(T)
where
    T: Signed;

impl<T> EdgeCost<T>
where
    T: Copy + Signed + PartialOrd,
{
    /// Creates an `EdgeCost` representing a concrete finite cost.
    ///
    /// # Panics
    ///
    /// This function will panic if the provided value is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use peddler_model::cost::EdgeCost;
    ///
    /// let cost = EdgeCost::finite(5i64);
    /// assert!(cost.is_finite());
    /// assert_eq!(cost.raw(), 5);
    /// ```
    pub fn finite(value: T) -> Self
    where
        T: std::fmt::Display,
    {
        assert!(
            value >= T::zero(),
            "called `EdgeCost::finite` with a negative value: {}",
            value
        );

        EdgeCost(value)
    }

    /// Creates an `EdgeCost` representing "no edge" (∞).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use peddler_model::cost::EdgeCost;
    ///
    /// let cost: EdgeCost<i64> = EdgeCost::infinite();
    /// assert!(cost.is_infinite());
    /// ```
    #[inline]
    pub fn infinite() -> Self {
        EdgeCost(-T::one())
    }

    /// Creates an `EdgeCost` from an `Option<T>`, mapping `None` to ∞.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use peddler_model::cost::EdgeCost;
    ///
    /// assert!(EdgeCost::from_option(Some(3i64)).is_finite());
    /// assert!(EdgeCost::<i64>::from_option(None).is_infinite());
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => EdgeCost(v),
            None => Self::infinite(),
        }
    }

    /// Checks if this cost is infinite (no edge).
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.0 < T::zero()
    }

    /// Checks if this cost is a concrete finite value.
    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// Returns the raw value, including the sentinel if present.
    #[inline]
    pub fn raw(&self) -> T {
        self.0
    }

    /// Converts this cost back into an `Option<T>` (`None` for ∞).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use peddler_model::cost::EdgeCost;
    ///
    /// assert_eq!(EdgeCost::finite(4i64).into_option(), Some(4));
    /// assert_eq!(EdgeCost::<i64>::infinite().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(&self) -> Option<T> {
        if self.is_infinite() { None } else { Some(self.0) }
    }

    /// Unwraps the finite cost, panicking on ∞.
    ///
    /// # Panics
    ///
    /// This function will panic if called on an infinite cost.
    pub fn unwrap(&self) -> T {
        if self.is_infinite() {
            panic!("called `EdgeCost::unwrap()` on an infinite cost")
        }
        self.0
    }

    /// Unwraps the finite cost, returning a default value on ∞.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use peddler_model::cost::EdgeCost;
    ///
    /// assert_eq!(EdgeCost::finite(8i64).unwrap_or(0), 8);
    /// assert_eq!(EdgeCost::<i64>::infinite().unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(&self, default: T) -> T {
        if self.is_infinite() { default } else { self.0 }
    }

    /// Checks if this cost is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == T::zero()
    }
}

impl<T> std::fmt::Debug for EdgeCost<T>
where
    T: Copy + Signed + PartialOrd + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_infinite() {
            write!(f, "EdgeCost(Inf)")
        } else {
            write!(f, "EdgeCost({:?})", self.0)
        }
    }
}

impl<T> std::fmt::Display for EdgeCost<T>
where
    T: Copy + Signed + PartialOrd + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_infinite() {
            write!(f, "Inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl<T> From<Option<T>> for EdgeCost<T>
where
    T: Copy + Signed + PartialOrd,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        EdgeCost::from_option(value)
    }
}

impl<T> From<EdgeCost<T>> for Option<T>
where
    T: Copy + Signed + PartialOrd,
{
    #[inline]
    fn from(val: EdgeCost<T>) -> Self {
        val.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_finite_round_trip() {
        let cost = EdgeCost::finite(7 as IntegerType);
        assert!(cost.is_finite());
        assert!(!cost.is_infinite());
        assert_eq!(cost.raw(), 7);
        assert_eq!(cost.unwrap(), 7);
    }

    #[test]
    fn test_zero_is_finite() {
        let cost = EdgeCost::finite(0 as IntegerType);
        assert!(cost.is_finite());
        assert!(cost.is_zero());
    }

    #[test]
    fn test_infinite_sentinel() {
        let cost: EdgeCost<IntegerType> = EdgeCost::infinite();
        assert!(cost.is_infinite());
        assert_eq!(cost.into_option(), None);
    }

    #[test]
    #[should_panic(expected = "called `EdgeCost::finite` with a negative value")]
    fn test_finite_rejects_negative() {
        let _ = EdgeCost::finite(-3 as IntegerType);
    }

    #[test]
    #[should_panic(expected = "called `EdgeCost::unwrap()` on an infinite cost")]
    fn test_unwrap_panics_on_infinite() {
        let cost: EdgeCost<IntegerType> = EdgeCost::infinite();
        let _ = cost.unwrap();
    }

    #[test]
    fn test_from_option_and_back() {
        let some: EdgeCost<IntegerType> = Some(4).into();
        let none: EdgeCost<IntegerType> = None.into();
        assert_eq!(Option::<IntegerType>::from(some), Some(4));
        assert_eq!(Option::<IntegerType>::from(none), None);
    }

    #[test]
    fn test_unwrap_or_default() {
        assert_eq!(EdgeCost::finite(8 as IntegerType).unwrap_or(0), 8);
        assert_eq!(EdgeCost::<IntegerType>::infinite().unwrap_or(0), 0);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(format!("{}", EdgeCost::finite(3 as IntegerType)), "3");
        assert_eq!(format!("{}", EdgeCost::<IntegerType>::infinite()), "Inf");
        assert_eq!(
            format!("{:?}", EdgeCost::<IntegerType>::infinite()),
            "EdgeCost(Inf)"
        );
    }
}
