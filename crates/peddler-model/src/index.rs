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

//! # Strongly Typed City Index (Zero-Cost)
//!
//! A transparent wrapper around `usize` identifying a city within one problem
//! instance. Using a dedicated type instead of raw `usize` prevents city
//! indices from being confused with path positions or matrix offsets, while
//! compiling down to a plain machine word.

/// A strongly typed index identifying a city of a problem instance.
///
/// City indices are dense: a scenario with `n` cities uses exactly the
/// indices `0..n`.
///
/// # Examples
///
/// ```rust
/// # use peddler_model::index::CityIndex;
///
/// let city = CityIndex::new(3);
/// assert_eq!(city.get(), 3);
/// assert_eq!(format!("{}", city), "CityIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityIndex {
    index: usize,
}

impl CityIndex {
    /// Creates a new `CityIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Checks if the index is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use peddler_model::index::CityIndex;
    ///
    /// assert!(CityIndex::new(0).is_zero());
    /// assert!(!CityIndex::new(5).is_zero());
    /// ```
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }
}

impl std::fmt::Debug for CityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CityIndex({})", self.index)
    }
}

impl std::fmt::Display for CityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CityIndex({})", self.index)
    }
}

impl From<usize> for CityIndex {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<CityIndex> for usize {
    #[inline(always)]
    fn from(index: CityIndex) -> Self {
        index.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get_round_trip() {
        let index = CityIndex::new(42);
        assert_eq!(index.get(), 42);
    }

    #[test]
    fn test_is_zero() {
        assert!(CityIndex::new(0).is_zero());
        assert!(!CityIndex::new(1).is_zero());
    }

    #[test]
    fn test_ordering_follows_underlying_index() {
        let a = CityIndex::new(1);
        let b = CityIndex::new(2);
        assert!(a < b);
        assert_eq!(a, CityIndex::new(1));
    }

    #[test]
    fn test_conversions() {
        let index: CityIndex = 7usize.into();
        assert_eq!(index, CityIndex::new(7));
        let raw: usize = index.into();
        assert_eq!(raw, 7);
    }

    #[test]
    fn test_display_and_debug_format() {
        let index = CityIndex::new(9);
        assert_eq!(format!("{}", index), "CityIndex(9)");
        assert_eq!(format!("{:?}", index), "CityIndex(9)");
    }
}
