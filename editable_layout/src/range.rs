// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A `(start, length)` span of text positions, in UTF-16 code units.
///
/// This is the unit ranged attributes are scoped to. Unlike `Range<u32>`, a `TextRange` may
/// extend past the end of the text: engines accept (and report) ranges that run to `u32::MAX`,
/// which is how formatting for the position just past the last character is addressed.
///
/// The end of a range is computed with saturating arithmetic, so `start + length` never wraps.
///
/// ## Example
///
/// ```
/// use editable_layout::TextRange;
///
/// let run = TextRange::new(3, 4);
/// assert_eq!(run.end(), 7);
/// assert_eq!(run.remaining_from(5), 2);
///
/// let tail = TextRange::to_end(10);
/// assert_eq!(tail.end(), u32::MAX);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    /// The first position covered by the range.
    pub start: u32,
    /// The number of positions covered by the range.
    pub length: u32,
}

impl TextRange {
    /// Creates a range covering `length` positions starting at `start`.
    #[must_use]
    #[inline]
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// Creates a range covering everything from `start` to the end of the position space.
    ///
    /// The length is clamped so that the range never overflows `u32`.
    #[must_use]
    #[inline]
    pub const fn to_end(start: u32) -> Self {
        Self {
            start,
            length: u32::MAX - start,
        }
    }

    /// Creates a range from `start..end`, or an empty range at `start` if `end < start`.
    #[must_use]
    #[inline]
    pub const fn from_bounds(start: u32, end: u32) -> Self {
        Self {
            start,
            length: end.saturating_sub(start),
        }
    }

    /// The position just past the last covered position, saturating at `u32::MAX`.
    #[must_use]
    #[inline]
    pub const fn end(self) -> u32 {
        self.start.saturating_add(self.length)
    }

    /// Returns `true` if the range covers no positions.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Returns `true` if `position` lies within the range.
    #[must_use]
    #[inline]
    pub const fn contains(self, position: u32) -> bool {
        position >= self.start && position < self.end()
    }

    /// The number of positions from `position` to the end of the range.
    ///
    /// This is `0` when `position` lies outside the range.
    #[must_use]
    #[inline]
    pub const fn remaining_from(self, position: u32) -> u32 {
        if self.contains(position) {
            self.length - (position - self.start)
        } else {
            0
        }
    }

    /// Returns a copy of this range with its length reduced so it does not overflow `u32`.
    #[must_use]
    #[inline]
    pub const fn clamped(self) -> Self {
        let max = u32::MAX - self.start;
        Self {
            start: self.start,
            length: if self.length > max { max } else { self.length },
        }
    }

    /// Returns this range as a `Range<u32>`.
    #[must_use]
    #[inline]
    pub const fn as_range(self) -> Range<u32> {
        self.start..self.end()
    }
}

impl From<Range<u32>> for TextRange {
    #[inline]
    fn from(value: Range<u32>) -> Self {
        Self::from_bounds(value.start, value.end)
    }
}

impl From<TextRange> for Range<u32> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

/// A value read from a layout together with the range over which it is uniform.
#[derive(Clone, Debug, PartialEq)]
pub struct RangedValue<T> {
    /// The attribute value.
    pub value: T,
    /// The maximal range around the queried position over which `value` applies.
    pub range: TextRange,
}

impl<T> RangedValue<T> {
    /// Pairs a value with its covering range.
    pub fn new(value: T, range: TextRange) -> Self {
        Self { value, range }
    }
}

#[cfg(test)]
mod tests {
    use super::TextRange;

    #[test]
    fn end_saturates() {
        let r = TextRange::new(10, u32::MAX);
        assert_eq!(r.end(), u32::MAX);
        assert_eq!(r.clamped().length, u32::MAX - 10);
        assert_eq!(TextRange::to_end(10), r.clamped());
    }

    #[test]
    fn remaining_from_inside_and_outside() {
        let r = TextRange::new(2, 5);
        assert_eq!(r.remaining_from(2), 5);
        assert_eq!(r.remaining_from(6), 1);
        assert_eq!(r.remaining_from(7), 0);
        assert_eq!(r.remaining_from(1), 0);
    }

    #[test]
    fn from_bounds_never_underflows() {
        assert_eq!(TextRange::from_bounds(5, 3), TextRange::new(5, 0));
        assert_eq!(TextRange::from(1..4), TextRange::new(1, 3));
        assert!(TextRange::from(4..4).is_empty());
    }

    #[test]
    fn contains_excludes_end() {
        let r = TextRange::new(0, 3);
        assert!(r.contains(0));
        assert!(r.contains(2));
        assert!(!r.contains(3));
        assert!(!TextRange::new(3, 0).contains(3));
    }
}
