// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error};

/// A byte range that has been checked against a string.
///
/// A checked range is ordered, lies within the text, and starts and ends on character
/// boundaries. The string itself is not recorded, so a `TextRange` must only be used with the
/// text it was checked against.
///
/// ```
/// use detected_text::TextRange;
///
/// let mention = TextRange::new("Hello @world", 6..12).unwrap();
/// assert_eq!(mention.len(), 6);
/// assert!(TextRange::new("Hello", 0..9).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Checks `range` against `text`.
    pub fn new(text: &str, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self::new_unchecked(range.start, range.end))
    }

    /// Creates a range that the caller already knows to be valid for its text.
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// First byte of the range.
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// One past the last byte of the range.
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Number of bytes covered.
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no bytes.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Whether `self` and `other` have a byte in common.
    ///
    /// An empty range covers no bytes, so it overlaps nothing.
    pub const fn overlaps(self, other: Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// The range as a [`Range`].
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.as_range()
    }
}

/// Checks that `range` is ordered, in bounds, and on character boundaries of `text`.
pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    if range.start > range.end {
        Err(Error::reversed(range, text.len()))
    } else if range.end > text.len() {
        Err(Error::out_of_bounds(range, text.len()))
    } else if !text.is_char_boundary(range.start) {
        Err(Error::split_char(text, range, Endpoint::Start))
    } else if !text.is_char_boundary(range.end) {
        Err(Error::split_char(text, range, Endpoint::End))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::TextRange;
    use crate::{Endpoint, ErrorKind};

    #[test]
    fn accepts_empty_and_full_ranges() {
        let text = "Hello!";
        for range in [0..0, 0..6, 6..6, 1..3] {
            assert!(TextRange::new(text, range.clone()).is_ok(), "{range:?}");
        }
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "A reversed range is the input under test."
    )]
    fn reversed_range() {
        let err = TextRange::new("Hello!", 4..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.range(), 4..3);
        assert_eq!(err.to_string(), "range 4..3 is reversed");
    }

    #[test]
    fn out_of_bounds() {
        let err = TextRange::new("Hello!", 2..7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.text_len(), 6);
        assert_eq!(err.to_string(), "range 2..7 exceeds text of 6 bytes");
    }

    #[test]
    fn split_character() {
        // "é" takes two bytes.
        let text = "éclair";
        let err = TextRange::new(text, 1..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let boundary = err.boundary().unwrap();
        assert_eq!(boundary.endpoint, Endpoint::Start);
        assert_eq!(boundary.index, 1);
        assert_eq!(boundary.char_range, 0..2);

        let err = TextRange::new(text, 0..1).unwrap_err();
        assert_eq!(err.boundary().unwrap().endpoint, Endpoint::End);
        assert_eq!(
            err.to_string(),
            "range 0..1 splits the character at 0..2 with its end index"
        );
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let left = TextRange::new_unchecked(0, 5);
        let right = TextRange::new_unchecked(5, 9);
        assert!(!left.overlaps(right));
        assert!(left.overlaps(TextRange::new_unchecked(4, 6)));
        assert!(!TextRange::new_unchecked(3, 3).overlaps(left));
    }

    #[test]
    fn empty_ranges_overlap_nothing() {
        let outer = TextRange::new_unchecked(2, 8);
        let empty = TextRange::new_unchecked(4, 4);
        assert!(!empty.overlaps(outer));
        assert!(!outer.overlaps(empty));
        assert!(!empty.overlaps(empty));
        assert!(outer.overlaps(outer));
    }
}
