// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// A range that does not select a valid slice of its text.
///
/// Detections come from an upstream detector, so a rejected range points at a bug there.
/// [`StyledText::new`](crate::StyledText::new) reports it instead of clamping, and records which
/// detection it came from in [`Error::detection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    text_len: usize,
    detection: Option<usize>,
    boundary: Option<BoundaryInfo>,
}

impl Error {
    fn new(kind: ErrorKind, range: &Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            range: range.clone(),
            text_len,
            detection: None,
            boundary: None,
        }
    }

    pub(crate) fn reversed(range: &Range<usize>, text_len: usize) -> Self {
        Self::new(ErrorKind::InvalidRange, range, text_len)
    }

    pub(crate) fn out_of_bounds(range: &Range<usize>, text_len: usize) -> Self {
        Self::new(ErrorKind::InvalidBounds, range, text_len)
    }

    pub(crate) fn split_char(text: &str, range: &Range<usize>, endpoint: Endpoint) -> Self {
        let index = match endpoint {
            Endpoint::Start => range.start,
            Endpoint::End => range.end,
        };
        // Walk outwards to the boundaries of the codepoint containing `index`.
        let char_start = text.floor_char_boundary_compat(index);
        let char_end = text.ceil_char_boundary_compat(index);
        let mut error = Self::new(ErrorKind::NotOnCharBoundary, range, text.len());
        error.boundary = Some(BoundaryInfo {
            endpoint,
            index,
            char_range: char_start..char_end,
        });
        error
    }

    pub(crate) fn for_detection(mut self, index: usize) -> Self {
        self.detection = Some(index);
        self
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rejected range.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Length in bytes of the text the range was checked against.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Position of the rejected detection in the list given to
    /// [`StyledText::new`](crate::StyledText::new).
    pub fn detection(&self) -> Option<usize> {
        self.detection
    }

    /// The offending endpoint, for [`ErrorKind::NotOnCharBoundary`].
    pub fn boundary(&self) -> Option<&BoundaryInfo> {
        self.boundary.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.detection {
            write!(f, "detection {index}: ")?;
        }
        let Range { start, end } = self.range;
        match (self.kind, &self.boundary) {
            (ErrorKind::InvalidRange, _) => write!(f, "range {start}..{end} is reversed"),
            (ErrorKind::InvalidBounds, _) => write!(
                f,
                "range {start}..{end} exceeds text of {} bytes",
                self.text_len
            ),
            (ErrorKind::NotOnCharBoundary, Some(boundary)) => write!(
                f,
                "range {start}..{end} splits the character at {:?} with its {} index",
                boundary.char_range, boundary.endpoint
            ),
            (ErrorKind::NotOnCharBoundary, None) => {
                write!(f, "range {start}..{end} splits a character")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The reason a range was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range ends past the end of the text.
    InvalidBounds,
    /// The range starts after it ends.
    InvalidRange,
    /// An endpoint falls inside a multi-byte character.
    NotOnCharBoundary,
}

/// One end of a range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The inclusive start.
    Start,
    /// The exclusive end.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Where a range endpoint split a character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// The endpoint that is not on a boundary.
    pub endpoint: Endpoint,
    /// Its byte index.
    pub index: usize,
    /// The byte range of the character it falls inside.
    pub char_range: Range<usize>,
}

/// `str::floor_char_boundary` and `str::ceil_char_boundary` are not stable at our MSRV.
trait CharBoundaryCompat {
    fn floor_char_boundary_compat(&self, index: usize) -> usize;
    fn ceil_char_boundary_compat(&self, index: usize) -> usize;
}

impl CharBoundaryCompat for str {
    fn floor_char_boundary_compat(&self, index: usize) -> usize {
        let mut index = index.min(self.len());
        while !self.is_char_boundary(index) {
            index -= 1;
        }
        index
    }

    fn ceil_char_boundary_compat(&self, index: usize) -> usize {
        let mut index = index.min(self.len());
        while !self.is_char_boundary(index) {
            index += 1;
        }
        index
    }
}
