// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Style, StyledText, TextRange};

/// What a detector recognized in a range of text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DetectionKind {
    /// A markup tag, such as `<a href="…">`, with its attributes in source order.
    Tag {
        /// The tag name.
        name: Arc<str>,
        /// The tag's `(name, value)` attributes.
        attributes: Vec<(Arc<str>, Arc<str>)>,
    },
    /// A `#hashtag`, without the leading `#`.
    Hashtag(Arc<str>),
    /// An `@mention`, without the leading `@`.
    Mention(Arc<str>),
    /// A URL.
    Link(Arc<str>),
    /// A phone number as written in the text.
    PhoneNumber(Arc<str>),
    /// A match of the named regular expression.
    Regex(Arc<str>),
    /// A range styled explicitly by the caller.
    Range,
}

/// A styled, tagged sub-range of a [`StyledText`].
///
/// Detections are immutable once constructed. The range is a byte range that is validated when
/// the detection is handed to [`StyledText::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    range: Range<usize>,
    style: Style,
    kind: DetectionKind,
    level: usize,
}

impl Detection {
    /// Creates a top-level detection.
    pub fn new(range: Range<usize>, style: Style, kind: DetectionKind) -> Self {
        Self {
            range,
            style,
            kind,
            level: 0,
        }
    }

    /// Sets the nesting depth, for detections produced from nested markup tags.
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// The byte range this detection covers.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The byte range as a [`TextRange`].
    ///
    /// The range is only known to be valid once the detection is part of a [`StyledText`].
    #[inline]
    pub fn text_range(&self) -> TextRange {
        TextRange::new_unchecked(self.range.start, self.range.end)
    }

    /// The style applied to this detection.
    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// What was detected.
    #[inline]
    pub fn kind(&self) -> &DetectionKind {
        &self.kind
    }

    /// Nesting depth; `0` for top-level detections.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// The slice of `text` this detection covers.
    ///
    /// # Panics
    ///
    /// Panics if this detection does not belong to `text`.
    pub fn text<'a>(&self, text: &'a StyledText) -> &'a str {
        &text.as_str()[self.range.clone()]
    }
}
