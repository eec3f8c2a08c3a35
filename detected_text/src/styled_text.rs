// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::text_range::validate_range;
use crate::{AttributedString, Detection, Error, Style, TextRange};

/// An immutable string with its detections and precomputed renderings.
///
/// Construction bakes two renderings:
///
/// - the *plain* rendering: `base_style.base()` over the whole text, then every detection's base
///   attributes over its range, in detection order;
/// - the *disabled* variant: the plain rendering with `base_style.disabled()` over the whole text
///   and every detection's disabled attributes over its range.
///
/// Detection ranges are expected not to overlap. This is a contract of the detector producing
/// them and is not checked here; when they do overlap, later detections win.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText {
    base_style: Style,
    detections: Vec<Detection>,
    plain: AttributedString,
    disabled: AttributedString,
}

impl StyledText {
    /// Creates styled text, validating every detection range against `text`.
    ///
    /// Returns an error for the first detection whose range is reversed, out of bounds, or not
    /// on UTF-8 character boundaries. [`Error::detection`] identifies it.
    pub fn new(
        text: impl Into<Arc<str>>,
        base_style: Style,
        detections: impl IntoIterator<Item = Detection>,
    ) -> Result<Self, Error> {
        let text = text.into();
        let detections: Vec<Detection> = detections.into_iter().collect();
        for (index, detection) in detections.iter().enumerate() {
            validate_range(&text, &detection.range()).map_err(|e| e.for_detection(index))?;
        }

        Ok(Self::build(text, base_style, detections))
    }

    /// Creates styled text without detections.
    pub fn plain_text(text: impl Into<Arc<str>>, base_style: Style) -> Self {
        Self::build(text.into(), base_style, Vec::new())
    }

    /// Bakes the renderings for detections whose ranges are already validated.
    fn build(text: Arc<str>, base_style: Style, detections: Vec<Detection>) -> Self {
        let whole = TextRange::new_unchecked(0, text.len());
        let mut plain = AttributedString::new(text, base_style.base().clone());
        for detection in &detections {
            plain.apply(detection.text_range(), detection.style().base());
        }

        let mut disabled = plain.clone();
        disabled.apply(whole, base_style.disabled());
        for detection in &detections {
            disabled.apply(detection.text_range(), detection.style().disabled());
        }

        Self {
            base_style,
            detections,
            plain,
            disabled,
        }
    }

    /// The underlying text.
    #[inline]
    pub fn text(&self) -> &Arc<str> {
        self.plain.text()
    }

    /// The underlying text as `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.plain.as_str()
    }

    /// The style applied to the whole text.
    #[inline]
    pub fn base_style(&self) -> &Style {
        &self.base_style
    }

    /// All detections, in the order they were supplied.
    #[inline]
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    /// The detection at `index`, if any.
    #[inline]
    pub fn detection(&self, index: usize) -> Option<&Detection> {
        self.detections.get(index)
    }

    /// Detections whose style reacts to presses, with their indices.
    pub fn highlightable(&self) -> impl Iterator<Item = (usize, &Detection)> + '_ {
        self.detections
            .iter()
            .enumerate()
            .filter(|(_, detection)| detection.style().is_highlightable())
    }

    /// The rendering used when enabled and nothing is pressed.
    #[inline]
    pub fn plain(&self) -> &AttributedString {
        &self.plain
    }

    /// The rendering used when disabled.
    #[inline]
    pub fn disabled_variant(&self) -> &AttributedString {
        &self.disabled
    }
}
