// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract with the text layout engine, and the display configuration passed to it.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use detected_text::{AttributedString, Attributes, FontWeight, TextAlignment, TextAttribute};

use crate::{Rect, Size};

/// The font a label falls back to for text without explicit font attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name; `None` lets the layout engine pick its default family.
    pub family: Option<Arc<str>>,
    /// Size in layout units.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
    /// Italic style.
    pub italic: bool,
}

impl Font {
    /// A regular font of the given size in the engine's default family.
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::NORMAL,
            italic: false,
        }
    }

    /// This font expressed as text attributes.
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new()
            .with(TextAttribute::FontSize(self.size))
            .with(TextAttribute::FontWeight(self.weight))
            .with(TextAttribute::Italic(self.italic));
        if let Some(family) = &self.family {
            attributes.set(TextAttribute::FontFamily(family.clone()));
        }
        attributes
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(17.0)
    }
}

/// How lines are broken when text is wider than the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrap,
    /// Wrap at character boundaries.
    CharWrap,
    /// Do not wrap; text past the container edge is clipped.
    Clip,
    /// Wrap, and truncate the last visible line at its start.
    TruncateHead,
    /// Wrap, and truncate the last visible line at its end.
    TruncateTail,
    /// Wrap, and truncate the last visible line in its middle.
    TruncateMiddle,
}

impl LineBreakMode {
    /// Whether lines wrap at the container width in this mode.
    pub fn wraps(self) -> bool {
        !matches!(self, Self::Clip)
    }
}

/// The display configuration a label passes to every layout pass.
///
/// Changing any of these invalidates the label's layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelConfig {
    /// Fallback font for runs without explicit font attributes.
    pub font: Font,
    /// Fallback paragraph alignment.
    pub alignment: TextAlignment,
    /// Line breaking behavior.
    pub line_break: LineBreakMode,
    /// Maximum number of visible lines; `None` shows all of them.
    pub max_lines: Option<usize>,
}

impl LabelConfig {
    /// The attributes every run inherits unless it sets them explicitly.
    pub fn inherited_attributes(&self) -> Attributes {
        self.font
            .attributes()
            .with(TextAttribute::Alignment(self.alignment))
    }
}

/// A text layout engine.
///
/// The label consumes this contract; it never lays out text itself. Implementations must:
///
/// - wrap lines per [`LabelConfig::line_break`] at the container width;
/// - drop lines past [`LabelConfig::max_lines`] from both the used size and the range geometry;
/// - report one rectangle per line fragment for ranges that wrap;
/// - return an empty result with a zero used size for a degenerate container.
pub trait LayoutAdapter {
    /// The result of one layout pass.
    type Output: LayoutResult;

    /// Lays out `text` in a container of the given size.
    ///
    /// `text` already carries the inherited font and alignment attributes; `config` is passed
    /// through unchanged from the hosting label.
    fn measure(
        &mut self,
        text: &AttributedString,
        container: Size,
        config: &LabelConfig,
    ) -> Self::Output;
}

/// Geometry produced by one layout pass.
///
/// Rectangles are relative to the top-left corner of the laid-out text.
pub trait LayoutResult {
    /// The tight bounding size of the visible lines.
    fn used_size(&self) -> Size;

    /// Invokes `f` with each rectangle occupied by the byte `range`, in visual line order.
    fn rects_for_range_with(&self, range: Range<usize>, f: impl FnMut(Rect));

    /// Returns the rectangles occupied by the byte `range`.
    fn rects_for_range(&self, range: Range<usize>) -> Vec<Rect> {
        let mut rects = Vec::new();
        self.rects_for_range_with(range, |rect| rects.push(rect));
        rects
    }
}
