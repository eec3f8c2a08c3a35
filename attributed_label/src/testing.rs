// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout adapters with predictable geometry, for tests.

use alloc::vec::Vec;
use core::ops::Range;

use detected_text::AttributedString;

use crate::{LabelConfig, LayoutAdapter, LayoutResult, Rect, Size};

/// Lays out every character in a fixed-size cell and breaks lines at any character.
#[derive(Debug)]
pub(crate) struct MonospaceLayout {
    pub(crate) advance: f64,
    pub(crate) line_height: f64,
    /// Number of layout passes run so far.
    pub(crate) passes: usize,
}

impl MonospaceLayout {
    pub(crate) fn new() -> Self {
        Self {
            advance: 10.0,
            line_height: 20.0,
            passes: 0,
        }
    }
}

#[derive(Debug)]
pub(crate) struct MonospaceLines {
    text: alloc::sync::Arc<str>,
    lines: Vec<Range<usize>>,
    advance: f64,
    line_height: f64,
}

impl LayoutAdapter for MonospaceLayout {
    type Output = MonospaceLines;

    fn measure(
        &mut self,
        text: &AttributedString,
        container: Size,
        config: &LabelConfig,
    ) -> MonospaceLines {
        self.passes += 1;
        let mut lines = Vec::new();
        if !container.is_degenerate() {
            let columns = if config.line_break.wraps() {
                ((container.width / self.advance) as usize).max(1)
            } else {
                usize::MAX
            };
            let mut start = 0;
            let mut count = 0;
            for (index, _) in text.as_str().char_indices() {
                if count == columns {
                    lines.push(start..index);
                    start = index;
                    count = 0;
                }
                count += 1;
            }
            if count > 0 {
                lines.push(start..text.len());
            }
            if let Some(max_lines) = config.max_lines {
                lines.truncate(max_lines);
            }
        }
        MonospaceLines {
            text: text.text().clone(),
            lines,
            advance: self.advance,
            line_height: self.line_height,
        }
    }
}

impl MonospaceLines {
    fn columns(&self, range: Range<usize>) -> usize {
        self.text[range].chars().count()
    }
}

impl LayoutResult for MonospaceLines {
    fn used_size(&self) -> Size {
        let widest = self
            .lines
            .iter()
            .map(|line| self.columns(line.clone()))
            .max()
            .unwrap_or(0);
        Size::new(
            widest as f64 * self.advance,
            self.lines.len() as f64 * self.line_height,
        )
    }

    fn rects_for_range_with(&self, range: Range<usize>, mut f: impl FnMut(Rect)) {
        for (index, line) in self.lines.iter().enumerate() {
            let start = range.start.max(line.start);
            let end = range.end.min(line.end);
            if start >= end {
                continue;
            }
            let x0 = self.columns(line.start..start) as f64 * self.advance;
            let x1 = self.columns(line.start..end) as f64 * self.advance;
            let y0 = index as f64 * self.line_height;
            f(Rect::new(x0, y0, x1, y0 + self.line_height));
        }
    }
}

/// Returns preset geometry regardless of the text.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedLayout {
    pub(crate) used: Size,
    pub(crate) rects: Vec<(Range<usize>, Rect)>,
}

impl LayoutAdapter for ScriptedLayout {
    type Output = Self;

    fn measure(&mut self, _: &AttributedString, _: Size, _: &LabelConfig) -> Self {
        self.clone()
    }
}

impl LayoutResult for ScriptedLayout {
    fn used_size(&self) -> Size {
        self.used
    }

    fn rects_for_range_with(&self, range: Range<usize>, mut f: impl FnMut(Rect)) {
        for (scripted, rect) in &self.rects {
            if *scripted == range {
                f(*rect);
            }
        }
    }
}

/// Keeps every string it is asked to lay out, and lays out nothing.
#[derive(Debug, Default)]
pub(crate) struct RecordingLayout {
    pub(crate) received: Vec<AttributedString>,
}

impl LayoutAdapter for RecordingLayout {
    type Output = ScriptedLayout;

    fn measure(&mut self, text: &AttributedString, _: Size, _: &LabelConfig) -> ScriptedLayout {
        self.received.push(text.clone());
        ScriptedLayout::default()
    }
}
