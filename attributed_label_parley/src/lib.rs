// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`LayoutAdapter`] for [`attributed_label`] backed by [Parley](parley).
//!
//! ```no_run
//! use attributed_label::{AttributedLabel, LabelConfig};
//! use attributed_label_parley::ParleyLayout;
//!
//! let label = AttributedLabel::new(ParleyLayout::new(), LabelConfig::default());
//! ```
//!
//! Attributes that change geometry are passed to Parley: font family, size, weight and style,
//! letter spacing, and the paragraph alignment of the first run. A family is parsed as a CSS
//! font stack, so it may name generic families and fallbacks such as `"Inter, sans-serif"`.
//! Colors and decorations do not affect hit-testing and are only mapped where Parley tracks them.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `system` (enabled by default): Load fonts from the system through Fontique.
//! - `libm`: Use floating point implementations from [libm][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::ops::Range;

use attributed_label::{LabelConfig, LayoutAdapter, LayoutResult, Rect, Size};
use detected_text::{AttributedString, TextAlignment, TextAttribute};
use parley::{
    Affinity, Alignment, AlignmentOptions, Cursor, FontContext, FontStack, FontStyle, Layout,
    LayoutContext, Selection, StyleProperty,
};

/// Lays out label text with Parley.
///
/// Owns the font and layout contexts so that they are reused across layout passes.
pub struct ParleyLayout {
    font_cx: FontContext,
    layout_cx: LayoutContext<()>,
    scale: f32,
}

impl ParleyLayout {
    /// Creates an adapter with fresh contexts and a scale of 1.
    pub fn new() -> Self {
        Self::with_contexts(FontContext::new(), LayoutContext::new())
    }

    /// Creates an adapter that reuses existing contexts.
    pub fn with_contexts(font_cx: FontContext, layout_cx: LayoutContext<()>) -> Self {
        Self {
            font_cx,
            layout_cx,
            scale: 1.0,
        }
    }

    /// Sets the display scale passed to Parley.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// The font context, for registering additional fonts.
    pub fn font_context(&mut self) -> &mut FontContext {
        &mut self.font_cx
    }
}

impl Default for ParleyLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParleyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyLayout")
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl LayoutAdapter for ParleyLayout {
    type Output = ParleyLayoutOutput;

    fn measure(
        &mut self,
        text: &AttributedString,
        container: Size,
        config: &LabelConfig,
    ) -> ParleyLayoutOutput {
        if container.is_degenerate() {
            return ParleyLayoutOutput::empty();
        }

        let mut builder =
            self.layout_cx
                .ranged_builder(&mut self.font_cx, text.as_str(), self.scale, true);
        let mut alignment = to_alignment(config.alignment);
        for run in text.runs() {
            for attribute in &run.attributes {
                if let TextAttribute::Alignment(run_alignment) = attribute {
                    // Paragraph alignment comes from the first run.
                    if run.range.start == 0 {
                        alignment = to_alignment(*run_alignment);
                    }
                } else if let Some(property) = style_property(attribute) {
                    builder.push(property, run.range.clone());
                }
            }
        }
        let mut layout: Layout<()> = builder.build(text.as_str());

        #[expect(
            clippy::cast_possible_truncation,
            reason = "Parley lays out in f32 coordinates."
        )]
        let width = container.width as f32;
        layout.break_all_lines(config.line_break.wraps().then_some(width));
        layout.align(Some(width), alignment, AlignmentOptions::default());

        let line_count = layout.len();
        let visible_lines = config
            .max_lines
            .map_or(line_count, |max_lines| max_lines.min(line_count));
        let mut used = Size::ZERO;
        for line in layout.lines().take(visible_lines) {
            let metrics = line.metrics();
            used.width = used.width.max(f64::from(metrics.advance));
            used.height += f64::from(metrics.line_height);
        }
        log::trace!("laid out {line_count} lines, {visible_lines} visible, {used:?}");

        ParleyLayoutOutput {
            layout,
            text_len: text.len(),
            visible_lines,
            used,
        }
    }
}

/// One Parley layout pass.
pub struct ParleyLayoutOutput {
    layout: Layout<()>,
    text_len: usize,
    visible_lines: usize,
    used: Size,
}

impl ParleyLayoutOutput {
    fn empty() -> Self {
        Self {
            layout: Layout::new(),
            text_len: 0,
            visible_lines: 0,
            used: Size::ZERO,
        }
    }

    /// The underlying Parley layout, including lines past the visible limit.
    pub fn layout(&self) -> &Layout<()> {
        &self.layout
    }

    /// Number of lines that count towards the used size and range geometry.
    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    fn cursor_at(&self, index: usize) -> Cursor {
        if index >= self.text_len {
            Cursor::from_byte_index(&self.layout, self.text_len, Affinity::Upstream)
        } else {
            Cursor::from_byte_index(&self.layout, index, Affinity::Downstream)
        }
    }
}

impl fmt::Debug for ParleyLayoutOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyLayoutOutput")
            .field("text_len", &self.text_len)
            .field("visible_lines", &self.visible_lines)
            .field("used", &self.used)
            .finish_non_exhaustive()
    }
}

impl LayoutResult for ParleyLayoutOutput {
    fn used_size(&self) -> Size {
        self.used
    }

    fn rects_for_range_with(&self, range: Range<usize>, mut f: impl FnMut(Rect)) {
        if range.is_empty() || self.visible_lines == 0 {
            return;
        }
        let selection = Selection::new(self.cursor_at(range.start), self.cursor_at(range.end));
        selection.geometry_with(&self.layout, |bb, line| {
            if line < self.visible_lines {
                f(Rect::new(bb.x0, bb.y0, bb.x1, bb.y1));
            }
        });
    }
}

fn to_alignment(alignment: TextAlignment) -> Alignment {
    match alignment {
        TextAlignment::Natural => Alignment::Start,
        TextAlignment::Left => Alignment::Left,
        TextAlignment::Center => Alignment::Center,
        TextAlignment::Right => Alignment::Right,
        TextAlignment::Justified => Alignment::Justify,
    }
}

fn style_property(attribute: &TextAttribute) -> Option<StyleProperty<'static, ()>> {
    Some(match attribute {
        TextAttribute::FontSize(size) => StyleProperty::FontSize(*size),
        TextAttribute::FontWeight(weight) => {
            StyleProperty::FontWeight(parley::FontWeight::new(weight.0))
        }
        TextAttribute::Italic(italic) => StyleProperty::FontStyle(if *italic {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        }),
        TextAttribute::LetterSpacing(spacing) => StyleProperty::LetterSpacing(*spacing),
        TextAttribute::Underline(underline) => StyleProperty::Underline(*underline),
        TextAttribute::Strikethrough(strikethrough) => StyleProperty::Strikethrough(*strikethrough),
        TextAttribute::FontFamily(family) => {
            StyleProperty::FontStack(FontStack::Source(Cow::Owned(String::from(&**family))))
        }
        TextAttribute::Foreground(_)
        | TextAttribute::Background(_)
        | TextAttribute::Alignment(_) => return None,
    })
}

#[cfg(test)]
mod tests {
    use attributed_label::{LabelConfig, LayoutAdapter, LayoutResult, Size};
    use detected_text::{AttributedString, Attributes, Color, TextAlignment, TextAttribute};
    use parley::{Alignment, FontStack, FontStyle, StyleProperty};

    use crate::{style_property, to_alignment, ParleyLayout};

    #[test]
    fn degenerate_container_lays_out_nothing() {
        let mut adapter = ParleyLayout::new();
        let text = AttributedString::new("hello", Attributes::new());
        let output = adapter.measure(&text, Size::new(0.0, 40.0), &LabelConfig::default());
        assert_eq!(output.used_size(), Size::ZERO);
        assert_eq!(output.visible_lines(), 0);
        assert!(output.rects_for_range(0..5).is_empty());
    }

    #[test]
    fn alignment_mapping() {
        assert_eq!(to_alignment(TextAlignment::Natural), Alignment::Start);
        assert_eq!(to_alignment(TextAlignment::Center), Alignment::Center);
        assert_eq!(to_alignment(TextAlignment::Justified), Alignment::Justify);
    }

    #[test]
    fn geometry_attributes_become_style_properties() {
        assert_eq!(
            style_property(&TextAttribute::FontSize(12.0)),
            Some(StyleProperty::FontSize(12.0))
        );
        assert_eq!(
            style_property(&TextAttribute::Italic(true)),
            Some(StyleProperty::FontStyle(FontStyle::Italic))
        );
        assert_eq!(
            style_property(&TextAttribute::Foreground(Color::BLACK)),
            None
        );
        assert_eq!(
            style_property(&TextAttribute::Alignment(TextAlignment::Right)),
            None
        );
    }

    #[test]
    fn font_family_becomes_a_font_stack() {
        assert_eq!(
            style_property(&TextAttribute::FontFamily("Inter, serif".into())),
            Some(StyleProperty::FontStack(FontStack::Source("Inter, serif".into())))
        );
    }

    /// Layouts over the fonts installed on the machine.
    #[cfg(feature = "system")]
    mod system_fonts {
        use attributed_label::{Font, LabelConfig, LayoutAdapter, LayoutResult, LineBreakMode, Size};
        use detected_text::{AttributedString, Attributes};

        use crate::{ParleyLayout, ParleyLayoutOutput};

        const TEXT: &str = "hello world hello world";

        /// An adapter over the system fonts, or `None` when no fonts are installed.
        fn system_adapter() -> Option<ParleyLayout> {
            let mut adapter = ParleyLayout::new();
            let families = adapter.font_context().collection.family_names().count();
            (families > 0).then_some(adapter)
        }

        /// Lays out `text` the way a label does, with the configured font inherited.
        fn measure(
            adapter: &mut ParleyLayout,
            text: &str,
            width: f64,
            config: &LabelConfig,
        ) -> ParleyLayoutOutput {
            let text = AttributedString::new(text, Attributes::new())
                .with_inherited(&config.inherited_attributes());
            adapter.measure(&text, Size::new(width, 400.0), config)
        }

        fn family(name: &str) -> LabelConfig {
            LabelConfig {
                font: Font {
                    family: Some(name.into()),
                    ..Font::default()
                },
                ..LabelConfig::default()
            }
        }

        /// Width of [`TEXT`] on a single line.
        fn full_width(adapter: &mut ParleyLayout) -> f64 {
            let config = LabelConfig::default();
            let single = measure(adapter, TEXT, 10_000.0, &config);
            assert_eq!(single.visible_lines(), 1);
            single.used_size().width
        }

        #[test]
        fn font_family_changes_the_measured_width() {
            let Some(mut adapter) = system_adapter() else {
                return;
            };
            let mono = measure(&mut adapter, "hello world", 1000.0, &family("monospace"));
            let serif = measure(&mut adapter, "hello world", 1000.0, &family("serif"));
            assert!(mono.used_size().width > 0.0);
            assert_ne!(mono.used_size().width, serif.used_size().width);

            // Every character of a monospace font has the same advance.
            let narrow = measure(&mut adapter, "iiiii", 1000.0, &family("monospace"));
            let wide = measure(&mut adapter, "mmmmm", 1000.0, &family("monospace"));
            assert_eq!(narrow.used_size().width, wide.used_size().width);
        }

        #[test]
        fn wrapped_range_has_one_rect_per_line() {
            let Some(mut adapter) = system_adapter() else {
                return;
            };
            let width = full_width(&mut adapter) * 0.6;
            let config = LabelConfig::default();
            let wrapped = measure(&mut adapter, TEXT, width, &config);
            assert_eq!(wrapped.visible_lines(), 2);
            let used = wrapped.used_size();
            assert!(used.width <= width);

            let rects = wrapped.rects_for_range(0..TEXT.len());
            let (first, last) = (rects[0], rects[rects.len() - 1]);
            assert!(last.y0 >= first.y1, "{rects:?}");
            assert!(rects.iter().all(|rect| rect.y1 <= used.height));

            // Clipping keeps everything on one line regardless of the width.
            let clip = LabelConfig {
                line_break: LineBreakMode::Clip,
                ..LabelConfig::default()
            };
            assert_eq!(measure(&mut adapter, TEXT, width, &clip).visible_lines(), 1);
        }

        #[test]
        fn max_lines_hides_later_lines() {
            let Some(mut adapter) = system_adapter() else {
                return;
            };
            let width = full_width(&mut adapter) * 0.6;
            let all = measure(&mut adapter, TEXT, width, &LabelConfig::default());
            let config = LabelConfig {
                max_lines: Some(1),
                ..LabelConfig::default()
            };
            let one = measure(&mut adapter, TEXT, width, &config);

            assert_eq!(one.visible_lines(), 1);
            assert_eq!(one.layout().len(), all.layout().len());
            let height = one.used_size().height;
            assert!(height < all.used_size().height);
            let visible = one.rects_for_range(0..TEXT.len());
            assert!(!visible.is_empty());
            assert!(visible.iter().all(|rect| rect.y1 <= height));
            // The second "hello" starts on the hidden line.
            assert!(one.rects_for_range(12..17).is_empty());
            assert!(!all.rects_for_range(12..17).is_empty());
        }
    }
}
