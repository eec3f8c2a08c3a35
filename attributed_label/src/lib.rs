// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A framework-agnostic label for [`StyledText`](detected_text::StyledText) with tappable detections.
//!
//! The crate does not lay out or draw text. It owns the parts of a label that sit between a text
//! layout engine and a UI toolkit:
//!
//! - [`InteractiveAreas`] turns one layout pass into hit-testable rectangles, vertically centered
//!   in the label's bounds;
//! - [`ViewState`] with its [`StatePatch`] reducer tracks which detection is pressed;
//! - [`render`] maps a state to the [`AttributedString`](detected_text::AttributedString) to draw;
//! - [`AttributedLabel`] wires these together behind [`StyledTextRenderable`].
//!
//! Layout goes through the [`LayoutAdapter`] trait. The `attributed_label_parley` crate provides
//! an implementation backed by Parley.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use attributed_label::{
//!     AttributedLabel, LabelConfig, LayoutAdapter, LayoutResult, PointerEvent, Point, Rect, Size,
//!     StyledTextRenderable,
//! };
//! use detected_text::{
//!     AttributedString, Attributes, Detection, DetectionKind, Style, StyledText, TextAttribute,
//! };
//!
//! // Every byte is 10 units wide, on a single 20 unit line.
//! struct Fixed;
//! struct FixedLine(usize);
//!
//! impl LayoutAdapter for Fixed {
//!     type Output = FixedLine;
//!     fn measure(&mut self, text: &AttributedString, _: Size, _: &LabelConfig) -> FixedLine {
//!         FixedLine(text.len())
//!     }
//! }
//!
//! impl LayoutResult for FixedLine {
//!     fn used_size(&self) -> Size {
//!         Size::new(self.0 as f64 * 10.0, 20.0)
//!     }
//!     fn rects_for_range_with(&self, range: std::ops::Range<usize>, mut f: impl FnMut(Rect)) {
//!         f(Rect::new(range.start as f64 * 10.0, 0.0, range.end as f64 * 10.0, 20.0));
//!     }
//! }
//!
//! let link = Style::new().with_highlighted(Attributes::new().with(TextAttribute::Underline(true)));
//! let text = StyledText::new(
//!     "go to docs",
//!     Style::new(),
//!     [Detection::new(6..10, link, DetectionKind::Link("https://docs.rs".into()))],
//! )
//! .unwrap();
//!
//! let mut label = AttributedLabel::new(Fixed, LabelConfig::default());
//! label.set_styled_text(Some(Arc::new(text)));
//! label.notify_bounds_changed(Size::new(200.0, 20.0));
//!
//! label.handle_pointer(PointerEvent::Down(Point::new(75.0, 10.0)));
//! assert!(label.pressed_detection().is_some());
//! assert_eq!(label.handle_pointer(PointerEvent::Up(Point::new(80.0, 10.0))), Some(0));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in `log`.
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

mod areas;
mod geometry;
mod label;
mod layout;
mod render;
mod state;

#[cfg(test)]
mod testing;

pub use detected_text;

pub use crate::areas::{InteractiveArea, InteractiveAreas};
pub use crate::geometry::{Point, Rect, Size};
pub use crate::label::{ActivationHandler, AttributedLabel, StyledTextRenderable};
pub use crate::layout::{Font, LabelConfig, LayoutAdapter, LayoutResult, LineBreakMode};
pub use crate::render::render;
pub use crate::state::{PointerEvent, PressOutcome, StatePatch, ViewState};
