// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text with *detections*: tagged sub-ranges such as links, mentions and hashtags that
//! carry their own style and metadata.
//!
//! - [`Attributes`] maps attribute names ([`AttributeKey`]) to values ([`TextAttribute`]).
//! - [`Style`] groups the attributes a range shows when idle, pressed and disabled.
//! - [`Detection`] ties a byte range to a [`Style`] and a [`DetectionKind`].
//! - [`StyledText`] owns the text, its detections and the precomputed plain and disabled
//!   renderings, each an [`AttributedString`].
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text and must lie on character boundaries.
//! [`StyledText::new`] rejects detections that violate this rather than clamping them.
//!
//! ## Example
//!
//! ```
//! use detected_text::{
//!     AttributeKey, Attributes, Color, Detection, DetectionKind, Style, StyledText, TextAttribute,
//! };
//!
//! let link = Style::new()
//!     .with_base(Attributes::new().with(TextAttribute::Foreground(Color::rgb(0, 0, 255))))
//!     .with_highlighted(Attributes::new().with(TextAttribute::Underline(true)));
//! let text = StyledText::new(
//!     "Ping @alice",
//!     Style::new(),
//!     [Detection::new(5..11, link, DetectionKind::Mention("alice".into()))],
//! )
//! .unwrap();
//!
//! assert_eq!(text.detections()[0].text(&text), "@alice");
//! assert_eq!(text.plain().runs().len(), 2);
//! assert!(text.plain().attributes_at(6).unwrap().contains(AttributeKey::Foreground));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod attributed_string;
mod attributes;
mod detection;
mod error;
mod style;
mod styled_text;
mod text_range;


pub use crate::attributed_string::{AttributeRun, AttributedString};
pub use crate::attributes::{
    AttributeKey, Attributes, Color, FontWeight, TextAlignment, TextAttribute,
};
pub use crate::detection::{Detection, DetectionKind};
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::style::Style;
pub use crate::styled_text::StyledText;
pub use crate::text_range::TextRange;
