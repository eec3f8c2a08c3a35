// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use detected_text::{AttributedString, StyledText};

/// Computes the string to display for a label state.
///
/// In order of precedence:
///
/// 1. no text renders nothing;
/// 2. a pressed detection renders the plain string with that detection's highlighted attributes
///    overlaid on its range;
/// 3. an enabled label renders the plain string;
/// 4. a disabled label renders the precomputed disabled variant.
///
/// `pressed` indexes [`StyledText::detections`]. This is a pure function: equal inputs give
/// equal outputs.
pub fn render(
    styled_text: Option<&StyledText>,
    is_enabled: bool,
    pressed: Option<usize>,
) -> Option<AttributedString> {
    let text = styled_text?;
    if let Some(detection) = pressed.and_then(|index| text.detection(index)) {
        return Some(
            text.plain()
                .with_overlay(detection.text_range(), detection.style().highlighted()),
        );
    }
    debug_assert!(
        pressed.is_none(),
        "pressed detection {pressed:?} does not exist"
    );
    if is_enabled {
        Some(text.plain().clone())
    } else {
        Some(text.disabled_variant().clone())
    }
}
