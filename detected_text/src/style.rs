// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Attributes;

static NO_ATTRIBUTES: Attributes = Attributes::EMPTY;

/// Attributes applied to a range in each of its interaction states.
///
/// `base` is always applied. `highlighted` is overlaid while the range is pressed and `disabled`
/// is overlaid in the disabled rendering. A style with a non-empty `highlighted` set is
/// *highlightable*: only highlightable detections take part in hit-testing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    base: Attributes,
    highlighted: Attributes,
    disabled: Attributes,
}

impl Style {
    /// Creates a style with no attributes in any state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the attributes applied in every state.
    #[must_use]
    pub fn with_base(mut self, attributes: Attributes) -> Self {
        self.base = attributes;
        self
    }

    /// Sets the attributes overlaid while pressed.
    #[must_use]
    pub fn with_highlighted(mut self, attributes: Attributes) -> Self {
        self.highlighted = attributes;
        self
    }

    /// Sets the attributes overlaid in the disabled rendering.
    #[must_use]
    pub fn with_disabled(mut self, attributes: Attributes) -> Self {
        self.disabled = attributes;
        self
    }

    /// The attributes applied in every state.
    #[inline]
    pub fn base(&self) -> &Attributes {
        &self.base
    }

    /// The attributes overlaid while pressed.
    #[inline]
    pub fn highlighted(&self) -> &Attributes {
        &self.highlighted
    }

    /// The attributes overlaid in the disabled rendering.
    #[inline]
    pub fn disabled(&self) -> &Attributes {
        &self.disabled
    }

    /// The attributes to overlay on the base rendering for the given highlight flag.
    ///
    /// Returns the `highlighted` set when `highlighted` is `true` and an empty set otherwise.
    pub fn overlay_for(&self, highlighted: bool) -> &Attributes {
        if highlighted {
            &self.highlighted
        } else {
            &NO_ATTRIBUTES
        }
    }

    /// Whether this style reacts to presses.
    #[inline]
    pub fn is_highlightable(&self) -> bool {
        !self.highlighted.is_empty()
    }
}
