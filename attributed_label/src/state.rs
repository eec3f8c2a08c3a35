// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The label's view state, its reducer, and the press state machine.

use alloc::sync::Arc;

use detected_text::{AttributedString, Detection, StyledText};

use crate::{render, InteractiveAreas, Point};

/// Everything that determines what a label displays.
///
/// Invariants maintained by [`ViewState::reduce`]:
///
/// - `pressed` is only set while enabled, and only to a highlightable detection of the current
///   text;
/// - replacing the text or disabling the label clears `pressed`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    styled_text: Option<Arc<StyledText>>,
    is_enabled: bool,
    pressed: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            styled_text: None,
            is_enabled: true,
            pressed: None,
        }
    }
}

/// A single change to a [`ViewState`].
#[derive(Clone, Debug, PartialEq)]
pub enum StatePatch {
    /// Replace the text.
    StyledText(Option<Arc<StyledText>>),
    /// Enable or disable the label.
    Enabled(bool),
    /// Press the detection at this index.
    Press(usize),
    /// Return to the idle state.
    Release,
}

/// A pointer event in view-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A pointer went down. Presses the detection under it, if any.
    Down(Point),
    /// The pointer that went down was released. Activates the pressed detection if the release
    /// point is still inside one of its areas.
    Up(Point),
    /// A complete tap, recognized by the host as a single gesture. Activates the detection under
    /// the tap location without entering the pressed state.
    Tap(Point),
    /// The host cancelled the gesture.
    Cancel,
}

/// What a pointer event does to a [`ViewState`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PressOutcome {
    /// The state change to apply, if any.
    pub patch: Option<StatePatch>,
    /// The detection to report as activated, if any.
    pub activated: Option<usize>,
}

impl ViewState {
    /// The current text.
    #[inline]
    pub fn styled_text(&self) -> Option<&Arc<StyledText>> {
        self.styled_text.as_ref()
    }

    /// Whether the label reacts to pointer events.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Index of the pressed detection.
    #[inline]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// The pressed detection.
    pub fn pressed_detection(&self) -> Option<&Detection> {
        self.styled_text.as_ref()?.detection(self.pressed?)
    }

    /// The string to display for this state.
    pub fn render(&self) -> Option<AttributedString> {
        render(self.styled_text.as_deref(), self.is_enabled, self.pressed)
    }

    /// Applies `patch`, returning the new state and its rendering.
    ///
    /// Patches that would break the state invariants leave the state unchanged: pressing while
    /// disabled, pressing without text, or pressing a detection that is missing or not
    /// highlightable.
    #[must_use]
    pub fn reduce(&self, patch: StatePatch) -> (Self, Option<AttributedString>) {
        let mut next = self.clone();
        match patch {
            StatePatch::StyledText(text) => {
                next.styled_text = text;
                next.pressed = None;
            }
            StatePatch::Enabled(enabled) => {
                next.is_enabled = enabled;
                if !enabled {
                    next.pressed = None;
                }
            }
            StatePatch::Press(index) => {
                if self.can_press(index) {
                    next.pressed = Some(index);
                } else {
                    log::trace!("ignoring press of detection {index}");
                }
            }
            StatePatch::Release => next.pressed = None,
        }
        let rendered = next.render();
        (next, rendered)
    }

    /// Decides what `event` does, given the interactive areas of the current layout pass.
    ///
    /// This never changes `self`; apply [`PressOutcome::patch`] with [`ViewState::reduce`].
    /// A disabled label or one without text ignores every event.
    pub fn press_outcome(&self, event: PointerEvent, areas: &InteractiveAreas) -> PressOutcome {
        if !self.is_enabled || self.styled_text.is_none() {
            return PressOutcome::default();
        }
        let release = self.pressed.map(|_| StatePatch::Release);
        match event {
            PointerEvent::Down(point) => PressOutcome {
                patch: match areas.hit_test(point) {
                    Some(index) => Some(StatePatch::Press(index)),
                    None => release,
                },
                activated: None,
            },
            PointerEvent::Up(point) => PressOutcome {
                patch: release,
                activated: self.pressed.filter(|&index| areas.contains(index, point)),
            },
            PointerEvent::Tap(point) => PressOutcome {
                patch: release,
                activated: areas.hit_test(point),
            },
            PointerEvent::Cancel => PressOutcome {
                patch: release,
                activated: None,
            },
        }
    }

    fn can_press(&self, index: usize) -> bool {
        self.is_enabled
            && self
                .styled_text
                .as_ref()
                .and_then(|text| text.detection(index))
                .is_some_and(|detection| detection.style().is_highlightable())
    }
}
