// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The label component: state, lazy layout, and the activation callback.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use detected_text::{AttributedString, Detection, StyledText};

use crate::{
    InteractiveAreas, LabelConfig, LayoutAdapter, PointerEvent, Size, StatePatch, ViewState,
};

/// A callback invoked when the user activates a detection.
pub type ActivationHandler = Box<dyn FnMut(&StyledText, &Detection)>;

/// The surface through which a host drives a text component.
pub trait StyledTextRenderable {
    /// Replaces the displayed text, returning to the idle state.
    fn set_styled_text(&mut self, styled_text: Option<Arc<StyledText>>);

    /// Enables or disables the component. Disabling returns to the idle state.
    fn set_enabled(&mut self, enabled: bool);

    /// Sets the callback invoked with the activated detection, replacing any previous one.
    fn on_activate<F>(&mut self, handler: F)
    where
        F: FnMut(&StyledText, &Detection) + 'static;

    /// Informs the component of its new size. The layout is rebuilt before the next hit test.
    fn notify_bounds_changed(&mut self, bounds: Size);
}

/// A label that displays a [`StyledText`] and reports taps on its detections.
///
/// The label never draws anything itself. After every change, [`AttributedLabel::displayed`]
/// holds the string the host should draw, and [`AttributedLabel::revision`] tells the host
/// whether it changed.
///
/// Layout is lazy: text, configuration and bounds changes only mark it dirty, and the next call
/// that needs geometry runs a single layout pass through the [`LayoutAdapter`].
pub struct AttributedLabel<L: LayoutAdapter> {
    adapter: L,
    config: LabelConfig,
    bounds: Size,
    state: ViewState,
    displayed: Option<AttributedString>,
    revision: u64,
    areas: InteractiveAreas,
    needs_layout: bool,
    on_activate: Option<ActivationHandler>,
}

impl<L: LayoutAdapter> AttributedLabel<L> {
    /// Creates an empty, enabled label with zero bounds.
    pub fn new(adapter: L, config: LabelConfig) -> Self {
        Self {
            adapter,
            config,
            bounds: Size::ZERO,
            state: ViewState::default(),
            displayed: None,
            revision: 0,
            areas: InteractiveAreas::empty(Size::ZERO),
            needs_layout: true,
            on_activate: None,
        }
    }

    /// The display configuration.
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Replaces the display configuration and invalidates the layout.
    pub fn set_config(&mut self, config: LabelConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate_layout();
        }
    }

    /// The layout adapter.
    pub fn adapter(&self) -> &L {
        &self.adapter
    }

    /// The size of the label.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// The current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The displayed text.
    pub fn styled_text(&self) -> Option<&Arc<StyledText>> {
        self.state.styled_text()
    }

    /// Whether the label reacts to pointer events.
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// The detection currently drawn as pressed.
    pub fn pressed_detection(&self) -> Option<&Detection> {
        self.state.pressed_detection()
    }

    /// The string the host should draw, or `None` to draw nothing.
    pub fn displayed(&self) -> Option<&AttributedString> {
        self.displayed.as_ref()
    }

    /// Incremented every time the displayed string is recomputed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the next hit test will run a layout pass first.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Runs a layout pass if anything affecting layout changed since the last one.
    pub fn layout(&mut self) {
        if !self.needs_layout {
            return;
        }
        self.areas = match self.state.styled_text() {
            Some(text) => {
                InteractiveAreas::build(&mut self.adapter, text, self.bounds, &self.config)
            }
            None => InteractiveAreas::empty(self.bounds),
        };
        self.needs_layout = false;
    }

    /// The interactive areas of the current layout, running a layout pass first if needed.
    pub fn interactive_areas(&mut self) -> &InteractiveAreas {
        self.layout();
        &self.areas
    }

    /// Feeds a pointer event to the press state machine.
    ///
    /// Returns the index of the activated detection, if any, after invoking the activation
    /// callback with it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<usize> {
        self.layout();
        let outcome = self.state.press_outcome(event, &self.areas);
        if let Some(patch) = outcome.patch {
            self.apply(patch);
        }
        let index = outcome.activated?;
        let text = self.state.styled_text()?.clone();
        let detection = text.detection(index)?;
        log::debug!("activated detection {index} at {:?}", detection.range());
        if let Some(handler) = self.on_activate.as_mut() {
            handler(&*text, detection);
        }
        Some(index)
    }

    fn apply(&mut self, patch: StatePatch) {
        let (state, displayed) = self.state.reduce(patch);
        self.state = state;
        self.displayed = displayed;
        self.revision += 1;
    }

    fn invalidate_layout(&mut self) {
        self.needs_layout = true;
        self.areas = InteractiveAreas::empty(self.bounds);
    }
}

impl<L: LayoutAdapter> StyledTextRenderable for AttributedLabel<L> {
    fn set_styled_text(&mut self, styled_text: Option<Arc<StyledText>>) {
        self.apply(StatePatch::StyledText(styled_text));
        self.invalidate_layout();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.apply(StatePatch::Enabled(enabled));
    }

    fn on_activate<F>(&mut self, handler: F)
    where
        F: FnMut(&StyledText, &Detection) + 'static,
    {
        self.on_activate = Some(Box::new(handler));
    }

    fn notify_bounds_changed(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.invalidate_layout();
        }
    }
}

impl<L: LayoutAdapter + fmt::Debug> fmt::Debug for AttributedLabel<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributedLabel")
            .field("adapter", &self.adapter)
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("needs_layout", &self.needs_layout)
            .finish_non_exhaustive()
    }
}
