// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-testable rectangles derived from a layout pass.

use alloc::vec::Vec;

use detected_text::StyledText;

use crate::{LabelConfig, LayoutAdapter, LayoutResult, Point, Rect, Size};

/// One rectangle occupied by a highlightable detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractiveArea {
    /// The rectangle in view-local coordinates.
    pub rect: Rect,
    /// Index of the detection in [`StyledText::detections`].
    pub detection: usize,
}

/// The interactive areas of one layout pass, in registration order.
///
/// Areas are registered detection by detection, in detection order, and within a detection in
/// visual line order. The index is never patched: every layout pass builds a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractiveAreas {
    areas: Vec<InteractiveArea>,
    container: Size,
}

impl InteractiveAreas {
    /// An index with no areas.
    pub fn empty(container: Size) -> Self {
        Self {
            areas: Vec::new(),
            container,
        }
    }

    /// Runs a layout pass for `text` and records the rectangles of its highlightable detections.
    ///
    /// The text is laid out with the font and alignment of `config` inherited beneath its own
    /// attributes. When the laid-out text is shorter than the container it is vertically centered,
    /// and every rectangle is shifted down by the same amount. A degenerate container yields no
    /// areas and the adapter is not consulted.
    pub fn build<L: LayoutAdapter>(
        adapter: &mut L,
        text: &StyledText,
        container: Size,
        config: &LabelConfig,
    ) -> Self {
        if container.is_degenerate() {
            log::trace!("degenerate container {container:?}, no interactive areas");
            return Self::empty(container);
        }

        let inherited = text.plain().with_inherited(&config.inherited_attributes());
        let layout = adapter.measure(&inherited, container, config);
        let dy = vertical_offset(container, layout.used_size());

        let mut areas = Vec::new();
        for (index, detection) in text.highlightable() {
            layout.rects_for_range_with(detection.range(), |rect| {
                areas.push(InteractiveArea {
                    rect: rect.offset(0.0, dy),
                    detection: index,
                });
            });
        }
        log::trace!(
            "layout pass in {container:?}: {} interactive areas, dy = {dy}",
            areas.len()
        );
        Self { areas, container }
    }

    /// The container size this index was built for.
    #[inline]
    pub fn container(&self) -> Size {
        self.container
    }

    /// The detection owning the first area that contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.areas
            .iter()
            .find(|area| area.rect.contains(point))
            .map(|area| area.detection)
    }

    /// Returns `true` if any area of `detection` contains `point`.
    pub fn contains(&self, detection: usize, point: Point) -> bool {
        self.rects_for(detection).any(|rect| rect.contains(point))
    }

    /// The rectangles recorded for `detection`.
    pub fn rects_for(&self, detection: usize) -> impl Iterator<Item = Rect> + '_ {
        self.areas
            .iter()
            .filter(move |area| area.detection == detection)
            .map(|area| area.rect)
    }

    /// All areas in registration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &InteractiveArea> + '_ {
        self.areas.iter()
    }

    /// Number of recorded areas.
    #[inline]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns `true` if there are no areas.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Offset that vertically centers text of `used` size in `container`, never negative.
fn vertical_offset(container: Size, used: Size) -> f64 {
    ((container.height - used.height) / 2.0).max(0.0)
}
