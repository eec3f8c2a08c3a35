// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete attributed strings: text plus a flat run list.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Attributes, TextRange};

/// A contiguous byte range of an [`AttributedString`] and the attributes in effect over it.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRun {
    /// The byte range covered by this run.
    pub range: Range<usize>,
    /// The attributes in effect over `range`.
    pub attributes: Attributes,
}

/// Text with fully resolved attributes.
///
/// This is what a display layer draws. Unlike a span list, the runs never overlap:
///
/// - runs are sorted, non-empty and contiguous, covering `0..len` exactly
/// - adjacent runs never carry equal attributes (they are coalesced)
/// - empty text has no runs
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedString {
    text: Arc<str>,
    runs: Vec<AttributeRun>,
}

impl AttributedString {
    /// Creates a string with `attributes` applied to the whole text.
    pub fn new(text: impl Into<Arc<str>>, attributes: Attributes) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            alloc::vec![AttributeRun {
                range: 0..text.len(),
                attributes,
            }]
        };
        Self { text, runs }
    }

    /// The underlying text.
    #[inline]
    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    /// The underlying text as `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The attribute runs, in text order.
    #[inline]
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// The attributes in effect at byte `index`, or `None` past the end of the text.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        let ix = self.runs.partition_point(|run| run.range.end <= index);
        self.runs.get(ix).map(|run| &run.attributes)
    }

    /// Merges `attributes` into every run within `range`; values from `attributes` win.
    pub fn apply(&mut self, range: TextRange, attributes: &Attributes) {
        debug_assert!(
            range.end() <= self.len(),
            "range {:?} out of bounds for len {}",
            range.as_range(),
            self.len()
        );
        if range.is_empty() || attributes.is_empty() {
            return;
        }
        self.split_at(range.start());
        self.split_at(range.end());
        for run in &mut self.runs {
            if run.range.start >= range.start() && run.range.end <= range.end() {
                run.attributes.merge(attributes);
            }
        }
        self.coalesce();
    }

    /// Returns a copy of `self` with `attributes` merged into `range`.
    #[must_use]
    pub fn with_overlay(&self, range: TextRange, attributes: &Attributes) -> Self {
        let mut out = self.clone();
        out.apply(range, attributes);
        out
    }

    /// Returns a copy of `self` where every run inherits `fallback` for the attributes it does
    /// not set explicitly.
    ///
    /// Explicit attributes always take precedence over inherited ones.
    #[must_use]
    pub fn with_inherited(&self, fallback: &Attributes) -> Self {
        let mut out = self.clone();
        for run in &mut out.runs {
            run.attributes.inherit(fallback);
        }
        out.coalesce();
        out
    }

    /// Splits the run containing `index` so that a run boundary falls on `index`.
    fn split_at(&mut self, index: usize) {
        if index == 0 || index >= self.len() {
            return;
        }
        let ix = self.runs.partition_point(|run| run.range.end <= index);
        let run = &mut self.runs[ix];
        if run.range.start == index {
            return;
        }
        let tail = AttributeRun {
            range: index..run.range.end,
            attributes: run.attributes.clone(),
        };
        run.range.end = index;
        self.runs.insert(ix + 1, tail);
    }

    fn coalesce(&mut self) {
        let mut out: Vec<AttributeRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match out.last_mut() {
                Some(last) if last.attributes == run.attributes => last.range.end = run.range.end,
                _ => out.push(run),
            }
        }
        self.runs = out;
    }
}
