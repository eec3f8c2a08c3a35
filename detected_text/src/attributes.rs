// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text attribute vocabulary and attribute sets.

use alloc::sync::Arc;
use alloc::vec::Vec;

/// An 8-bit sRGB color with alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component, `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with its alpha replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Visual weight of a font, on the CSS `100..=900` scale.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(pub f32);

impl FontWeight {
    /// Weight `400`.
    pub const NORMAL: Self = Self(400.0);
    /// Weight `700`.
    pub const BOLD: Self = Self(700.0);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Horizontal alignment of lines within the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Left for left-to-right text, right for right-to-left text.
    #[default]
    Natural,
    /// Align to the left edge.
    Left,
    /// Center each line.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch every line but the last to the container width.
    Justified,
}

/// A single text attribute: a name together with its value.
#[derive(Clone, Debug, PartialEq)]
pub enum TextAttribute {
    /// Font family name.
    FontFamily(Arc<str>),
    /// Font size in layout units.
    FontSize(f32),
    /// Font weight.
    FontWeight(FontWeight),
    /// Italic style.
    Italic(bool),
    /// Text color.
    Foreground(Color),
    /// Color painted behind the glyphs.
    Background(Color),
    /// Underline decoration.
    Underline(bool),
    /// Strikethrough decoration.
    Strikethrough(bool),
    /// Extra spacing between letters, in layout units.
    LetterSpacing(f32),
    /// Paragraph alignment.
    Alignment(TextAlignment),
}

impl TextAttribute {
    /// The name of this attribute.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::FontFamily(_) => AttributeKey::FontFamily,
            Self::FontSize(_) => AttributeKey::FontSize,
            Self::FontWeight(_) => AttributeKey::FontWeight,
            Self::Italic(_) => AttributeKey::Italic,
            Self::Foreground(_) => AttributeKey::Foreground,
            Self::Background(_) => AttributeKey::Background,
            Self::Underline(_) => AttributeKey::Underline,
            Self::Strikethrough(_) => AttributeKey::Strikethrough,
            Self::LetterSpacing(_) => AttributeKey::LetterSpacing,
            Self::Alignment(_) => AttributeKey::Alignment,
        }
    }
}

/// The name of a [`TextAttribute`], without its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// [`TextAttribute::FontFamily`].
    FontFamily,
    /// [`TextAttribute::FontSize`].
    FontSize,
    /// [`TextAttribute::FontWeight`].
    FontWeight,
    /// [`TextAttribute::Italic`].
    Italic,
    /// [`TextAttribute::Foreground`].
    Foreground,
    /// [`TextAttribute::Background`].
    Background,
    /// [`TextAttribute::Underline`].
    Underline,
    /// [`TextAttribute::Strikethrough`].
    Strikethrough,
    /// [`TextAttribute::LetterSpacing`].
    LetterSpacing,
    /// [`TextAttribute::Alignment`].
    Alignment,
}

/// A mapping from attribute name to value.
///
/// Each [`AttributeKey`] appears at most once; setting an attribute that is already present
/// replaces it. Entries are kept sorted by key, so two sets holding the same attributes compare
/// equal regardless of the order they were built in.
///
/// ## Example
///
/// ```
/// use detected_text::{AttributeKey, Attributes, Color, TextAttribute};
///
/// let base = Attributes::new()
///     .with(TextAttribute::Foreground(Color::BLACK))
///     .with(TextAttribute::FontSize(14.0));
/// let pressed = Attributes::new().with(TextAttribute::Foreground(Color::rgb(0, 0, 255)));
///
/// let merged = base.overlay(&pressed);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(
///     merged.get(AttributeKey::Foreground),
///     Some(&TextAttribute::Foreground(Color::rgb(0, 0, 255)))
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<TextAttribute>,
}

impl Attributes {
    /// The empty attribute set.
    pub const EMPTY: Self = Self {
        entries: Vec::new(),
    };

    /// Creates an empty attribute set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, attribute: TextAttribute) -> Self {
        self.set(attribute);
        self
    }

    /// Sets an attribute, returning the value it replaced.
    pub fn set(&mut self, attribute: TextAttribute) -> Option<TextAttribute> {
        match self.position(attribute.key()) {
            Ok(ix) => Some(core::mem::replace(&mut self.entries[ix], attribute)),
            Err(ix) => {
                self.entries.insert(ix, attribute);
                None
            }
        }
    }

    /// Returns the attribute stored under `key`.
    pub fn get(&self, key: AttributeKey) -> Option<&TextAttribute> {
        self.position(key).ok().map(|ix| &self.entries[ix])
    }

    /// Returns `true` if an attribute is stored under `key`.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.position(key).is_ok()
    }

    /// Removes and returns the attribute stored under `key`.
    pub fn remove(&mut self, key: AttributeKey) -> Option<TextAttribute> {
        self.position(key).ok().map(|ix| self.entries.remove(ix))
    }

    /// Sets every attribute of `other` on `self`; values from `other` win.
    pub fn merge(&mut self, other: &Self) {
        for attribute in &other.entries {
            self.set(attribute.clone());
        }
    }

    /// Returns a copy of `self` with `other` merged on top.
    #[must_use]
    pub fn overlay(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// Sets the attributes of `fallback` whose keys are not present in `self`.
    ///
    /// Attributes already present are left untouched.
    pub fn inherit(&mut self, fallback: &Self) {
        for attribute in &fallback.entries {
            if let Err(ix) = self.position(attribute.key()) {
                self.entries.insert(ix, attribute.clone());
            }
        }
    }

    /// Returns `true` if the set holds no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the attributes, ordered by key.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TextAttribute> + '_ {
        self.entries.iter()
    }

    fn position(&self, key: AttributeKey) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&key, TextAttribute::key)
    }
}

impl FromIterator<TextAttribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = TextAttribute>>(iter: I) -> Self {
        let mut out = Self::new();
        for attribute in iter {
            out.set(attribute);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a TextAttribute;
    type IntoIter = core::slice::Iter<'a, TextAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeKey, Attributes, Color, TextAttribute};

    #[test]
    fn set_replaces_same_key() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set(TextAttribute::Underline(false)), None);
        assert_eq!(
            attrs.set(TextAttribute::Underline(true)),
            Some(TextAttribute::Underline(false))
        );
        assert_eq!(attrs.len(), 1);
        assert_eq!(
            attrs.get(AttributeKey::Underline),
            Some(&TextAttribute::Underline(true))
        );
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: Attributes = [
            TextAttribute::FontSize(12.0),
            TextAttribute::Foreground(Color::WHITE),
        ]
        .into_iter()
        .collect();
        let b = Attributes::new()
            .with(TextAttribute::Foreground(Color::WHITE))
            .with(TextAttribute::FontSize(12.0));
        assert_eq!(a, b);
    }

    #[test]
    fn inherit_keeps_explicit_values() {
        let mut explicit = Attributes::new().with(TextAttribute::FontSize(20.0));
        let fallback = Attributes::new()
            .with(TextAttribute::FontSize(12.0))
            .with(TextAttribute::Italic(true));
        explicit.inherit(&fallback);
        assert_eq!(
            explicit.get(AttributeKey::FontSize),
            Some(&TextAttribute::FontSize(20.0))
        );
        assert!(explicit.contains(AttributeKey::Italic));
    }

    #[test]
    fn remove_returns_value() {
        let mut attrs = Attributes::new().with(TextAttribute::Strikethrough(true));
        assert_eq!(
            attrs.remove(AttributeKey::Strikethrough),
            Some(TextAttribute::Strikethrough(true))
        );
        assert!(attrs.is_empty());
        assert_eq!(attrs.remove(AttributeKey::Strikethrough), None);
    }
}
