// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use font_shorthand::{FamilyList, FontStretch, FontStyle, FontVariant, FontWeight, ParsedFont};

use crate::FontResource;

/// What a [`FontResolver`] is asked to find: a parsed font without its size.
///
/// The size is applied when measuring and drawing, so one resource serves every size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FontQuery<'a> {
    /// The `font-style` keyword.
    pub style: FontStyle,
    /// The `font-variant` keyword.
    pub variant: FontVariant,
    /// The `font-weight` keyword or number.
    pub weight: FontWeight,
    /// The `font-stretch` keyword.
    pub stretch: FontStretch,
    /// The family list as written.
    pub family: &'a str,
}

impl<'a> FontQuery<'a> {
    /// Splits the family list into individual names.
    pub fn families(&self) -> FamilyList<'a> {
        FamilyList::new(self.family)
    }
}

impl<'a> From<&'a ParsedFont> for FontQuery<'a> {
    fn from(font: &'a ParsedFont) -> Self {
        Self {
            style: font.style,
            variant: font.variant,
            weight: font.weight,
            stretch: font.stretch,
            family: &font.family,
        }
    }
}

/// Finds the font resource for a query.
///
/// Implemented for closures, which need their argument type spelled out:
///
/// ```
/// use canvas_text::{FontQuery, FontResolver};
/// # use canvas_text::{FontResource, Glyph, kurbo::BezPath};
/// # struct Roboto;
/// # impl FontResource for Roboto {
/// #     fn units_per_em(&self) -> f32 { 2048.0 }
/// #     fn ascender(&self) -> f32 { 1900.0 }
/// #     fn descender(&self) -> f32 { -500.0 }
/// #     fn glyphs(&self, _: &str) -> Vec<Glyph> { Vec::new() }
/// #     fn kerning(&self, _: &Glyph, _: &Glyph) -> f32 { 0.0 }
/// #     fn outline(&self, _: &str, _: f32, _: f32, _: f32) -> BezPath { BezPath::new() }
/// # }
///
/// let roboto = Roboto;
/// let mut resolver = |query: &FontQuery<'_>| {
///     query
///         .families()
///         .filter_map(Result::ok)
///         .any(|name| name.name() == "Roboto")
///         .then_some(&roboto)
/// };
/// # let font = canvas_text::font_shorthand::ParsedFont::parse("26px Arial, Roboto").unwrap();
/// assert!(resolver.resolve(&FontQuery::from(&font)).is_some());
/// ```
pub trait FontResolver {
    /// The resolved font type.
    type Font: FontResource;

    /// Returns the font for `query`, or `None` if there is none.
    fn resolve(&mut self, query: &FontQuery<'_>) -> Option<Self::Font>;
}

impl<F, T> FontResolver for F
where
    F: FnMut(&FontQuery<'_>) -> Option<T>,
    T: FontResource,
{
    type Font = T;

    fn resolve(&mut self, query: &FontQuery<'_>) -> Option<T> {
        self(query)
    }
}
