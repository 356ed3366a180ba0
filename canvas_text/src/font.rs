// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The font abstraction text is measured and drawn with.

use std::rc::Rc;
use std::sync::Arc;

use crate::kurbo::BezPath;

/// A glyph with the metrics needed to measure text, in font units.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct Glyph {
    /// The font-specific identifier for this glyph.
    ///
    /// This ID is specific to the font being used and corresponds to the
    /// glyph index within that font. It is *not* a Unicode code point.
    pub id: u32,
    /// Horizontal advance.
    pub advance_width: f32,
    /// Bottom of the glyph's ink, negative below the baseline.
    pub y_min: f32,
    /// Top of the glyph's ink, positive above the baseline.
    pub y_max: f32,
}

/// A loaded font that can map text to glyphs and produce outlines.
///
/// All metrics are in font units; callers scale them by `font_size / units_per_em()`.
pub trait FontResource {
    /// Returns the size of the em square.
    fn units_per_em(&self) -> f32;

    /// Returns the typographic ascender, positive above the baseline.
    fn ascender(&self) -> f32;

    /// Returns the typographic descender, negative below the baseline.
    fn descender(&self) -> f32;

    /// Maps every character of `text` to a glyph, in order.
    ///
    /// Characters without a glyph map to the font's fallback glyph.
    fn glyphs(&self, text: &str) -> Vec<Glyph>;

    /// Returns the kerning adjustment between two adjacent glyphs, zero if there is none.
    fn kerning(&self, left: &Glyph, right: &Glyph) -> f32;

    /// Returns the outline of `text` with its baseline origin at `(x, y)`, in a y-down
    /// coordinate system, at `font_size` pixels per em.
    fn outline(&self, text: &str, x: f32, y: f32, font_size: f32) -> BezPath;
}

/// Returns the advance of each glyph, kerned against the glyph that follows it.
///
/// The last glyph is not kerned. The advances sum to the unscaled width of the glyph run.
pub fn glyph_advances<'a, F: FontResource + ?Sized>(
    font: &'a F,
    glyphs: &'a [Glyph],
) -> impl Iterator<Item = f32> + 'a {
    glyphs.iter().enumerate().map(move |(i, glyph)| {
        let kerning = glyphs
            .get(i + 1)
            .map_or(0.0, |next| font.kerning(glyph, next));
        glyph.advance_width + kerning
    })
}

macro_rules! forward_font_resource {
    ($($ty:ty),*) => {
        $(
            impl<T: FontResource + ?Sized> FontResource for $ty {
                fn units_per_em(&self) -> f32 {
                    (**self).units_per_em()
                }

                fn ascender(&self) -> f32 {
                    (**self).ascender()
                }

                fn descender(&self) -> f32 {
                    (**self).descender()
                }

                fn glyphs(&self, text: &str) -> Vec<Glyph> {
                    (**self).glyphs(text)
                }

                fn kerning(&self, left: &Glyph, right: &Glyph) -> f32 {
                    (**self).kerning(left, right)
                }

                fn outline(&self, text: &str, x: f32, y: f32, font_size: f32) -> BezPath {
                    (**self).outline(text, x, y, font_size)
                }
            }
        )*
    };
}

forward_font_resource!(&T, Box<T>, Rc<T>, Arc<T>);
