// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{FontResource, glyph_advances};

/// Measurements of a run of text, in pixels.
///
/// Ascents are positive above the baseline. Descents are *negative* below the baseline, like
/// the font metrics they are derived from.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct TextMetrics {
    /// Sum of the kerned advances.
    pub width: f32,
    /// Highest ink extent of any glyph, never below zero.
    pub actual_bounding_box_ascent: f32,
    /// Lowest ink extent of any glyph, never above zero.
    pub actual_bounding_box_descent: f32,
    /// The font's ascender.
    pub font_bounding_box_ascent: f32,
    /// The font's descender.
    pub font_bounding_box_descent: f32,
}

/// Measures `text` set in `font` at `font_size` pixels per em.
///
/// The width is the sum of the glyph advances plus the kerning of each adjacent pair. The
/// actual bounding box only grows away from the baseline: a run of glyphs that sit entirely
/// above the baseline has a descent of zero, and vice versa. Empty text measures zero except
/// for the font bounding box.
pub fn measure<F: FontResource + ?Sized>(text: &str, font: &F, font_size: f32) -> TextMetrics {
    let glyphs = font.glyphs(text);
    let mut width = 0.0;
    let mut ascent = 0.0_f32;
    let mut descent = 0.0_f32;
    for (glyph, advance) in glyphs.iter().zip(glyph_advances(font, &glyphs)) {
        width += advance;
        ascent = ascent.max(glyph.y_max);
        descent = descent.min(glyph.y_min);
    }

    let units_per_em = font.units_per_em();
    let scale = if units_per_em > 0.0 {
        font_size / units_per_em
    } else {
        0.0
    };
    TextMetrics {
        width: width * scale,
        actual_bounding_box_ascent: ascent * scale,
        actual_bounding_box_descent: descent * scale,
        font_bounding_box_ascent: font.ascender() * scale,
        font_bounding_box_descent: font.descender() * scale,
    }
}
