// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`FontResource`] for TrueType and OpenType data, backed by Skrifa.

use core::fmt;

use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::kerning::PairKerning;
use crate::kurbo::BezPath;
use crate::{Error, FontResource, Glyph, glyph_advances};

/// An outline font loaded from font file data.
///
/// Glyphs come from the character map without shaping, and advances and ink bounds from the
/// default instance of the font. Kerning comes from the pair adjustments of the `kern` feature
/// in `GPOS` (default or Latin script), falling back to the legacy `kern` table.
#[derive(Clone)]
pub struct OutlineFont<'a> {
    font: FontRef<'a>,
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    kerning: PairKerning<'a>,
}

impl<'a> OutlineFont<'a> {
    /// Loads the first font in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFont`](crate::ErrorKind::InvalidFont) if `data` is not a
    /// font file or collection.
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::from_index(data, 0)
    }

    /// Loads the font at `index` of a font collection.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFont`](crate::ErrorKind::InvalidFont) if `data` is not a
    /// font file or collection, or if the collection has no font at `index`.
    pub fn from_index(data: &'a [u8], index: u32) -> Result<Self, Error> {
        let font = FontRef::from_index(data, index).map_err(Error::invalid_font)?;
        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        let kerning = PairKerning::new(&font);
        log::debug!(
            "loaded font {index} ({} units per em, kerning from {})",
            metrics.units_per_em,
            kerning.source().unwrap_or("nowhere")
        );
        Ok(Self {
            font,
            units_per_em: metrics.units_per_em.into(),
            ascender: metrics.ascent,
            descender: metrics.descent,
            kerning,
        })
    }

    /// Returns the underlying Skrifa font.
    pub fn font_ref(&self) -> &FontRef<'a> {
        &self.font
    }

    fn glyph_metrics(&self) -> GlyphMetrics<'a> {
        self.font.glyph_metrics(Size::unscaled(), LocationRef::default())
    }

    /// Ink bounds from the outline, for fonts without stored bounds (CFF).
    fn outline_bounds(&self, id: GlyphId) -> Option<(f32, f32)> {
        let glyph = self.font.outline_glyphs().get(id)?;
        let mut pen = BoundsPen::default();
        let settings = DrawSettings::unhinted(Size::unscaled(), LocationRef::default());
        glyph.draw(settings, &mut pen).ok()?;
        pen.bounds
    }
}

impl FontResource for OutlineFont<'_> {
    fn units_per_em(&self) -> f32 {
        self.units_per_em
    }

    fn ascender(&self) -> f32 {
        self.ascender
    }

    fn descender(&self) -> f32 {
        self.descender
    }

    fn glyphs(&self, text: &str) -> Vec<Glyph> {
        let charmap = self.font.charmap();
        let metrics = self.glyph_metrics();
        text.chars()
            .map(|ch| {
                let id = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
                let (y_min, y_max) = match metrics.bounds(id) {
                    Some(bounds) => (bounds.y_min, bounds.y_max),
                    None => self.outline_bounds(id).unwrap_or_default(),
                };
                Glyph {
                    id: id.to_u32(),
                    advance_width: metrics.advance_width(id).unwrap_or_default(),
                    y_min,
                    y_max,
                }
            })
            .collect()
    }

    fn kerning(&self, left: &Glyph, right: &Glyph) -> f32 {
        self.kerning
            .value(GlyphId::new(left.id), GlyphId::new(right.id)) as f32
    }

    fn outline(&self, text: &str, x: f32, y: f32, font_size: f32) -> BezPath {
        let glyphs = self.glyphs(text);
        let outlines = self.font.outline_glyphs();
        let scale = font_size / self.units_per_em;
        let mut pen = OutlinePath {
            path: BezPath::new(),
            x,
            y,
        };
        for (glyph, advance) in glyphs.iter().zip(glyph_advances(self, &glyphs)) {
            if let Some(outline) = outlines.get(GlyphId::new(glyph.id)) {
                let settings = DrawSettings::unhinted(Size::new(font_size), LocationRef::default());
                if let Err(err) = outline.draw(settings, &mut pen) {
                    log::warn!("failed to draw glyph {}: {err:?}", glyph.id);
                }
            }
            pen.x += advance * scale;
        }
        pen.path
    }
}

impl fmt::Debug for OutlineFont<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFont")
            .field("units_per_em", &self.units_per_em)
            .field("ascender", &self.ascender)
            .field("descender", &self.descender)
            .field("kerning", &self.kerning.source())
            .finish_non_exhaustive()
    }
}

/// Collects glyph outlines into one path, moved to the pen position.
struct OutlinePath {
    path: BezPath,
    x: f32,
    y: f32,
}

// Note that we flip the y-axis to match our coordinate system.
impl OutlinePen for OutlinePath {
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((self.x + x, self.y - y));
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((self.x + x, self.y - y));
    }

    #[inline]
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.path.quad_to((self.x + cx, self.y - cy), (self.x + x, self.y - y));
    }

    #[inline]
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            (self.x + cx0, self.y - cy0),
            (self.x + cx1, self.y - cy1),
            (self.x + x, self.y - y),
        );
    }

    #[inline]
    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Tracks the vertical extent of the points of an outline.
#[derive(Default)]
struct BoundsPen {
    bounds: Option<(f32, f32)>,
}

impl BoundsPen {
    fn add(&mut self, y: f32) {
        self.bounds = Some(match self.bounds {
            Some((min, max)) => (min.min(y), max.max(y)),
            None => (y, y),
        });
    }
}

impl OutlinePen for BoundsPen {
    fn move_to(&mut self, _x: f32, y: f32) {
        self.add(y);
    }

    fn line_to(&mut self, _x: f32, y: f32) {
        self.add(y);
    }

    fn quad_to(&mut self, _cx: f32, cy: f32, _x: f32, y: f32) {
        self.add(cy);
        self.add(y);
    }

    fn curve_to(&mut self, _cx0: f32, cy0: f32, _cx1: f32, cy1: f32, _x: f32, y: f32) {
        self.add(cy0);
        self.add(cy1);
        self.add(y);
    }

    fn close(&mut self) {}
}
