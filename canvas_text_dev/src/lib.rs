// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Canvas Text Dev
//!
//! This crate provides utilities for developing Canvas Text: a synthetic font with exactly
//! known metrics, real font files, and text samples.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use canvas_text::kurbo::BezPath;
use canvas_text::{FontResource, Glyph, glyph_advances};

/// The directory that contains the font files.
pub fn font_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts/dejavu_fonts")
}

/// DejaVu Sans ExtraLight. It kerns through both `GPOS` and a legacy `kern` table.
pub const DEJAVU_SANS: &str = "DejaVuSans-ExtraLight.ttf";

/// Reads the font file `file_name` from [`font_dir`].
pub fn load_font(file_name: &str) -> std::io::Result<Vec<u8>> {
    std::fs::read(font_dir().join(file_name))
}

/// Returns a copy of the font file `data` in which the table `tag` can no longer be found.
///
/// Only the table directory entry is renamed, the table data stays where it is.
pub fn hide_table(data: &[u8], tag: [u8; 4]) -> Vec<u8> {
    let mut data = data.to_vec();
    let num_tables = u16::from_be_bytes([data[4], data[5]]);
    for record in 0..usize::from(num_tables) {
        let start = 12 + 16 * record;
        if data[start..start + 4] == tag {
            data[start..start + 4].copy_from_slice(b"zzzz");
        }
    }
    data
}

/// The family name tests and benchmarks resolve [`SyntheticFont::latin`] under.
pub const SYNTHETIC_FAMILY: &str = "Synthetic Sans";

/// A font defined entirely in code.
///
/// Every glyph is a box spanning its advance horizontally and its ink extent vertically,
/// which makes outlines easy to reason about. Characters without a glyph map to the
/// fallback glyph, whose id is 0.
#[derive(Clone, Debug)]
pub struct SyntheticFont {
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    glyphs: HashMap<char, Glyph>,
    fallback: Glyph,
    kerning: HashMap<(u32, u32), f32>,
}

impl SyntheticFont {
    /// Creates a font without glyphs. The fallback glyph is half an em wide and has no ink.
    pub fn new(units_per_em: f32, ascender: f32, descender: f32) -> Self {
        Self {
            units_per_em,
            ascender,
            descender,
            glyphs: HashMap::new(),
            fallback: Glyph {
                id: 0,
                advance_width: units_per_em / 2.0,
                y_min: 0.0,
                y_max: 0.0,
            },
            kerning: HashMap::new(),
        }
    }

    /// A Latin font on a 2048 unit em.
    ///
    /// Pixel sizes that are powers of two scale its metrics exactly. Lowercase letters are
    /// 1024 units wide with an x-height of 1024, ascenders reach 1536 and descenders -512.
    /// Capitals and digits are 1280 and 1152 units wide and 1434 tall. The space is 512
    /// units wide. Classic pairs such as `AV` and `To` are kerned.
    pub fn latin() -> Self {
        let mut font = Self::new(2048.0, 1900.0, -500.0).with_glyph(' ', 512.0, 0.0, 0.0);
        for ch in 'a'..='z' {
            let y_max = if "bdfhklt".contains(ch) { 1536.0 } else { 1024.0 };
            let y_min = if "gjpqy".contains(ch) { -512.0 } else { 0.0 };
            font = font.with_glyph(ch, 1024.0, y_min, y_max);
        }
        for ch in 'A'..='Z' {
            font = font.with_glyph(ch, 1280.0, 0.0, 1434.0);
        }
        for ch in '0'..='9' {
            font = font.with_glyph(ch, 1152.0, 0.0, 1434.0);
        }
        for ch in ".,:;!?'\"()-".chars() {
            let (y_min, y_max) = match ch {
                '.' | ':' | '!' | '?' => (0.0, 1434.0),
                ',' | ';' => (-256.0, 256.0),
                '-' => (512.0, 640.0),
                _ => (-256.0, 1536.0),
            };
            font = font.with_glyph(ch, 640.0, y_min, y_max);
        }
        for (pair, value) in [
            ("AV", -160.0),
            ("VA", -160.0),
            ("AW", -128.0),
            ("WA", -128.0),
            ("AY", -192.0),
            ("YA", -192.0),
            ("AT", -128.0),
            ("TA", -128.0),
            ("LT", -192.0),
            ("To", -192.0),
            ("Ta", -160.0),
            ("Yo", -160.0),
        ] {
            let mut chars = pair.chars();
            if let (Some(left), Some(right)) = (chars.next(), chars.next()) {
                font = font.with_kerning(left, right, value);
            }
        }
        font
    }

    /// Adds or replaces the glyph for `ch`. Its id is the character's code point.
    pub fn with_glyph(mut self, ch: char, advance_width: f32, y_min: f32, y_max: f32) -> Self {
        self.glyphs.insert(
            ch,
            Glyph {
                id: ch.into(),
                advance_width,
                y_min,
                y_max,
            },
        );
        self
    }

    /// Replaces the metrics of the fallback glyph.
    pub fn with_fallback(mut self, advance_width: f32, y_min: f32, y_max: f32) -> Self {
        self.fallback = Glyph {
            id: 0,
            advance_width,
            y_min,
            y_max,
        };
        self
    }

    /// Kerns `left` followed by `right` by `value` font units.
    pub fn with_kerning(mut self, left: char, right: char, value: f32) -> Self {
        self.kerning.insert((left.into(), right.into()), value);
        self
    }

    /// Returns the glyph `ch` maps to.
    pub fn glyph(&self, ch: char) -> Glyph {
        self.glyphs.get(&ch).copied().unwrap_or(self.fallback)
    }
}

impl FontResource for SyntheticFont {
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
        text.chars().map(|ch| self.glyph(ch)).collect()
    }

    fn kerning(&self, left: &Glyph, right: &Glyph) -> f32 {
        self.kerning
            .get(&(left.id, right.id))
            .copied()
            .unwrap_or_default()
    }

    fn outline(&self, text: &str, x: f32, y: f32, font_size: f32) -> BezPath {
        let glyphs = self.glyphs(text);
        let scale = f64::from(font_size / self.units_per_em);
        let (mut pen_x, y) = (f64::from(x), f64::from(y));
        let mut path = BezPath::new();
        for (glyph, advance) in glyphs.iter().zip(glyph_advances(self, &glyphs)) {
            if glyph.y_max > glyph.y_min {
                let x0 = pen_x;
                let x1 = pen_x + f64::from(glyph.advance_width) * scale;
                let top = y - f64::from(glyph.y_max) * scale;
                let bottom = y - f64::from(glyph.y_min) * scale;
                path.move_to((x0, bottom));
                path.line_to((x1, bottom));
                path.line_to((x1, top));
                path.line_to((x0, top));
                path.close_path();
            }
            pen_x += f64::from(advance) * scale;
        }
        path
    }
}

/// A sample to be used for development.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

/// A collection of text samples.
#[derive(Debug)]
pub struct TextSamples {
    /// A pangram with punctuation and digits.
    pub latin: Sample,
    /// Text dense with kerned pairs.
    pub kerning: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    pub const fn new() -> Self {
        let latin = include_str!("../assets/text_samples/latin.txt");
        let kerning = include_str!("../assets/text_samples/kerning.txt");
        Self {
            latin: Sample {
                name: "latin",
                text: latin,
            },
            kerning: Sample {
                name: "kerning",
                text: kerning,
            },
        }
    }

    /// Returns all samples.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        [&self.latin, &self.kerning].into_iter()
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}
