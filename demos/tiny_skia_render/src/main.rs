// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draws text from the outlines of a TrueType or OpenType file onto a Tiny-Skia pixmap.
//!
//! A pixmap has no text support of its own, so every string goes through [`TextShim`].
//!
//! ```text
//! tiny_skia_render <font file> [output.png] [text] [font]
//! ```

use std::error::Error;
use std::path::PathBuf;

use canvas_text::font_shorthand::FontFamilyName;
use canvas_text::kurbo::{BezPath, PathEl};
use canvas_text::{
    FontQuery, OutlineFont, OutlinePaint, TextAlign, TextBaseline, TextMetrics, TextShim,
    TextState, TextSurface,
};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let font_path = PathBuf::from(args.next().ok_or("expected a path to a font file")?);
    let output_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tiny_skia_render.png"));
    let text = args.next().unwrap_or_else(|| String::from("Hello World"));
    let font = args.next().unwrap_or_else(|| String::from("48px Demo"));

    let data = std::fs::read(&font_path)?;
    let outlines = OutlineFont::new(&data)?;

    // Any named family maps to the loaded file. Generic families are left to the surface,
    // which cannot draw them.
    let resolver = |query: &FontQuery<'_>| {
        query
            .families()
            .any(|family| matches!(family, Ok(FontFamilyName::Named(_))))
            .then_some(&outlines)
    };

    let mut pixmap = Pixmap::new(WIDTH, HEIGHT).ok_or("invalid pixmap size")?;
    pixmap.fill(Color::WHITE);
    let mut shim = TextShim::new(PixmapSurface { pixmap }, resolver);

    let black = Color::BLACK;
    let red = Color::from_rgba8(200, 30, 30, 255);
    let blue = Color::from_rgba8(30, 60, 200, 255);
    let state = TextState::new(&font, &black, &red);

    let metrics = shim.measure_text(&text, &font)?;
    log::info!("{text:?} in {font:?} is {} px wide", metrics.width);

    let center = WIDTH as f32 / 2.0;
    shim.fill_text(&text, 20.0, 80.0, None, &state)?;
    shim.stroke_text(
        &text,
        center,
        180.0,
        None,
        &state.with_align(TextAlign::Center),
    )?;
    shim.fill_text(
        &text,
        WIDTH as f32 - 20.0,
        HEIGHT as f32 - 20.0,
        None,
        &TextState::new(&font, &blue, &blue)
            .with_align(TextAlign::Right)
            .with_baseline(TextBaseline::Bottom),
    )?;

    shim.into_surface().pixmap.save_png(&output_path)?;
    println!("Wrote {}", output_path.display());
    Ok(())
}

/// A pixmap that can paint paths but has no text rendering of its own.
struct PixmapSurface {
    pixmap: Pixmap,
}

impl TextSurface for PixmapSurface {
    type Paint = Color;

    fn measure_text(&mut self, text: &str, font: &str) -> TextMetrics {
        log::warn!("No native text support: {text:?} in {font:?} measures as empty");
        TextMetrics::default()
    }

    fn fill_text(
        &mut self,
        text: &str,
        _x: f32,
        _y: f32,
        _max_width: Option<f32>,
        state: &TextState<'_, Color>,
    ) {
        log::warn!("No native text support: skipped {text:?} in {:?}", state.font);
    }

    fn stroke_text(
        &mut self,
        text: &str,
        _x: f32,
        _y: f32,
        _max_width: Option<f32>,
        state: &TextState<'_, Color>,
    ) {
        log::warn!("No native text support: skipped {text:?} in {:?}", state.font);
    }

    fn draw_path(&mut self, path: &BezPath, paint: OutlinePaint<'_, Color>) {
        let Some(path) = to_tiny_skia(path) else {
            return;
        };
        let mut brush = Paint::default();
        brush.anti_alias = true;
        match paint {
            OutlinePaint::Fill(color) => {
                brush.set_color(*color);
                self.pixmap.fill_path(
                    &path,
                    &brush,
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
            OutlinePaint::Stroke(color) => {
                brush.set_color(*color);
                self.pixmap.stroke_path(
                    &path,
                    &brush,
                    &Stroke::default(),
                    Transform::identity(),
                    None,
                );
            }
        }
    }
}

/// Converts a kurbo path. Returns `None` for paths with no segments.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Tiny-Skia works in f32 and glyph outlines fit comfortably."
)]
fn to_tiny_skia(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => {
                builder.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32);
            }
            PathEl::CurveTo(c0, c1, p) => builder.cubic_to(
                c0.x as f32,
                c0.y as f32,
                c1.x as f32,
                c1.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
