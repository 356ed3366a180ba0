// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `OutlineFont` against a real font file.
//!
//! At a pixel size of 2048, DejaVu Sans' 2048 unit em maps font units to pixels one to one.

use canvas_text::kurbo::{Rect, Shape};
use canvas_text::{FontQuery, FontResource, OutlineFont, TextShim, TextState, measure};
use canvas_text_dev::{DEJAVU_SANS, hide_table, load_font};

use crate::util::{Call, RecordingSurface};

const UNIT_SIZE: f32 = 2048.0;

fn dejavu_sans() -> Vec<u8> {
    load_font(DEJAVU_SANS).unwrap()
}

fn kerning(font: &OutlineFont<'_>, pair: &str) -> f32 {
    let glyphs = font.glyphs(pair);
    font.kerning(&glyphs[0], &glyphs[1])
}

fn assert_close(actual: Rect, expected: Rect) {
    let close = (actual.x0 - expected.x0).abs() < 1e-3
        && (actual.y0 - expected.y0).abs() < 1e-3
        && (actual.x1 - expected.x1).abs() < 1e-3
        && (actual.y1 - expected.y1).abs() < 1e-3;
    assert!(close, "{actual:?} != {expected:?}");
}

#[test]
fn outline_font_metrics_come_from_the_font() {
    let data = dejavu_sans();
    let font = OutlineFont::new(&data).unwrap();

    assert_eq!(font.units_per_em(), 2048.0);
    assert_eq!(font.ascender(), 1901.0);
    assert_eq!(font.descender(), -483.0);

    let metrics = measure("hop", &font, UNIT_SIZE);
    assert_eq!(metrics.actual_bounding_box_ascent, 1556.0);
    assert_eq!(metrics.actual_bounding_box_descent, -426.0);
    assert_eq!(metrics.font_bounding_box_ascent, 1901.0);
    assert_eq!(metrics.font_bounding_box_descent, -483.0);
}

#[test]
fn outline_font_maps_characters_through_the_charmap() {
    let data = dejavu_sans();
    let font = OutlineFont::new(&data).unwrap();

    let glyphs = font.glyphs("AV");
    assert_eq!((glyphs[0].id, glyphs[1].id), (36, 57));
    assert_eq!(glyphs[0].advance_width, 1401.0);
    assert_eq!((glyphs[0].y_min, glyphs[0].y_max), (0.0, 1493.0));

    // U+0378 is unassigned, so it falls back to `.notdef`.
    let [notdef] = font.glyphs("\u{378}")[..] else {
        panic!("one glyph per character");
    };
    assert_eq!(notdef.id, 0);
    assert_eq!(notdef.advance_width, 1229.0);
    assert_eq!((notdef.y_min, notdef.y_max), (-362.0, 1444.0));
}

#[test]
fn outline_font_kerning_narrows_measured_width() {
    let data = dejavu_sans();
    let font = OutlineFont::new(&data).unwrap();

    let advances: f32 = font.glyphs("AV").iter().map(|g| g.advance_width).sum();
    let width = measure("AV", &font, UNIT_SIZE).width;
    assert!(width < advances, "{width} >= {advances}");
    assert_eq!(width, 2671.0);

    assert_eq!(kerning(&font, "AA"), 57.0);
    assert_eq!(kerning(&font, "To"), -348.0);
    assert_eq!(kerning(&font, "HH"), 0.0);
}

#[test]
fn outline_font_kerns_from_gpos_or_kern_table() {
    let data = dejavu_sans();
    let gpos_only = hide_table(&data, *b"kern");
    let kern_only = hide_table(&data, *b"GPOS");
    let neither = hide_table(&gpos_only, *b"GPOS");

    for (name, data) in [("GPOS", &gpos_only), ("kern", &kern_only)] {
        let font = OutlineFont::new(data).unwrap();
        assert_eq!(kerning(&font, "AV"), -131.0, "{name}");
        assert_eq!(kerning(&font, "AA"), 57.0, "{name}");
    }
    let font = OutlineFont::new(&neither).unwrap();
    assert_eq!(kerning(&font, "AV"), 0.0);
    assert_eq!(measure("AV", &font, UNIT_SIZE).width, 2802.0);
}

#[test]
fn outline_font_outline_sits_on_the_baseline() {
    let data = dejavu_sans();
    let font = OutlineFont::new(&data).unwrap();

    let bounds = font.outline("H", 10.0, 100.0, UNIT_SIZE).bounding_box();
    assert_close(bounds, Rect::new(259.0, 100.0 - 1493.0, 1296.0, 100.0));

    // Half the size halves the outline around the same origin.
    let bounds = font.outline("H", 10.0, 100.0, UNIT_SIZE / 2.0).bounding_box();
    assert_close(bounds, Rect::new(134.5, 100.0 - 746.5, 653.0, 100.0));
}

#[test]
fn outline_font_outline_advances_with_kerning() {
    let data = dejavu_sans();
    let font = OutlineFont::new(&data).unwrap();

    let single = font.outline("H", 0.0, 0.0, UNIT_SIZE).bounding_box();
    let pair = font.outline("AH", 0.0, 0.0, UNIT_SIZE).bounding_box();
    assert!((pair.x1 - single.x1 - 1401.0).abs() < 1e-3, "{pair:?}");
    let kerned = font.outline("AVH", 0.0, 0.0, UNIT_SIZE).bounding_box();
    assert!((kerned.x1 - single.x1 - 2671.0).abs() < 1e-3, "{kerned:?}");
}

#[test]
fn outline_font_draws_through_the_shim() {
    let data = dejavu_sans();
    let font = OutlineFont::new(&data).unwrap();
    let mut shim = TextShim::new(RecordingSurface::new(), |_: &FontQuery<'_>| Some(&font));
    let state = TextState::new("64px DejaVu Sans", &"black", &"black");

    // 2671 units at 1/32.
    let metrics = shim.measure_text("AV", state.font).unwrap();
    assert_eq!(metrics.width, 83.46875);

    shim.fill_text("H", 0.0, 100.0, None, &state).unwrap();
    let recorded = shim.surface_mut().take_calls();
    assert!(matches!(recorded[..], [Call::FillPath { .. }]));
    let bounds = recorded[0].path_bounds().unwrap();
    assert_close(bounds, Rect::new(7.78125, 100.0 - 46.65625, 40.1875, 100.0));
}
