// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Benchmarks
//!
//! This module provides benchmarks for parsing fonts, measuring text and drawing it through
//! the shim.

use std::hint::black_box;

use canvas_text::{FontQuery, TextAlign, TextBaseline, TextShim, TextState};
use canvas_text_dev::SyntheticFont;
use font_shorthand::ParsedFont;
use tango_bench::{Benchmark, benchmark_fn};

use crate::{NullSurface, get_samples};

/// Benchmark for parsing `font` shorthands.
pub fn parse() -> Vec<Benchmark> {
    [
        ("size and family", "16px serif"),
        ("descriptors", "italic small-caps bold condensed 16px/1.5 serif"),
        (
            "family list",
            r#"bold 26px "Open Sans", "Helvetica Neue", Arial, sans-serif"#,
        ),
    ]
    .into_iter()
    .map(|(name, source)| {
        benchmark_fn(format!("Parse - {name}"), move |b| {
            b.iter(move || black_box(ParsedFont::parse(black_box(source))))
        })
    })
    .collect()
}

/// Benchmark for measuring text.
pub fn measure() -> Vec<Benchmark> {
    let samples = get_samples();

    samples
        .iter()
        .map(|sample| {
            benchmark_fn(
                format!("Measure - {} {}", sample.name, sample.modification),
                move |b| {
                    let font = SyntheticFont::latin();
                    b.iter(move || black_box(canvas_text::measure(&sample.text, &font, 16.0)))
                },
            )
        })
        .collect()
}

/// Benchmark for filling four lines of text through a fresh shim.
pub fn shim() -> Vec<Benchmark> {
    let samples = get_samples();

    samples
        .iter()
        .flat_map(|sample| {
            [
                (TextAlign::Start, TextBaseline::Alphabetic),
                (TextAlign::Center, TextBaseline::Middle),
            ]
            .map(|(align, baseline)| {
                benchmark_fn(
                    format!(
                        "Shim fill - {} {} {align} {baseline}",
                        sample.name, sample.modification
                    ),
                    move |b| {
                        let font = SyntheticFont::latin();
                        b.iter(move || {
                            let resolver = |_: &FontQuery<'_>| Some(&font);
                            let mut shim = TextShim::new(NullSurface, resolver);
                            let state = TextState::new("16px Synthetic Sans", &(), &())
                                .with_align(align)
                                .with_baseline(baseline);
                            for y in [0.0, 20.0, 40.0, 60.0] {
                                black_box(shim.fill_text(&sample.text, 0.0, y, None, &state))
                                    .unwrap();
                            }
                        })
                    },
                )
            })
        })
        .collect()
}
