// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Canvas Text Bench
//!
//! This crate provides benchmarks for the Canvas Text and Font Shorthand libraries.

use std::hint::black_box;
use std::sync::OnceLock;

use canvas_text::kurbo::BezPath;
use canvas_text::{OutlinePaint, TextMetrics, TextState, TextSurface};

pub mod benches;

/// A sample to be used for benchmarking.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The modification of the sample.
    pub modification: &'static str,
    /// The text of the sample.
    pub text: String,
}

static SAMPLES: OnceLock<Vec<Sample>> = OnceLock::new();

/// Returns a list of samples to be used for benchmarking.
pub fn get_samples() -> &'static [Sample] {
    let samples = canvas_text_dev::TextSamples::new();

    SAMPLES.get_or_init(|| {
        vec![
            Sample {
                name: samples.latin.name,
                modification: "20 characters",
                text: samples.latin.text.chars().take(20).collect(),
            },
            Sample {
                name: samples.latin.name,
                modification: "full",
                text: samples.latin.text.to_owned(),
            },
            Sample {
                name: samples.kerning.name,
                modification: "full",
                text: samples.kerning.text.to_owned(),
            },
        ]
    })
}

/// A surface that discards everything drawn on it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl TextSurface for NullSurface {
    type Paint = ();

    fn measure_text(&mut self, _: &str, _: &str) -> TextMetrics {
        TextMetrics::default()
    }

    fn fill_text(&mut self, _: &str, _: f32, _: f32, _: Option<f32>, _: &TextState<'_, ()>) {}

    fn stroke_text(&mut self, _: &str, _: f32, _: f32, _: Option<f32>, _: &TextState<'_, ()>) {}

    fn draw_path(&mut self, path: &BezPath, _: OutlinePaint<'_, ()>) {
        black_box(path);
    }
}
