// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canvas_text::kurbo::{BezPath, Rect, Shape};
use canvas_text::{OutlinePaint, TextAlign, TextBaseline, TextMetrics, TextState, TextSurface};

/// One call a [`RecordingSurface`] received.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    MeasureText {
        text: String,
        font: String,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        font: String,
        style: &'static str,
        align: TextAlign,
        baseline: TextBaseline,
    },
    StrokeText {
        text: String,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        font: String,
        style: &'static str,
        align: TextAlign,
        baseline: TextBaseline,
    },
    FillPath {
        path: BezPath,
        style: &'static str,
    },
    StrokePath {
        path: BezPath,
        style: &'static str,
    },
}

impl Call {
    /// Returns the bounding box of a painted path.
    pub(crate) fn path_bounds(&self) -> Option<Rect> {
        match self {
            Self::FillPath { path, .. } | Self::StrokePath { path, .. } => {
                Some(path.bounding_box())
            }
            _ => None,
        }
    }
}

/// A surface that records what it is asked to do.
///
/// Its own text measurement reports 10px per byte of text, so native results are easy to
/// tell apart from outline based ones.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) calls: Vec<Call>,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Metrics the native implementation reports for `text`.
    pub(crate) fn native_metrics(text: &str) -> TextMetrics {
        TextMetrics {
            width: 10.0 * text.len() as f32,
            actual_bounding_box_ascent: 7.0,
            actual_bounding_box_descent: -2.0,
            font_bounding_box_ascent: 8.0,
            font_bounding_box_descent: -3.0,
        }
    }

    /// Takes the calls recorded so far.
    pub(crate) fn take_calls(&mut self) -> Vec<Call> {
        core::mem::take(&mut self.calls)
    }
}

impl TextSurface for RecordingSurface {
    type Paint = &'static str;

    fn measure_text(&mut self, text: &str, font: &str) -> TextMetrics {
        self.calls.push(Call::MeasureText {
            text: text.into(),
            font: font.into(),
        });
        Self::native_metrics(text)
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        state: &TextState<'_, Self::Paint>,
    ) {
        self.calls.push(Call::FillText {
            text: text.into(),
            x,
            y,
            max_width,
            font: state.font.into(),
            style: *state.fill_style,
            align: state.text_align,
            baseline: state.text_baseline,
        });
    }

    fn stroke_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        state: &TextState<'_, Self::Paint>,
    ) {
        self.calls.push(Call::StrokeText {
            text: text.into(),
            x,
            y,
            max_width,
            font: state.font.into(),
            style: *state.stroke_style,
            align: state.text_align,
            baseline: state.text_baseline,
        });
    }

    fn draw_path(&mut self, path: &BezPath, paint: OutlinePaint<'_, Self::Paint>) {
        self.calls.push(match paint {
            OutlinePaint::Fill(style) => Call::FillPath {
                path: path.clone(),
                style: *style,
            },
            OutlinePaint::Stroke(style) => Call::StrokePath {
                path: path.clone(),
                style: *style,
            },
        });
    }
}
