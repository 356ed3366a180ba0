// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::kurbo::BezPath;
use crate::{TextAlign, TextBaseline, TextMetrics};

/// How an outline is painted. Carries exactly one style.
pub enum OutlinePaint<'a, P> {
    /// Fill with the fill style.
    Fill(&'a P),
    /// Stroke with the stroke style.
    Stroke(&'a P),
}

impl<P> Clone for OutlinePaint<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for OutlinePaint<'_, P> {}

impl<P: fmt::Debug> fmt::Debug for OutlinePaint<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill(paint) => f.debug_tuple("Fill").field(paint).finish(),
            Self::Stroke(paint) => f.debug_tuple("Stroke").field(paint).finish(),
        }
    }
}

/// The drawing state a text call is made with.
///
/// This is what a canvas context would otherwise hold as mutable properties.
pub struct TextState<'a, P> {
    /// The CSS `font` shorthand.
    pub font: &'a str,
    /// Style used by fills.
    pub fill_style: &'a P,
    /// Style used by strokes.
    pub stroke_style: &'a P,
    /// Horizontal alignment.
    pub text_align: TextAlign,
    /// Vertical alignment.
    pub text_baseline: TextBaseline,
}

impl<'a, P> TextState<'a, P> {
    /// Creates a state with the default alignment and baseline.
    pub fn new(font: &'a str, fill_style: &'a P, stroke_style: &'a P) -> Self {
        Self {
            font,
            fill_style,
            stroke_style,
            text_align: TextAlign::Start,
            text_baseline: TextBaseline::Alphabetic,
        }
    }

    /// Sets the horizontal alignment.
    pub fn with_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    /// Sets the baseline.
    pub fn with_baseline(mut self, text_baseline: TextBaseline) -> Self {
        self.text_baseline = text_baseline;
        self
    }

    /// Replaces the font.
    pub fn with_font(mut self, font: &'a str) -> Self {
        self.font = font;
        self
    }
}

impl<P> Clone for TextState<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for TextState<'_, P> {}

impl<P: fmt::Debug> fmt::Debug for TextState<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextState")
            .field("font", &self.font)
            .field("fill_style", self.fill_style)
            .field("stroke_style", self.stroke_style)
            .field("text_align", &self.text_align)
            .field("text_baseline", &self.text_baseline)
            .finish()
    }
}

/// A drawing surface with native text support that can also paint arbitrary paths.
///
/// The text methods are the surface's own implementation, used when no outline font is
/// available. [`TextShim`](crate::TextShim) draws through [`draw_path`](Self::draw_path)
/// otherwise.
pub trait TextSurface {
    /// The type of fill and stroke styles.
    type Paint;

    /// Measures `text` with the surface's own text implementation.
    fn measure_text(&mut self, text: &str, font: &str) -> TextMetrics;

    /// Fills `text` with the surface's own text implementation.
    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        state: &TextState<'_, Self::Paint>,
    );

    /// Strokes `text` with the surface's own text implementation.
    fn stroke_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        state: &TextState<'_, Self::Paint>,
    );

    /// Fills or strokes `path`.
    fn draw_path(&mut self, path: &BezPath, paint: OutlinePaint<'_, Self::Paint>);
}
