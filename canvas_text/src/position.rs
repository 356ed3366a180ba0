// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving the outline origin from the canvas alignment and baseline modes.

use core::fmt;

use crate::{FontResource, OutlinePaint, TextMetrics, TextSurface, measure};

/// Horizontal alignment of text relative to the anchor point.
///
/// `Start` and `End` are treated as `Left` and `Right`; there is no bidi handling.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The canvas default.
    #[default]
    Start,
    /// Same as `Right`.
    End,
    /// The anchor is the left edge.
    Left,
    /// The anchor is the right edge.
    Right,
    /// The anchor is halfway across.
    Center,
}

impl TextAlign {
    /// Parses a canvas `textAlign` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "start" => Self::Start,
            "end" => Self::End,
            "left" => Self::Left,
            "right" => Self::Right,
            "center" => Self::Center,
            _ => return None,
        })
    }

    /// Returns the canvas keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    /// Returns how far the origin moves left of the anchor for text of the given width.
    pub fn offset(self, width: f32) -> f32 {
        match self {
            Self::Start | Self::Left => 0.0,
            Self::End | Self::Right => width,
            Self::Center => width / 2.0,
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which line of the text sits on the anchor point.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The top of the em box, approximated from the ink ascent and the font descender.
    Top,
    /// The top of the ink.
    Hanging,
    /// Halfway up the ink.
    Middle,
    /// The canvas default. Outlines are drawn relative to this line.
    #[default]
    Alphabetic,
    /// The font descender.
    Ideographic,
    /// Same as `Ideographic`.
    Bottom,
}

impl TextBaseline {
    /// Parses a canvas `textBaseline` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "top" => Self::Top,
            "hanging" => Self::Hanging,
            "middle" => Self::Middle,
            "alphabetic" => Self::Alphabetic,
            "ideographic" => Self::Ideographic,
            "bottom" => Self::Bottom,
            _ => return None,
        })
    }

    /// Returns the canvas keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Hanging => "hanging",
            Self::Middle => "middle",
            Self::Alphabetic => "alphabetic",
            Self::Ideographic => "ideographic",
            Self::Bottom => "bottom",
        }
    }

    /// Returns how far the alphabetic baseline moves down from the anchor.
    ///
    /// `Ideographic` and `Bottom` use the font descender, which is negative, so they move the
    /// baseline up.
    pub fn offset(self, metrics: &TextMetrics) -> f32 {
        match self {
            Self::Alphabetic => 0.0,
            Self::Top => metrics.actual_bounding_box_ascent - metrics.font_bounding_box_descent,
            Self::Hanging => metrics.actual_bounding_box_ascent,
            Self::Middle => metrics.actual_bounding_box_ascent / 2.0,
            Self::Ideographic | Self::Bottom => metrics.font_bounding_box_descent,
        }
    }
}

impl fmt::Display for TextBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether positioning with these modes depends on the text's metrics.
pub fn needs_metrics(align: TextAlign, baseline: TextBaseline) -> bool {
    baseline != TextBaseline::Alphabetic || !matches!(align, TextAlign::Start | TextAlign::Left)
}

/// Resolves the alphabetic baseline origin of `text` anchored at `(x, y)`.
///
/// The text is only measured when [`needs_metrics`] says so.
pub fn text_origin<F: FontResource + ?Sized>(
    text: &str,
    font: &F,
    font_size: f32,
    x: f32,
    y: f32,
    align: TextAlign,
    baseline: TextBaseline,
) -> (f32, f32) {
    if !needs_metrics(align, baseline) {
        return (x, y);
    }
    let metrics = measure(text, font, font_size);
    (x - align.offset(metrics.width), y + baseline.offset(&metrics))
}

/// Positions `text`, builds its outline and paints it on `surface`.
///
/// Exactly one of fill or stroke happens, as chosen by `paint`.
pub fn draw_outline<S: TextSurface + ?Sized, F: FontResource + ?Sized>(
    surface: &mut S,
    text: &str,
    font: &F,
    font_size: f32,
    x: f32,
    y: f32,
    align: TextAlign,
    baseline: TextBaseline,
    paint: OutlinePaint<'_, S::Paint>,
) {
    let (x, y) = text_origin(text, font, font_size, x, y, align, baseline);
    let path = font.outline(text, x, y, font_size);
    surface.draw_path(&path, paint);
}
