// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas Text measures and draws canvas text from the vector outlines of a font, instead of
//! relying on whatever font rasterizer the drawing surface has (if any).
//!
//! The entry point is [`TextShim`], which sits in front of a [`TextSurface`] and takes over
//! its `measure_text`, `fill_text` and `stroke_text` operations:
//!
//! 1. The CSS `font` string of each call is parsed with [`font_shorthand`] (the last parse is
//!    cached, keyed on the string's value).
//! 2. A caller-supplied [`FontResolver`] maps the parsed font to a [`FontResource`].
//! 3. Text is measured with [`measure`], positioned with [`text_origin`] and turned into a
//!    single outline that the surface fills or strokes through [`TextSurface::draw_path`].
//!
//! When no font can be resolved the shim either reports [`ErrorKind::FontNotFound`] (strict
//! mode, the default) or quietly calls the surface's own text operations instead.
//!
//! ## Features
//!
//! - `skrifa` (enabled by default): Provides [`OutlineFont`], a [`FontResource`] for
//!   TrueType/OpenType data backed by [Skrifa](skrifa).
//!
//! ## Example
//!
//! ```
//! use canvas_text::{measure, FontResource, Glyph};
//! use canvas_text::kurbo::BezPath;
//!
//! /// Every character is a 500 unit wide box on a 1000 unit em.
//! struct Boxes;
//!
//! impl FontResource for Boxes {
//!     fn units_per_em(&self) -> f32 { 1000.0 }
//!     fn ascender(&self) -> f32 { 800.0 }
//!     fn descender(&self) -> f32 { -200.0 }
//!     fn glyphs(&self, text: &str) -> Vec<Glyph> {
//!         text.chars()
//!             .map(|ch| Glyph { id: ch.into(), advance_width: 500.0, y_min: 0.0, y_max: 700.0 })
//!             .collect()
//!     }
//!     fn kerning(&self, _: &Glyph, _: &Glyph) -> f32 { 0.0 }
//!     fn outline(&self, _: &str, _: f32, _: f32, _: f32) -> BezPath { BezPath::new() }
//! }
//!
//! let metrics = measure("abcd", &Boxes, 20.0);
//! assert_eq!(metrics.width, 40.0);
//! assert_eq!(metrics.actual_bounding_box_ascent, 14.0);
//! assert_eq!(metrics.font_bounding_box_descent, -4.0);
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use font_shorthand;
pub use peniko::kurbo;

mod error;
mod font;
mod metrics;
mod position;
mod resolve;
mod shim;
mod surface;

#[cfg(feature = "skrifa")]
mod kerning;
#[cfg(feature = "skrifa")]
mod outline_font;


pub use error::{Error, ErrorKind};
pub use font::{FontResource, Glyph, glyph_advances};
pub use metrics::{TextMetrics, measure};
pub use position::{TextAlign, TextBaseline, draw_outline, needs_metrics, text_origin};
pub use resolve::{FontQuery, FontResolver};
pub use shim::{ShimOptions, TextShim};
pub use surface::{OutlinePaint, TextState, TextSurface};

#[cfg(feature = "skrifa")]
pub use outline_font::OutlineFont;
