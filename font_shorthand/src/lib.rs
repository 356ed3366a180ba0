// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing of the CSS `font` shorthand.
//!
//! This crate turns strings such as `italic bold 26px/1.2 "Open Sans", sans-serif` into a
//! [`ParsedFont`] and provides the small keyword vocabulary the shorthand is made of
//! ([`FontStyle`], [`FontVariant`], [`FontWeight`], [`FontStretch`], [`FontSize`] and
//! [`LineHeight`]).
//!
//! The family part of the shorthand is kept verbatim. Resolving it is the job of whoever
//! maps a parsed font to actual font data; [`ParsedFont::families`] is available to split the
//! fallback list and unquote names when that is wanted.
//!
//! All keyword parsers are case-sensitive.
//!
//! ## Example
//!
//! ```
//! use font_shorthand::{FontStyle, FontWeight, LineHeight, ParsedFont};
//!
//! let font = ParsedFont::parse(r#"italic bold 26px/1.2 "Open Sans", sans-serif"#).unwrap();
//! assert_eq!(font.style, FontStyle::Italic);
//! assert_eq!(font.weight, FontWeight::Bold);
//! assert_eq!(font.size.to_px(), Some(26.0));
//! assert_eq!(font.line_height, LineHeight::Value("1.2".into()));
//! assert_eq!(font.family, r#""Open Sans", sans-serif"#);
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

mod family;
mod generic;
mod keywords;
mod length;
mod shorthand;

pub use family::{FamilyList, FontFamilyName, ParseFontFamilyError, ParseFontFamilyErrorKind};
pub use generic::GenericFamily;
pub use keywords::{FontStretch, FontStyle, FontVariant, FontWeight};
pub use length::{FontSize, LengthUnit, LineHeight};
pub use shorthand::ParsedFont;
