// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `font` shorthand itself.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::{FamilyList, FontSize, FontStretch, FontStyle, FontVariant, FontWeight, LineHeight};

/// Up to four descriptor tokens, a size with an optional line height, then the family.
///
/// The descriptor tokens are matched loosely and classified afterwards, so their order does
/// not matter and unknown tokens do not make the match fail. A token can never contain `/`,
/// a comma or a quote, which keeps the family from being swallowed by the descriptors.
static SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^\s*"#,
        r#"(?:([^\s/,"']+)\s+)?"#,
        r#"(?:([^\s/,"']+)\s+)?"#,
        r#"(?:([^\s/,"']+)\s+)?"#,
        r#"(?:([^\s/,"']+)\s+)?"#,
        r#"(\+?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:px|cm|mm|em|pt|pc|in))"#,
        r#"(?:\s*/\s*([^\s/,"']+))?"#,
        r#"\s+(\S.*?)\s*$"#,
    ))
    .expect("the font shorthand pattern is a valid regex")
});

/// Number of optional descriptor groups in [`SHORTHAND`].
const DESCRIPTOR_GROUPS: usize = 4;

/// A decomposed CSS `font` shorthand.
///
/// Produced by [`ParsedFont::parse`]. Descriptor keywords that were not present are
/// `normal`; so is the line height.
///
/// The default value is the canvas default font, `10px sans-serif`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedFont {
    /// The `font-style` keyword.
    pub style: FontStyle,
    /// The `font-variant` keyword.
    pub variant: FontVariant,
    /// The `font-weight` keyword or number.
    pub weight: FontWeight,
    /// The `font-stretch` keyword.
    pub stretch: FontStretch,
    /// The font size.
    pub size: FontSize,
    /// The line height, if one followed the size.
    pub line_height: LineHeight,
    /// Everything after the size, verbatim (quotes and fallbacks included).
    pub family: String,
}

impl Default for ParsedFont {
    fn default() -> Self {
        Self {
            style: FontStyle::Normal,
            variant: FontVariant::Normal,
            weight: FontWeight::Normal,
            stretch: FontStretch::Normal,
            size: FontSize::default(),
            line_height: LineHeight::Normal,
            family: String::from("sans-serif"),
        }
    }
}

impl ParsedFont {
    /// Parses a `font` shorthand.
    ///
    /// Returns `None` when the string does not have the shape
    /// `[descriptors] <size>[/<line-height>] <family>`, in particular when there is no size
    /// with one of the units `px`, `cm`, `mm`, `em`, `pt`, `pc` or `in`.
    ///
    /// Descriptor tokens are assigned to the style, variant, weight or stretch by the keyword
    /// set they belong to, in any order. Unknown tokens are ignored. If a category shows up
    /// more than once, the last token wins.
    ///
    /// ```
    /// use font_shorthand::{FontStretch, FontVariant, LineHeight, ParsedFont};
    ///
    /// let font = ParsedFont::parse("condensed small-caps 26px Roboto").unwrap();
    /// assert_eq!(font.variant, FontVariant::SmallCaps);
    /// assert_eq!(font.stretch, FontStretch::Condensed);
    /// assert_eq!(font.line_height, LineHeight::Normal);
    /// assert_eq!(font.family, "Roboto");
    ///
    /// assert!(ParsedFont::parse("Roboto").is_none());
    /// ```
    pub fn parse(source: &str) -> Option<Self> {
        let captures = SHORTHAND.captures(source)?;
        let mut font = Self {
            style: FontStyle::Normal,
            variant: FontVariant::Normal,
            weight: FontWeight::Normal,
            stretch: FontStretch::Normal,
            size: FontSize::parse(captures.get(DESCRIPTOR_GROUPS + 1)?.as_str())?,
            line_height: LineHeight::Normal,
            family: captures.get(DESCRIPTOR_GROUPS + 3)?.as_str().to_owned(),
        };
        for token in (1..=DESCRIPTOR_GROUPS).filter_map(|group| captures.get(group)) {
            font.apply_descriptor(token.as_str());
        }
        if let Some(line_height) = captures.get(DESCRIPTOR_GROUPS + 2) {
            font.line_height = LineHeight::parse(line_height.as_str());
        }
        Some(font)
    }

    /// Assigns a descriptor token to the category whose keyword set contains it.
    fn apply_descriptor(&mut self, token: &str) {
        // `normal` belongs to every set and must not reset an earlier keyword.
        if token == "normal" {
            return;
        }
        if let Some(style) = FontStyle::parse(token) {
            self.style = style;
        } else if let Some(variant) = FontVariant::parse(token) {
            self.variant = variant;
        } else if let Some(weight) = FontWeight::parse(token) {
            self.weight = weight;
        } else if let Some(stretch) = FontStretch::parse(token) {
            self.stretch = stretch;
        }
    }

    /// Splits the family list into individual, unquoted names.
    ///
    /// ```
    /// use font_shorthand::{FontFamilyName, GenericFamily, ParsedFont};
    ///
    /// let font = ParsedFont::parse(r#"12px "Open Sans", sans-serif"#).unwrap();
    /// let names: Vec<_> = font.families().filter_map(Result::ok).collect();
    /// assert_eq!(
    ///     names,
    ///     [
    ///         FontFamilyName::Named("Open Sans"),
    ///         FontFamilyName::Generic(GenericFamily::SansSerif),
    ///     ]
    /// );
    /// ```
    pub fn families(&self) -> FamilyList<'_> {
        FamilyList::new(&self.family)
    }
}

impl fmt::Display for ParsedFont {
    /// Writes the font back in shorthand form, leaving out `normal` descriptors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style != FontStyle::Normal {
            write!(f, "{} ", self.style)?;
        }
        if self.variant != FontVariant::Normal {
            write!(f, "{} ", self.variant)?;
        }
        if self.weight != FontWeight::Normal {
            write!(f, "{} ", self.weight)?;
        }
        if self.stretch != FontStretch::Normal {
            write!(f, "{} ", self.stretch)?;
        }
        write!(f, "{}", self.size)?;
        if self.line_height != LineHeight::Normal {
            write!(f, "/{}", self.line_height)?;
        }
        write!(f, " {}", self.family)
    }
}
