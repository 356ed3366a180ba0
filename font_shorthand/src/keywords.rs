// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Slope of a font, as named by the CSS `font-style` keywords.
///
/// Unlike the longhand property, the shorthand does not accept an oblique angle, so there is
/// no payload on [`FontStyle::Oblique`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// `normal`.
    #[default]
    Normal,
    /// `italic`.
    Italic,
    /// `oblique`.
    Oblique,
}

impl FontStyle {
    /// Parses a `font-style` keyword.
    ///
    /// ```
    /// use font_shorthand::FontStyle;
    ///
    /// assert_eq!(FontStyle::parse("oblique"), Some(FontStyle::Oblique));
    /// assert_eq!(FontStyle::parse("Italic"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            "oblique" => Self::Oblique,
            _ => return None,
        })
    }

    /// Returns the CSS keyword for this style.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The CSS 2.1 `font-variant` values allowed in the shorthand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontVariant {
    /// `normal`.
    #[default]
    Normal,
    /// `small-caps`.
    SmallCaps,
}

impl FontVariant {
    /// Parses a `font-variant` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "normal" => Self::Normal,
            "small-caps" => Self::SmallCaps,
            _ => return None,
        })
    }

    /// Returns the CSS keyword for this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::SmallCaps => "small-caps",
        }
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `font-weight` value as written in the shorthand.
///
/// The relative keywords are kept as such; they can only be turned into a number against a
/// parent weight, which this crate knows nothing about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// `normal`, equivalent to `400`.
    #[default]
    Normal,
    /// `bold`, equivalent to `700`.
    Bold,
    /// `bolder`.
    Bolder,
    /// `lighter`.
    Lighter,
    /// One of `100`, `200`, … `900`.
    Absolute(u16),
}

impl FontWeight {
    /// Parses a `font-weight` keyword or one of the nine numeric weights.
    ///
    /// ```
    /// use font_shorthand::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("bolder"), Some(FontWeight::Bolder));
    /// assert_eq!(FontWeight::parse("300"), Some(FontWeight::Absolute(300)));
    /// assert_eq!(FontWeight::parse("350"), None);
    /// assert_eq!(FontWeight::parse("1000"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "normal" => Self::Normal,
            "bold" => Self::Bold,
            "bolder" => Self::Bolder,
            "lighter" => Self::Lighter,
            "100" | "200" | "300" | "400" | "500" | "600" | "700" | "800" | "900" => {
                Self::Absolute(s.parse().ok()?)
            }
            _ => return None,
        })
    }

    /// Returns the numeric weight, or `None` for the relative keywords.
    pub const fn absolute_value(self) -> Option<u16> {
        match self {
            Self::Normal => Some(400),
            Self::Bold => Some(700),
            Self::Bolder | Self::Lighter => None,
            Self::Absolute(value) => Some(value),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Bolder => "bolder",
            Self::Lighter => "lighter",
            Self::Absolute(value) => return write!(f, "{value}"),
        };
        f.write_str(keyword)
    }
}

/// Named `font-stretch` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontStretch {
    /// 50% of normal width.
    UltraCondensed,
    /// 62.5% of normal width.
    ExtraCondensed,
    /// 75% of normal width.
    Condensed,
    /// 87.5% of normal width.
    SemiCondensed,
    /// Normal width.
    #[default]
    Normal,
    /// 112.5% of normal width.
    SemiExpanded,
    /// 125% of normal width.
    Expanded,
    /// 150% of normal width.
    ExtraExpanded,
    /// 200% of normal width.
    UltraExpanded,
}

impl FontStretch {
    /// Parses a `font-stretch` keyword.
    ///
    /// Percentages are not part of the shorthand grammar and are rejected.
    ///
    /// ```
    /// use font_shorthand::FontStretch;
    ///
    /// assert_eq!(FontStretch::parse("semi-condensed"), Some(FontStretch::SemiCondensed));
    /// assert_eq!(FontStretch::parse("80%"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "ultra-condensed" => Self::UltraCondensed,
            "extra-condensed" => Self::ExtraCondensed,
            "condensed" => Self::Condensed,
            "semi-condensed" => Self::SemiCondensed,
            "normal" => Self::Normal,
            "semi-expanded" => Self::SemiExpanded,
            "expanded" => Self::Expanded,
            "extra-expanded" => Self::ExtraExpanded,
            "ultra-expanded" => Self::UltraExpanded,
            _ => return None,
        })
    }

    /// Returns the CSS keyword for this stretch.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UltraCondensed => "ultra-condensed",
            Self::ExtraCondensed => "extra-condensed",
            Self::Condensed => "condensed",
            Self::SemiCondensed => "semi-condensed",
            Self::Normal => "normal",
            Self::SemiExpanded => "semi-expanded",
            Self::Expanded => "expanded",
            Self::ExtraExpanded => "extra-expanded",
            Self::UltraExpanded => "ultra-expanded",
        }
    }

    /// Returns the width as a ratio of the normal width, matching the `wdth` axis scale.
    pub const fn ratio(self) -> f32 {
        match self {
            Self::UltraCondensed => 0.5,
            Self::ExtraCondensed => 0.625,
            Self::Condensed => 0.75,
            Self::SemiCondensed => 0.875,
            Self::Normal => 1.0,
            Self::SemiExpanded => 1.125,
            Self::Expanded => 1.25,
            Self::ExtraExpanded => 1.5,
            Self::UltraExpanded => 2.0,
        }
    }
}

impl fmt::Display for FontStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FontStretch, FontStyle, FontVariant, FontWeight};

    #[test]
    fn style_keywords() {
        assert_eq!(FontStyle::parse("normal"), Some(FontStyle::Normal));
        assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
        assert_eq!(FontStyle::parse("oblique"), Some(FontStyle::Oblique));
        assert_eq!(FontStyle::parse("oblique 10deg"), None);
        assert_eq!(FontStyle::parse(" italic"), None);
    }

    #[test]
    fn variant_keywords() {
        assert_eq!(FontVariant::parse("small-caps"), Some(FontVariant::SmallCaps));
        assert_eq!(FontVariant::parse("all-small-caps"), None);
        assert_eq!(FontVariant::SmallCaps.to_string(), "small-caps");
    }

    #[test]
    fn weight_numeric_values_round_trip_through_display() {
        for value in (100..=900).step_by(100) {
            let token = value.to_string();
            let weight = FontWeight::parse(&token).unwrap();
            assert_eq!(weight, FontWeight::Absolute(value));
            assert_eq!(weight.to_string(), token);
        }
    }

    #[test]
    fn weight_absolute_value() {
        assert_eq!(FontWeight::Normal.absolute_value(), Some(400));
        assert_eq!(FontWeight::Bold.absolute_value(), Some(700));
        assert_eq!(FontWeight::Bolder.absolute_value(), None);
        assert_eq!(FontWeight::Absolute(200).absolute_value(), Some(200));
    }

    #[test]
    fn weight_rejects_out_of_grammar_numbers() {
        assert_eq!(FontWeight::parse("0"), None);
        assert_eq!(FontWeight::parse("450"), None);
        assert_eq!(FontWeight::parse("700.0"), None);
        assert_eq!(FontWeight::parse("Bold"), None);
    }

    #[test]
    fn stretch_ordering_follows_width() {
        assert!(FontStretch::Condensed < FontStretch::Normal);
        assert!(FontStretch::UltraExpanded > FontStretch::Expanded);
        assert!(FontStretch::SemiCondensed.ratio() < FontStretch::Normal.ratio());
        assert_eq!(FontStretch::parse("extra-expanded"), Some(FontStretch::ExtraExpanded));
    }
}
