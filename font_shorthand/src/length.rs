// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Units a font size may be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// `px`.
    Px,
    /// `cm`.
    Cm,
    /// `mm`.
    Mm,
    /// `em`.
    Em,
    /// `pt`.
    Pt,
    /// `pc`.
    Pc,
    /// `in`.
    In,
}

impl LengthUnit {
    const ALL: [Self; 7] = [
        Self::Px,
        Self::Cm,
        Self::Mm,
        Self::Em,
        Self::Pt,
        Self::Pc,
        Self::In,
    ];

    /// Parses a unit suffix.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == s)
    }

    /// Returns the unit suffix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::Em => "em",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::In => "in",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The size component of the shorthand: a non-negative number followed by a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSize {
    value: f32,
    unit: LengthUnit,
}

impl FontSize {
    /// Creates a size from a value and a unit.
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a size in pixels.
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// Returns the numeric part of the size.
    pub const fn value(self) -> f32 {
        self.value
    }

    /// Returns the unit of the size.
    pub const fn unit(self) -> LengthUnit {
        self.unit
    }

    /// Parses a size token such as `26px` or `.5em`.
    ///
    /// ```
    /// use font_shorthand::{FontSize, LengthUnit};
    ///
    /// assert_eq!(FontSize::parse("26px"), Some(FontSize::px(26.0)));
    /// assert_eq!(FontSize::parse("1.5em"), Some(FontSize::new(1.5, LengthUnit::Em)));
    /// assert_eq!(FontSize::parse("26"), None);
    /// assert_eq!(FontSize::parse("-2px"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let split = s.len().checked_sub(2)?;
        let (number, unit) = (s.get(..split)?, s.get(split..)?);
        let unit = LengthUnit::parse(unit)?;
        if number.is_empty()
            || !number
                .bytes()
                .all(|b| b.is_ascii_digit() || b == b'.' || b == b'+')
        {
            return None;
        }
        let value = number.parse::<f32>().ok()?;
        (value.is_finite() && value >= 0.0).then_some(Self { value, unit })
    }

    /// Returns the size in pixels, or `None` if it is written in any other unit.
    ///
    /// Other units are deliberately not converted: `em` needs a parent size and the
    /// physical units need a resolution, neither of which is known here.
    pub fn to_px(self) -> Option<f32> {
        (self.unit == LengthUnit::Px).then_some(self.value)
    }
}

impl Default for FontSize {
    /// The canvas default of `10px`.
    fn default() -> Self {
        Self::px(10.0)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// The optional line height following the size.
///
/// The value is kept as written; line height plays no part in measuring or drawing a single
/// line of text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineHeight {
    /// `normal`, also used when the shorthand has no line height.
    #[default]
    Normal,
    /// Any other token, verbatim.
    Value(String),
}

impl LineHeight {
    /// Wraps a line height token, mapping `normal` to [`LineHeight::Normal`].
    pub fn parse(s: &str) -> Self {
        match s {
            "normal" => Self::Normal,
            _ => Self::Value(s.to_owned()),
        }
    }

    /// Returns the token for this line height.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => "normal",
            Self::Value(value) => value,
        }
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FontSize, LengthUnit, LineHeight};

    #[test]
    fn size_accepts_every_unit() {
        for unit in LengthUnit::ALL {
            let token = format!("12{unit}");
            assert_eq!(FontSize::parse(&token), Some(FontSize::new(12.0, unit)));
        }
    }

    #[test]
    fn size_fractions() {
        assert_eq!(FontSize::parse("13.5px"), Some(FontSize::px(13.5)));
        assert_eq!(FontSize::parse(".5px"), Some(FontSize::px(0.5)));
        assert_eq!(FontSize::parse("+10px"), Some(FontSize::px(10.0)));
    }

    #[test]
    fn size_rejects_garbage() {
        assert_eq!(FontSize::parse("px"), None);
        assert_eq!(FontSize::parse("infpx"), None);
        assert_eq!(FontSize::parse("1e3px"), None);
        assert_eq!(FontSize::parse("12PX"), None);
        assert_eq!(FontSize::parse("12rem"), None);
        assert_eq!(FontSize::parse("ä"), None);
    }

    #[test]
    fn size_to_px_only_for_pixels() {
        assert_eq!(FontSize::px(26.0).to_px(), Some(26.0));
        assert_eq!(FontSize::new(12.0, LengthUnit::Pt).to_px(), None);
        assert_eq!(FontSize::new(2.0, LengthUnit::Em).to_px(), None);
    }

    #[test]
    fn size_display() {
        assert_eq!(FontSize::px(26.0).to_string(), "26px");
        assert_eq!(FontSize::new(1.25, LengthUnit::Em).to_string(), "1.25em");
    }

    #[test]
    fn line_height_keeps_token() {
        assert_eq!(LineHeight::parse("normal"), LineHeight::Normal);
        assert_eq!(LineHeight::parse("1.2").as_str(), "1.2");
        assert_eq!(LineHeight::parse("30px").to_string(), "30px");
    }
}
