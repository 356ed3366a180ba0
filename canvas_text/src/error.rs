// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Kinds of errors reported by [`TextShim`](crate::TextShim) and font loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The `font` string does not have the shape of a CSS `font` shorthand.
    MalformedFont,
    /// The font size is written in a unit other than `px`.
    UnsupportedUnit,
    /// No font could be resolved for the family, and the shim is in strict mode.
    FontNotFound,
    /// Font data could not be read.
    InvalidFont,
}

/// Error type for canvas text operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    context: String,
}

impl Error {
    pub(crate) fn malformed_font(font: &str) -> Self {
        Self {
            kind: ErrorKind::MalformedFont,
            context: font.into(),
        }
    }

    pub(crate) fn unsupported_unit(font: &str) -> Self {
        Self {
            kind: ErrorKind::UnsupportedUnit,
            context: font.into(),
        }
    }

    pub(crate) fn font_not_found(family: &str) -> Self {
        Self {
            kind: ErrorKind::FontNotFound,
            context: family.into(),
        }
    }

    #[cfg(feature = "skrifa")]
    pub(crate) fn invalid_font(err: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::InvalidFont,
            context: err.to_string(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns what the error is about.
    ///
    /// This is the `font` string for [`ErrorKind::MalformedFont`] and
    /// [`ErrorKind::UnsupportedUnit`], the family list for [`ErrorKind::FontNotFound`] and a
    /// description of the read failure for [`ErrorKind::InvalidFont`].
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::MalformedFont => write!(f, "malformed font shorthand {:?}", self.context),
            ErrorKind::UnsupportedUnit => {
                write!(f, "font size of {:?} must be given in px", self.context)
            }
            ErrorKind::FontNotFound => {
                write!(f, "no font instance was found for {:?}", self.context)
            }
            ErrorKind::InvalidFont => write!(f, "invalid font data: {}", self.context),
        }
    }
}

impl core::error::Error for Error {}
