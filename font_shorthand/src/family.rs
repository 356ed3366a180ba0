// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting of a `font-family` fallback list.

use core::fmt;

use crate::GenericFamily;

/// Kinds of errors that can occur when splitting a family list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseFontFamilyErrorKind {
    /// An entry was empty or a quoted name was followed by something other than a comma.
    InvalidSyntax,
    /// A quoted family name was missing its closing quote.
    UnterminatedString,
}

/// Error returned while splitting a family list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFontFamilyError {
    kind: ParseFontFamilyErrorKind,
    at: usize,
}

impl ParseFontFamilyError {
    const fn new(kind: ParseFontFamilyErrorKind, at: usize) -> Self {
        Self { kind, at }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseFontFamilyErrorKind {
        self.kind
    }

    /// Returns the byte offset into the list where the error was detected.
    pub const fn byte_offset(self) -> usize {
        self.at
    }
}

impl fmt::Display for ParseFontFamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseFontFamilyErrorKind::InvalidSyntax => "invalid font-family syntax",
            ParseFontFamilyErrorKind::UnterminatedString => "unterminated string in font-family",
        };
        write!(f, "{msg} at byte {}", self.at)
    }
}

impl core::error::Error for ParseFontFamilyError {}

/// One entry of a family list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamilyName<'a> {
    /// A named family, with any quotes removed.
    Named(&'a str),
    /// An unquoted generic family keyword.
    Generic(GenericFamily),
}

impl<'a> FontFamilyName<'a> {
    /// Returns the family name, or the generic keyword for a generic family.
    pub fn name(self) -> &'a str {
        match self {
            Self::Named(name) => name,
            Self::Generic(generic) => generic.as_str(),
        }
    }
}

impl fmt::Display for FontFamilyName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name:?}"),
            Self::Generic(family) => write!(f, "{family}"),
        }
    }
}

/// Iterator over the entries of a comma separated family list.
///
/// Created by [`FamilyList::new`] or [`ParsedFont::families`](crate::ParsedFont::families).
/// Whitespace around entries is ignored and a trailing comma is permitted. Iteration stops
/// after the first error.
///
/// ```
/// use font_shorthand::{FamilyList, FontFamilyName, GenericFamily};
///
/// let families: Result<Vec<_>, _> = FamilyList::new(r#""Open Sans", Arial , serif"#).collect();
/// assert_eq!(
///     families.unwrap(),
///     [
///         FontFamilyName::Named("Open Sans"),
///         FontFamilyName::Named("Arial"),
///         FontFamilyName::Generic(GenericFamily::Serif),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct FamilyList<'a> {
    source: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> FamilyList<'a> {
    /// Starts splitting `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            done: false,
        }
    }

    fn fail(
        &mut self,
        kind: ParseFontFamilyErrorKind,
        at: usize,
    ) -> Option<<Self as Iterator>::Item> {
        self.done = true;
        Some(Err(ParseFontFamilyError::new(kind, at)))
    }

    fn skip_whitespace(&self, from: usize) -> usize {
        let rest = &self.source[from..];
        from + (rest.len() - rest.trim_start().len())
    }
}

impl<'a> Iterator for FamilyList<'a> {
    type Item = Result<FontFamilyName<'a>, ParseFontFamilyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.skip_whitespace(self.pos);
        let rest = &self.source[start..];
        let Some(first) = rest.chars().next() else {
            self.done = true;
            return None;
        };
        match first {
            ',' => self.fail(ParseFontFamilyErrorKind::InvalidSyntax, start),
            '"' | '\'' => {
                let Some(len) = rest[1..].find(first) else {
                    return self.fail(ParseFontFamilyErrorKind::UnterminatedString, start);
                };
                let name = &rest[1..1 + len];
                let after = self.skip_whitespace(start + len + 2);
                match self.source[after..].chars().next() {
                    None => self.pos = after,
                    Some(',') => self.pos = after + 1,
                    Some(_) => return self.fail(ParseFontFamilyErrorKind::InvalidSyntax, after),
                }
                Some(Ok(FontFamilyName::Named(name)))
            }
            _ => {
                let (entry, next) = match rest.find(',') {
                    Some(comma) => (&rest[..comma], start + comma + 1),
                    None => (rest, self.source.len()),
                };
                self.pos = next;
                let name = entry.trim_end();
                Some(Ok(match GenericFamily::parse(name) {
                    Some(generic) => FontFamilyName::Generic(generic),
                    None => FontFamilyName::Named(name),
                }))
            }
        }
    }
}
