// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The decorator that routes canvas text calls through outline fonts.

use core::fmt;

use font_shorthand::ParsedFont;

use crate::{
    Error, FontQuery, FontResolver, OutlinePaint, TextMetrics, TextState, TextSurface,
    draw_outline, measure,
};

/// Options for [`TextShim`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShimOptions {
    /// Whether failing to resolve a font is an error.
    ///
    /// When `false`, such calls are passed on to the surface's own text methods instead.
    pub strict: bool,
}

impl Default for ShimOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// The last font string seen, and what it resolved to.
struct FontSlot<T> {
    source: String,
    font: ParsedFont,
    size: f32,
    resource: Option<T>,
}

impl<T> FontSlot<T> {
    fn parse(source: &str) -> Result<Self, Error> {
        let font = ParsedFont::parse(source).ok_or_else(|| Error::malformed_font(source))?;
        let size = font
            .size
            .to_px()
            .ok_or_else(|| Error::unsupported_unit(source))?;
        Ok(Self {
            source: source.into(),
            font,
            size,
            resource: None,
        })
    }
}

#[derive(Copy, Clone)]
enum DrawMode {
    Fill,
    Stroke,
}

/// Wraps a [`TextSurface`] and replaces its text operations with outline based ones.
///
/// Every call carries its font string in the [`TextState`] (or as an argument to
/// [`measure_text`](Self::measure_text)). The string is parsed when it differs from the
/// previous one and the [`FontResolver`] is asked for a matching font. While interception is
/// [enabled](Self::enable) and a font is found, text is measured from the font's glyphs and
/// drawn as a single path via [`TextSurface::draw_path`].
///
/// Each shim has its own font cache; shims do not share state.
pub struct TextShim<S, R: FontResolver> {
    surface: S,
    resolver: R,
    options: ShimOptions,
    enabled: bool,
    slot: Option<FontSlot<R::Font>>,
}

impl<S: TextSurface, R: FontResolver> TextShim<S, R> {
    /// Wraps `surface` with the default options.
    pub fn new(surface: S, resolver: R) -> Self {
        Self::with_options(surface, resolver, ShimOptions::default())
    }

    /// Wraps `surface`.
    pub fn with_options(surface: S, resolver: R, options: ShimOptions) -> Self {
        Self {
            surface,
            resolver,
            options,
            enabled: true,
            slot: None,
        }
    }

    /// Turns interception on or off. While off, every call goes straight to the surface.
    pub fn enable(&mut self, enabled: bool) {
        log::debug!(
            "outline text {}",
            if enabled { "enabled" } else { "disabled" }
        );
        self.enabled = enabled;
    }

    /// Returns whether interception is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the options the shim was created with.
    pub fn options(&self) -> ShimOptions {
        self.options
    }

    /// Returns the last successfully parsed font.
    pub fn current_font(&self) -> Option<&ParsedFont> {
        self.slot.as_ref().map(|slot| &slot.font)
    }

    /// Returns the wrapped surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the wrapped surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Unwraps the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Measures `text` set in `font`.
    ///
    /// # Errors
    ///
    /// See [`fill_text`](Self::fill_text).
    pub fn measure_text(&mut self, text: &str, font: &str) -> Result<TextMetrics, Error> {
        let Self {
            surface,
            resolver,
            options,
            enabled,
            slot,
        } = self;
        if *enabled {
            if let Some((resource, size)) = resolve(slot, resolver, options.strict, font)? {
                return Ok(measure(text, resource, size));
            }
        }
        Ok(surface.measure_text(text, font))
    }

    /// Fills `text` at `(x, y)` with the state's fill style.
    ///
    /// `max_width` is only honored by the surface's own text methods.
    ///
    /// # Errors
    ///
    /// While interception is on, this fails with
    ///
    /// - [`ErrorKind::MalformedFont`](crate::ErrorKind::MalformedFont) if the font string is
    ///   not a `font` shorthand,
    /// - [`ErrorKind::UnsupportedUnit`](crate::ErrorKind::UnsupportedUnit) if the size is
    ///   not in `px`,
    /// - [`ErrorKind::FontNotFound`](crate::ErrorKind::FontNotFound) if the resolver has no
    ///   font and the shim is strict.
    pub fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        state: &TextState<'_, S::Paint>,
    ) -> Result<(), Error> {
        self.draw_text(text, x, y, max_width, state, DrawMode::Fill)
    }

    /// Strokes `text` at `(x, y)` with the state's stroke style.
    ///
    /// # Errors
    ///
    /// See [`fill_text`](Self::fill_text).
    pub fn stroke_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        state: &TextState<'_, S::Paint>,
    ) -> Result<(), Error> {
        self.draw_text(text, x, y, max_width, state, DrawMode::Stroke)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        max_width: Option<f32>,
        state: &TextState<'_, S::Paint>,
        mode: DrawMode,
    ) -> Result<(), Error> {
        let Self {
            surface,
            resolver,
            options,
            enabled,
            slot,
        } = self;
        if *enabled {
            if let Some((resource, size)) = resolve(slot, resolver, options.strict, state.font)? {
                let paint = match mode {
                    DrawMode::Fill => OutlinePaint::Fill(state.fill_style),
                    DrawMode::Stroke => OutlinePaint::Stroke(state.stroke_style),
                };
                draw_outline(
                    surface,
                    text,
                    resource,
                    size,
                    x,
                    y,
                    state.text_align,
                    state.text_baseline,
                    paint,
                );
                return Ok(());
            }
        }
        match mode {
            DrawMode::Fill => surface.fill_text(text, x, y, max_width, state),
            DrawMode::Stroke => surface.stroke_text(text, x, y, max_width, state),
        }
        Ok(())
    }
}

/// Brings the slot up to date with `font` and returns the resource and pixel size to use.
///
/// `Ok(None)` means the surface's own text methods should handle the call. A failed parse
/// leaves the slot as it was. A failed resolution is not remembered, so the next call tries
/// again.
fn resolve<'s, R: FontResolver>(
    slot: &'s mut Option<FontSlot<R::Font>>,
    resolver: &mut R,
    strict: bool,
    font: &str,
) -> Result<Option<(&'s R::Font, f32)>, Error> {
    let entry = match slot.take() {
        Some(entry) if entry.source == font => entry,
        previous => match FontSlot::parse(font) {
            Ok(entry) => {
                log::debug!("font changed to {font:?}");
                entry
            }
            Err(err) => {
                *slot = previous;
                return Err(err);
            }
        },
    };
    let entry = slot.insert(entry);
    if entry.resource.is_none() {
        entry.resource = resolver.resolve(&FontQuery::from(&entry.font));
        match entry.resource {
            Some(_) => log::debug!("resolved {:?}", entry.font.family),
            None if strict => return Err(Error::font_not_found(&entry.font.family)),
            None => {
                log::debug!(
                    "no font for {:?}, falling back to native text",
                    entry.font.family
                );
                return Ok(None);
            }
        }
    }
    Ok(entry.resource.as_ref().map(|resource| (resource, entry.size)))
}

impl<S, R: FontResolver> fmt::Debug for TextShim<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextShim")
            .field("options", &self.options)
            .field("enabled", &self.enabled)
            .field("font", &self.slot.as_ref().map(|slot| &slot.source))
            .finish_non_exhaustive()
    }
}
