// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod surface;

use std::cell::Cell;

use canvas_text::FontQuery;
use canvas_text_dev::{SYNTHETIC_FAMILY, SyntheticFont};

pub(crate) use surface::{Call, RecordingSurface};

/// Font string resolving to [`SyntheticFont::latin`] at 32px, which scales font units by 1/64.
pub(crate) const FONT_32PX: &str = "32px Synthetic Sans";

/// A font string naming a family no resolver knows.
pub(crate) const MISSING_FONT: &str = "32px Nonexistent, serif";

/// Returns a resolver that finds `font` under [`SYNTHETIC_FAMILY`] and counts its calls.
pub(crate) fn resolve_synthetic<'f>(
    font: &'f SyntheticFont,
    calls: &'f Cell<usize>,
) -> impl FnMut(&FontQuery<'_>) -> Option<&'f SyntheticFont> + 'f {
    move |query: &FontQuery<'_>| {
        calls.set(calls.get() + 1);
        query
            .families()
            .filter_map(Result::ok)
            .any(|family| family.name() == SYNTHETIC_FAMILY)
            .then_some(font)
    }
}

/// Returns a resolver that never finds anything and counts its calls.
pub(crate) fn resolve_nothing(
    calls: &Cell<usize>,
) -> impl FnMut(&FontQuery<'_>) -> Option<&'static SyntheticFont> + '_ {
    move |_: &FontQuery<'_>| {
        calls.set(calls.get() + 1);
        None
    }
}
