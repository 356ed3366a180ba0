// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `canvas_text` and `font_shorthand`.
//!
//! - The `util` module contains a recording drawing surface and resolver helpers that are
//!   needed by different test modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, which makes shared helpers easy to reach.
//! - Put new tests into the module of their topic and start the test name with that topic,
//!   e.g. `shim_strict_reports_missing_font` rather than `strict_shim_reports_missing_font`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod outline_font;
mod shorthand;
mod util;
