// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas Text benchmarks.

use tango_bench::{tango_benchmarks, tango_main};

use canvas_text_bench::benches::{measure, parse, shim};

tango_benchmarks!(parse(), measure(), shim());
tango_main!();
