// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Coursegraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Coursegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Criterion configuration for the parser benches, with a flamegraph
//! profiler attached. All knobs are optional `COURSEGRAPH_*` env vars.

use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_knob(name: &str, default: u64, range: std::ops::RangeInclusive<u64>) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(default)
        .clamp(*range.start(), *range.end())
}

pub fn criterion() -> Criterion {
    let frequency = env_knob("COURSEGRAPH_PROFILE_FREQ", 100, 1..=1000);
    let sample_size = env_knob("COURSEGRAPH_BENCH_SAMPLES", 60, 10..=200);
    let measurement_secs = env_knob("COURSEGRAPH_BENCH_SECS", 5, 1..=120);

    Criterion::default()
        .sample_size(sample_size as usize)
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency as i32, Output::Flamegraph(None)))
}
