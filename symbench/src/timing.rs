// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Timing of a single primitive call, and repeated sampling with summary statistics.
//!
//! Only the closure handed to [measure] or [Sampler::run] is inside the timed region. Loading
//! inputs and building cipher or MAC state must happen before, or in the untimed setup closure of
//! [Sampler::run_with_setup].

use crate::error::{SymBenchError, SymBenchResult};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Upper bound on the timed runs of one [Sampler].
pub const MAX_ITERATIONS: usize = 1_000_000;

/// A single timed run of an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingSample {
    pub operation: String,
    pub duration: Duration,
}

/// Run `f` once and time it.
pub fn measure<T, F: FnOnce() -> T>(operation: &str, f: F) -> (T, TimingSample) {
    let start = Instant::now();
    let output = f();
    let duration = start.elapsed();
    (
        output,
        TimingSample {
            operation: operation.to_string(),
            duration,
        },
    )
}

/// Summary of the samples collected for one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingStats {
    pub operation: String,
    pub count: usize,
    pub min: Duration,
    pub median: Duration,
    pub mean: Duration,
    pub max: Duration,
    /// Sample standard deviation. Zero when there is a single sample.
    pub stddev: Duration,
}

impl TimingStats {
    pub fn from_samples(operation: &str, samples: &[Duration]) -> SymBenchResult<Self> {
        if samples.is_empty() {
            return Err(SymBenchError::InvalidInput(format!(
                "no timing samples for {operation}"
            )));
        }
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let n = sorted.len();

        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2
        };

        let secs: Vec<f64> = sorted.iter().map(Duration::as_secs_f64).collect();
        let mean = secs.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            secs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };

        Ok(TimingStats {
            operation: operation.to_string(),
            count: n,
            min: sorted[0],
            median,
            mean: Duration::from_secs_f64(mean),
            max: sorted[n - 1],
            stddev: Duration::from_secs_f64(variance.sqrt()),
        })
    }
}

impl fmt::Display for TimingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} min={} median={} mean={} max={} stddev={}",
            self.count,
            self.min.as_secs_f64(),
            self.median.as_secs_f64(),
            self.mean.as_secs_f64(),
            self.max.as_secs_f64(),
            self.stddev.as_secs_f64()
        )
    }
}

/// Runs an operation `warmup` times untimed, then `iterations` times timed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sampler {
    warmup: usize,
    iterations: usize,
}

impl Sampler {
    pub fn new(warmup: usize, iterations: usize) -> SymBenchResult<Self> {
        if iterations == 0 {
            return Err(SymBenchError::InvalidInput(
                "iterations must be at least 1".into(),
            ));
        }
        if iterations > MAX_ITERATIONS {
            return Err(SymBenchError::InvalidInput(format!(
                "iterations must be at most {MAX_ITERATIONS}, got {iterations}"
            )));
        }
        Ok(Self { warmup, iterations })
    }

    /// Time `routine` and return the output of its last timed run.
    pub fn run<T, F: FnMut() -> T>(
        &self,
        operation: &str,
        mut routine: F,
    ) -> SymBenchResult<(T, TimingStats)> {
        self.run_with_setup(operation, || (), |_| routine())
    }

    /// Like [Sampler::run], but each run gets a fresh input from `setup`, which is not timed.
    pub fn run_with_setup<I, T, S, F>(
        &self,
        operation: &str,
        mut setup: S,
        mut routine: F,
    ) -> SymBenchResult<(T, TimingStats)>
    where
        S: FnMut() -> I,
        F: FnMut(I) -> T,
    {
        for _ in 0..self.warmup {
            black_box(routine(setup()));
        }

        let mut samples = Vec::with_capacity(self.iterations);
        let input = setup();
        let (mut output, sample) = measure(operation, || routine(input));
        samples.push(sample.duration);
        for _ in 1..self.iterations {
            let input = setup();
            let (next, sample) = measure(operation, || routine(input));
            output = black_box(next);
            samples.push(sample.duration);
        }

        let stats = TimingStats::from_samples(operation, &samples)?;
        Ok((output, stats))
    }
}

impl Default for Sampler {
    /// A single timed run, no warm-up.
    fn default() -> Self {
        Self {
            warmup: 0,
            iterations: 1,
        }
    }
}
