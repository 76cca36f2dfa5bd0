// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Profiled operations and the random sample filler.

use std::fmt;

use clap::ValueEnum;
use rand::Rng;

/// Largest value placed in random samples.
const MAX_SAMPLE_VALUE: i32 = 10_000;

/// Sorting algorithms available to `sra profile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// `slice::sort_unstable` (pattern-defeating quicksort)
    Std,
    /// `slice::sort` (stable merge sort)
    Stable,
    /// Bubble sort; quadratic, keep sizes small
    Bubble,
}

impl Algorithm {
    /// Name used in logs and report file names.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Std => "std_sort",
            Algorithm::Stable => "stable_sort",
            Algorithm::Bubble => "bubble_sort",
        }
    }

    /// Sort `sample` in place with this algorithm.
    pub fn sort(&self, sample: &mut [i32]) {
        match self {
            Algorithm::Std => sample.sort_unstable(),
            Algorithm::Stable => sample.sort(),
            Algorithm::Bubble => bubble_sort(sample),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn bubble_sort(values: &mut [i32]) {
    let len = values.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 0..len - 1 - pass {
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Fill `sample` with `size` random values in `0..=MAX_SAMPLE_VALUE`.
pub fn fill_random(sample: &mut Vec<i32>, size: usize) {
    let mut rng = rand::rng();
    sample.reserve(size);
    sample.extend((0..size).map(|_| rng.random_range(0..=MAX_SAMPLE_VALUE)));
}
