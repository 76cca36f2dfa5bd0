// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Runtime profiler for timing an operation across samples.
//!
//! Each sample is measured exactly once with a monotonic clock. The result is
//! a [`RuntimeProfile`]: durations and sample sizes, index-aligned with the
//! input samples and expressed in a single [`TimeUnit`].

use std::hint::black_box;
use std::time::Instant;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::samples::Sample;
use crate::units::{TimeUnit, UnitDuration};

/// Timings and sizes from one profiling run.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeProfile {
    durations: Vec<UnitDuration>,
    sizes: Vec<usize>,
    unit: TimeUnit,
}

impl RuntimeProfile {
    /// Assemble a profile from raw counts already expressed in `unit`.
    ///
    /// Returns `None` if the two sequences differ in length.
    pub fn from_parts(counts: Vec<u64>, sizes: Vec<usize>, unit: TimeUnit) -> Option<Self> {
        if counts.len() != sizes.len() {
            return None;
        }
        let durations = counts
            .into_iter()
            .map(|count| UnitDuration::new(count, unit))
            .collect();
        Some(Self {
            durations,
            sizes,
            unit,
        })
    }

    /// Measured durations, one per sample.
    pub fn durations(&self) -> &[UnitDuration] {
        &self.durations
    }

    /// Sample sizes, one per sample.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Unit shared by all durations.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Number of measured samples.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Iterate `(duration, size)` pairs in sample order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitDuration, usize)> + '_ {
        self.durations.iter().copied().zip(self.sizes.iter().copied())
    }

    /// Produce a copy of this profile expressed in `unit`.
    ///
    /// Narrowing truncates each duration individually; sizes are copied as-is.
    pub fn convert_to(&self, unit: TimeUnit) -> RuntimeProfile {
        RuntimeProfile {
            durations: self.durations.iter().map(|d| d.convert_to(unit)).collect(),
            sizes: self.sizes.clone(),
            unit,
        }
    }
}

/// Profiler that times one call of an operation per sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct Profiler {
    /// Unit measurements are truncated to
    unit: TimeUnit,
}

impl Profiler {
    /// Create a profiler measuring in milliseconds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the measurement unit.
    pub fn unit(mut self, unit: TimeUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Time `operation` on a fresh copy of every sample.
    ///
    /// The copy is made outside the timed region, so operations that sort or
    /// consume their input always see the caller's original data.
    pub fn run<S, F, R>(&self, samples: &[S], mut operation: F) -> AnalyzerResult<RuntimeProfile>
    where
        S: Sample + Clone,
        F: FnMut(S) -> R,
    {
        self.collect(samples, |sample| {
            let input = sample.clone();
            measure_duration(self.unit, || operation(input)).1
        })
    }

    /// Time `operation` on each sample by reference.
    pub fn run_borrowed<S, F, R>(
        &self,
        samples: &[S],
        mut operation: F,
    ) -> AnalyzerResult<RuntimeProfile>
    where
        S: Sample,
        F: FnMut(&S) -> R,
    {
        self.collect(samples, |sample| {
            measure_duration(self.unit, || operation(sample)).1
        })
    }

    fn collect<S, M>(&self, samples: &[S], mut measure: M) -> AnalyzerResult<RuntimeProfile>
    where
        S: Sample,
        M: FnMut(&S) -> UnitDuration,
    {
        if samples.is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        tracing::debug!(
            samples = samples.len(),
            unit = %self.unit,
            "Profiling runtime"
        );

        let mut durations = Vec::with_capacity(samples.len());
        let mut sizes = Vec::with_capacity(samples.len());

        for (index, sample) in samples.iter().enumerate() {
            let duration = measure(sample);
            let size = sample.sample_size();
            tracing::trace!(index = index, size = size, elapsed = %duration, "Measured sample");
            durations.push(duration);
            sizes.push(size);
        }

        Ok(RuntimeProfile {
            durations,
            sizes,
            unit: self.unit,
        })
    }
}

/// Time `operation` on a copy of each sample, truncating to `unit`.
pub fn profile_runtime<S, F, R>(
    unit: TimeUnit,
    samples: &[S],
    operation: F,
) -> AnalyzerResult<RuntimeProfile>
where
    S: Sample + Clone,
    F: FnMut(S) -> R,
{
    Profiler::new().unit(unit).run(samples, operation)
}

/// Measure a single call of `f`, returning its result and elapsed time.
pub fn measure_duration<F, R>(unit: TimeUnit, f: F) -> (R, UnitDuration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = black_box(f());
    let elapsed = start.elapsed();
    (result, UnitDuration::from_std(elapsed, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn sort_ascending(mut v: Vec<i32>) -> Vec<i32> {
        v.sort();
        v
    }

    #[test]
    fn test_profile_sizes_and_lengths() {
        let samples = vec![vec![3, 1, 2], vec![5, 4]];
        let profile = profile_runtime(TimeUnit::Milliseconds, &samples, sort_ascending).unwrap();

        assert_eq!(profile.durations().len(), 2);
        assert_eq!(profile.sizes(), &[3, 2]);
        assert_eq!(profile.unit(), TimeUnit::Milliseconds);
        assert!(profile
            .durations()
            .iter()
            .all(|d| d.unit() == TimeUnit::Milliseconds));
    }

    #[test]
    fn test_empty_input_is_error() {
        let samples: Vec<Vec<i32>> = Vec::new();
        let result = profile_runtime(TimeUnit::Microseconds, &samples, sort_ascending);
        assert!(matches!(result, Err(AnalyzerError::EmptyInput)));

        let result = Profiler::new().run_borrowed(&samples, |s| s.len());
        assert!(matches!(result, Err(AnalyzerError::EmptyInput)));
    }

    #[test]
    fn test_operation_sees_original_input() {
        let samples = vec![vec![9, 8, 7]; 3];
        let mut firsts = Vec::new();

        Profiler::new()
            .run(&samples, |mut v: Vec<i32>| {
                firsts.push(v[0]);
                v.sort();
            })
            .unwrap();

        assert_eq!(firsts, vec![9, 9, 9]);
        assert_eq!(samples[0], vec![9, 8, 7]);
    }

    #[test]
    fn test_durations_reflect_elapsed_time() {
        let samples = vec![vec![0u8; 1], vec![0u8; 2]];
        let profile = Profiler::new()
            .unit(TimeUnit::Microseconds)
            .run_borrowed(&samples, |s| thread::sleep(Duration::from_millis(s.len() as u64 * 5)))
            .unwrap();

        assert!(profile.durations()[0].count() >= 5_000);
        assert!(profile.durations()[1].count() >= 10_000);
    }

    #[test]
    fn test_convert_preserves_source() {
        let profile =
            RuntimeProfile::from_parts(vec![1999, 42], vec![10, 20], TimeUnit::Microseconds)
                .unwrap();

        let millis = profile.convert_to(TimeUnit::Milliseconds);
        let nanos = profile.convert_to(TimeUnit::Nanoseconds);

        assert_eq!(millis.durations()[0].count(), 1);
        assert_eq!(millis.durations()[1].count(), 0);
        assert_eq!(nanos.durations()[0].count(), 1_999_000);
        assert_eq!(millis.sizes(), profile.sizes());

        // Source untouched and still convertible.
        assert_eq!(profile.unit(), TimeUnit::Microseconds);
        assert_eq!(profile.durations()[0].count(), 1999);
        assert_eq!(nanos.convert_to(TimeUnit::Microseconds), profile);
    }

    #[test]
    fn test_convert_same_unit_is_copy() {
        let profile =
            RuntimeProfile::from_parts(vec![5, 6], vec![1, 2], TimeUnit::Seconds).unwrap();
        assert_eq!(profile.convert_to(TimeUnit::Seconds), profile);
    }

    #[test]
    fn test_from_parts_rejects_mismatch() {
        assert!(RuntimeProfile::from_parts(vec![1], vec![1, 2], TimeUnit::Seconds).is_none());
    }

    #[test]
    fn test_measure_duration() {
        let (result, duration) = measure_duration(TimeUnit::Milliseconds, || {
            thread::sleep(Duration::from_millis(5));
            42
        });

        assert_eq!(result, 42);
        assert!(duration.count() >= 5);
        assert_eq!(duration.unit(), TimeUnit::Milliseconds);
    }

    #[test]
    fn test_iter_pairs() {
        let profile =
            RuntimeProfile::from_parts(vec![7, 8], vec![100, 200], TimeUnit::Nanoseconds).unwrap();
        let pairs: Vec<_> = profile.iter().map(|(d, s)| (d.count(), s)).collect();
        assert_eq!(pairs, vec![(7, 100), (8, 200)]);
        assert_eq!(profile.len(), 2);
    }
}
