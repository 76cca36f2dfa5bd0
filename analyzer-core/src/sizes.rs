// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sample-size distribution generator.
//!
//! Produces a deterministic sequence of sample sizes spread over the
//! logarithmic range `[round_to, max_size]`. Candidates are oversampled in
//! log10-space, snapped to multiples of `round_to`, deduplicated, padded when
//! too sparse, and finally downsampled uniformly by pool index.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{Bias, RoundTo};

/// Candidates generated per requested sample before deduplication.
const OVERSAMPLE_FACTOR: usize = 3;

/// Settings controlling the shape of a generated size sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeConfig {
    /// Rounding granularity and smallest producible size.
    pub round_to: RoundTo,
    /// Exponent applied to the normalized candidate position.
    pub bias: Bias,
}

impl SizeConfig {
    /// Build a config from raw values, validating both.
    pub fn new(round_to: usize, bias: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            round_to: RoundTo::new(round_to)?,
            bias: Bias::new(bias)?,
        })
    }
}

/// Round `value` to the nearest multiple of `multiple`, ties rounding up.
///
/// A zero `multiple` leaves the value unchanged.
pub fn round_to_multiple(value: usize, multiple: usize) -> usize {
    if multiple == 0 {
        return value;
    }
    (value.saturating_add(multiple / 2) / multiple) * multiple
}

/// Generate `sample_count` sizes between `config.round_to` and `max_size`.
///
/// Returns an empty sequence when `sample_count` is zero or `max_size` is
/// below the rounding granularity, and `[max_size]` when a single sample is
/// requested. Otherwise the result has exactly `sample_count` elements, all
/// multiples of `round_to` and no larger than `max_size`. When `max_size` is
/// itself a multiple of `round_to`, it is always the last element.
pub fn generate_sizes(sample_count: usize, max_size: usize, config: &SizeConfig) -> Vec<usize> {
    let round_to = config.round_to.value();

    if sample_count == 0 || max_size < round_to {
        return Vec::new();
    }
    if sample_count == 1 {
        return vec![max_size];
    }

    let max_is_multiple = max_size % round_to == 0;

    let mut pool = candidate_pool(sample_count, max_size, config);
    if max_is_multiple {
        pool.insert(max_size);
    }
    let mut pool: Vec<usize> = pool.into_iter().collect();

    fill_gaps(&mut pool, sample_count, max_size, round_to);

    tracing::debug!(
        sample_count = sample_count,
        max_size = max_size,
        pool_size = pool.len(),
        "Built sample size candidate pool"
    );

    let mut sizes = downsample(&pool, sample_count);

    if max_is_multiple {
        if let Some(last) = sizes.last_mut() {
            *last = max_size;
        }
    }

    sizes
}

/// Oversampled, rounded and deduplicated candidates not exceeding `max_size`.
fn candidate_pool(sample_count: usize, max_size: usize, config: &SizeConfig) -> BTreeSet<usize> {
    let round_to = config.round_to.value();
    let bias = config.bias.value();

    let log_min = (round_to as f64).log10();
    let log_max = (max_size as f64).log10();
    let span = log_max - log_min;

    let oversample = sample_count.saturating_mul(OVERSAMPLE_FACTOR);
    let last_index = (oversample - 1) as f64;

    (0..oversample)
        .map(|i| {
            let t = (i as f64 / last_index).powf(bias);
            let raw = 10f64.powf(log_min + t * span).round() as usize;
            round_to_multiple(raw, round_to)
        })
        .filter(|&size| size <= max_size)
        .collect()
}

/// Extend a sparse pool upward in `round_to` steps without passing `max_size`.
fn fill_gaps(pool: &mut Vec<usize>, sample_count: usize, max_size: usize, round_to: usize) {
    while pool.len() < sample_count {
        let next = match pool.last().and_then(|last| last.checked_add(round_to)) {
            Some(next) if next <= max_size => next,
            _ => break,
        };
        pool.push(next);
    }
}

/// Pick `sample_count` pool entries evenly spread over the pool's indices.
///
/// Small pools yield repeated entries rather than failing.
fn downsample(pool: &[usize], sample_count: usize) -> Vec<usize> {
    if pool.is_empty() {
        return Vec::new();
    }

    let last_pool_index = (pool.len() - 1) as f64;
    let last_output_index = (sample_count - 1) as f64;

    (0..sample_count)
        .map(|i| {
            let t = i as f64 / last_output_index;
            let index = (t * last_pool_index).round() as usize;
            pool[index.min(pool.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(round_to: usize, bias: f64) -> SizeConfig {
        SizeConfig::new(round_to, bias).unwrap()
    }

    #[test]
    fn test_round_to_multiple() {
        assert_eq!(round_to_multiple(149, 100), 100);
        assert_eq!(round_to_multiple(150, 100), 200);
        assert_eq!(round_to_multiple(151, 100), 200);
        assert_eq!(round_to_multiple(0, 100), 0);
        assert_eq!(round_to_multiple(42, 0), 42);
        assert_eq!(round_to_multiple(7, 1), 7);
    }

    #[test]
    fn test_zero_samples_is_empty() {
        assert!(generate_sizes(0, 1000, &config(100, 1.0)).is_empty());
    }

    #[test]
    fn test_max_below_round_to_is_empty() {
        assert!(generate_sizes(5, 99, &config(100, 1.0)).is_empty());
        // The empty check wins over the single-sample shortcut.
        assert!(generate_sizes(1, 50, &config(100, 1.0)).is_empty());
    }

    #[test]
    fn test_single_sample_is_max() {
        assert_eq!(generate_sizes(1, 1000, &config(100, 1.0)), vec![1000]);
        // Not snapped to the granularity.
        assert_eq!(generate_sizes(1, 1234, &config(100, 1.0)), vec![1234]);
    }

    #[test]
    fn test_five_samples_up_to_thousand() {
        let sizes = generate_sizes(5, 1000, &config(100, 1.0));
        assert_eq!(sizes, vec![100, 300, 500, 700, 1000]);
    }

    #[test]
    fn test_length_and_multiples() {
        let cfg = config(200, 1.5);
        for count in 2..40 {
            let sizes = generate_sizes(count, 100_000, &cfg);
            assert_eq!(sizes.len(), count);
            assert!(sizes.iter().all(|s| s % 200 == 0 && *s <= 100_000));
            assert_eq!(*sizes.last().unwrap(), 100_000);
        }
    }

    #[test]
    fn test_non_decreasing() {
        let sizes = generate_sizes(25, 1_000_000, &config(100, 0.7));
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_max_not_multiple_stays_below() {
        let sizes = generate_sizes(8, 12_345, &config(100, 1.0));
        assert_eq!(sizes.len(), 8);
        assert!(sizes.iter().all(|s| s % 100 == 0 && *s <= 12_345));
    }

    #[test]
    fn test_log_spacing_with_unit_bias() {
        let sizes = generate_sizes(4, 100_000, &config(100, 1.0));
        assert_eq!(sizes, vec![100, 1200, 8100, 100_000]);

        for pair in sizes.windows(2) {
            let step = (pair[1] as f64 / pair[0] as f64).log10();
            assert!((0.7..=1.3).contains(&step), "log step {} out of range", step);
        }
    }

    #[test]
    fn test_small_pool_repeats_entries() {
        let sizes = generate_sizes(10, 300, &config(100, 1.0));
        assert_eq!(
            sizes,
            vec![100, 100, 100, 200, 200, 200, 200, 300, 300, 300]
        );
    }

    #[test]
    fn test_downsampling_ties_round_away_from_zero() {
        // Pool is [100, 200, 300]; indices 0.5 and 1.5 round up.
        let sizes = generate_sizes(5, 300, &config(100, 1.0));
        assert_eq!(sizes, vec![100, 200, 200, 300, 300]);
    }

    #[test]
    fn test_pool_equal_to_sample_count_is_identity() {
        assert_eq!(downsample(&[1, 2, 3, 4], 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_gap_filling_pads_sparse_pool() {
        // A steep bias leaves only {100, 200}; 1050 rounds up past the max.
        let sizes = generate_sizes(10, 1050, &config(100, 50.0));
        assert_eq!(
            sizes,
            vec![100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]
        );
    }

    #[test]
    fn test_gap_filling_stops_at_max() {
        let mut pool = vec![100, 200];
        fill_gaps(&mut pool, 10, 450, 100);
        assert_eq!(pool, vec![100, 200, 300, 400]);
    }

    #[test]
    fn test_bias_changes_distribution() {
        let even = generate_sizes(10, 1_000_000, &config(100, 1.0));
        let skewed = generate_sizes(10, 1_000_000, &config(100, 3.0));
        assert_eq!(even.len(), skewed.len());
        assert_ne!(even, skewed);
        assert_eq!(even.last(), skewed.last());
    }

    #[test]
    fn test_round_to_one() {
        let sizes = generate_sizes(6, 10, &config(1, 1.0));
        assert_eq!(sizes.len(), 6);
        assert_eq!(sizes[0], 1);
        assert_eq!(*sizes.last().unwrap(), 10);
    }

    #[test]
    fn test_deterministic() {
        let cfg = config(50, 1.25);
        assert_eq!(
            generate_sizes(12, 75_000, &cfg),
            generate_sizes(12, 75_000, &cfg)
        );
    }
}
