// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sample materialization.
//!
//! Turns a size sequence into concrete sample containers using a
//! caller-supplied filler.

use std::collections::{BTreeSet, HashSet, VecDeque};

/// Input data that reports its own element count.
pub trait Sample {
    /// Number of elements in the sample.
    fn sample_size(&self) -> usize;
}

impl<T> Sample for Vec<T> {
    fn sample_size(&self) -> usize {
        self.len()
    }
}

impl<T> Sample for [T] {
    fn sample_size(&self) -> usize {
        self.len()
    }
}

impl<T> Sample for VecDeque<T> {
    fn sample_size(&self) -> usize {
        self.len()
    }
}

impl<T> Sample for BTreeSet<T> {
    fn sample_size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Sample for HashSet<T, S> {
    fn sample_size(&self) -> usize {
        self.len()
    }
}

impl Sample for String {
    fn sample_size(&self) -> usize {
        self.len()
    }
}

/// Build one sample per size, in order.
///
/// The filler receives a fresh, empty container and the target size and is
/// trusted to populate exactly that many elements.
pub fn generate_samples<C, F>(mut filler: F, sizes: &[usize]) -> Vec<C>
where
    C: Default,
    F: FnMut(&mut C, usize),
{
    let samples: Vec<C> = sizes
        .iter()
        .map(|&size| {
            let mut sample = C::default();
            filler(&mut sample, size);
            sample
        })
        .collect();

    tracing::debug!(count = samples.len(), "Materialized samples");

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_samples_in_order() {
        let samples: Vec<Vec<u32>> =
            generate_samples(|v: &mut Vec<u32>, n| v.extend(0..n as u32), &[3, 1, 4]);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], vec![0, 1, 2]);
        assert_eq!(samples[1], vec![0]);
        assert_eq!(samples[2].sample_size(), 4);
    }

    #[test]
    fn test_filler_gets_empty_container() {
        let mut seen = Vec::new();
        let _: Vec<Vec<u8>> = generate_samples(
            |v: &mut Vec<u8>, n| {
                seen.push(v.len());
                v.resize(n, 7);
            },
            &[5, 2],
        );
        assert_eq!(seen, vec![0, 0]);
    }

    #[test]
    fn test_filler_output_not_validated() {
        let samples: Vec<Vec<u8>> = generate_samples(|v: &mut Vec<u8>, _| v.push(1), &[10, 20]);
        assert!(samples.iter().all(|s| s.sample_size() == 1));
    }

    #[test]
    fn test_empty_sizes() {
        let samples: Vec<String> = generate_samples(|s: &mut String, n| s.push_str(&"x".repeat(n)), &[]);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_other_containers() {
        let samples: Vec<VecDeque<i32>> =
            generate_samples(|d: &mut VecDeque<i32>, n| d.extend(0..n as i32), &[2]);
        assert_eq!(samples[0].sample_size(), 2);

        let set: BTreeSet<i32> = [1, 1, 2].into_iter().collect();
        assert_eq!(set.sample_size(), 2);
        assert_eq!([1u8, 2, 3][..].sample_size(), 3);
    }
}
