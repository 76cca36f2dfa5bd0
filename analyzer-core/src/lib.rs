// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Runtime Analyzer Core Library
//!
//! Generates log-spaced sample sizes, materializes samples from a caller
//! filler, times an operation over them and converts the resulting
//! profiles between time units.
//!
//! ```
//! use analyzer_core::{generate_samples, generate_sizes, profile_runtime, SizeConfig, TimeUnit};
//!
//! let sizes = generate_sizes(5, 1000, &SizeConfig::default());
//! let samples: Vec<Vec<u32>> = generate_samples(|v: &mut Vec<u32>, n| v.extend((0..n as u32).rev()), &sizes);
//! let profile = profile_runtime(TimeUnit::Microseconds, &samples, |mut v: Vec<u32>| v.sort()).unwrap();
//! assert_eq!(profile.sizes(), &sizes[..]);
//! ```

pub mod config;
pub mod error;
pub mod profile;
pub mod samples;
pub mod sizes;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use config::{ConfigLoader, ProfilingConfig, RunConfig, SamplingConfig};
pub use error::{AnalyzerError, AnalyzerResult, ValidationError};
pub use profile::{measure_duration, profile_runtime, Profiler, RuntimeProfile};
pub use samples::{generate_samples, Sample};
pub use sizes::{generate_sizes, round_to_multiple, SizeConfig};
pub use types::{Bias, RoundTo};
pub use units::{ConversionRatio, TimeUnit, UnitDuration};
