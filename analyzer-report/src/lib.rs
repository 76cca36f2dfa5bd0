// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Runtime Analyzer Reports
//!
//! Writers that consume a [`analyzer_core::RuntimeProfile`] through its public
//! accessors and render it for people and tools.
//!
//! # Formats
//!
//! - **Text**: `Sample 1: | Time: 12 ms| Sample size: 100`
//! - **CSV**: `sample_id,time_unit,time_value,sample_size` header plus one row per sample
//! - **JSON**: array of objects with the same four keys
//!
//! Sample contents can be saved in the same three formats.

pub mod records;
pub mod reporter;
pub mod samples;

pub use records::{ProfileRecord, ReportFormat, CSV_HEADER};
pub use reporter::{print_report, write_profile, ProfileReporter, ReportError};
pub use samples::{save_samples, serialize_iterable, write_samples};
