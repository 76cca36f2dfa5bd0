// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Report record types and formats.
//!
//! A profile is flattened into one [`ProfileRecord`] per sample before
//! being rendered as text, CSV or JSON.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use analyzer_core::RuntimeProfile;
use serde::{Deserialize, Serialize};

/// Output formats supported by the report writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// One human-readable line per sample
    Text,
    /// Comma-separated rows with a header
    Csv,
    /// Pretty-printed array of objects
    Json,
}

impl ReportFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    /// Pick a format from a file extension (`txt`, `csv`, `json`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "txt" => Some(ReportFormat::Text),
            "csv" => Some(ReportFormat::Csv),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }

    /// Pick a format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ext = s.trim().trim_start_matches('.').to_ascii_lowercase();
        Self::from_extension(&ext).ok_or_else(|| format!("unsupported report format '{}'", s))
    }
}

/// A single measured sample as written to reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// 1-based position of the sample
    pub sample_id: usize,
    /// Unit symbol of `time_value`
    pub time_unit: String,
    /// Measured duration
    pub time_value: u64,
    /// Element count of the sample
    pub sample_size: usize,
}

impl ProfileRecord {
    /// Flatten a profile into records, numbered from 1.
    pub fn from_profile(profile: &RuntimeProfile) -> Vec<ProfileRecord> {
        let symbol = profile.unit().symbol();
        profile
            .iter()
            .enumerate()
            .map(|(index, (duration, size))| ProfileRecord {
                sample_id: index + 1,
                time_unit: symbol.to_string(),
                time_value: duration.count(),
                sample_size: size,
            })
            .collect()
    }

    /// Text report line for this record.
    pub fn text_line(&self) -> String {
        format!(
            "Sample {}: | Time: {} {}| Sample size: {}",
            self.sample_id, self.time_value, self.time_unit, self.sample_size
        )
    }

    /// CSV row for this record, without a trailing newline.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.sample_id, self.time_unit, self.time_value, self.sample_size
        )
    }
}

/// Header row for CSV profile reports.
pub const CSV_HEADER: &str = "sample_id,time_unit,time_value,sample_size";
