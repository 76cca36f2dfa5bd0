// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Report generation for runtime profiles.
//!
//! Renders profiles as text, CSV or JSON, either to any writer or to files in
//! an output directory.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use analyzer_core::RuntimeProfile;
use chrono::Utc;
use thiserror::Error;

use crate::records::{ProfileRecord, ReportFormat, CSV_HEADER};

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported file extension: {path}")]
    UnsupportedExtension { path: PathBuf },
}

/// Render a profile in `format` to `writer`.
pub fn write_profile<W: Write>(
    profile: &RuntimeProfile,
    format: ReportFormat,
    mut writer: W,
) -> Result<(), ReportError> {
    let records = ProfileRecord::from_profile(profile);

    match format {
        ReportFormat::Text => {
            for record in &records {
                writeln!(writer, "{}", record.text_line())?;
            }
        }
        ReportFormat::Csv => {
            writeln!(writer, "{}", CSV_HEADER)?;
            for record in &records {
                writeln!(writer, "{}", record.csv_row())?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &records)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Print the text form of a profile to stdout.
pub fn print_report(profile: &RuntimeProfile) -> Result<(), ReportError> {
    let stdout = io::stdout();
    write_profile(profile, ReportFormat::Text, stdout.lock())
}

/// File reporter for runtime profiles.
pub struct ProfileReporter {
    /// Output directory for report files
    output_dir: PathBuf,
}

impl ProfileReporter {
    /// Create a new reporter, creating the output directory if needed.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ReportError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Directory reports are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save a profile as `{name}_{timestamp}.{ext}`.
    ///
    /// Returns the path to the created file.
    pub fn save(
        &self,
        profile: &RuntimeProfile,
        name: &str,
        format: ReportFormat,
    ) -> Result<PathBuf, ReportError> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%SZ");
        let filename = format!("{}_{}.{}", name, timestamp, format.extension());
        let filepath = self.output_dir.join(filename);

        Self::write_file(profile, format, &filepath)?;
        Ok(filepath)
    }

    /// Save a profile to an explicit path, choosing the format from its extension.
    pub fn save_to(profile: &RuntimeProfile, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let format =
            ReportFormat::from_path(path).ok_or_else(|| ReportError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;
        Self::write_file(profile, format, path)
    }

    fn write_file(
        profile: &RuntimeProfile,
        format: ReportFormat,
        path: &Path,
    ) -> Result<(), ReportError> {
        let file = File::create(path)?;
        write_profile(profile, format, BufWriter::new(file))?;
        tracing::debug!(path = %path.display(), format = %format, "Saved profile report");
        Ok(())
    }

    /// List all report files in the output directory.
    pub fn list_reports(&self) -> Result<Vec<PathBuf>, ReportError> {
        let mut reports = Vec::new();
        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            if ReportFormat::from_path(&path).is_some() {
                reports.push(path);
            }
        }
        reports.sort();
        Ok(reports)
    }

    /// Load records back from a JSON report.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<ProfileRecord>, ReportError> {
        let file = File::open(path)?;
        let records = serde_json::from_reader(file)?;
        Ok(records)
    }
}
