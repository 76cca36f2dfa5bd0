// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Sample content writers.
//!
//! Saves the generated input data itself, one serialized sample per entry,
//! so a profiling run can be reproduced or inspected later.

use std::fmt::{Display, Write as _};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::records::ReportFormat;
use crate::reporter::ReportError;

/// Render any iterable of displayable items as `[a, b, c]`.
pub fn serialize_iterable<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::from("[");
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", item);
    }
    out.push(']');
    out
}

/// Write serialized samples in `format` to `writer`.
pub fn write_samples<S, F, W>(
    samples: &[S],
    mut serializer: F,
    format: ReportFormat,
    mut writer: W,
) -> Result<(), ReportError>
where
    F: FnMut(&S) -> String,
    W: Write,
{
    match format {
        ReportFormat::Text => {
            for sample in samples {
                writeln!(writer, "{}", serializer(sample))?;
            }
        }
        ReportFormat::Csv => {
            writeln!(writer, "sample_id,sample_data")?;
            for (index, sample) in samples.iter().enumerate() {
                writeln!(writer, "{},{}", index + 1, serializer(sample))?;
            }
        }
        ReportFormat::Json => {
            let serialized: Vec<String> = samples.iter().map(&mut serializer).collect();
            serde_json::to_writer_pretty(&mut writer, &serialized)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Save serialized samples to `path`, choosing the format from its extension.
pub fn save_samples<S, F>(
    samples: &[S],
    serializer: F,
    path: impl AsRef<Path>,
) -> Result<(), ReportError>
where
    F: FnMut(&S) -> String,
{
    let path = path.as_ref();
    let format = ReportFormat::from_path(path).ok_or_else(|| ReportError::UnsupportedExtension {
        path: path.to_path_buf(),
    })?;

    let file = File::create(path)?;
    write_samples(samples, serializer, format, BufWriter::new(file))?;
    tracing::debug!(path = %path.display(), count = samples.len(), "Saved samples");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn samples() -> Vec<Vec<i32>> {
        vec![vec![3, 1, 2], vec![], vec![7]]
    }

    fn render(format: ReportFormat) -> String {
        let mut out = Vec::new();
        write_samples(&samples(), |s| serialize_iterable(s), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_serialize_iterable() {
        assert_eq!(serialize_iterable([1, 2, 3]), "[1, 2, 3]");
        assert_eq!(serialize_iterable(Vec::<u8>::new()), "[]");
        assert_eq!(serialize_iterable(["a"]), "[a]");
    }

    #[test]
    fn test_text_samples() {
        assert_eq!(render(ReportFormat::Text), "[3, 1, 2]\n[]\n[7]\n");
    }

    #[test]
    fn test_csv_samples() {
        assert_eq!(
            render(ReportFormat::Csv),
            "sample_id,sample_data\n1,[3, 1, 2]\n2,[]\n3,[7]\n"
        );
    }

    #[test]
    fn test_json_samples_are_escaped_strings() {
        let mut out = Vec::new();
        let data = vec!["say \"hi\"".to_string()];
        write_samples(&data, |s| s.clone(), ReportFormat::Json, &mut out).unwrap();

        let parsed: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_save_samples_rejects_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let result = save_samples(
            &samples(),
            |s| serialize_iterable(s),
            temp_dir.path().join("samples.bin"),
        );
        assert!(matches!(result, Err(ReportError::UnsupportedExtension { .. })));

        let path = temp_dir.path().join("samples.txt");
        save_samples(&samples(), |s| serialize_iterable(s), &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[3, 1, 2]\n[]\n[7]\n");
    }
}
