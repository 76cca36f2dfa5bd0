// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for the runtime analyzer.
//!
//! Errors are explicit enums. Degenerate generator inputs are not errors:
//! they resolve to empty or collapsed size sequences instead.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the analyzer core.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Profiling Errors
    // =========================================================================
    #[error("Empty input: cannot profile zero samples")]
    EmptyInput,

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Validation failures for user-supplied settings.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown time unit: {value}")]
    UnknownTimeUnit { value: String },
}

/// Result type alias using AnalyzerError.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
