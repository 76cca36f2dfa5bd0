// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML run configuration with strict validation.
//!
//! Raw values are parsed first and then converted into validated types.
//! Any invalid field results in an `InvalidConfiguration` error.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AnalyzerError, AnalyzerResult, ValidationError};
use crate::sizes::SizeConfig;
use crate::types::{Bias, RoundTo};
use crate::units::TimeUnit;

/// Raw sampling section as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSamplingConfig {
    #[serde(default = "default_sample_count")]
    sample_count: usize,
    max_sample_size: usize,
    #[serde(default = "default_round_to")]
    round_to: usize,
    #[serde(default = "default_bias")]
    bias: f64,
}

fn default_sample_count() -> usize {
    10
}

fn default_round_to() -> usize {
    100
}

fn default_bias() -> f64 {
    1.0
}

/// Raw profiling section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfilingConfig {
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    report_unit: Option<String>,
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    sampling: RawSamplingConfig,
    #[serde(default)]
    profiling: RawProfilingConfig,
}

/// Validated sampling settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    pub sample_count: usize,
    pub max_sample_size: usize,
    pub sizes: SizeConfig,
}

/// Validated profiling settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfilingConfig {
    /// Unit measurements are taken in.
    pub unit: TimeUnit,
    /// Unit profiles are converted to before reporting, if different.
    pub report_unit: Option<TimeUnit>,
}

/// Complete validated run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub sampling: SamplingConfig,
    pub profiling: ProfilingConfig,
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> AnalyzerResult<RunConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AnalyzerError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> AnalyzerResult<RunConfig> {
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| AnalyzerError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> AnalyzerResult<RunConfig> {
        let sampling = Self::validate_sampling(raw.sampling)?;
        let profiling = Self::validate_profiling(raw.profiling)?;

        tracing::debug!(
            sample_count = sampling.sample_count,
            max_sample_size = sampling.max_sample_size,
            unit = %profiling.unit,
            "Loaded run configuration"
        );

        Ok(RunConfig {
            sampling,
            profiling,
        })
    }

    fn validate_sampling(raw: RawSamplingConfig) -> Result<SamplingConfig, ValidationError> {
        if raw.sample_count == 0 {
            return Err(ValidationError::InvalidFieldValue {
                field: "sample_count",
                value: "0".to_string(),
                reason: "At least one sample must be requested".to_string(),
            });
        }

        let round_to = RoundTo::new(raw.round_to)?;
        let bias = Bias::new(raw.bias)?;

        if raw.max_sample_size < round_to.value() {
            return Err(ValidationError::InvalidFieldValue {
                field: "max_sample_size",
                value: raw.max_sample_size.to_string(),
                reason: format!("Must be at least round_to ({})", round_to),
            });
        }

        Ok(SamplingConfig {
            sample_count: raw.sample_count,
            max_sample_size: raw.max_sample_size,
            sizes: SizeConfig { round_to, bias },
        })
    }

    fn validate_profiling(raw: RawProfilingConfig) -> Result<ProfilingConfig, ValidationError> {
        let unit = match raw.unit {
            Some(unit) => unit.parse()?,
            None => TimeUnit::default(),
        };
        let report_unit = raw.report_unit.map(|u| u.parse()).transpose()?;

        Ok(ProfilingConfig { unit, report_unit })
    }
}
