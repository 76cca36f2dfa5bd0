// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated generator settings.
//!
//! Both types validate their invariants at creation time, so a `SizeConfig`
//! built from them can never carry a non-positive granularity or bias.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Rounding granularity for generated sizes.
/// Must be at least 1; it is also the smallest size the generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RoundTo(usize);

impl RoundTo {
    /// Create a new RoundTo with validation.
    pub fn new(value: usize) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::InvalidFieldValue {
                field: "round_to",
                value: value.to_string(),
                reason: "Rounding granularity must be greater than 0".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl Default for RoundTo {
    fn default() -> Self {
        Self(100)
    }
}

impl fmt::Display for RoundTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for RoundTo {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoundTo> for usize {
    fn from(round_to: RoundTo) -> Self {
        round_to.0
    }
}

/// Density skew exponent for generated sizes.
/// Must be finite and strictly positive; 1.0 spreads sizes evenly in log-space.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Bias(f64);

impl Bias {
    /// Create a new Bias with validation.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidFieldValue {
                field: "bias",
                value: value.to_string(),
                reason: "Bias must be a finite number greater than 0".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Get the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Bias {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Bias {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Bias> for f64 {
    fn from(bias: Bias) -> Self {
        bias.0
    }
}
