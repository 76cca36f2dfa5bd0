// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Unit-tagged durations and conversion between time units.
//!
//! A duration is an integral count paired with a [`TimeUnit`]. Conversions
//! look up the ratio for the `(from, to)` pair: widening multiplies exactly,
//! narrowing truncates.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Nanoseconds per unit, indexed by `TimeUnit::index`.
const NANOS_PER_UNIT: [u64; 6] = [
    1,
    1_000,
    1_000_000,
    1_000_000_000,
    60 * 1_000_000_000,
    3_600 * 1_000_000_000,
];

/// Time unit tag for measured durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// All units, finest first.
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
    ];

    /// Short symbol used in reports.
    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "μs",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
        }
    }

    /// Number of nanoseconds in one unit.
    pub fn nanos_per_unit(&self) -> u64 {
        NANOS_PER_UNIT[self.index()]
    }

    fn index(&self) -> usize {
        match self {
            TimeUnit::Nanoseconds => 0,
            TimeUnit::Microseconds => 1,
            TimeUnit::Milliseconds => 2,
            TimeUnit::Seconds => 3,
            TimeUnit::Minutes => 4,
            TimeUnit::Hours => 5,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TimeUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanos" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            "μs" | "us" | "micros" | "microseconds" => Ok(TimeUnit::Microseconds),
            "ms" | "millis" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "sec" | "seconds" => Ok(TimeUnit::Seconds),
            "min" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hours" => Ok(TimeUnit::Hours),
            _ => Err(ValidationError::UnknownTimeUnit {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeUnit> for String {
    fn from(unit: TimeUnit) -> Self {
        unit.symbol().to_string()
    }
}

/// Conversion factor between two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionRatio {
    /// Same unit; counts are copied.
    Identity,
    /// Target is finer; counts are multiplied.
    Widen(u64),
    /// Target is coarser; counts are divided with truncation.
    Narrow(u64),
}

impl ConversionRatio {
    /// Look up the ratio for converting `from` into `to`.
    pub fn between(from: TimeUnit, to: TimeUnit) -> Self {
        let source = from.nanos_per_unit();
        let target = to.nanos_per_unit();
        if source == target {
            ConversionRatio::Identity
        } else if source > target {
            ConversionRatio::Widen(source / target)
        } else {
            ConversionRatio::Narrow(target / source)
        }
    }

    /// Apply the ratio to a count. Widening saturates at `u64::MAX`.
    pub fn apply(&self, count: u64) -> u64 {
        match *self {
            ConversionRatio::Identity => count,
            ConversionRatio::Widen(factor) => count.saturating_mul(factor),
            ConversionRatio::Narrow(divisor) => count / divisor,
        }
    }
}

/// An integral duration tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitDuration {
    count: u64,
    unit: TimeUnit,
}

impl UnitDuration {
    /// Create a duration of `count` units.
    pub fn new(count: u64, unit: TimeUnit) -> Self {
        Self { count, unit }
    }

    /// Truncate a std duration into `unit`.
    pub fn from_std(duration: Duration, unit: TimeUnit) -> Self {
        let count = duration.as_nanos() / u128::from(unit.nanos_per_unit());
        Self {
            count: u64::try_from(count).unwrap_or(u64::MAX),
            unit,
        }
    }

    /// Number of units.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Unit of the count.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Re-express this duration in another unit.
    pub fn convert_to(&self, unit: TimeUnit) -> Self {
        Self {
            count: ConversionRatio::between(self.unit, unit).apply(self.count),
            unit,
        }
    }

    /// Convert to a std duration.
    pub fn as_std(&self) -> Duration {
        let nanos = u128::from(self.count) * u128::from(self.unit.nanos_per_unit());
        let secs = u64::try_from(nanos / 1_000_000_000).unwrap_or(u64::MAX);
        Duration::new(secs, (nanos % 1_000_000_000) as u32)
    }
}

impl fmt::Display for UnitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.unit.symbol())
    }
}
