//! Conversion of `(scalar, unit)` pairs into absolute durations.

use crate::errors::ValidationError;
use chrono::TimeDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationUnit {
    #[default]
    Raw,
    Minutes,
    Hours,
}

impl DurationUnit {
    /// Unit codes as offered by the input form: 0 = seconds, 1 = minutes, 2 = hours.
    pub fn from_code(code: u8) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(DurationUnit::Raw),
            1 => Ok(DurationUnit::Minutes),
            2 => Ok(DurationUnit::Hours),
            other => Err(ValidationError::InvalidUnit(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            DurationUnit::Raw => 0,
            DurationUnit::Minutes => 1,
            DurationUnit::Hours => 2,
        }
    }

    fn seconds(self) -> i64 {
        match self {
            DurationUnit::Raw => 1,
            DurationUnit::Minutes => 60,
            DurationUnit::Hours => 3600,
        }
    }
}

/// Normalize `scalar` expressed in `unit` into a duration.
///
/// Zero and negative scalars pass through unchanged in sign. Values beyond
/// the representable range saturate.
pub fn normalize(scalar: i64, unit: DurationUnit) -> TimeDelta {
    scalar
        .checked_mul(unit.seconds())
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(if scalar < 0 {
            TimeDelta::MIN
        } else {
            TimeDelta::MAX
        })
}
