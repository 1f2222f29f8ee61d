//! Recurrence rule parsing and validation.

use super::error::RecurrenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest accepted interval for a daily rule
pub const MAX_INTERVAL_DAYS: u32 = 400;

/// Prefix of the daily rule form `d <n>`
const DAILY_PREFIX: &str = "d ";

/// Text of the yearly rule
const YEARLY: &str = "y";

/// How a task repeats after it is marked done.
///
/// Parsed once at the boundary from its text form; the calculator only ever
/// sees a validated rule.
///
/// | text    | rule                                   |
/// |---------|----------------------------------------|
/// | `d <n>` | every `n` days, `n` in `1..=400`       |
/// | `y`     | every year, Feb 29 rolls to March 1    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecurrenceRule {
    /// Repeats every `interval_days` days
    Daily { interval_days: u32 },
    /// Repeats on the same month and day every year
    Yearly,
}

impl RecurrenceRule {
    /// Build a daily rule, validating the interval bounds.
    pub fn daily(interval_days: u32) -> Result<Self, RecurrenceError> {
        if interval_days == 0 || interval_days > MAX_INTERVAL_DAYS {
            return Err(RecurrenceError::InvalidInterval {
                interval: interval_days.to_string(),
            });
        }
        Ok(Self::Daily { interval_days })
    }

    /// Parse an optional rule where blank text means "does not repeat".
    ///
    /// Tasks use this: an empty repeat field is a one-shot task, while the
    /// calculator itself treats a blank rule as invalid.
    pub fn parse_optional(text: &str) -> Result<Option<Self>, RecurrenceError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        text.parse().map(Some)
    }
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(RecurrenceError::InvalidRule {
                rule: s.to_string(),
            });
        }

        if s == YEARLY {
            return Ok(Self::Yearly);
        }

        let Some(interval) = s.strip_prefix(DAILY_PREFIX) else {
            return Err(RecurrenceError::InvalidRule {
                rule: s.to_string(),
            });
        };

        // Parse as signed so "-3" is reported as an out-of-range interval.
        let invalid = || RecurrenceError::InvalidInterval {
            interval: interval.to_string(),
        };
        let days: i64 = interval.parse().map_err(|_| invalid())?;
        if days <= 0 || days > i64::from(MAX_INTERVAL_DAYS) {
            return Err(invalid());
        }
        let interval_days = u32::try_from(days).map_err(|_| invalid())?;
        Ok(Self::Daily { interval_days })
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily { interval_days } => write!(f, "{DAILY_PREFIX}{interval_days}"),
            Self::Yearly => f.write_str(YEARLY),
        }
    }
}

impl TryFrom<String> for RecurrenceRule {
    type Error = RecurrenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecurrenceRule> for String {
    fn from(rule: RecurrenceRule) -> Self {
        rule.to_string()
    }
}
