//! Validation helper functions for scheduler handlers
//!
//! This module contains the input checks shared by the handlers and the CLI.

use crate::schedule::{CalendarDate, RecurrenceError};
use anyhow::{Result, bail};

/// Parse the reference ("now") date of a next-date request
///
/// # Arguments
/// * `text` - Date string in YYYYMMDD format
///
/// # Returns
/// The parsed date, or `InvalidReferenceDate` carrying the input
pub fn parse_reference_date(text: &str) -> Result<CalendarDate, RecurrenceError> {
    CalendarDate::parse(text).ok_or_else(|| RecurrenceError::InvalidReferenceDate {
        date: text.to_string(),
    })
}

/// Reject a blank required parameter
///
/// # Arguments
/// * `name` - Parameter name used in the error message
/// * `value` - The supplied value
pub fn require_param<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        bail!("Missing required parameter '{}'", name);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_date() {
        assert_eq!(
            parse_reference_date("20240115"),
            Ok(CalendarDate::from_ymd(2024, 1, 15).unwrap())
        );
        assert_eq!(
            parse_reference_date("today"),
            Err(RecurrenceError::InvalidReferenceDate {
                date: "today".to_string()
            })
        );
    }

    #[test]
    fn test_require_param() {
        assert_eq!(require_param("now", "20240115").unwrap(), "20240115");
        let err = require_param("repeat", " ").unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter 'repeat'");
    }
}
