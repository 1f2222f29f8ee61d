//! Error types for recurrence parsing and calculation.

/// Error returned when a recurrence rule or one of the calculator's date
/// inputs fails validation.
///
/// Every variant carries the offending input so callers can echo it back
/// in their own error representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RecurrenceError {
    /// The rule is blank or is neither `y` nor `d <n>`.
    #[error("unsupported repeat rule '{rule}' (expected 'd <days>' or 'y')")]
    InvalidRule {
        /// The rejected rule text.
        rule: String,
    },

    /// The interval of a daily rule is missing, not an integer, or outside 1..=400.
    #[error("invalid day interval '{interval}' (must be an integer in 1..=400)")]
    InvalidInterval {
        /// The rejected interval text.
        interval: String,
    },

    /// The base date is not a valid `YYYYMMDD` calendar date.
    #[error("invalid date '{date}' (expected YYYYMMDD)")]
    InvalidBaseDate {
        /// The rejected date text.
        date: String,
    },

    /// The reference ("now") date is not a valid `YYYYMMDD` calendar date.
    #[error("invalid reference date '{date}' (expected YYYYMMDD)")]
    InvalidReferenceDate {
        /// The rejected date text.
        date: String,
    },

    /// Advancing the date left the representable calendar range.
    #[error("date arithmetic overflowed advancing from {from}")]
    DateOutOfRange {
        /// The last representable candidate, formatted as `YYYYMMDD`.
        from: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_rule_message() {
        let err = RecurrenceError::InvalidRule {
            rule: "w 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported repeat rule 'w 3' (expected 'd <days>' or 'y')"
        );
    }

    #[test]
    fn error_invalid_interval_message() {
        let err = RecurrenceError::InvalidInterval {
            interval: "401".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid day interval '401' (must be an integer in 1..=400)"
        );
    }

    #[test]
    fn error_invalid_base_date_message() {
        let err = RecurrenceError::InvalidBaseDate {
            date: "2024-01-01".to_string(),
        };
        assert_eq!(err.to_string(), "invalid date '2024-01-01' (expected YYYYMMDD)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<RecurrenceError>();
    }
}
