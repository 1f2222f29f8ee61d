//! Date-only calendar value serialized as `YYYYMMDD`.

use super::error::RecurrenceError;
use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// chrono format string matching the `YYYYMMDD` wire form
const DATE_FORMAT: &str = "%Y%m%d";

/// Length of the `YYYYMMDD` wire form
const WIRE_LEN: usize = 8;

/// Largest year that still fits the four-digit year of the wire form
const MAX_YEAR: i32 = 9999;

/// A Gregorian calendar date with no time of day and no timezone.
///
/// Always valid by construction and limited to years 0000..=9999, so the
/// text form is always eight digits. Crosses every boundary (CLI arguments,
/// the TOML task file, calculator results) as an 8-digit `YYYYMMDD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its components, `None` if they don't form a valid
    /// date in years 0000..=9999.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(Self::from_naive)
    }

    /// Wrap a chrono date, `None` outside years 0000..=9999.
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (0..=MAX_YEAR).contains(&date.year()).then_some(Self(date))
    }

    /// Today's date in the reference calendar (UTC).
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parse an exact `YYYYMMDD` string.
    ///
    /// Returns `None` unless the text is exactly eight ASCII digits forming a
    /// valid Gregorian date. Signs, separators and surrounding whitespace are
    /// all rejected.
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() != WIRE_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year = text[0..4].parse().ok()?;
        let month = text[4..6].parse().ok()?;
        let day = text[6..8].parse().ok()?;
        Self::from_ymd(year, month, day)
    }

    /// The underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Whether this date is February 29
    pub fn is_leap_day(&self) -> bool {
        self.0.month() == 2 && self.0.day() == 29
    }

    /// Add a number of days, `None` past 99991231.
    pub fn checked_add_days(self, days: u32) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .and_then(Self::from_naive)
    }

    /// Add one calendar year.
    ///
    /// February 29 clamps to February 28 when the target year is not a leap
    /// year. `None` past 99991231.
    pub fn checked_add_year(self) -> Option<Self> {
        self.0
            .checked_add_months(Months::new(12))
            .and_then(Self::from_naive)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecurrenceError::InvalidBaseDate {
            date: s.to_string(),
        })
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = RecurrenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
