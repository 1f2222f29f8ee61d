//! Next-due-date calculation.

use super::calendar_date::CalendarDate;
use super::error::RecurrenceError;
use super::rule::RecurrenceRule;

impl RecurrenceRule {
    /// Compute the first occurrence strictly after `reference`.
    ///
    /// The rule is applied to `base` at least once before comparing, so the
    /// result is never `base` itself, even when `base` is already in the
    /// future. Each further step advances the previous candidate. A yearly
    /// rule anchored on February 29 moves a landing on February 28 to
    /// March 1 at every step.
    ///
    /// # Errors
    /// [`RecurrenceError::DateOutOfRange`] if a step goes past 99991231.
    pub fn next_after(
        self,
        base: CalendarDate,
        reference: CalendarDate,
    ) -> Result<CalendarDate, RecurrenceError> {
        let leap_anchored = base.is_leap_day();
        let mut candidate = self.advance(base, leap_anchored)?;
        while candidate <= reference {
            candidate = self.advance(candidate, leap_anchored)?;
        }
        Ok(candidate)
    }

    /// Apply the rule once.
    fn advance(
        self,
        date: CalendarDate,
        leap_anchored: bool,
    ) -> Result<CalendarDate, RecurrenceError> {
        let next = match self {
            Self::Daily { interval_days } => date.checked_add_days(interval_days),
            Self::Yearly => date.checked_add_year().and_then(|next| {
                if leap_anchored && next.month() == 2 && next.day() == 28 {
                    next.checked_add_days(1)
                } else {
                    Some(next)
                }
            }),
        };
        next.ok_or_else(|| RecurrenceError::DateOutOfRange {
            from: date.to_string(),
        })
    }
}

/// Compute the next due date from the raw text forms.
///
/// `base` must be `YYYYMMDD` and `rule` one of `d <n>` / `y`. The rule is
/// validated before the base date. Returns the next date strictly after
/// `reference` as `YYYYMMDD`.
///
/// # Example
/// ```
/// use task_scheduler::schedule::{CalendarDate, compute_next_date};
///
/// let now = CalendarDate::from_ymd(2024, 1, 15).unwrap();
/// assert_eq!(compute_next_date(now, "20240101", "d 7").unwrap(), "20240122");
/// ```
pub fn compute_next_date(
    reference: CalendarDate,
    base: &str,
    rule: &str,
) -> Result<String, RecurrenceError> {
    let rule: RecurrenceRule = rule.parse()?;
    let base: CalendarDate = base.parse()?;
    rule.next_after(base, reference).map(|date| date.to_string())
}
