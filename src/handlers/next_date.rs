//! Next-date handler for the scheduler

use crate::SchedulerHandler;
use crate::schedule;
use crate::validation;
use anyhow::Result;

impl SchedulerHandler {
    /// Compute the next due date directly from text inputs.
    ///
    /// All three inputs are required. `now` and `date` are `YYYYMMDD`,
    /// `repeat` is `d <n>` or `y`. Returns the bare `YYYYMMDD` result; the
    /// task file is not touched.
    pub fn handle_next_date(now: &str, date: &str, repeat: &str) -> Result<String> {
        let now = validation::require_param("now", now)?;
        let date = validation::require_param("date", date)?;
        let repeat = validation::require_param("repeat", repeat)?;

        let reference = validation::parse_reference_date(now)?;
        let next = schedule::compute_next_date(reference, date, repeat)?;
        tracing::debug!(%reference, date, repeat, %next, "computed next date");
        Ok(next)
    }
}
