//! Recurrence date calculation
//!
//! This module contains the calendar types and the pure calculator that
//! advances a task's due date:
//! - `calendar_date`: `YYYYMMDD` date-only value
//! - `rule`: parsing and validation of recurrence rules (`d <n>`, `y`)
//! - `next_date`: the repeated-advance loop
//! - `error`: error kinds returned by parsing and calculation

mod calendar_date;
mod error;
mod next_date;
mod rule;

pub use calendar_date::CalendarDate;
pub use error::RecurrenceError;
pub use next_date::compute_next_date;
pub use rule::{MAX_INTERVAL_DAYS, RecurrenceRule};
