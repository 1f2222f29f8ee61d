//! Error types for task operations.

use crate::schedule::RecurrenceError;

/// Error returned by task creation, update and completion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The title is empty or whitespace only.
    #[error("task title is required")]
    MissingTitle,

    /// The due date is not a valid `YYYYMMDD` calendar date.
    #[error("invalid task date '{date}' (expected YYYYMMDD)")]
    InvalidDate {
        /// The rejected date text.
        date: String,
    },

    /// No task has the given id.
    #[error("task {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// The repeat rule is invalid or the next date could not be computed.
    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}
