use crate::schedule::{CalendarDate, RecurrenceRule};
use serde::{Deserialize, Serialize};

use super::error::TaskError;

/// A scheduled task
///
/// `date` is the next due date. A task without `repeat` is one-shot and is
/// removed when marked done; a recurring task has its date advanced instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned by the task list
    pub id: u64,
    /// Due date (format: YYYYMMDD)
    pub date: CalendarDate,
    /// Short description of the task
    pub title: String,
    /// Optional free-form comment
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    /// Optional recurrence rule ("d <n>" or "y")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RecurrenceRule>,
}

/// Unvalidated task fields as supplied by a client.
///
/// Used for both create and update, so date defaulting and repeat
/// validation live in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Due date as `YYYYMMDD`; blank or absent means today
    pub date: Option<String>,
    pub title: String,
    pub comment: String,
    /// Repeat rule text; blank or absent means one-shot
    pub repeat: Option<String>,
}

impl TaskDraft {
    /// Create a draft with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_repeat(mut self, repeat: impl Into<String>) -> Self {
        self.repeat = Some(repeat.into());
        self
    }

    /// Validate the draft and build the task it describes.
    ///
    /// A date before `today` is moved forward: to the next occurrence after
    /// `today` when the task repeats, otherwise to `today` itself. Dates on or
    /// after `today` are kept as given.
    ///
    /// # Errors
    /// - [`TaskError::MissingTitle`] for a blank title
    /// - [`TaskError::Recurrence`] for an invalid repeat rule
    /// - [`TaskError::InvalidDate`] for a date that is not `YYYYMMDD`
    pub fn resolve(self, id: u64, today: CalendarDate) -> Result<Task, TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::MissingTitle);
        }

        let repeat = match self.repeat.as_deref() {
            Some(text) => RecurrenceRule::parse_optional(text)?,
            None => None,
        };

        let date = match self.date.as_deref() {
            None => today,
            Some(text) if text.trim().is_empty() => today,
            Some(text) => {
                CalendarDate::parse(text).ok_or_else(|| TaskError::InvalidDate {
                    date: text.to_string(),
                })?
            }
        };

        let date = if date < today {
            match repeat {
                Some(rule) => rule.next_after(date, today)?,
                None => today,
            }
        } else {
            date
        };

        Ok(Task {
            id,
            date,
            title: self.title,
            comment: self.comment,
            repeat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> CalendarDate {
        CalendarDate::parse(text).unwrap()
    }

    #[test]
    fn test_resolve_defaults_date_to_today() {
        let task = TaskDraft::new("Water plants").resolve(1, date("20240115")).unwrap();
        assert_eq!(task.date, date("20240115"));
        assert_eq!(task.repeat, None);
    }

    #[test]
    fn test_resolve_blank_date_is_today() {
        let task = TaskDraft::new("Water plants")
            .with_date("  ")
            .resolve(1, date("20240115"))
            .unwrap();
        assert_eq!(task.date, date("20240115"));
    }

    #[test]
    fn test_resolve_keeps_future_date() {
        let task = TaskDraft::new("Dentist")
            .with_date("20240301")
            .with_repeat("y")
            .resolve(1, date("20240115"))
            .unwrap();
        assert_eq!(task.date, date("20240301"));
    }

    #[test]
    fn test_resolve_keeps_today() {
        let task = TaskDraft::new("Standup")
            .with_date("20240115")
            .with_repeat("d 1")
            .resolve(1, date("20240115"))
            .unwrap();
        assert_eq!(task.date, date("20240115"));
    }

    #[test]
    fn test_resolve_past_one_shot_moves_to_today() {
        let task = TaskDraft::new("Call John")
            .with_date("20231201")
            .resolve(1, date("20240115"))
            .unwrap();
        assert_eq!(task.date, date("20240115"));
    }

    #[test]
    fn test_resolve_past_recurring_moves_to_next_occurrence() {
        let task = TaskDraft::new("Weekly review")
            .with_date("20240101")
            .with_repeat("d 7")
            .resolve(1, date("20240115"))
            .unwrap();
        assert_eq!(task.date, date("20240122"));
        assert_eq!(task.repeat, Some(RecurrenceRule::Daily { interval_days: 7 }));
    }

    #[test]
    fn test_resolve_blank_repeat_is_one_shot() {
        let task = TaskDraft::new("Once")
            .with_repeat(" ")
            .resolve(1, date("20240115"))
            .unwrap();
        assert_eq!(task.repeat, None);
    }

    #[test]
    fn test_resolve_requires_title() {
        let err = TaskDraft::new("   ").resolve(1, date("20240115")).unwrap_err();
        assert_eq!(err, TaskError::MissingTitle);
    }

    #[test]
    fn test_resolve_rejects_bad_date() {
        let err = TaskDraft::new("Task")
            .with_date("2024-01-15")
            .resolve(1, date("20240115"))
            .unwrap_err();
        assert_eq!(
            err,
            TaskError::InvalidDate {
                date: "2024-01-15".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_rejects_padded_date() {
        let err = TaskDraft::new("Task")
            .with_date(" 20240115 ")
            .resolve(1, date("20240115"))
            .unwrap_err();
        assert_eq!(
            err,
            TaskError::InvalidDate {
                date: " 20240115 ".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_rejects_bad_repeat() {
        let err = TaskDraft::new("Task")
            .with_repeat("d 401")
            .resolve(1, date("20240115"))
            .unwrap_err();
        assert!(matches!(
            err,
            TaskError::Recurrence(crate::schedule::RecurrenceError::InvalidInterval { .. })
        ));
    }
}
