//! Formatting helper functions for the scheduler
//!
//! This module contains formatting logic for displaying tasks.

use crate::tasks::{Completion, Task};

/// Format a single task as a bullet line plus detail lines
fn format_task(task: &Task, result: &mut String) {
    result.push_str(&format!("- [{}] {} (due: {})\n", task.id, task.title, task.date));
    if let Some(rule) = task.repeat {
        result.push_str(&format!("  Repeat: {}\n", rule));
    }
    if !task.comment.is_empty() {
        result.push_str(&format!("  Comment: {}\n", task.comment));
    }
}

/// Format tasks into a display string
///
/// # Arguments
/// * `tasks` - Tasks to format, already in display order
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        format_task(task, &mut result);
    }
    result
}

/// Format the full details of one task
pub fn format_task_details(task: &Task) -> String {
    let mut result = String::new();
    format_task(task, &mut result);
    result
}

/// Describe the outcome of marking a task done
pub fn format_completion(id: u64, completion: Completion) -> String {
    match completion {
        Completion::Removed => format!("Task {} completed and removed", id),
        Completion::Rescheduled(date) => format!("Task {} completed, next due {}", id, date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{CalendarDate, RecurrenceRule};

    fn task(id: u64, title: &str) -> Task {
        Task {
            id,
            date: CalendarDate::from_ymd(2024, 1, 22).unwrap(),
            title: title.to_string(),
            comment: String::new(),
            repeat: None,
        }
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_tasks(&[]), "No tasks found");
    }

    #[test]
    fn test_format_tasks() {
        let mut review = task(1, "Weekly review");
        review.repeat = Some(RecurrenceRule::Daily { interval_days: 7 });
        review.comment = "inbox zero".to_string();
        let plain = task(2, "Call John");

        let output = format_tasks(&[&review, &plain]);
        assert_eq!(
            output,
            "Found 2 task(s):\n\n\
             - [1] Weekly review (due: 20240122)\n  Repeat: d 7\n  Comment: inbox zero\n\
             - [2] Call John (due: 20240122)\n"
        );
    }

    #[test]
    fn test_format_completion() {
        assert_eq!(
            format_completion(3, Completion::Removed),
            "Task 3 completed and removed"
        );
        let next = CalendarDate::from_ymd(2025, 3, 1).unwrap();
        assert_eq!(
            format_completion(4, Completion::Rescheduled(next)),
            "Task 4 completed, next due 20250301"
        );
    }
}
