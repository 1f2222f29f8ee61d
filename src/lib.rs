//! Task Scheduler Library
//!
//! This library provides a personal task scheduler: tasks carry a due date
//! and an optional recurrence rule, and marking a recurring task done moves
//! it to its next due date.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Handler Layer**: `SchedulerHandler` - one operation per client request
//! - **Domain Layer**: `schedule` (recurrence calculator) and `tasks` (task policies)
//! - **Persistence Layer**: `storage` module - TOML task file
//!
//! # Example
//!
//! ```no_run
//! use task_scheduler::SchedulerHandler;
//! use task_scheduler::schedule::CalendarDate;
//! use task_scheduler::tasks::TaskDraft;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let handler = SchedulerHandler::new("scheduler.toml")?;
//!     let draft = TaskDraft::new("Water plants").with_repeat("d 3");
//!     println!("{}", handler.handle_add(draft, CalendarDate::today())?);
//!     Ok(())
//! }
//! ```

pub mod formatting;
pub mod handlers;
pub mod schedule;
pub mod storage;
pub mod tasks;
pub mod validation;

use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use schedule::{CalendarDate, RecurrenceError, RecurrenceRule, compute_next_date};
pub use storage::Storage;
pub use tasks::{Completion, Task, TaskDraft, TaskError, TaskList};

/// Scheduler handler
///
/// Owns the task list and its backing file. Every operation takes the lock
/// for its whole duration. Changes are made on a copy that replaces the held
/// list only after the file has been saved, so a failed write leaves both
/// unchanged. A handler can be shared across threads.
pub struct SchedulerHandler {
    pub(crate) data: Mutex<TaskList>,
    pub(crate) storage: Storage,
}

impl SchedulerHandler {
    /// Create a new scheduler handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the task file (TOML format); created on first save
    ///
    /// # Returns
    /// Result containing the handler or an error if the file exists but cannot be read
    pub fn new(storage_path: impl AsRef<Path>) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load()?);
        Ok(Self { data, storage })
    }

    /// Path of the backing task file
    pub fn file_path(&self) -> &Path {
        self.storage.file_path()
    }

    /// Number of tasks currently held
    pub fn task_count(&self) -> Result<usize> {
        Ok(self.lock_data()?.len())
    }

    /// Save a changed copy of the task list, then replace the held list with it
    ///
    /// The in-memory list only changes once the file write has succeeded.
    pub(crate) fn commit(&self, data: &mut TaskList, changed: TaskList) -> Result<()> {
        self.storage.save(&changed)?;
        *data = changed;
        Ok(())
    }

    pub(crate) fn lock_data(&self) -> Result<MutexGuard<'_, TaskList>> {
        self.data
            .lock()
            .map_err(|_| anyhow!("task list lock poisoned by a panicked operation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn today() -> CalendarDate {
        CalendarDate::from_ymd(2024, 1, 15).unwrap()
    }

    fn test_handler() -> (SchedulerHandler, TempDir) {
        let dir = TempDir::new().unwrap();
        let handler = SchedulerHandler::new(dir.path().join("scheduler.toml")).unwrap();
        (handler, dir)
    }

    #[test]
    fn test_new_handler_is_empty() {
        let (handler, _dir) = test_handler();
        assert_eq!(handler.task_count().unwrap(), 0);
        assert!(!handler.file_path().exists());
    }

    #[test]
    fn test_changes_are_persisted() {
        let (handler, _dir) = test_handler();
        handler
            .handle_add(TaskDraft::new("Water plants").with_repeat("d 3"), today())
            .unwrap();
        assert!(handler.file_path().exists());

        let reopened = SchedulerHandler::new(handler.file_path()).unwrap();
        assert_eq!(reopened.task_count().unwrap(), 1);
        let data = reopened.data.lock().unwrap();
        assert_eq!(data.get(1).unwrap().title, "Water plants");
    }

    #[test]
    fn test_failed_save_leaves_tasks_unchanged() {
        let dir = TempDir::new().unwrap();
        // parent directory does not exist, so every save fails
        let handler =
            SchedulerHandler::new(dir.path().join("missing").join("scheduler.toml")).unwrap();

        assert!(handler.handle_add(TaskDraft::new("Lost"), today()).is_err());
        assert_eq!(handler.task_count().unwrap(), 0);
        assert_eq!(handler.data.lock().unwrap().task_counter, 0);
    }

    #[test]
    fn test_failed_save_keeps_existing_task() {
        let (handler, dir) = test_handler();
        handler
            .handle_add(TaskDraft::new("Gym").with_repeat("d 3"), today())
            .unwrap();

        // writing to a directory path fails
        let blocked = dir.path().join("blocked");
        std::fs::create_dir(&blocked).unwrap();
        let moved = SchedulerHandler {
            data: Mutex::new(handler.data.lock().unwrap().clone()),
            storage: Storage::new(&blocked),
        };

        assert!(moved.handle_done(1, today()).is_err());
        assert!(moved.handle_update(1, TaskDraft::new("Renamed"), today()).is_err());
        assert!(moved.handle_delete(1).is_err());

        let data = moved.data.lock().unwrap();
        let task = data.get(1).unwrap();
        assert_eq!(task.title, "Gym");
        assert_eq!(task.date, today());
    }

    #[test]
    fn test_handler_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SchedulerHandler>();
    }
}
