//! Add handler for the scheduler

use crate::SchedulerHandler;
use crate::schedule::CalendarDate;
use crate::tasks::TaskDraft;
use anyhow::Result;

impl SchedulerHandler {
    /// Create a task from a draft.
    ///
    /// A past date is moved to the next occurrence after `today` (recurring)
    /// or to `today` (one-shot). Returns a message carrying the new ID.
    pub fn handle_add(&self, draft: TaskDraft, today: CalendarDate) -> Result<String> {
        let mut data = self.lock_data()?;
        let mut changed = data.clone();
        let id = changed.add(draft, today)?;
        self.commit(&mut data, changed)?;
        drop(data);

        tracing::info!(id, "task created");
        Ok(format!("Task created with ID: {}", id))
    }
}
