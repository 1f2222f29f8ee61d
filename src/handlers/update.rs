//! Update handler for the scheduler

use crate::SchedulerHandler;
use crate::schedule::CalendarDate;
use crate::tasks::TaskDraft;
use anyhow::Result;

impl SchedulerHandler {
    /// Replace a task's fields.
    ///
    /// The draft goes through the same validation and date adjustment as
    /// [`SchedulerHandler::handle_add`]. The ID cannot be changed.
    pub fn handle_update(&self, id: u64, draft: TaskDraft, today: CalendarDate) -> Result<String> {
        let mut data = self.lock_data()?;
        let mut changed = data.clone();
        let date = changed.update(id, draft, today)?.date;
        self.commit(&mut data, changed)?;
        drop(data);

        tracing::info!(id, %date, "task updated");
        Ok(format!("Task {} updated (due: {})", id, date))
    }
}
