//! Show handler for the scheduler

use crate::SchedulerHandler;
use crate::formatting;
use crate::tasks::TaskError;
use anyhow::Result;

impl SchedulerHandler {
    /// Display a single task.
    pub fn handle_show(&self, id: u64) -> Result<String> {
        let data = self.lock_data()?;
        let task = data.get(id).ok_or(TaskError::NotFound { id })?;
        Ok(formatting::format_task_details(task))
    }
}
