//! Delete handler for the scheduler

use crate::SchedulerHandler;
use anyhow::Result;

impl SchedulerHandler {
    /// Permanently delete a task without completing it.
    pub fn handle_delete(&self, id: u64) -> Result<String> {
        let mut data = self.lock_data()?;
        let mut changed = data.clone();
        let task = changed.remove(id)?;
        self.commit(&mut data, changed)?;
        drop(data);

        tracing::info!(id, title = %task.title, "task deleted");
        Ok(format!("Task {} deleted", id))
    }
}
