//! Done handler for the scheduler

use crate::SchedulerHandler;
use crate::formatting;
use crate::schedule::CalendarDate;
use crate::tasks::Completion;
use anyhow::Result;

impl SchedulerHandler {
    /// Mark a task done.
    ///
    /// One-shot tasks are deleted; recurring tasks move to their next due
    /// date strictly after `today`.
    pub fn handle_done(&self, id: u64, today: CalendarDate) -> Result<String> {
        let mut data = self.lock_data()?;
        let mut changed = data.clone();
        let completion = changed.complete(id, today)?;
        self.commit(&mut data, changed)?;
        drop(data);

        match completion {
            Completion::Removed => tracing::info!(id, "one-shot task completed and removed"),
            Completion::Rescheduled(next) => {
                tracing::info!(id, next = %next, "recurring task rescheduled")
            }
        }
        Ok(formatting::format_completion(id, completion))
    }
}
