//! List handler for the scheduler

use crate::SchedulerHandler;
use crate::formatting;
use anyhow::Result;

impl SchedulerHandler {
    /// List tasks by due date, optionally filtered by a keyword in the title or comment.
    pub fn handle_list(&self, keyword: Option<&str>) -> Result<String> {
        let data = self.lock_data()?;
        let tasks = data.list(keyword);
        Ok(formatting::format_tasks(&tasks))
    }
}
