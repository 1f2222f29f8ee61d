use crate::schedule::CalendarDate;
use serde::{Deserialize, Serialize};

use super::error::TaskError;
use super::task::{Task, TaskDraft};

/// Outcome of marking a task done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// One-shot task, deleted from the list
    Removed,
    /// Recurring task, moved to its next due date
    Rescheduled(CalendarDate),
}

/// All tasks, in insertion order
///
/// Ids come from a counter that only grows, so an id is never reused even
/// after its task is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// Counter for generating unique task IDs
    #[serde(default)]
    pub task_counter: u64,

    #[serde(default, rename = "task")]
    pub(crate) tasks: Vec<Task>,
}

impl TaskList {
    /// Create a new empty TaskList instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by its ID
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: u64) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound { id })
    }

    /// Validate a draft and append it as a new task
    ///
    /// # Returns
    /// The ID assigned to the new task. The counter only advances when the
    /// draft is valid.
    pub fn add(&mut self, draft: TaskDraft, today: CalendarDate) -> Result<u64, TaskError> {
        let id = self.task_counter + 1;
        let task = draft.resolve(id, today)?;
        self.task_counter = id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Replace every field of an existing task with a validated draft
    pub fn update(
        &mut self,
        id: u64,
        draft: TaskDraft,
        today: CalendarDate,
    ) -> Result<&Task, TaskError> {
        let pos = self.position(id)?;
        self.tasks[pos] = draft.resolve(id, today)?;
        Ok(&self.tasks[pos])
    }

    /// Remove a task and return it
    pub fn remove(&mut self, id: u64) -> Result<Task, TaskError> {
        let pos = self.position(id)?;
        Ok(self.tasks.remove(pos))
    }

    /// Mark a task done
    ///
    /// One-shot tasks are removed. Recurring tasks move to the first
    /// occurrence strictly after `today`, counted from their current date.
    pub fn complete(&mut self, id: u64, today: CalendarDate) -> Result<Completion, TaskError> {
        let pos = self.position(id)?;
        match self.tasks[pos].repeat {
            None => {
                self.tasks.remove(pos);
                Ok(Completion::Removed)
            }
            Some(rule) => {
                let task = &mut self.tasks[pos];
                let next = rule.next_after(task.date, today)?;
                task.date = next;
                Ok(Completion::Rescheduled(next))
            }
        }
    }

    /// Tasks ordered by due date, then ID
    ///
    /// # Arguments
    /// * `keyword` - Optional case-insensitive filter on title and comment
    pub fn list(&self, keyword: Option<&str>) -> Vec<&Task> {
        let keyword_lower = keyword
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase);

        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| match &keyword_lower {
                Some(k) => {
                    task.title.to_lowercase().contains(k) || task.comment.to_lowercase().contains(k)
                }
                None => true,
            })
            .collect();
        tasks.sort_by_key(|t| (t.date, t.id));
        tasks
    }
}
