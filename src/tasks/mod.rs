//! Task domain model and scheduling policies
//!
//! - `task`: the stored `Task` record and the `TaskDraft` client input
//! - `task_list`: the in-memory collection with add/update/complete operations
//! - `error`: task-level failures

mod error;
mod task;
mod task_list;

pub use error::TaskError;
pub use task::{Task, TaskDraft};
pub use task_list::{Completion, TaskList};
