//! Common test utilities for integration tests

#![allow(dead_code)]

use task_scheduler::{CalendarDate, SchedulerHandler};
use tempfile::TempDir;

/// Parse a YYYYMMDD literal
pub fn date(text: &str) -> CalendarDate {
    CalendarDate::parse(text).unwrap()
}

/// Create a test handler backed by a file in a fresh temporary directory
pub fn get_test_handler() -> (SchedulerHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let handler = SchedulerHandler::new(dir.path().join("scheduler.toml")).unwrap();
    (handler, dir)
}

/// Extract task ID from handle_add() response message
/// Response format: "Task created with ID: <id>"
pub fn extract_id_from_response(response: &str) -> u64 {
    response
        .rsplit("ID: ")
        .next()
        .and_then(|id| id.trim().parse().ok())
        .unwrap()
}
