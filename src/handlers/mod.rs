//! Operation handlers for the scheduler
//!
//! This module contains the implementation of every scheduler operation.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod delete;
pub mod done;
pub mod list;
pub mod next_date;
pub mod show;
pub mod update;
