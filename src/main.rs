//! Task Scheduler - Main Entry Point
//!
//! This is the command-line front end for the scheduler.
//! The actual implementation is in the `task_scheduler` library.

mod logging;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use task_scheduler::{CalendarDate, SchedulerHandler, TaskDraft, validation};

/// Task Scheduler - personal tasks with day-interval and yearly recurrence
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the task file
    #[arg(long, global = true, env = "TASK_SCHEDULER_FILE", default_value = "scheduler.toml")]
    file: PathBuf,

    /// Reference date used as "today" (YYYYMMDD, defaults to the current UTC date)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a task
    Add(TaskFields),
    /// Replace all fields of a task
    Update {
        id: u64,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Show one task
    Show { id: u64 },
    /// List tasks by due date
    List {
        /// Only tasks whose title or comment contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Mark a task done (recurring tasks move to their next date)
    Done { id: u64 },
    /// Delete a task
    Delete { id: u64 },
    /// Print the next due date for a date and repeat rule
    NextDate {
        /// Reference date (YYYYMMDD)
        #[arg(long)]
        now: String,
        /// Base date (YYYYMMDD)
        #[arg(long)]
        date: String,
        /// Repeat rule: "d <days>" or "y"
        #[arg(long)]
        repeat: String,
    },
}

#[derive(Args, Debug)]
struct TaskFields {
    /// Task title
    #[arg(long)]
    title: String,
    /// Due date (YYYYMMDD); past dates move forward
    #[arg(long)]
    date: Option<String>,
    /// Free-form comment
    #[arg(long, default_value = "")]
    comment: String,
    /// Repeat rule: "d <days>" or "y"
    #[arg(long)]
    repeat: Option<String>,
}

impl From<TaskFields> for TaskDraft {
    fn from(fields: TaskFields) -> Self {
        TaskDraft {
            date: fields.date,
            title: fields.title,
            comment: fields.comment,
            repeat: fields.repeat,
        }
    }
}

fn resolve_today(today: Option<&str>) -> Result<CalendarDate> {
    match today {
        Some(text) => validation::parse_reference_date(text).context("invalid --today"),
        None => Ok(CalendarDate::today()),
    }
}

fn run(cli: Cli) -> Result<String> {
    let open = || -> Result<(SchedulerHandler, CalendarDate)> {
        let today = resolve_today(cli.today.as_deref())?;
        tracing::debug!(file = %cli.file.display(), %today, "opening task file");
        Ok((SchedulerHandler::new(&cli.file)?, today))
    };

    match cli.command {
        Command::NextDate { now, date, repeat } => {
            SchedulerHandler::handle_next_date(&now, &date, &repeat)
        }
        Command::Add(fields) => {
            let (handler, today) = open()?;
            handler.handle_add(fields.into(), today)
        }
        Command::Update { id, fields } => {
            let (handler, today) = open()?;
            handler.handle_update(id, fields.into(), today)
        }
        Command::Show { id } => open()?.0.handle_show(id),
        Command::List { search } => open()?.0.handle_list(search.as_deref()),
        Command::Done { id } => {
            let (handler, today) = open()?;
            handler.handle_done(id, today)
        }
        Command::Delete { id } => open()?.0.handle_delete(id),
    }
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Cli::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = run(cli)?;
    println!("{}", output.trim_end());
    Ok(())
}
