use crate::components::planner::TimeSlot;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plan study time around fixed commitments
#[derive(Parser, Debug)]
#[command(name = "study-planner", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fixed commitments the schedule has to work around
    #[command(subcommand)]
    Commitment(CommitmentCommand),

    /// Tasks to be scheduled
    #[command(subcommand)]
    Task(TaskCommand),

    /// Save study preferences, then generate and show the schedule
    Preferences {
        /// Preferred time of day; repeat for several
        #[arg(long = "time", value_enum)]
        times: Vec<TimeSlot>,
        /// Take breaks between study blocks
        #[arg(long)]
        breaks: bool,
        /// Minutes of work before a break (default 60)
        #[arg(long)]
        work_duration: Option<String>,
        /// Also write the calendar as an HTML page
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Generate and show the schedule from what is stored
    Schedule {
        /// Also write the calendar as an HTML page
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Write the last generated schedule as CSV
    Export {
        /// Destination file (defaults to the configured export path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forget all stored commitments, tasks, preferences and schedule
    Reset,

    /// Walk through every page interactively
    Wizard {
        /// Page to start on, e.g. task_details or preferences.html
        #[arg(long)]
        page: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CommitmentCommand {
    /// Add a fixed commitment
    Add {
        #[arg(long)]
        subject: Option<String>,
        /// Start, e.g. 2026-10-20T09:00
        #[arg(long)]
        start: Option<String>,
        /// End, e.g. 2026-10-20T10:30
        #[arg(long)]
        end: Option<String>,
    },
    /// Show stored commitments
    List,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TaskCommand {
    /// Add a task
    Add {
        #[arg(long)]
        subject: Option<String>,
        /// Estimated effort in minutes
        #[arg(long)]
        estimated: Option<String>,
        /// Due date, e.g. 2026-11-01
        #[arg(long)]
        due: Option<String>,
        /// Priority, 1 is most important
        #[arg(long)]
        priority: Option<String>,
    },
    /// Show stored tasks
    List,
}
