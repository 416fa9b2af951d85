//! Command-line surface for daylist.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Per-day task list with automatic priority sorting.
#[derive(Parser, Debug)]
#[command(name = "daylist", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite data file (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Directory for rolling log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Key the task collection is stored under
    #[arg(long, global = true)]
    pub storage_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a task; its priority is derived from the text
    Add {
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Day key (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show one day's tasks in priority order
    List {
        #[arg(long)]
        date: Option<String>,
    },
    /// Change a task's name and/or description
    Edit {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Toggle a task between pending and done
    Done { id: String },
    /// Remove a task
    Delete { id: String },
    /// List every day that has tasks, newest first
    Dates,
    /// Explain the priority a text would get, without storing anything
    Score {
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
}
