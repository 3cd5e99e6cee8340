use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "A text-based task tracker driven by single-line commands")]
#[command(long_about = "taskline - a text-based task tracker

Runs an interactive session on stdin/stdout. Tasks persist to a flat text
file between runs.

COMMANDS (typed at the prompt):
  list                                          Show all tasks
  todo <description>                            Add a plain todo
  deadline <description> /by <date>             Add a task due at an instant
  event <description> /from <date> /to <date>   Add a time-ranged task
  mark <n> / unmark <n>                         Flip a task's completion flag
  delete <n>                                    Remove a task
  find <keyword>                                Search descriptions
  bye                                           Save and leave

Dates are typed as DD-MM-YYYY HHmm (24-hour), e.g. 02-12-2023 1800.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Path of the task file (overrides the configured location)
    #[arg(short, long, env = "TASKLINE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Output format for task listings
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Output format for task listings.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
