//! Output formatting for task listings.
//!
//! Listings render either as colored console text or as JSON for scripting;
//! the format is chosen once per session from the CLI or config.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TasklineError;
use crate::task::Task;

pub use json::format_task_list_json;
pub use pretty::format_task_list_pretty;

/// Format a numbered task listing in the requested format.
///
/// # Errors
///
/// Returns `TasklineError::Render` if JSON serialization fails.
pub fn format_task_list(
    entries: &[(usize, &Task)],
    title: &str,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_list_pretty(entries, title)),
        OutputFormat::Json => format_task_list_json(entries, title),
    }
}
