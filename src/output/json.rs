use serde::Serialize;

use crate::error::TasklineError;
use crate::task::Task;

#[derive(Serialize)]
struct TaskRow<'a> {
    index: usize,
    #[serde(flatten)]
    task: &'a Task,
}

#[derive(Serialize)]
struct TaskListPayload<'a> {
    title: &'a str,
    count: usize,
    tasks: Vec<TaskRow<'a>>,
}

/// Format a numbered task listing as JSON
///
/// # Errors
///
/// Returns `TasklineError::Render` if serialization fails.
pub fn format_task_list_json(
    entries: &[(usize, &Task)],
    title: &str,
) -> Result<String, TasklineError> {
    let payload = TaskListPayload {
        title,
        count: entries.len(),
        tasks: entries
            .iter()
            .map(|&(index, task)| TaskRow { index, task })
            .collect(),
    };
    serde_json::to_string_pretty(&payload)
        .map_err(|e| TasklineError::Render(format!("Failed to serialize tasks: {e}")))
}
