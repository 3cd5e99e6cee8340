use colored::Colorize;

use crate::task::Task;

/// Format a numbered task listing as a pretty table
pub fn format_task_list_pretty(entries: &[(usize, &Task)], title: &str) -> String {
    if entries.is_empty() {
        return format!("{title} (0 items)\n  No tasks");
    }

    let mut output = format!("{title} ({} items)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (number, task) in entries {
        let rendered = task.to_string();
        let line = if task.is_done() {
            rendered.green().to_string()
        } else {
            rendered
        };
        output.push_str(&format!("{number}. {line}\n"));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing() {
        let output = format_task_list_pretty(&[], "Tasks");
        assert!(output.contains("Tasks (0 items)"));
        assert!(output.contains("No tasks"));
    }

    #[test]
    fn test_listing_numbers_every_task() {
        let first = Task::todo("read book");
        let second = Task::todo("buy milk");
        let entries = vec![(1, &first), (2, &second)];

        let output = format_task_list_pretty(&entries, "Tasks");
        assert!(output.contains("Tasks (2 items)"));
        assert!(output.contains("read book"));
        assert!(output.contains("2. "));
    }

    #[test]
    fn test_listing_keeps_original_positions() {
        let task = Task::todo("buy milk");
        let entries = vec![(7, &task)];
        assert!(format_task_list_pretty(&entries, "Matches").contains("7. "));
    }
}
