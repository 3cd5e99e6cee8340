//! The flat task file.
//!
//! One record per line, written in the display rendering and read back
//! through [`decode`]. Loading never gives up on the whole file because of
//! one bad line: undecodable lines are collected with their line numbers so
//! the caller can warn about them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ParseError, TasklineError};
use crate::storage::decode;
use crate::task::Task;

/// Handle on the task file at a fixed path.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

/// What a load produced: the decoded tasks, plus the lines the codec
/// rejected (1-based line numbers).
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub tasks: Vec<Task>,
    pub skipped: Vec<(usize, ParseError)>,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole file. A missing file is an empty outcome;
    /// blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but cannot be read.
    pub fn load(&self) -> Result<LoadOutcome, TasklineError> {
        if !self.path.exists() {
            return Ok(LoadOutcome::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        let mut outcome = LoadOutcome::default();
        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode(line) {
                Ok(task) => outcome.tasks.push(task),
                Err(error) => outcome.skipped.push((number + 1, error)),
            }
        }
        Ok(outcome)
    }

    /// Write every task, one record per line, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories or the file cannot be written.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TasklineError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&task.to_string());
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        let due = NaiveDate::from_ymd_opt(2023, 12, 2)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let mut done = Task::todo("read book");
        done.set_done(true);
        vec![done, Task::deadline("submit", due)]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path().join("tasks.txt"));
        let outcome = file.load().unwrap();
        assert!(outcome.tasks.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path().join("tasks.txt"));
        let tasks = sample_tasks();

        file.save(&tasks).unwrap();
        let outcome = file.load().unwrap();

        assert_eq!(outcome.tasks, tasks);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path().join("nested").join("tasks.txt"));
        file.save(&sample_tasks()).unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn test_corrupt_line_is_skipped_and_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(
            &path,
            "[X][T]read book\nnot a record\n[ ][T]buy milk\n",
        )
        .unwrap();

        let outcome = TaskFile::new(&path).load().unwrap();
        assert_eq!(outcome.tasks.len(), 2);
        assert_eq!(outcome.skipped, vec![(2, ParseError::MalformedRecord)]);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "[X][T]read book\n\n   \n[ ][T]buy milk\n").unwrap();

        let outcome = TaskFile::new(&path).load().unwrap();
        assert_eq!(outcome.tasks.len(), 2);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_saved_file_is_line_oriented_display_text() {
        let dir = TempDir::new().unwrap();
        let file = TaskFile::new(dir.path().join("tasks.txt"));
        file.save(&sample_tasks()).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            contents,
            "[X][T]read book\n[ ][D]submit (by: 2 Dec 2023 06:00 PM)\n"
        );
    }
}
