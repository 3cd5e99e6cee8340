//! In-memory task container.
//!
//! Indices are the raw 1-based integers the user typed; range validation
//! happens here, not in the command parser.

use crate::error::TasklineError;
use crate::task::Task;

/// The ordered list of tracked tasks.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All tasks paired with their 1-based positions, for display.
    #[must_use]
    pub fn numbered(&self) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(position, task)| (position + 1, task))
            .collect()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Flip the completion flag of the task at a 1-based index.
    ///
    /// # Errors
    ///
    /// Returns [`TasklineError::TaskOutOfRange`] if the index is not in
    /// `1..=len`.
    pub fn set_done(&mut self, index: i64, done: bool) -> Result<&Task, TasklineError> {
        let position = self.resolve(index)?;
        match self.tasks.get_mut(position) {
            Some(task) => {
                task.set_done(done);
                Ok(task)
            }
            None => Err(TasklineError::TaskOutOfRange(index)),
        }
    }

    /// Remove and return the task at a 1-based index.
    ///
    /// # Errors
    ///
    /// Returns [`TasklineError::TaskOutOfRange`] if the index is not in
    /// `1..=len`.
    pub fn delete(&mut self, index: i64) -> Result<Task, TasklineError> {
        let position = self.resolve(index)?;
        Ok(self.tasks.remove(position))
    }

    /// Tasks whose description contains the keyword, case-insensitively,
    /// keeping their original 1-based positions so `mark`/`delete` work off
    /// the listing.
    #[must_use]
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().to_lowercase().contains(&needle))
            .map(|(position, task)| (position + 1, task))
            .collect()
    }

    fn resolve(&self, index: i64) -> Result<usize, TasklineError> {
        usize::try_from(index)
            .ok()
            .and_then(|value| value.checked_sub(1))
            .filter(|position| *position < self.tasks.len())
            .ok_or(TasklineError::TaskOutOfRange(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from_tasks(vec![
            Task::todo("read book"),
            Task::todo("Return Book"),
            Task::todo("buy milk"),
        ])
    }

    #[test]
    fn test_add_and_len() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        list.add(Task::todo("read book"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_done_uses_one_based_indices() {
        let mut list = sample();
        let task = list.set_done(1, true).unwrap();
        assert!(task.is_done());
        assert!(list.tasks()[0].is_done());
        assert!(!list.tasks()[1].is_done());
    }

    #[test]
    fn test_unmark_resets_flag() {
        let mut list = sample();
        list.set_done(2, true).unwrap();
        list.set_done(2, false).unwrap();
        assert!(!list.tasks()[1].is_done());
    }

    #[test]
    fn test_out_of_range_indices_are_rejected() {
        let mut list = sample();
        for index in [0, -1, 4, i64::MAX] {
            assert!(matches!(
                list.set_done(index, true),
                Err(TasklineError::TaskOutOfRange(i)) if i == index
            ));
        }
    }

    #[test]
    fn test_delete_removes_and_shifts() {
        let mut list = sample();
        let removed = list.delete(2).unwrap();
        assert_eq!(removed.description(), "Return Book");
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[1].description(), "buy milk");
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut list = sample();
        assert!(list.delete(0).is_err());
        assert!(list.delete(4).is_err());
    }

    #[test]
    fn test_find_is_case_insensitive_and_keeps_positions() {
        let list = sample();
        let matches = list.find("book");
        let positions: Vec<usize> = matches.iter().map(|(position, _)| *position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_find_no_matches() {
        let list = sample();
        assert!(list.find("laundry").is_empty());
    }

    #[test]
    fn test_numbered_listing() {
        let list = sample();
        let numbered = list.numbered();
        assert_eq!(numbered.len(), 3);
        assert_eq!(numbered[0].0, 1);
        assert_eq!(numbered[2].1.description(), "buy milk");
    }
}
