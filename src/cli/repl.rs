//! The interactive session loop.
//!
//! Owns the task list and the task file: reads one line at a time, hands it
//! to the command parser, executes the instruction, and prints either the
//! result or the failure message verbatim. The list persists after every
//! mutating instruction, so a killed session loses nothing.

use std::io::{BufRead, Write};

use crate::cli::args::OutputFormat;
use crate::command::{self, Instruction};
use crate::error::TasklineError;
use crate::output;
use crate::storage::TaskFile;
use crate::task::TaskList;

/// One interactive run over a task list and its backing file.
pub struct Session {
    list: TaskList,
    file: TaskFile,
    format: OutputFormat,
}

impl Session {
    #[must_use]
    pub const fn new(list: TaskList, file: TaskFile, format: OutputFormat) -> Self {
        Self { list, file, format }
    }

    #[must_use]
    pub const fn list(&self) -> &TaskList {
        &self.list
    }

    /// Run the loop until `bye` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure (console or task file). Parse
    /// failures and out-of-range task numbers are reported to the user and
    /// the loop continues.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), TasklineError> {
        writeln!(
            output,
            "taskline ready ({} tasks on file). Type a command, or `bye` to leave.",
            self.list.len()
        )?;

        for line in input.lines() {
            let line = line?;
            match command::parse(&line) {
                Ok(Instruction::Exit) => break,
                Ok(instruction) => match self.execute(instruction) {
                    Ok(text) => writeln!(output, "{text}")?,
                    Err(error @ TasklineError::TaskOutOfRange(_)) => {
                        writeln!(output, "{error}")?;
                    }
                    Err(error) => return Err(error),
                },
                Err(error) => writeln!(output, "{error}")?,
            }
        }

        self.file.save(self.list.tasks())?;
        writeln!(output, "Bye. Your tasks are saved.")?;
        Ok(())
    }

    fn execute(&mut self, instruction: Instruction) -> Result<String, TasklineError> {
        match instruction {
            // Exit never reaches here; the loop handles it.
            Instruction::Exit => Ok(String::new()),
            Instruction::List => {
                output::format_task_list(&self.list.numbered(), "Tasks", self.format)
            }
            Instruction::Find(keyword) => {
                let matches = self.list.find(&keyword);
                let title = format!("Tasks matching \"{keyword}\"");
                output::format_task_list(&matches, &title, self.format)
            }
            Instruction::Mark(index) => {
                let text = format!("Marked as done:\n  {}", self.list.set_done(index, true)?);
                self.persist()?;
                Ok(text)
            }
            Instruction::Unmark(index) => {
                let text = format!(
                    "Marked as not done:\n  {}",
                    self.list.set_done(index, false)?
                );
                self.persist()?;
                Ok(text)
            }
            Instruction::Delete(index) => {
                let removed = self.list.delete(index)?;
                self.persist()?;
                Ok(format!(
                    "Removed:\n  {removed}\nNow tracking {} tasks.",
                    self.list.len()
                ))
            }
            Instruction::Add(task) => {
                let text = format!("Added:\n  {task}");
                self.list.add(task);
                self.persist()?;
                Ok(format!("{text}\nNow tracking {} tasks.", self.list.len()))
            }
        }
    }

    fn persist(&self) -> Result<(), TasklineError> {
        self.file.save(self.list.tasks())
    }
}
