//! Error types for taskline.
//!
//! [`ParseError`] covers every way the command grammar or the record codec
//! can reject a line; both fail fast at the first violated rule and the
//! message is meant to be shown to the user verbatim. [`TasklineError`] is
//! the top-level error the binary reports.

use thiserror::Error;

use crate::core::CommandWord;

/// A rejected input line, from either the command parser or the record codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line does not match the overall command-line shape.
    #[error("Unrecognized format. Try again.")]
    UnrecognizedFormat,

    /// The leading word is not a known command.
    #[error("Unrecognized instruction. Try again.")]
    UnrecognizedInstruction,

    /// `list` was given a non-blank argument.
    #[error("The list command takes no argument. Try again.")]
    NonEmptyListArgument,

    /// `mark`/`unmark`/`delete` without a task number.
    #[error("The {0} command needs a task number. Try again.")]
    MissingIndex(CommandWord),

    /// The task number did not parse as an integer.
    #[error("`{0}` is not a valid task number. Try again.")]
    InvalidIndex(String),

    /// `find` without a keyword.
    #[error("The find command needs a keyword. Try again.")]
    MissingKeyword,

    /// `todo` without a description.
    #[error("The description of a todo cannot be empty. Try again.")]
    EmptyDescription,

    /// `deadline` without a description or a `/by` date.
    #[error("A deadline needs a description and a /by date. Try again.")]
    MissingDeadlineArgs,

    /// `event` without a description, a `/from` date or a `/to` date.
    #[error("An event needs a description, a /from date and a /to date. Try again.")]
    MissingEventArgs,

    /// A date segment did not match the expected pattern.
    #[error("`{0}` does not match the expected date format. Try again.")]
    InvalidDateFormat(String),

    /// A persisted line does not match the record shape.
    #[error("malformed task record")]
    MalformedRecord,

    /// The record's kind letter is not `T`, `D` or `E`.
    #[error("unknown task kind marker `{0}`")]
    UnknownTaskKind(char),

    /// The record's status character is neither `X` nor a space.
    #[error("unknown status marker `{0}`")]
    InvalidStatusMarker(char),

    /// The record is missing fields its kind requires.
    #[error("task record is missing required fields")]
    IncompleteRecord,
}

/// Top-level error for the taskline binary.
#[derive(Debug, Error)]
pub enum TasklineError {
    /// A line was rejected by one of the two grammars.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A task number outside the current list.
    #[error("Task {0} does not exist. Try again.")]
    TaskOutOfRange(i64),

    /// Underlying I/O failure (task file, console).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or written.
    #[error("Config error: {0}")]
    Config(String),

    /// Output could not be rendered.
    #[error("Render error: {0}")]
    Render(String),
}
