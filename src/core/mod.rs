//! Core vocabularies shared by the command parser and the record codec.
//!
//! This module holds the fixed keyword set, the task-kind letter codes, and
//! the two fixed date-time formats.

mod datetime;
mod keyword;

pub use datetime::{
    format_display_datetime, parse_display_datetime, parse_input_datetime, DISPLAY_FORMAT,
    INPUT_FORMAT,
};
pub use keyword::{CommandWord, TaskKind};
