//! The command-language parser: one raw input line to a typed instruction.
//!
//! A line is a command word (the leading run of word characters) followed by
//! a remainder that takes one of three shapes (see [`Shape`]). The parser is
//! a pure function of its input: no I/O, no hidden state, same instruction
//! for the same line every time.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::command::shape::Shape;
use crate::command::Instruction;
use crate::core::{parse_input_datetime, CommandWord};
use crate::error::ParseError;
use crate::task::Task;

static LINE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w*)(.*)$").unwrap_or_else(|e| panic!("Invalid line regex: {e}")));

/// Parse one line of user input into an [`Instruction`].
///
/// Checks run in a fixed order: overall line shape, then keyword lookup,
/// then per-command field validation - so an unknown command word always
/// fails before any of its arguments are inspected.
///
/// # Examples
///
/// ```
/// use taskline::command::{parse, Instruction};
///
/// assert_eq!(parse("list").unwrap(), Instruction::List);
/// assert_eq!(parse("mark 2").unwrap(), Instruction::Mark(2));
///
/// let added = parse("todo read book").unwrap();
/// assert!(matches!(added, Instruction::Add(_)));
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first violated rule; the message
/// is meant to be shown to the user verbatim.
pub fn parse(line: &str) -> Result<Instruction, ParseError> {
    let caps = LINE_SHAPE
        .captures(line)
        .ok_or(ParseError::UnrecognizedFormat)?;
    let word = caps.get(1).map_or("", |m| m.as_str());
    let remainder = caps.get(2).map_or("", |m| m.as_str());

    let command = CommandWord::lookup(word).ok_or(ParseError::UnrecognizedInstruction)?;
    let shape = Shape::classify(remainder);

    match command {
        CommandWord::Bye => Ok(Instruction::Exit),
        CommandWord::List => match shape.bare() {
            Some("") => Ok(Instruction::List),
            _ => Err(ParseError::NonEmptyListArgument),
        },
        CommandWord::Mark => Ok(Instruction::Mark(parse_index(command, &shape)?)),
        CommandWord::Unmark => Ok(Instruction::Unmark(parse_index(command, &shape)?)),
        CommandWord::Delete => Ok(Instruction::Delete(parse_index(command, &shape)?)),
        CommandWord::Find => match shape.bare() {
            Some(keyword) if !keyword.is_empty() => Ok(Instruction::Find(keyword.to_string())),
            _ => Err(ParseError::MissingKeyword),
        },
        CommandWord::Todo => match shape.bare() {
            Some(description) if !description.is_empty() => {
                Ok(Instruction::Add(Task::todo(description)))
            }
            _ => Err(ParseError::EmptyDescription),
        },
        CommandWord::Deadline => parse_deadline(&shape),
        CommandWord::Event => parse_event(&shape),
    }
}

fn parse_index(command: CommandWord, shape: &Shape<'_>) -> Result<i64, ParseError> {
    let text = shape
        .bare()
        .filter(|text| !text.is_empty())
        .ok_or(ParseError::MissingIndex(command))?;
    text.parse()
        .map_err(|_| ParseError::InvalidIndex(text.to_string()))
}

fn parse_deadline(shape: &Shape<'_>) -> Result<Instruction, ParseError> {
    let Shape::Deadline { description, when } = shape else {
        return Err(ParseError::MissingDeadlineArgs);
    };
    let description = description.trim();
    let when = when.trim();
    if description.is_empty() || when.is_empty() {
        return Err(ParseError::MissingDeadlineArgs);
    }
    let due = parse_input_datetime(when)?;
    Ok(Instruction::Add(Task::deadline(description, due)))
}

fn parse_event(shape: &Shape<'_>) -> Result<Instruction, ParseError> {
    let Shape::Event {
        description,
        start,
        end,
    } = shape
    else {
        return Err(ParseError::MissingEventArgs);
    };
    let description = description.trim();
    let start = start.trim();
    let end = end.trim();
    if description.is_empty() || start.is_empty() || end.is_empty() {
        return Err(ParseError::MissingEventArgs);
    }
    let start = parse_input_datetime(start)?;
    let end = parse_input_datetime(end)?;
    Ok(Instruction::Add(Task::event(description, start, end)))
}
