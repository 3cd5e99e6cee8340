//! Decoding of persisted task records.
//!
//! A record is a task's display rendering: `[<status>][<kind>]<description>`
//! with a ` (by: …)` or ` (from: … to: …)` suffix for deadlines and events.
//! Dates inside records use the display pattern, not the compact input
//! pattern - the codec inverts what the user *sees*, which is also what the
//! file stores. Decoding fails hard on anything it cannot account for;
//! whether a bad line is skipped or aborts the load is the caller's call.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::core::{parse_display_datetime, TaskKind};
use crate::error::ParseError;
use crate::task::Task;

static RECORD_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(.)\]\[(.)\](.*)$").unwrap_or_else(|e| panic!("Invalid record regex: {e}"))
});

static EVENT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*)\(from: (.*) to: (.*)\)$")
        .unwrap_or_else(|e| panic!("Invalid event suffix regex: {e}"))
});

static DEADLINE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*)\(by: (.*)\)$")
        .unwrap_or_else(|e| panic!("Invalid deadline suffix regex: {e}"))
});

/// The date-suffix shape a record's body takes, tried event-first like the
/// command grammar's argument shapes.
enum RecordShape<'a> {
    Event {
        description: &'a str,
        start: &'a str,
        end: &'a str,
    },
    Deadline {
        description: &'a str,
        by: &'a str,
    },
    Bare(&'a str),
}

impl<'a> RecordShape<'a> {
    fn classify(body: &'a str) -> Self {
        if let Some(caps) = EVENT_SUFFIX.captures(body) {
            return Self::Event {
                description: group(&caps, 1),
                start: group(&caps, 2),
                end: group(&caps, 3),
            };
        }
        if let Some(caps) = DEADLINE_SUFFIX.captures(body) {
            return Self::Deadline {
                description: group(&caps, 1),
                by: group(&caps, 2),
            };
        }
        Self::Bare(body)
    }
}

/// Decode one persisted line into a [`Task`].
///
/// # Examples
///
/// ```
/// use taskline::storage::decode;
///
/// let task = decode("[X][T]read book").unwrap();
/// assert_eq!(task.description(), "read book");
/// assert!(task.is_done());
/// ```
///
/// # Errors
///
/// Fails at the first rule the line violates: structural mismatch, unknown
/// kind letter, fields that do not match the kind, a date outside the
/// display pattern, or an unknown status character.
pub fn decode(line: &str) -> Result<Task, ParseError> {
    let caps = RECORD_SHAPE
        .captures(line)
        .ok_or(ParseError::MalformedRecord)?;
    let status = single_char(&caps, 1)?;
    let kind_code = single_char(&caps, 2)?;
    let body = group(&caps, 3);

    let kind = TaskKind::from_code(kind_code).ok_or(ParseError::UnknownTaskKind(kind_code))?;

    let mut task = match (kind, RecordShape::classify(body)) {
        (TaskKind::Todo, RecordShape::Bare(text)) => {
            let description = text.trim();
            if description.is_empty() {
                return Err(ParseError::IncompleteRecord);
            }
            Task::todo(description)
        }
        (TaskKind::Deadline, RecordShape::Deadline { description, by }) => {
            let description = description.trim();
            if description.is_empty() || by.trim().is_empty() {
                return Err(ParseError::IncompleteRecord);
            }
            Task::deadline(description, parse_display_datetime(by)?)
        }
        (TaskKind::Event, RecordShape::Event { description, start, end }) => {
            let description = description.trim();
            if description.is_empty() || start.trim().is_empty() || end.trim().is_empty() {
                return Err(ParseError::IncompleteRecord);
            }
            Task::event(
                description,
                parse_display_datetime(start)?,
                parse_display_datetime(end)?,
            )
        }
        // Kind letter and date suffix disagree.
        _ => return Err(ParseError::IncompleteRecord),
    };

    match status {
        'X' => task.set_done(true),
        ' ' => {}
        other => return Err(ParseError::InvalidStatusMarker(other)),
    }
    Ok(task)
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn single_char(caps: &Captures<'_>, index: usize) -> Result<char, ParseError> {
    caps.get(index)
        .and_then(|m| m.as_str().chars().next())
        .ok_or(ParseError::MalformedRecord)
}
