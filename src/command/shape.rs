//! Ordered shape matchers for the text after the command word.
//!
//! A remainder takes exactly one of three shapes: event (`/from … /to …`),
//! deadline (`/by …`), or bare text. Classification tries them in that
//! order; event outranks deadline so a range description containing `/by`
//! stays inside the event's description. The matchers are greedy, so the
//! last occurrence of each marker wins.

use once_cell::sync::Lazy;
use regex::Regex;

static EVENT_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ (.*) /from (.*) /to (.*)$")
        .unwrap_or_else(|e| panic!("Invalid event shape regex: {e}"))
});

static DEADLINE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ (.*) /by (.*)$").unwrap_or_else(|e| panic!("Invalid deadline shape regex: {e}"))
});

/// Tagged result of classifying a command's argument remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `<desc> /from <start> /to <end>`
    Event {
        description: &'a str,
        start: &'a str,
        end: &'a str,
    },
    /// `<desc> /by <when>`
    Deadline { description: &'a str, when: &'a str },
    /// Unstructured remainder, possibly empty.
    Bare(&'a str),
}

impl<'a> Shape<'a> {
    /// Classify the remainder, trying event, then deadline, then bare.
    #[must_use]
    pub fn classify(remainder: &'a str) -> Self {
        if let Some(caps) = EVENT_SHAPE.captures(remainder) {
            return Self::Event {
                description: group(&caps, 1),
                start: group(&caps, 2),
                end: group(&caps, 3),
            };
        }
        if let Some(caps) = DEADLINE_SHAPE.captures(remainder) {
            return Self::Deadline {
                description: group(&caps, 1),
                when: group(&caps, 2),
            };
        }
        Self::Bare(remainder)
    }

    /// The bare remainder, trimmed; `None` when the remainder took a
    /// structured shape.
    #[must_use]
    pub fn bare(&self) -> Option<&'a str> {
        match self {
            Self::Bare(text) => Some(text.trim()),
            Self::Event { .. } | Self::Deadline { .. } => None,
        }
    }
}

fn group<'t>(caps: &regex::Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}
