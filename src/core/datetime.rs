//! The two fixed date-time formats.
//!
//! Commands are typed with a compact pattern (`02-12-2023 1800`); display
//! and the persisted file use a readable one (`2 Dec 2023 06:00 PM`). The
//! record codec therefore inverts the display format, not the input format.
//! The asymmetry is intentional and must be preserved for previously
//! persisted data to keep loading.

use chrono::NaiveDateTime;

use crate::error::ParseError;

/// Pattern accepted in typed commands: `DD-MM-YYYY HHmm`, 24-hour.
pub const INPUT_FORMAT: &str = "%d-%m-%Y %H%M";

/// Pattern used for display and persisted records: `D MMM YYYY hh:mm AM/PM`.
pub const DISPLAY_FORMAT: &str = "%-d %b %Y %I:%M %p";

/// Parse a date-time segment of a typed command.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDateFormat`] carrying the offending text.
pub fn parse_input_datetime(text: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(text, INPUT_FORMAT)
        .map_err(|_| ParseError::InvalidDateFormat(text.to_string()))
}

/// Parse a date-time embedded in a persisted record.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDateFormat`] carrying the offending text.
pub fn parse_display_datetime(text: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(text, DISPLAY_FORMAT)
        .map_err(|_| ParseError::InvalidDateFormat(text.to_string()))
}

/// Render a date-time in the display/persisted pattern.
#[must_use]
pub fn format_display_datetime(value: NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_input_datetime() {
        assert_eq!(
            parse_input_datetime("02-12-2023 1800").unwrap(),
            at(2023, 12, 2, 18, 0)
        );
        assert_eq!(
            parse_input_datetime("01-12-2023 0900").unwrap(),
            at(2023, 12, 1, 9, 0)
        );
    }

    #[test]
    fn test_parse_input_datetime_rejects_other_patterns() {
        assert!(parse_input_datetime("2023-12-02 1800").is_err());
        assert!(parse_input_datetime("02-12-2023 18:00").is_err());
        assert!(parse_input_datetime("2 Dec 2023 06:00 PM").is_err());
        assert!(parse_input_datetime("tomorrow").is_err());
    }

    #[test]
    fn test_parse_input_datetime_reports_offender() {
        assert_eq!(
            parse_input_datetime("soon"),
            Err(ParseError::InvalidDateFormat("soon".to_string()))
        );
    }

    #[test]
    fn test_format_display_datetime() {
        assert_eq!(
            format_display_datetime(at(2023, 12, 2, 18, 0)),
            "2 Dec 2023 06:00 PM"
        );
        assert_eq!(
            format_display_datetime(at(2023, 12, 1, 9, 0)),
            "1 Dec 2023 09:00 AM"
        );
        // Midnight and noon land on the 12-hour boundaries.
        assert_eq!(
            format_display_datetime(at(2024, 1, 15, 0, 5)),
            "15 Jan 2024 12:05 AM"
        );
        assert_eq!(
            format_display_datetime(at(2024, 1, 15, 12, 0)),
            "15 Jan 2024 12:00 PM"
        );
    }

    #[test]
    fn test_parse_display_datetime() {
        assert_eq!(
            parse_display_datetime("2 Dec 2023 06:00 PM").unwrap(),
            at(2023, 12, 2, 18, 0)
        );
        assert_eq!(
            parse_display_datetime("15 Jan 2024 12:05 AM").unwrap(),
            at(2024, 1, 15, 0, 5)
        );
    }

    #[test]
    fn test_parse_display_datetime_rejects_input_pattern() {
        assert!(parse_display_datetime("02-12-2023 1800").is_err());
    }

    #[test]
    fn test_display_format_round_trips() {
        let value = at(2025, 6, 7, 17, 30);
        assert_eq!(
            parse_display_datetime(&format_display_datetime(value)).unwrap(),
            value
        );
    }
}
