//! Timestamp parsing and formatting
//!
//! Free-form date/time text from the console is normalized into a
//! [`Timestamp`] at task construction time. Parsing either succeeds or
//! fails with a [`TimeParseError`]; a task never holds unparsed text.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Accepted date-time input formats, tried in order.
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%d/%m/%Y %H:%M"];

/// Accepted date-only input formats; the time defaults to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// A normalized point in time attached to a timed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(NaiveDateTime);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{text}' is not a recognized date/time")]
pub struct TimeParseError {
    pub text: String,
}

impl Timestamp {
    /// Parse free-form text into a timestamp.
    pub fn parse(text: &str) -> Result<Self, TimeParseError> {
        let trimmed = text.trim();
        for format in DATE_TIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(datetime));
            }
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(Self(date.and_time(NaiveTime::MIN)));
            }
        }
        Err(TimeParseError {
            text: trimmed.to_string(),
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%b %-d %Y, %H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_time_formats() {
        let a = Timestamp::parse("2024-06-01 18:30").unwrap();
        let b = Timestamp::parse("2024-06-01T18:30").unwrap();
        let c = Timestamp::parse("01/06/2024 18:30").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn date_only_defaults_to_midnight() {
        let a = Timestamp::parse("2024-06-01").unwrap();
        let b = Timestamp::parse("2024-06-01 00:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(Timestamp::parse("  2024-06-01  ").is_ok());
    }

    #[test]
    fn rejects_unrecognized_text() {
        for text in ["tomorrow", "2024-13-40", "", "soon after lunch"] {
            let err = Timestamp::parse(text).unwrap_err();
            assert_eq!(err.text, text.trim());
        }
    }

    #[test]
    fn renders_one_normalized_form() {
        let ts = Timestamp::parse("2024-06-01 18:30").unwrap();
        assert_eq!(ts.to_string(), "Jun 1 2024, 18:30");
    }
}
