//! Parsing of command-line and stdin values.

use crate::config::ValueKind;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("empty value")]
    Empty,
    #[error("invalid byte count `{input}`: {source}")]
    InvalidInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid duration `{input}`: {source}")]
    InvalidDuration {
        input: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("`{0}` does not fit in signed 64-bit nanoseconds")]
    OutOfRange(String),
}

/// Parses one value according to `kind`.
pub fn parse_value(kind: ValueKind, text: &str) -> Result<i64, InputError> {
    match kind {
        ValueKind::Duration => parse_duration_ns(text),
        ValueKind::Size => parse_size(text),
    }
}

/// Parses plain integer nanoseconds, or humantime text such as `1h 2m` or `-250ms`.
pub fn parse_duration_ns(text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if let Ok(ns) = text.parse::<i64>() {
        return Ok(ns);
    }

    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text),
    };
    if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
        // All digits but `parse::<i64>` failed: too many of them.
        return Err(InputError::OutOfRange(text.to_string()));
    }

    let duration = humantime::parse_duration(magnitude).map_err(|source| InputError::InvalidDuration {
        input: text.to_string(),
        source,
    })?;
    // Sign first: `-9223372036854775808ns` is `i64::MIN`, one past the positive range.
    let out_of_range = || InputError::OutOfRange(text.to_string());
    let ns = i128::try_from(duration.as_nanos()).map_err(|_| out_of_range())?;
    i64::try_from(if negative { -ns } else { ns }).map_err(|_| out_of_range())
}

/// Parses a signed integer byte count.
pub fn parse_size(text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    text.parse::<i64>().map_err(|source| InputError::InvalidInteger {
        input: text.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_nanoseconds() {
        assert_eq!(parse_duration_ns("1500").unwrap(), 1500);
        assert_eq!(parse_duration_ns(" -1500 ").unwrap(), -1500);
        assert_eq!(parse_duration_ns("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn humantime_text() {
        assert_eq!(parse_duration_ns("250ms").unwrap(), 250_000_000);
        assert_eq!(parse_duration_ns("1h 2m").unwrap(), 3_720_000_000_000);
        assert_eq!(parse_duration_ns("-1us").unwrap(), -1_000);
        assert_eq!(parse_duration_ns("- 3s").unwrap(), -3_000_000_000);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_duration_ns(""), Err(InputError::Empty)));
        assert!(matches!(parse_duration_ns("   "), Err(InputError::Empty)));
        assert!(matches!(
            parse_duration_ns("soon"),
            Err(InputError::InvalidDuration { .. })
        ));
        assert!(matches!(
            parse_duration_ns("99999999999999999999"),
            Err(InputError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_duration_ns("300years"),
            Err(InputError::OutOfRange(_))
        ));
    }

    #[test]
    fn signed_range_edges() {
        assert_eq!(parse_duration_ns("-9223372036854775808ns").unwrap(), i64::MIN);
        assert_eq!(parse_duration_ns("9223372036854775807ns").unwrap(), i64::MAX);
        assert!(matches!(
            parse_duration_ns("9223372036854775808ns"),
            Err(InputError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_duration_ns("-9223372036854775809ns"),
            Err(InputError::OutOfRange(_))
        ));
    }

    #[test]
    fn sizes_are_plain_integers() {
        assert_eq!(parse_size("10240").unwrap(), 10_240);
        assert_eq!(parse_size("-5242880").unwrap(), -5_242_880);
        assert!(matches!(parse_size("10 KB"), Err(InputError::InvalidInteger { .. })));
        assert!(matches!(parse_size(""), Err(InputError::Empty)));
    }

    #[test]
    fn dispatches_on_kind() {
        assert_eq!(parse_value(ValueKind::Duration, "2s").unwrap(), 2_000_000_000);
        assert!(parse_value(ValueKind::Size, "2s").is_err());
    }

    #[test]
    fn error_messages_name_the_input() {
        let err = parse_size("ten").unwrap_err();
        assert!(err.to_string().contains("`ten`"));
    }
}
