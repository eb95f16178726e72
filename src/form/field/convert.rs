use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::options::ValidatorOptions;

static FLOAT_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").ok()
});

/// Reads the longest numeric prefix after leading whitespace, so `"12abc"`
/// yields 12 and `"abc"` yields `None`.
pub(super) fn parse_float_prefix(input: &str) -> Result<Option<f64>, String> {
    let pattern = FLOAT_PREFIX
        .as_ref()
        .ok_or_else(|| "numeric prefix pattern is unavailable".to_string())?;
    let trimmed = input.trim_start();
    let Some(found) = pattern.find(trimmed) else {
        return Ok(None);
    };
    let literal = found.as_str();
    if literal.trim_start_matches(['+', '-']) == "Infinity" {
        return Ok(Some(if literal.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }));
    }
    literal
        .parse::<f64>()
        .map(Some)
        .map_err(|err| format!("'{literal}' is not a valid number: {err}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DigitCounts {
    pub integer: usize,
    pub fraction: usize,
}

/// Digit counts of the shortest decimal rendering of `number`, sign excluded.
/// Infinities render as `Infinity`, so every character counts as an integer digit.
pub(super) fn digit_counts(number: f64) -> DigitCounts {
    if number.is_infinite() {
        return DigitCounts {
            integer: "Infinity".len(),
            fraction: 0,
        };
    }
    let text = number.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    DigitCounts {
        integer: integer.trim_start_matches('-').len(),
        fraction: fraction.len(),
    }
}

/// Accepts RFC 3339 timestamps plus every configured date-time and date format.
pub(super) fn parses_as_calendar_value(input: &str, options: &ValidatorOptions) -> bool {
    let input = input.trim();
    DateTime::parse_from_rfc3339(input).is_ok()
        || options
            .date_time_formats
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(input, format).is_ok())
        || options
            .date_formats
            .iter()
            .any(|format| NaiveDate::parse_from_str(input, format).is_ok())
}
