//! Date display formatting.
//!
//! Renders API date and timestamp strings the way leave lists and request
//! details display them, e.g. `Jun 03, 2024` and `Jun 03, 2024 14:05`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};

const DATE_FORMAT: &str = "%b %d, %Y";
const DATE_TIME_FORMAT: &str = "%b %d, %Y %H:%M";

/// Naive datetime layouts accepted on input, with a `T` or a space separator.
const NAIVE_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 date, datetime, or RFC 3339 timestamp.
///
/// Timestamps carrying an offset keep their wall-clock time in that offset.
/// Plain dates resolve to midnight.
fn parse_iso(value: &str) -> EngineResult<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.naive_local());
    }
    if let Some(datetime) = NAIVE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Ok(datetime);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| EngineError::InvalidDate {
            value: value.to_string(),
        })
}

/// Formats an ISO date or timestamp as `MMM dd, yyyy`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::format_date;
///
/// assert_eq!(format_date("2024-06-03").unwrap(), "Jun 03, 2024");
/// assert_eq!(format_date("2024-06-03T14:05:00Z").unwrap(), "Jun 03, 2024");
/// assert!(format_date("03/06/2024").is_err());
/// ```
pub fn format_date(value: &str) -> EngineResult<String> {
    Ok(parse_iso(value)?.format(DATE_FORMAT).to_string())
}

/// Formats an ISO date or timestamp as `MMM dd, yyyy HH:mm`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::format_date_time;
///
/// assert_eq!(
///     format_date_time("2024-06-03T14:05:00Z").unwrap(),
///     "Jun 03, 2024 14:05"
/// );
/// ```
pub fn format_date_time(value: &str) -> EngineResult<String> {
    Ok(parse_iso(value)?.format(DATE_TIME_FORMAT).to_string())
}

/// Formats a leave range as `Jun 03, 2024 - Jun 07, 2024`.
pub fn format_date_range(start_date: NaiveDate, end_date: NaiveDate) -> String {
    format!(
        "{} - {}",
        start_date.format(DATE_FORMAT),
        end_date.format(DATE_FORMAT)
    )
}
