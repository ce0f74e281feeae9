//! Parsing boundary for dates and times of day.
//!
//! External representations are ISO `yyyy-MM-dd` dates and `HH:mm` or
//! `HH:mm:ss` times. The short time form is normalized here, in one place,
//! rather than at each call site; the config loader and the HTTP request
//! conversion both go through these functions.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{EngineError, EngineResult};

/// Parses an ISO `yyyy-MM-dd` date.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] for any other format.
///
/// # Example
///
/// ```
/// use worktime_engine::models::parse_date;
///
/// let date = parse_date("2026-01-15").unwrap();
/// assert_eq!(date.to_string(), "2026-01-15");
/// assert!(parse_date("15/01/2026").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses a time of day in `HH:mm` or `HH:mm:ss` form.
///
/// `HH:mm` is normalized by appending `:00` before parsing, so `"08:00"`
/// and `"08:00:00"` are the same instant.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] for any other format or an
/// out-of-range component.
///
/// # Example
///
/// ```
/// use worktime_engine::models::parse_time_of_day;
///
/// assert_eq!(
///     parse_time_of_day("08:00").unwrap(),
///     parse_time_of_day("08:00:00").unwrap(),
/// );
/// assert!(parse_time_of_day("25:00").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> EngineResult<NaiveTime> {
    let normalized = if value.len() == 5 {
        format!("{}:00", value)
    } else {
        value.to_string()
    };

    NaiveTime::parse_from_str(&normalized, "%H:%M:%S").map_err(|_| EngineError::InvalidTime {
        value: value.to_string(),
    })
}
