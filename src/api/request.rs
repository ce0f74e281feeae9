//! Request types for the elapsed work time API.
//!
//! This module defines the JSON request structure for the `/elapsed`
//! endpoint.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{parse_date, parse_time_of_day};

/// Request body for the `/elapsed` endpoint.
///
/// Dates and times arrive as strings so the engine's single parsing
/// boundary can accept both `HH:mm` and `HH:mm:ss` start times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElapsedRequest {
    /// The subject whose work calendar applies.
    pub subject: String,
    /// The nominal start date, ISO `yyyy-MM-dd`.
    pub start_date: String,
    /// The nominal start time of day, `HH:mm` or `HH:mm:ss`.
    pub start_time: String,
    /// The end instant; defaults to the current local time when omitted.
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
}

/// The parsed form of an [`ElapsedRequest`].
#[derive(Debug, Clone)]
pub struct ParsedElapsedRequest {
    /// The subject whose work calendar applies.
    pub subject: String,
    /// The nominal start date.
    pub start_date: NaiveDate,
    /// The nominal start time of day.
    pub start_time: NaiveTime,
    /// The end instant, if given.
    pub end: Option<NaiveDateTime>,
}

impl ElapsedRequest {
    /// Parses the string date/time fields into their chrono forms.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] or [`EngineError::InvalidTime`]
    /// when a field is malformed.
    ///
    /// [`EngineError::InvalidDate`]: crate::error::EngineError::InvalidDate
    /// [`EngineError::InvalidTime`]: crate::error::EngineError::InvalidTime
    pub fn parsed(&self) -> EngineResult<ParsedElapsedRequest> {
        Ok(ParsedElapsedRequest {
            subject: self.subject.clone(),
            start_date: parse_date(&self.start_date)?,
            start_time: parse_time_of_day(&self.start_time)?,
            end: self.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "subject": "agent_001",
            "start_date": "2026-01-15",
            "start_time": "08:00",
            "end": "2026-01-15T10:00:00"
        }"#;

        let request: ElapsedRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.subject, "agent_001");
        assert!(request.end.is_some());
    }

    #[test]
    fn test_deserialize_without_end_defaults_to_none() {
        let json = r#"{
            "subject": "agent_001",
            "start_date": "2026-01-15",
            "start_time": "08:00:30"
        }"#;

        let request: ElapsedRequest = serde_json::from_str(json).unwrap();
        assert!(request.end.is_none());
    }

    #[test]
    fn test_parsed_normalizes_short_time() {
        let request = ElapsedRequest {
            subject: "agent_001".to_string(),
            start_date: "2026-01-15".to_string(),
            start_time: "08:00".to_string(),
            end: None,
        };

        let parsed = request.parsed().unwrap();
        assert_eq!(parsed.start_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(parsed.start_date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    }

    #[test]
    fn test_parsed_rejects_bad_date() {
        let request = ElapsedRequest {
            subject: "agent_001".to_string(),
            start_date: "15/01/2026".to_string(),
            start_time: "08:00".to_string(),
            end: None,
        };
        assert!(request.parsed().is_err());
    }

    #[test]
    fn test_parsed_rejects_bad_time() {
        let request = ElapsedRequest {
            subject: "agent_001".to_string(),
            start_date: "2026-01-15".to_string(),
            start_time: "8am".to_string(),
            end: None,
        };
        assert!(request.parsed().is_err());
    }
}
