//! Response types for the elapsed work time API.
//!
//! This module defines the success body for `/elapsed`, the error
//! response structures, and the mapping from engine errors to HTTP
//! statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ElapsedWorkTime;
use crate::error::EngineError;

/// Success body for the `/elapsed` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElapsedResponse {
    /// The subject the calculation ran for.
    pub subject: String,
    /// The resolved instant at which accrual began.
    pub effective_start: NaiveDateTime,
    /// The end instant used for the calculation.
    pub end: NaiveDateTime,
    /// Elapsed working seconds.
    pub elapsed_seconds: i64,
    /// Elapsed working hours, for human-facing SLA reports.
    #[serde(with = "rust_decimal::serde::str")]
    pub elapsed_hours: Decimal,
}

impl ElapsedResponse {
    /// Builds a response from a calculation outcome.
    pub fn new(subject: impl Into<String>, elapsed: ElapsedWorkTime) -> Self {
        let elapsed_hours =
            (Decimal::new(elapsed.seconds, 0) / Decimal::new(3600, 0)).normalize();
        Self {
            subject: subject.into(),
            effective_start: elapsed.effective_start,
            end: elapsed.end,
            elapsed_seconds: elapsed.seconds,
            elapsed_hours,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidDate { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", value),
                    "Dates must use the ISO yyyy-MM-dd format",
                ),
            },
            EngineError::InvalidTime { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    format!("Invalid time of day '{}'", value),
                    "Times must use the HH:mm or HH:mm:ss format",
                ),
            },
            EngineError::InvalidInterval { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_INTERVAL", message),
            },
            EngineError::NoWorkingDay {
                subject,
                from,
                horizon_days,
            } => ApiErrorResponse {
                // Distinguishable from a legitimate zero result: the
                // calendar itself is broken for this subject.
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "CALENDAR_NOT_CONFIGURED",
                    format!("Work calendar not configured for subject '{}'", subject),
                    format!("No working day within {} days from {}", horizon_days, from),
                ),
            },
            EngineError::SpanTooLarge { days, max_days } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SPAN_TOO_LARGE",
                    format!("Requested span of {} days is not supported", days),
                    format!("The maximum supported span is {} days", max_days),
                ),
            },
            EngineError::ScheduleLookup { subject, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SCHEDULE_LOOKUP_FAILED",
                    format!("Schedule lookup failed for subject '{}'", subject),
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_no_working_day_maps_to_unprocessable_entity() {
        let engine_error = EngineError::NoWorkingDay {
            subject: "agent_099".to_string(),
            from: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
            horizon_days: 30,
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "CALENDAR_NOT_CONFIGURED");
        assert!(api_error.error.message.contains("agent_099"));
    }

    #[test]
    fn test_invalid_time_maps_to_bad_request() {
        let engine_error = EngineError::InvalidTime {
            value: "25:00".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_TIME");
    }

    #[test]
    fn test_elapsed_response_hours_from_seconds() {
        let elapsed = ElapsedWorkTime {
            effective_start: NaiveDate::from_ymd_opt(2026, 1, 15)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 15)
                .unwrap()
                .and_hms_opt(16, 0, 0)
                .unwrap(),
            seconds: 27000,
        };

        let response = ElapsedResponse::new("agent_001", elapsed);
        assert_eq!(response.elapsed_seconds, 27000);
        assert_eq!(response.elapsed_hours, Decimal::from_str("7.5").unwrap());
    }

    #[test]
    fn test_elapsed_response_hours_serialized_as_string() {
        let elapsed = ElapsedWorkTime {
            effective_start: NaiveDate::from_ymd_opt(2026, 1, 15)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            seconds: 3600,
        };

        let response = ElapsedResponse::new("agent_001", elapsed);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"elapsed_hours\":\"1\""));
    }
}
