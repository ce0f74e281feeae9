//! Error types for the elapsed work time engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the elapsed work time engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worktime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date string could not be parsed as an ISO `yyyy-MM-dd` date.
    #[error("Invalid date '{value}': expected yyyy-MM-dd")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
    },

    /// A time-of-day string could not be parsed as `HH:mm` or `HH:mm:ss`.
    #[error("Invalid time of day '{value}': expected HH:mm or HH:mm:ss")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A work interval or day schedule violated its ordering invariants.
    #[error("Invalid work interval: {message}")]
    InvalidInterval {
        /// A description of the violated invariant.
        message: String,
    },

    /// No working day exists within the forward search horizon.
    ///
    /// This signals a missing or broken work calendar for the subject and
    /// must never be treated as zero elapsed seconds.
    #[error("No working day found for subject '{subject}' within {horizon_days} days from {from}")]
    NoWorkingDay {
        /// The subject whose calendar was searched.
        subject: String,
        /// The first date of the search (inclusive).
        from: NaiveDate,
        /// The number of days searched.
        horizon_days: u32,
    },

    /// The requested calculation span exceeds the supported maximum.
    #[error("Requested span of {days} days exceeds the maximum of {max_days} days")]
    SpanTooLarge {
        /// The number of days between effective start and end.
        days: i64,
        /// The largest supported span in days.
        max_days: i64,
    },

    /// A schedule lookup failed inside the provider.
    #[error("Schedule lookup failed for subject '{subject}': {message}")]
    ScheduleLookup {
        /// The subject whose schedule was requested.
        subject: String,
        /// A description of the lookup failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
