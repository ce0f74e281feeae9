//! Work interval model.
//!
//! This module defines the [`WorkInterval`] struct, the basic unit of a
//! subject's day schedule: a contiguous same-day period of work.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A contiguous period of work within a single calendar day.
///
/// Intervals never cross midnight; overnight shifts are out of scope for
/// this engine. The constructor enforces `begin < end`, so a constructed
/// interval always has a positive duration.
///
/// # Example
///
/// ```
/// use worktime_engine::models::WorkInterval;
/// use chrono::NaiveTime;
///
/// let interval = WorkInterval::new(
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
/// ).unwrap();
/// assert_eq!(interval.duration_seconds(), 4 * 3600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    begin: NaiveTime,
    end: NaiveTime,
}

impl WorkInterval {
    /// Creates a new work interval.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] if `begin >= end`.
    pub fn new(begin: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        if begin >= end {
            return Err(EngineError::InvalidInterval {
                message: format!("begin {} is not before end {}", begin, end),
            });
        }
        Ok(Self { begin, end })
    }

    /// The start of the interval (inclusive).
    pub fn begin(&self) -> NaiveTime {
        self.begin
    }

    /// The end of the interval (exclusive).
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns the full duration of the interval in seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.begin).num_seconds()
    }

    /// Returns the seconds of overlap between this interval and a
    /// time-of-day window.
    ///
    /// Both bounds of the window are optional: `None` for `from` means the
    /// window opens at the start of the day, `None` for `until` means it
    /// runs to the end of the day. This single clamp is the only boundary
    /// comparison in the engine; every accumulator goes through it.
    pub fn overlap_seconds(&self, from: Option<NaiveTime>, until: Option<NaiveTime>) -> i64 {
        let lo = match from {
            Some(t) => t.max(self.begin),
            None => self.begin,
        };
        let hi = match until {
            Some(t) => t.min(self.end),
            None => self.end,
        };
        (hi - lo).num_seconds().max(0)
    }
}
