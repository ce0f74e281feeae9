//! Day schedule model.
//!
//! This module defines [`DaySchedule`], the ordered set of work intervals a
//! subject has on one calendar day, together with the clamped accumulation
//! helpers used by the calculation layer.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkInterval;

/// The work intervals for one (subject, date) pair.
///
/// Intervals are non-overlapping and strictly ascending by begin time;
/// both invariants are enforced by [`DaySchedule::new`]. An empty schedule
/// means the day is non-working.
///
/// All elapsed-time accumulation is expressed through the three window
/// methods below ([`seconds_within`], [`seconds_from`], [`seconds_until`])
/// plus [`total_seconds`], which all delegate to the single interval clamp
/// in [`WorkInterval::overlap_seconds`]. Keeping one clamp avoids the
/// subtle boundary drift that creeps in when the start-day, interior-day,
/// and end-day sums are written as separate loops.
///
/// [`seconds_within`]: DaySchedule::seconds_within
/// [`seconds_from`]: DaySchedule::seconds_from
/// [`seconds_until`]: DaySchedule::seconds_until
/// [`total_seconds`]: DaySchedule::total_seconds
///
/// # Example
///
/// ```
/// use worktime_engine::models::{DaySchedule, WorkInterval};
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let schedule = DaySchedule::new(vec![
///     WorkInterval::new(t(8, 0), t(12, 0)).unwrap(),
///     WorkInterval::new(t(13, 30), t(17, 30)).unwrap(),
/// ]).unwrap();
///
/// assert_eq!(schedule.total_seconds(), 8 * 3600);
/// // A window spanning the lunch gap counts only the in-interval portions.
/// assert_eq!(schedule.seconds_within(t(11, 30), t(14, 0)), 3600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    intervals: Vec<WorkInterval>,
}

impl DaySchedule {
    /// Creates a schedule from ordered intervals.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] if the intervals are not
    /// strictly ascending by begin time or if any two overlap.
    pub fn new(intervals: Vec<WorkInterval>) -> EngineResult<Self> {
        for pair in intervals.windows(2) {
            if pair[1].begin() < pair[0].end() {
                return Err(EngineError::InvalidInterval {
                    message: format!(
                        "interval starting {} overlaps or precedes interval ending {}",
                        pair[1].begin(),
                        pair[0].end()
                    ),
                });
            }
        }
        Ok(Self { intervals })
    }

    /// Creates an empty schedule, i.e. a non-working day.
    pub fn empty() -> Self {
        Self { intervals: Vec::new() }
    }

    /// Returns true when the day has no work intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The ordered work intervals of this day.
    pub fn intervals(&self) -> &[WorkInterval] {
        &self.intervals
    }

    /// The first interval of the day, if the day is working.
    pub fn first_interval(&self) -> Option<&WorkInterval> {
        self.intervals.first()
    }

    /// The last interval of the day, if the day is working.
    pub fn last_interval(&self) -> Option<&WorkInterval> {
        self.intervals.last()
    }

    /// Returns the full working seconds of the day.
    pub fn total_seconds(&self) -> i64 {
        self.window_seconds(None, None)
    }

    /// Returns the working seconds inside the window `[from, until]`.
    ///
    /// Returns 0 when `from == until` or when the window is disjoint from
    /// every interval.
    pub fn seconds_within(&self, from: NaiveTime, until: NaiveTime) -> i64 {
        self.window_seconds(Some(from), Some(until))
    }

    /// Returns the working seconds from `from` to the end of the day.
    ///
    /// Used for the start-day remainder of a multi-day calculation.
    pub fn seconds_from(&self, from: NaiveTime) -> i64 {
        self.window_seconds(Some(from), None)
    }

    /// Returns the working seconds from the start of the day until `until`.
    ///
    /// Used for the end-day partial sum of a multi-day calculation.
    pub fn seconds_until(&self, until: NaiveTime) -> i64 {
        self.window_seconds(None, Some(until))
    }

    fn window_seconds(&self, from: Option<NaiveTime>, until: Option<NaiveTime>) -> i64 {
        self.intervals
            .iter()
            .map(|interval| interval.overlap_seconds(from, until))
            .sum()
    }
}
