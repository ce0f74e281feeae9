//! The elapsed work time facade.
//!
//! This module exposes the engine's single public operation: given a
//! subject, a nominal start, and an end instant, compute how many seconds
//! of that subject's configured work time elapsed between them.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::calculation::{accumulate_multi_day, accumulate_same_day, resolve_effective_start};
use crate::error::{EngineError, EngineResult};
use crate::schedule::ShiftScheduleProvider;

/// The largest supported span, in days, between the effective start and
/// the end instant. Longer spans are rejected rather than walked day by
/// day.
pub const MAX_SPAN_DAYS: i64 = 732;

/// The outcome of an elapsed work time calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedWorkTime {
    /// The resolved instant at which accrual began.
    pub effective_start: NaiveDateTime,
    /// The end instant of the calculation.
    pub end: NaiveDateTime,
    /// Elapsed working seconds, always non-negative.
    pub seconds: i64,
}

/// Computes the elapsed work time between a nominal start and an end.
///
/// `end` defaults to the current local time when `None`. A start that is
/// chronologically after the end is not an error and yields 0 seconds;
/// a missing work calendar is an error and never yields 0.
///
/// # Errors
///
/// - [`EngineError::NoWorkingDay`] when the subject has no working day
///   within the forward search horizon (broken calendar, fatal).
/// - [`EngineError::SpanTooLarge`] when the effective-start-to-end span
///   exceeds [`MAX_SPAN_DAYS`].
/// - Any provider lookup failure, propagated unmodified.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::compute_elapsed;
/// use worktime_engine::models::{DaySchedule, WorkInterval};
/// use worktime_engine::schedule::{RosterCalendar, WeekPattern};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let day = DaySchedule::new(vec![WorkInterval::new(t(9, 0), t(17, 0)).unwrap()]).unwrap();
/// let calendar = RosterCalendar::new(WeekPattern::weekdays(day));
///
/// // 2026-01-15 is a Thursday.
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let result = compute_elapsed(
///     &calendar,
///     "agent_001",
///     date,
///     t(7, 0),
///     Some(date.and_time(t(10, 0))),
/// ).unwrap();
/// // Clamped to 09:00, one hour accrued by 10:00.
/// assert_eq!(result.seconds, 3600);
/// ```
pub fn compute_elapsed(
    provider: &dyn ShiftScheduleProvider,
    subject: &str,
    start_date: NaiveDate,
    start_time: NaiveTime,
    end: Option<NaiveDateTime>,
) -> EngineResult<ElapsedWorkTime> {
    let end = end.unwrap_or_else(|| Local::now().naive_local());

    let effective = resolve_effective_start(provider, subject, start_date, start_time)?;
    let effective_start = effective.date.and_time(effective.time);

    if effective_start > end {
        return Ok(ElapsedWorkTime {
            effective_start,
            end,
            seconds: 0,
        });
    }

    let seconds = if effective.date == end.date() {
        accumulate_same_day(&effective.schedule, effective.time, end.time())
    } else {
        let days = (end.date() - effective.date).num_days();
        if days > MAX_SPAN_DAYS {
            return Err(EngineError::SpanTooLarge {
                days,
                max_days: MAX_SPAN_DAYS,
            });
        }
        accumulate_multi_day(provider, subject, &effective, end.date(), end.time())?
    };

    Ok(ElapsedWorkTime {
        effective_start,
        end,
        seconds,
    })
}

/// Computes elapsed working seconds between a nominal start and an end.
///
/// Convenience wrapper around [`compute_elapsed`] for callers that only
/// need the number.
pub fn compute_elapsed_work_seconds(
    provider: &dyn ShiftScheduleProvider,
    subject: &str,
    start_date: NaiveDate,
    start_time: NaiveTime,
    end: Option<NaiveDateTime>,
) -> EngineResult<i64> {
    compute_elapsed(provider, subject, start_date, start_time, end).map(|result| result.seconds)
}
