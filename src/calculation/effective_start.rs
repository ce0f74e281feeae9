//! Effective start resolution.
//!
//! Work received off-hours should not start costing time until work
//! resumes; work received mid-shift starts accruing immediately. This
//! module snaps a raw (date, time) to the instant at which accrual begins.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{EngineError, EngineResult};
use crate::models::DaySchedule;
use crate::schedule::ShiftScheduleProvider;

/// How many days the engine searches forward for a working day when a
/// start falls on a non-working day or after the last shift of its day.
pub const DEFAULT_SEARCH_HORIZON_DAYS: u32 = 30;

/// The resolved instant at which work-time accrual begins.
///
/// Carries the effective date's schedule so the caller does not repeat
/// the provider lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveStart {
    /// The date accrual begins on.
    pub date: NaiveDate,
    /// The time of day accrual begins at.
    pub time: NaiveTime,
    /// The schedule of the effective date.
    pub schedule: DaySchedule,
}

/// Resolves the effective start for a subject.
///
/// - On a non-working start date, the effective start is the first
///   interval of the next working day.
/// - Before the first shift of a working day, the start clamps forward to
///   that shift's begin.
/// - After the last shift of a working day, the effective start moves to
///   the next working day's first interval.
/// - Mid-shift (or in a gap between shifts), the start is unchanged.
///
/// # Errors
///
/// Returns [`EngineError::NoWorkingDay`] when no working day exists
/// within [`DEFAULT_SEARCH_HORIZON_DAYS`] of the forward search. This is
/// a fatal calendar misconfiguration and must not be treated as zero
/// elapsed time.
pub fn resolve_effective_start(
    provider: &dyn ShiftScheduleProvider,
    subject: &str,
    start_date: NaiveDate,
    start_time: NaiveTime,
) -> EngineResult<EffectiveStart> {
    let schedule = provider.day_schedule(subject, start_date)?;

    let (first, last) = match (schedule.first_interval(), schedule.last_interval()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return next_working_start(provider, subject, start_date + Duration::days(1)),
    };

    if start_time < first.begin() {
        Ok(EffectiveStart {
            date: start_date,
            time: first.begin(),
            schedule,
        })
    } else if start_time > last.end() {
        next_working_start(provider, subject, start_date + Duration::days(1))
    } else {
        Ok(EffectiveStart {
            date: start_date,
            time: start_time,
            schedule,
        })
    }
}

/// Finds the first working day at or after `from` and returns its first
/// interval's begin as the effective start.
fn next_working_start(
    provider: &dyn ShiftScheduleProvider,
    subject: &str,
    from: NaiveDate,
) -> EngineResult<EffectiveStart> {
    let date = provider
        .find_next_working_day(subject, from, DEFAULT_SEARCH_HORIZON_DAYS)?
        .ok_or_else(|| EngineError::NoWorkingDay {
            subject: subject.to_string(),
            from,
            horizon_days: DEFAULT_SEARCH_HORIZON_DAYS,
        })?;

    let schedule = provider.day_schedule(subject, date)?;
    let first = schedule
        .first_interval()
        .copied()
        .ok_or_else(|| EngineError::ScheduleLookup {
            subject: subject.to_string(),
            message: format!("provider reported {} as working but returned no intervals", date),
        })?;

    Ok(EffectiveStart {
        date,
        time: first.begin(),
        schedule,
    })
}
