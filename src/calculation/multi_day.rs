//! Multi-day accumulation.
//!
//! When the effective start and the end instant fall on different days,
//! the elapsed work time is the sum of three parts: the remainder of the
//! start day, every full interior working day, and the partial end day.
//! All three parts go through the same clamped overlap on
//! [`DaySchedule`]; there is deliberately no second boundary comparison.
//!
//! [`DaySchedule`]: crate::models::DaySchedule

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::calculation::EffectiveStart;
use crate::error::EngineResult;
use crate::schedule::ShiftScheduleProvider;

/// Sums working seconds from an effective start to an end on a later day.
///
/// Expects `start.date < end_date`; the facade routes same-day windows to
/// [`accumulate_same_day`] instead. The provider is queried once per day
/// from the day after the start through the end day; non-working days
/// contribute 0.
///
/// [`accumulate_same_day`]: crate::calculation::accumulate_same_day
pub fn accumulate_multi_day(
    provider: &dyn ShiftScheduleProvider,
    subject: &str,
    start: &EffectiveStart,
    end_date: NaiveDate,
    end_time: NaiveTime,
) -> EngineResult<i64> {
    debug_assert!(start.date < end_date);

    let mut total = start.schedule.seconds_from(start.time);

    let mut date = start.date + Duration::days(1);
    while date <= end_date {
        let schedule = provider.day_schedule(subject, date)?;
        total += if date < end_date {
            schedule.total_seconds()
        } else {
            schedule.seconds_until(end_time)
        };
        date += Duration::days(1);
    }

    Ok(total)
}
