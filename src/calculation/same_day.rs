//! Same-day accumulation.
//!
//! When the effective start and the end instant fall on the same calendar
//! day, the elapsed work time is the overlap between the `[start, end]`
//! window and that day's intervals.

use chrono::NaiveTime;

use crate::models::DaySchedule;

/// Returns the working seconds inside `[start_time, end_time]` for one day.
///
/// Expects `start_time <= end_time`; the facade guarantees this by
/// checking the effective start against the end instant first. A window
/// of zero width, or one disjoint from every interval, yields 0.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::accumulate_same_day;
/// use worktime_engine::models::{DaySchedule, WorkInterval};
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let schedule = DaySchedule::new(vec![
///     WorkInterval::new(t(8, 0), t(12, 0)).unwrap(),
///     WorkInterval::new(t(13, 30), t(17, 30)).unwrap(),
/// ]).unwrap();
///
/// // Spanning the lunch gap: 30 minutes each side.
/// assert_eq!(accumulate_same_day(&schedule, t(11, 30), t(14, 0)), 3600);
/// ```
pub fn accumulate_same_day(
    schedule: &DaySchedule,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> i64 {
    debug_assert!(start_time <= end_time);
    schedule.seconds_within(start_time, end_time)
}
