//! Roster-backed schedule provider.
//!
//! This module implements [`ShiftScheduleProvider`] over a weekly roster:
//! a repeating Monday-to-Sunday pattern of work intervals, an optional
//! per-subject override pattern, and a set of holiday dates on which
//! nobody works.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};

use crate::error::EngineResult;
use crate::models::DaySchedule;
use crate::schedule::ShiftScheduleProvider;

/// A repeating Monday-to-Sunday pattern of day schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPattern {
    days: [DaySchedule; 7],
}

impl WeekPattern {
    /// Creates a pattern from seven schedules, Monday first.
    pub fn new(days: [DaySchedule; 7]) -> Self {
        Self { days }
    }

    /// Creates a pattern with the given schedule Monday through Friday
    /// and empty weekends.
    pub fn weekdays(schedule: DaySchedule) -> Self {
        Self {
            days: [
                schedule.clone(),
                schedule.clone(),
                schedule.clone(),
                schedule.clone(),
                schedule,
                DaySchedule::empty(),
                DaySchedule::empty(),
            ],
        }
    }

    /// Creates a pattern with no working days at all.
    pub fn non_working() -> Self {
        Self {
            days: std::array::from_fn(|_| DaySchedule::empty()),
        }
    }

    /// The schedule for the given date's weekday.
    pub fn for_date(&self, date: NaiveDate) -> &DaySchedule {
        &self.days[date.weekday().num_days_from_monday() as usize]
    }
}

/// A [`ShiftScheduleProvider`] backed by weekly rosters and holidays.
///
/// Subjects without an override follow the default pattern. Holidays
/// apply to every subject and turn any date into a non-working day.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{DaySchedule, WorkInterval};
/// use worktime_engine::schedule::{RosterCalendar, ShiftScheduleProvider, WeekPattern};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let day = DaySchedule::new(vec![WorkInterval::new(t(9, 0), t(17, 0)).unwrap()]).unwrap();
/// let calendar = RosterCalendar::new(WeekPattern::weekdays(day));
///
/// // 2026-01-17 is a Saturday.
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert!(!calendar.is_working_day("agent_001", saturday).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RosterCalendar {
    default_week: WeekPattern,
    overrides: HashMap<String, WeekPattern>,
    holidays: HashSet<NaiveDate>,
}

impl RosterCalendar {
    /// Creates a calendar where every subject follows `default_week`.
    pub fn new(default_week: WeekPattern) -> Self {
        Self {
            default_week,
            overrides: HashMap::new(),
            holidays: HashSet::new(),
        }
    }

    /// Replaces the weekly pattern for one subject.
    pub fn with_override(mut self, subject: impl Into<String>, pattern: WeekPattern) -> Self {
        self.overrides.insert(subject.into(), pattern);
        self
    }

    /// Adds holiday dates on which no subject works.
    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(holidays);
        self
    }

    fn pattern_for(&self, subject: &str) -> &WeekPattern {
        self.overrides.get(subject).unwrap_or(&self.default_week)
    }
}

impl ShiftScheduleProvider for RosterCalendar {
    fn day_schedule(&self, subject: &str, date: NaiveDate) -> EngineResult<DaySchedule> {
        if self.holidays.contains(&date) {
            return Ok(DaySchedule::empty());
        }
        Ok(self.pattern_for(subject).for_date(date).clone())
    }
}
