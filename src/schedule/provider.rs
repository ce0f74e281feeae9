//! The shift schedule provider contract.
//!
//! The calculator never reaches into a concrete calendar store; it only
//! sees this trait, injected by the caller. Tests substitute an in-memory
//! fixture, production code typically uses [`RosterCalendar`] loaded from
//! YAML configuration.
//!
//! [`RosterCalendar`]: crate::schedule::RosterCalendar

use chrono::{Duration, NaiveDate};

use crate::error::EngineResult;
use crate::models::DaySchedule;

/// Supplies per-day, per-subject work schedules.
///
/// Implementations must be safe under concurrent reads; the calculator
/// itself holds no state between calls.
pub trait ShiftScheduleProvider: Send + Sync {
    /// Returns the work intervals for `subject` on `date`.
    ///
    /// An empty schedule means a non-working day. Lookup failures inside
    /// the backing store propagate unmodified; the calculator performs no
    /// retries.
    fn day_schedule(&self, subject: &str, date: NaiveDate) -> EngineResult<DaySchedule>;

    /// Searches forward for the first working day.
    ///
    /// Scans `horizon_days` dates starting at `from` (inclusive) and
    /// returns the first date with a non-empty schedule, or `None` when
    /// the whole horizon is non-working. Callers must handle the `None`
    /// case explicitly; an exhausted horizon signals a broken calendar.
    fn find_next_working_day(
        &self,
        subject: &str,
        from: NaiveDate,
        horizon_days: u32,
    ) -> EngineResult<Option<NaiveDate>> {
        for offset in 0..i64::from(horizon_days) {
            let date = from + Duration::days(offset);
            if !self.day_schedule(subject, date)?.is_empty() {
                return Ok(Some(date));
            }
        }
        Ok(None)
    }

    /// Returns true when `subject` has at least one work interval on `date`.
    fn is_working_day(&self, subject: &str, date: NaiveDate) -> EngineResult<bool> {
        Ok(!self.day_schedule(subject, date)?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkInterval;
    use chrono::NaiveTime;

    /// A provider that works only on one fixed date.
    struct SingleDayProvider {
        working: NaiveDate,
    }

    impl ShiftScheduleProvider for SingleDayProvider {
        fn day_schedule(&self, _subject: &str, date: NaiveDate) -> EngineResult<DaySchedule> {
            if date == self.working {
                DaySchedule::new(vec![WorkInterval::new(
                    NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                )?])
            } else {
                Ok(DaySchedule::empty())
            }
        }
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_search_finds_working_day_within_horizon() {
        let provider = SingleDayProvider {
            working: make_date("2026-01-20"),
        };
        let found = provider
            .find_next_working_day("agent_001", make_date("2026-01-15"), 30)
            .unwrap();
        assert_eq!(found, Some(make_date("2026-01-20")));
    }

    #[test]
    fn test_default_search_is_from_inclusive() {
        let provider = SingleDayProvider {
            working: make_date("2026-01-15"),
        };
        let found = provider
            .find_next_working_day("agent_001", make_date("2026-01-15"), 30)
            .unwrap();
        assert_eq!(found, Some(make_date("2026-01-15")));
    }

    #[test]
    fn test_default_search_returns_none_past_horizon() {
        let provider = SingleDayProvider {
            working: make_date("2026-03-01"),
        };
        let found = provider
            .find_next_working_day("agent_001", make_date("2026-01-15"), 30)
            .unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_is_working_day_derived_from_schedule() {
        let provider = SingleDayProvider {
            working: make_date("2026-01-15"),
        };
        assert!(provider.is_working_day("agent_001", make_date("2026-01-15")).unwrap());
        assert!(!provider.is_working_day("agent_001", make_date("2026-01-16")).unwrap());
    }
}
