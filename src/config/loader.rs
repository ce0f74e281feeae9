//! Calendar configuration loading.
//!
//! This module provides the [`ConfigLoader`] type for loading a
//! [`RosterCalendar`] from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::schedule::RosterCalendar;

use super::types::{CalendarMetadata, HolidaysFile, OverridesFile, RosterFile};

/// Loads a work calendar from a configuration directory.
///
/// # Directory structure
///
/// ```text
/// config/standard-week/
/// ├── roster.yaml      # calendar metadata + default weekly roster
/// ├── holidays.yaml    # dates on which nobody works
/// └── overrides.yaml   # per-subject weekly rosters (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use worktime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard-week").unwrap();
/// println!("Loaded calendar: {}", loader.metadata().name);
/// let calendar = loader.into_calendar();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: CalendarMetadata,
    calendar: RosterCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `roster.yaml` or `holidays.yaml` is missing,
    /// any file contains invalid YAML, or any interval violates the
    /// schedule invariants. `overrides.yaml` is optional.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let roster: RosterFile = Self::load_yaml(&path.join("roster.yaml"))?;
        let holidays: HolidaysFile = Self::load_yaml(&path.join("holidays.yaml"))?;

        let overrides_path = path.join("overrides.yaml");
        let overrides: OverridesFile = if overrides_path.exists() {
            Self::load_yaml(&overrides_path)?
        } else {
            OverridesFile::default()
        };

        let mut calendar = RosterCalendar::new(roster.week.to_pattern()?)
            .with_holidays(holidays.holidays.iter().map(|h| h.date));
        for (subject, week) in &overrides.subjects {
            calendar = calendar.with_override(subject.clone(), week.to_pattern()?);
        }

        Ok(Self {
            metadata: roster.calendar,
            calendar,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the calendar metadata.
    pub fn metadata(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns a reference to the loaded calendar.
    pub fn calendar(&self) -> &RosterCalendar {
        &self.calendar
    }

    /// Consumes the loader, returning the calendar.
    pub fn into_calendar(self) -> RosterCalendar {
        self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ShiftScheduleProvider;
    use chrono::NaiveDate;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_load_sample_calendar() {
        let loader = ConfigLoader::load("./config/standard-week").unwrap();
        assert_eq!(loader.metadata().name, "Standard office week");

        let calendar = loader.calendar();
        // 2026-01-15 is a Thursday with the two-shift day.
        let schedule = calendar.day_schedule("agent_001", make_date("2026-01-15")).unwrap();
        assert_eq!(schedule.total_seconds(), 8 * 3600);

        // 2026-01-17 is a Saturday.
        assert!(calendar.day_schedule("agent_001", make_date("2026-01-17")).unwrap().is_empty());
    }

    #[test]
    fn test_sample_calendar_applies_holidays() {
        let calendar = ConfigLoader::load("./config/standard-week").unwrap().into_calendar();
        // 2026-01-01 is a Thursday but listed in holidays.yaml.
        assert!(calendar.day_schedule("agent_001", make_date("2026-01-01")).unwrap().is_empty());
    }

    #[test]
    fn test_sample_calendar_applies_override() {
        let calendar = ConfigLoader::load("./config/standard-week").unwrap().into_calendar();
        // agent_042 works a single continuous afternoon shift per overrides.yaml.
        let schedule = calendar.day_schedule("agent_042", make_date("2026-01-15")).unwrap();
        assert_eq!(schedule.intervals().len(), 1);
        assert_eq!(schedule.total_seconds(), 8 * 3600);
    }

    #[test]
    fn test_load_missing_directory_fails() {
        let result = ConfigLoader::load("./config/does-not-exist");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
