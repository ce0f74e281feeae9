//! Serde types for the calendar configuration files.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{DaySchedule, WorkInterval, parse_time_of_day};
use crate::schedule::WeekPattern;

/// Metadata describing a calendar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarMetadata {
    /// Human-readable calendar name.
    pub name: String,
    /// Version marker for the configuration, e.g. an effective date.
    pub version: String,
}

/// One work interval as written in YAML.
///
/// Times are strings so that both `HH:mm` and `HH:mm:ss` are accepted;
/// they pass through the engine's single parsing boundary at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalSpec {
    /// Interval start, `HH:mm` or `HH:mm:ss`.
    pub begin: String,
    /// Interval end, `HH:mm` or `HH:mm:ss`.
    pub end: String,
}

impl IntervalSpec {
    fn to_interval(&self) -> EngineResult<WorkInterval> {
        WorkInterval::new(parse_time_of_day(&self.begin)?, parse_time_of_day(&self.end)?)
    }
}

/// A weekly roster as written in YAML.
///
/// Days that are omitted are non-working.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekSpec {
    /// Monday's work intervals.
    #[serde(default)]
    pub monday: Vec<IntervalSpec>,
    /// Tuesday's work intervals.
    #[serde(default)]
    pub tuesday: Vec<IntervalSpec>,
    /// Wednesday's work intervals.
    #[serde(default)]
    pub wednesday: Vec<IntervalSpec>,
    /// Thursday's work intervals.
    #[serde(default)]
    pub thursday: Vec<IntervalSpec>,
    /// Friday's work intervals.
    #[serde(default)]
    pub friday: Vec<IntervalSpec>,
    /// Saturday's work intervals.
    #[serde(default)]
    pub saturday: Vec<IntervalSpec>,
    /// Sunday's work intervals.
    #[serde(default)]
    pub sunday: Vec<IntervalSpec>,
}

impl WeekSpec {
    /// Converts the parsed YAML into a validated [`WeekPattern`].
    ///
    /// # Errors
    ///
    /// Fails if any time string is malformed or any day's intervals are
    /// reversed, unsorted, or overlapping.
    pub fn to_pattern(&self) -> EngineResult<WeekPattern> {
        Ok(WeekPattern::new([
            Self::to_schedule(&self.monday)?,
            Self::to_schedule(&self.tuesday)?,
            Self::to_schedule(&self.wednesday)?,
            Self::to_schedule(&self.thursday)?,
            Self::to_schedule(&self.friday)?,
            Self::to_schedule(&self.saturday)?,
            Self::to_schedule(&self.sunday)?,
        ]))
    }

    fn to_schedule(specs: &[IntervalSpec]) -> EngineResult<DaySchedule> {
        let intervals = specs
            .iter()
            .map(IntervalSpec::to_interval)
            .collect::<EngineResult<Vec<_>>>()?;
        DaySchedule::new(intervals)
    }
}

/// Contents of `roster.yaml`: metadata plus the default weekly roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    /// Calendar metadata.
    pub calendar: CalendarMetadata,
    /// The default weekly roster for all subjects.
    pub week: WeekSpec,
}

/// One holiday entry in `holidays.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The holiday date.
    pub date: NaiveDate,
    /// The holiday name.
    pub name: String,
}

/// Contents of `holidays.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysFile {
    /// Dates on which no subject works.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

/// Contents of the optional `overrides.yaml`: per-subject weekly rosters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverridesFile {
    /// Weekly rosters keyed by subject identifier.
    #[serde(default)]
    pub subjects: HashMap<String, WeekSpec>,
}
