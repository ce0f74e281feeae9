//! Calendar configuration for the elapsed work time engine.
//!
//! This module loads weekly rosters, holidays, and per-subject overrides
//! from YAML files and turns them into a [`RosterCalendar`].
//!
//! [`RosterCalendar`]: crate::schedule::RosterCalendar
//!
//! # Example
//!
//! ```no_run
//! use worktime_engine::config::ConfigLoader;
//!
//! let calendar = ConfigLoader::load("./config/standard-week").unwrap().into_calendar();
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalendarMetadata, HolidayEntry, HolidaysFile, IntervalSpec, OverridesFile, RosterFile,
    WeekSpec,
};
