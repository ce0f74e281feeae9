//! Core data models for the elapsed work time engine.
//!
//! This module contains the value types shared by the schedule and
//! calculation layers, plus the single parsing boundary for external
//! date/time representations.

mod day_schedule;
mod parse;
mod work_interval;

pub use day_schedule::DaySchedule;
pub use parse::{parse_date, parse_time_of_day};
pub use work_interval::WorkInterval;
