//! Schedule sources for the elapsed work time engine.
//!
//! The calculation layer depends only on the [`ShiftScheduleProvider`]
//! trait; [`RosterCalendar`] is the bundled weekly-roster implementation.

mod provider;
mod roster;

pub use provider::ShiftScheduleProvider;
pub use roster::{RosterCalendar, WeekPattern};
