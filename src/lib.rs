//! Elapsed work time engine.
//!
//! This crate measures how much *working time* (in seconds) has elapsed
//! between two instants for a subject, counting only time inside the
//! subject's configured work shifts and excluding non-working days and
//! off-shift hours. It is used to measure SLA/overtime on pending work
//! items fairly, independent of weekends, holidays, and lunch breaks.
//!
//! Schedules come from a [`ShiftScheduleProvider`]; the bundled
//! [`RosterCalendar`] serves weekly rosters loaded from YAML via
//! [`ConfigLoader`]. All timestamps are naive and assumed to share one
//! local zone; shifts never cross midnight.
//!
//! [`ShiftScheduleProvider`]: schedule::ShiftScheduleProvider
//! [`RosterCalendar`]: schedule::RosterCalendar
//! [`ConfigLoader`]: config::ConfigLoader

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
