//! Calculation logic for the elapsed work time engine.
//!
//! This module contains the effective start resolution, the same-day and
//! multi-day accumulators, and the facade that orchestrates them into the
//! engine's single public operation.

mod effective_start;
mod elapsed;
mod multi_day;
mod same_day;

pub use effective_start::{
    DEFAULT_SEARCH_HORIZON_DAYS, EffectiveStart, resolve_effective_start,
};
pub use elapsed::{ElapsedWorkTime, MAX_SPAN_DAYS, compute_elapsed, compute_elapsed_work_seconds};
pub use multi_day::accumulate_multi_day;
pub use same_day::accumulate_same_day;
