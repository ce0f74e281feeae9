//! Application state for the elapsed work time API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::schedule::ShiftScheduleProvider;

/// Shared application state.
///
/// Holds the schedule provider behind a trait object so tests can
/// substitute an in-memory calendar fixture for the configured one.
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn ShiftScheduleProvider>,
}

impl AppState {
    /// Creates a new application state with the given schedule provider.
    pub fn new(provider: impl ShiftScheduleProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Returns a reference to the schedule provider.
    pub fn provider(&self) -> &dyn ShiftScheduleProvider {
        self.provider.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
