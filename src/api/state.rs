//! Application state for the settlement engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::{HolidayCalendar, SUPPORTED_YEARS};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and the holiday calendar, both fetched
/// once at startup and treated as immutable during request handling.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calendar: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates application state from a configuration loader and an
    /// explicit holiday calendar.
    pub fn new(config: ConfigLoader, calendar: HolidayCalendar) -> Self {
        Self {
            config: Arc::new(config),
            calendar: Arc::new(calendar),
        }
    }

    /// Creates application state with the generated Colombian calendar
    /// for the supported year range, extended with any manual additions
    /// from the configuration.
    pub fn with_default_calendar(config: ConfigLoader) -> Self {
        let mut calendar = HolidayCalendar::colombian(SUPPORTED_YEARS);
        calendar.extend(config.extra_holidays().to_vec());
        Self::new(config, calendar)
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
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

    #[test]
    fn test_default_calendar_covers_supported_years() {
        let config = ConfigLoader::load("./config/bomberos").unwrap();
        let state = AppState::with_default_calendar(config);
        // 17 years of 18 holidays, minus the 3 years (2025, 2030, 2038)
        // where the shifted San Pedro lands on Sagrado Corazón
        assert_eq!(state.calendar().len(), 17 * 18 - 3);
    }
}
