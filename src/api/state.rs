//! Application state for the workforce engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::Settings;
use crate::engine::{PayrollCalculator, RosterValidator, TimeAccountingEngine};
use crate::store::Stores;

/// Shared application state.
///
/// Holds the injected repository handles and service settings; handlers
/// build the engine components from these on demand.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<Settings>,
    stores: Stores,
}

impl AppState {
    /// Creates a new application state from settings and wired stores.
    pub fn new(settings: Settings, stores: Stores) -> Self {
        Self {
            settings: Arc::new(settings),
            stores,
        }
    }

    /// Returns the service settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the repository handles.
    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    /// Builds the roster admission validator.
    pub fn roster_validator(&self) -> RosterValidator {
        RosterValidator::new(
            Arc::clone(&self.stores.staff),
            Arc::clone(&self.stores.templates),
            Arc::clone(&self.stores.roster),
            Arc::clone(&self.stores.branches),
        )
    }

    /// Builds the time accounting engine.
    pub fn time_accounting(&self) -> TimeAccountingEngine {
        TimeAccountingEngine::new(
            Arc::clone(&self.stores.staff),
            Arc::clone(&self.stores.branches),
            Arc::clone(&self.stores.attendance),
        )
    }

    /// Builds the payroll calculator.
    pub fn payroll_calculator(&self) -> PayrollCalculator {
        PayrollCalculator::new(
            Arc::clone(&self.stores.staff),
            Arc::clone(&self.stores.branches),
            Arc::clone(&self.stores.attendance),
            Arc::clone(&self.stores.salary),
        )
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
