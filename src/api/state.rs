//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RuleStore;

/// Shared application state.
///
/// Holds the loaded rule store. Rules are loaded once at startup and
/// passed into every computation; handlers never fetch or cache rules
/// themselves.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<RuleStore>,
}

impl AppState {
    /// Creates a new application state with the given rule store.
    pub fn new(rules: RuleStore) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns a reference to the rule store.
    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }
}
