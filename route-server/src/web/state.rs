//! Application state for the web layer.

use std::sync::Arc;

use crate::search::SearchOrchestrator;

/// Shared application state.
///
/// Generic over the provider and cache so the same router serves both the
/// live provider and the fixture-backed mock.
pub struct AppState<P, C> {
    /// Search orchestrator shared by all requests
    pub search: Arc<SearchOrchestrator<P, C>>,
}

impl<P, C> AppState<P, C> {
    /// Create a new app state.
    pub fn new(search: SearchOrchestrator<P, C>) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}

// Derived Clone would require `P: Clone, C: Clone`.
impl<P, C> Clone for AppState<P, C> {
    fn clone(&self) -> Self {
        Self {
            search: Arc::clone(&self.search),
        }
    }
}
