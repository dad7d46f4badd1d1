//! Application state for Axum handlers.

use std::sync::Arc;
use tessera_cache::CachePopulator;
use tessera_core::TransactionRunner;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Plain runner used when the caching wrapper is disabled.
    pub runner: Arc<dyn TransactionRunner>,
    /// Caching wrapper around the plain runner.
    pub cached_runner: Arc<dyn TransactionRunner>,
    /// Cache management helper.
    pub populator: Arc<CachePopulator>,
    /// Route transactions through the caching wrapper.
    pub wrapper_enabled: bool,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        runner: Arc<dyn TransactionRunner>,
        cached_runner: Arc<dyn TransactionRunner>,
        populator: Arc<CachePopulator>,
        wrapper_enabled: bool,
    ) -> Self {
        Self {
            runner,
            cached_runner,
            populator,
            wrapper_enabled,
        }
    }
}
