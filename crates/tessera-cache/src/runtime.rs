//! Runtime cache configuration with the bootstrap backend override.

use parking_lot::RwLock;
use tessera_config::{CacheBackend, CachingConfig};
use tracing::info;

/// Process-wide caching state.
///
/// Wraps the immutable [`CachingConfig`] resolved at startup together
/// with the one mutable piece of cache state: the backend override
/// written by bootstrap when the configured backend is unusable. The
/// override is an explicit field on a shared object so its single write
/// is traceable and testable, and it takes precedence over the
/// configured backend for the lifetime of the process.
pub struct CacheRuntime {
    config: CachingConfig,
    caching_present: bool,
    backend_override: RwLock<Option<CacheBackend>>,
}

impl CacheRuntime {
    /// Creates the runtime state from the resolved configuration.
    ///
    /// `caching_present` records whether any `caching.*` key was
    /// explicitly configured (see `ConfigLoader::caching_present`).
    #[must_use]
    pub fn new(config: CachingConfig, caching_present: bool) -> Self {
        Self {
            config,
            caching_present,
            backend_override: RwLock::new(None),
        }
    }

    /// Whether caching is enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Whether any `caching.*` key was explicitly configured.
    #[must_use]
    pub fn caching_present(&self) -> bool {
        self.caching_present
    }

    /// TTL in seconds for cached response-field entries.
    #[must_use]
    pub fn ttl_secs(&self) -> i64 {
        self.config.ttl_secs
    }

    /// The configured backend kind, or `None` if the configured string
    /// is unrecognized.
    #[must_use]
    pub fn configured_backend(&self) -> Option<CacheBackend> {
        self.config.backend_kind()
    }

    /// The raw configured backend string.
    #[must_use]
    pub fn configured_backend_name(&self) -> &str {
        &self.config.backend
    }

    /// The backend the process actually uses: the override when set,
    /// otherwise the configured kind, defaulting to in-memory for
    /// unrecognized values.
    #[must_use]
    pub fn effective_backend(&self) -> CacheBackend {
        if let Some(kind) = *self.backend_override.read() {
            return kind;
        }
        self.configured_backend().unwrap_or(CacheBackend::InMemory)
    }

    /// Forces the backend for the remainder of the process lifetime.
    ///
    /// One-shot and irreversible: there is no re-probe or recovery back
    /// to the configured backend once downgraded.
    pub fn override_backend(&self, kind: CacheBackend) {
        info!("Cache backend overridden to '{}'", kind);
        *self.backend_override.write() = Some(kind);
    }

    /// Whether bootstrap has overridden the configured backend.
    #[must_use]
    pub fn overridden(&self) -> bool {
        self.backend_override.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool, backend: &str) -> CachingConfig {
        CachingConfig {
            enabled,
            backend: backend.to_string(),
            ttl_secs: 3600,
        }
    }

    #[test]
    fn test_effective_backend_without_override() {
        let runtime = CacheRuntime::new(config(true, "redis"), true);
        assert_eq!(runtime.effective_backend(), CacheBackend::Redis);
        assert!(!runtime.overridden());
    }

    #[test]
    fn test_override_wins_over_configured_backend() {
        let runtime = CacheRuntime::new(config(true, "redis"), true);
        runtime.override_backend(CacheBackend::InMemory);

        assert!(runtime.overridden());
        assert_eq!(runtime.effective_backend(), CacheBackend::InMemory);
        assert_eq!(runtime.configured_backend(), Some(CacheBackend::Redis));
    }

    #[test]
    fn test_unrecognized_backend_defaults_to_in_memory() {
        let runtime = CacheRuntime::new(config(true, "memcached"), true);
        assert_eq!(runtime.configured_backend(), None);
        assert_eq!(runtime.effective_backend(), CacheBackend::InMemory);
    }
}
