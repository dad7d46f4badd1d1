//! No-op cache store, used when caching is disabled.

use super::CacheStore;
use async_trait::async_trait;

/// Store that holds nothing: `get` always misses, writes are dropped.
///
/// Selected when caching is disabled so callers carry no conditional
/// logic around cache interaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCacheStore;

impl NoOpCacheStore {
    /// Creates a no-op store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheStore for NoOpCacheStore {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn put(&self, _key: &str, _value: &str, _ttl_secs: i64) {}

    async fn clear(&self, _key: &str) {}

    async fn clear_all(&self) {}
}
