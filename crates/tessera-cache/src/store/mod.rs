//! Cache store abstraction and its backends.

mod memory;
mod noop;
mod redis;

pub use memory::{InMemoryCacheStore, InMemoryCacheStoreParameters, SWEEP_INTERVAL};
pub use noop::NoOpCacheStore;
pub use redis::{create_pool, RedisCacheStore};

use async_trait::async_trait;
use shaku::Interface;

/// Backend-agnostic key/value store with TTL.
///
/// Failures never cross this boundary: each backend catches its own
/// errors, logs them, and degrades to a miss (`get`) or a skipped write
/// (`put`/`clear`/`clear_all`).
#[async_trait]
pub trait CacheStore: Interface {
    /// Retrieves the value for `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. A non-positive `ttl_secs` stores the
    /// entry without expiry.
    async fn put(&self, key: &str, value: &str, ttl_secs: i64);

    /// Removes one entry if present.
    async fn clear(&self, key: &str);

    /// Empties the store. Backend support varies; see each backend.
    async fn clear_all(&self);
}
