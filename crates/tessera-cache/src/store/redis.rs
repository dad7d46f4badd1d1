//! Redis-backed cache store.

use super::CacheStore;
use crate::error::{CacheError, CacheResult};
use crate::keys::HEALTH_CHECK_KEY;
use async_trait::async_trait;
use deadpool_redis::{Pool, Runtime};
use redis::AsyncCommands;
use tessera_config::RedisConfig;
use tracing::{debug, error, warn};

/// Creates a Redis connection pool.
///
/// Pool creation is lazy; connectivity is checked by the bootstrap
/// probe, not here.
pub fn create_pool(config: &RedisConfig) -> CacheResult<Pool> {
    let cfg = deadpool_redis::Config::from_url(&config.url);

    cfg.builder()
        .map_err(|e| CacheError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| CacheError::Configuration(format!("Failed to create Redis pool: {}", e)))
}

/// Remote cache store mapping the capability set 1:1 onto Redis
/// commands.
///
/// Every pool or command failure is caught and logged, degrading to a
/// miss (`get`) or a skipped write (`put`/`clear`); `clear_all` is
/// deliberately not wired to a bulk flush of the shared keyspace.
pub struct RedisCacheStore {
    pool: Pool,
}

impl RedisCacheStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Liveness probe: an existence check on a reserved key, which
    /// forces a connection without touching real data.
    pub async fn probe(&self) -> CacheResult<()> {
        let mut conn = self.pool.get().await?;
        let _: bool = conn.exists(HEALTH_CHECK_KEY).await?;
        Ok(())
    }

    async fn try_get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.pool.get().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn try_put(&self, key: &str, value: &str, ttl_secs: i64) -> CacheResult<()> {
        let mut conn = self.pool.get().await?;
        if ttl_secs > 0 {
            conn.set_ex::<_, _, ()>(key, value, ttl_secs as u64).await?;
        } else {
            conn.set::<_, _, ()>(key, value).await?;
        }
        Ok(())
    }

    async fn try_clear(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.pool.get().await?;
        let _: i64 = conn.del(key).await?;
        Ok(())
    }

    fn log_failure(operation: &str, key: &str, err: &CacheError) {
        if err.is_transient() {
            warn!("Redis {} failed for key '{}': {}", operation, key, err);
        } else {
            error!("Redis {} failed for key '{}': {}", operation, key, err);
        }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key).await {
            Ok(value) => {
                match &value {
                    Some(_) => debug!("Cache hit for key '{}'", key),
                    None => debug!("Cache miss for key '{}'", key),
                }
                value
            }
            Err(e) => {
                Self::log_failure("get", key, &e);
                None
            }
        }
    }

    async fn put(&self, key: &str, value: &str, ttl_secs: i64) {
        if let Err(e) = self.try_put(key, value, ttl_secs).await {
            Self::log_failure("put", key, &e);
        }
    }

    async fn clear(&self, key: &str) {
        if let Err(e) = self.try_clear(key).await {
            Self::log_failure("clear", key, &e);
        }
    }

    async fn clear_all(&self) {
        // Flushing a shared remote keyspace is unsafe; this operation is
        // intentionally left unimplemented for the Redis backend.
        warn!("clear_all is not implemented for the redis backend; no keys were removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_store() -> RedisCacheStore {
        let config = RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            pool_size: 1,
        };
        RedisCacheStore::new(create_pool(&config).unwrap())
    }

    #[test]
    fn test_create_pool_rejects_bad_url() {
        let config = RedisConfig {
            url: "not-a-redis-url".to_string(),
            pool_size: 1,
        };
        assert!(create_pool(&config).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_backend_degrades_to_miss() {
        let store = unreachable_store();
        assert_eq!(store.get("any-key").await, None);
    }

    #[tokio::test]
    async fn test_unreachable_backend_swallows_writes() {
        let store = unreachable_store();
        store.put("k", "v", 60).await;
        store.put("k", "v", 0).await;
        store.clear("k").await;
        store.clear_all().await;
    }

    #[tokio::test]
    async fn test_probe_fails_against_unreachable_backend() {
        let store = unreachable_store();
        assert!(store.probe().await.is_err());
    }
}
