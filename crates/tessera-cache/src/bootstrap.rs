//! Startup-time cache configuration validation and backend selection.

use crate::error::CacheResult;
use crate::runtime::CacheRuntime;
use crate::store::{
    create_pool, CacheStore, InMemoryCacheStore, NoOpCacheStore, RedisCacheStore, SWEEP_INTERVAL,
};
use tessera_config::{CacheBackend, RedisConfig};
use tracing::{debug, info, warn};

/// Validates cache configuration and resolves the backend at process
/// start.
///
/// If Redis is configured but fails a liveness probe, the runtime is
/// downgraded to the in-memory backend. The decision is one-shot and
/// irreversible for the process lifetime.
pub struct CacheBootstrap;

impl CacheBootstrap {
    /// Runs the bootstrap sequence against the shared runtime state.
    pub async fn run(runtime: &CacheRuntime, redis_config: &RedisConfig) {
        info!("=== Cache configuration bootstrap ===");

        if !runtime.caching_present() {
            info!("No caching.* configuration present - caching stays disabled");
            info!("=== Cache bootstrap complete ===");
            return;
        }

        info!(
            "Cache configuration: enabled = {}, backend = {}, ttl_secs = {}",
            runtime.enabled(),
            runtime.configured_backend_name(),
            runtime.ttl_secs()
        );

        if !runtime.enabled() {
            info!("Caching is disabled (caching.enabled = false)");
            info!("=== Cache bootstrap complete ===");
            return;
        }

        match runtime.configured_backend() {
            Some(CacheBackend::Redis) => {
                info!("Redis backend configured - probing {}", redis_config.url);
                match Self::probe_redis(redis_config).await {
                    Ok(()) => info!("Redis health check succeeded - using the redis backend"),
                    Err(e) => {
                        warn!(
                            "Redis health check failed ({}) - falling back to the in-memory backend",
                            e
                        );
                        runtime.override_backend(CacheBackend::InMemory);
                    }
                }
            }
            Some(CacheBackend::InMemory) => {
                info!("In-memory backend configured");
            }
            None => {
                warn!(
                    "Unknown cache backend '{}' - falling back to in-memory",
                    runtime.configured_backend_name()
                );
                runtime.override_backend(CacheBackend::InMemory);
            }
        }

        info!("=== Cache bootstrap complete ===");
    }

    async fn probe_redis(redis_config: &RedisConfig) -> CacheResult<()> {
        let store = RedisCacheStore::new(create_pool(redis_config)?);
        store.probe().await
    }
}

/// Selects the cache store once, honoring the bootstrap decision.
///
/// Must be called from within a Tokio runtime: the in-memory backend
/// starts its background sweeper here.
pub fn select_store(runtime: &CacheRuntime, redis_config: &RedisConfig) -> Box<dyn CacheStore> {
    if !runtime.enabled() {
        debug!("Caching disabled - using the no-op cache store");
        return Box::new(NoOpCacheStore::new());
    }

    match runtime.effective_backend() {
        CacheBackend::Redis => match create_pool(redis_config) {
            Ok(pool) => {
                info!("Using the redis cache store at {}", redis_config.url);
                Box::new(RedisCacheStore::new(pool))
            }
            Err(e) => {
                warn!(
                    "Redis pool unavailable ({}) - falling back to the in-memory cache store",
                    e
                );
                in_memory_store()
            }
        },
        CacheBackend::InMemory => {
            info!("Using the in-memory cache store");
            in_memory_store()
        }
    }
}

fn in_memory_store() -> Box<dyn CacheStore> {
    let store = InMemoryCacheStore::new();
    store.start_sweeper(SWEEP_INTERVAL);
    Box::new(store)
}
