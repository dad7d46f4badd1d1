//! Dependency injection module using Shaku.
//!
//! The module lists the in-memory store as the default `CacheStore`
//! component; at startup the bootstrap-selected backend (Redis,
//! in-memory with sweeper, or no-op) is installed over it with a
//! component override.

use shaku::module;
use std::sync::Arc;
use tessera_cache::{
    select_store, CacheRuntime, CacheStore, FieldHydrationServiceImpl, InMemoryCacheStore,
    ResponseCacheServiceImpl, ResponseCacheServiceImplParameters,
};
use tessera_config::RedisConfig;

module! {
    pub GatewayModule {
        components = [
            InMemoryCacheStore,
            FieldHydrationServiceImpl,
            ResponseCacheServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the gateway module with the backend chosen by bootstrap.
///
/// Must be called after [`tessera_cache::CacheBootstrap::run`] so the
/// runtime's backend override is in effect, and from within a Tokio
/// runtime (the in-memory backend starts its sweeper here).
pub fn build_gateway_module(runtime: &CacheRuntime, redis_config: &RedisConfig) -> Arc<GatewayModule> {
    let store: Box<dyn CacheStore> = select_store(runtime, redis_config);

    let module = GatewayModule::builder()
        .with_component_override::<dyn CacheStore>(store)
        .with_component_parameters::<ResponseCacheServiceImpl>(ResponseCacheServiceImplParameters {
            ttl_secs: runtime.ttl_secs(),
        })
        .build();

    Arc::new(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaku::HasComponent;
    use tessera_cache::{FieldHydrationService, ResponseCacheService};
    use tessera_config::CachingConfig;
    use tessera_core::TransactionResponse;

    fn runtime(enabled: bool) -> CacheRuntime {
        CacheRuntime::new(
            CachingConfig {
                enabled,
                backend: "in-memory".to_string(),
                ttl_secs: 60,
            },
            true,
        )
    }

    #[tokio::test]
    async fn test_module_resolves_cache_services() {
        let module = build_gateway_module(&runtime(true), &RedisConfig::default());

        let store: Arc<dyn CacheStore> = module.resolve();
        let hydration: Arc<dyn FieldHydrationService> = module.resolve();
        let response_cache: Arc<dyn ResponseCacheService> = module.resolve();

        store.put("k", "v", 60).await;
        assert_eq!(store.get("k").await.as_deref(), Some("v"));

        let fields = tessera_core::FieldMap::new();
        assert!(hydration.hydrate(&fields).await.is_empty());

        let response = response_cache
            .process_response(TransactionResponse::new(), "trx-1")
            .await;
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_disabled_caching_wires_the_noop_store() {
        let module = build_gateway_module(&runtime(false), &RedisConfig::default());

        let store: Arc<dyn CacheStore> = module.resolve();
        store.put("k", "v", 60).await;
        assert_eq!(store.get("k").await, None);
    }
}
