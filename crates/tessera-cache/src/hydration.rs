//! Field hydration: merging cached data into inbound request fields.

use crate::keys::CACHE_KEY_FIELD;
use crate::store::CacheStore;
use async_trait::async_trait;
use shaku::{Component, Interface};
use std::collections::HashMap;
use std::sync::Arc;
use tessera_core::FieldMap;
use tracing::{debug, info, warn};

/// Enriches inbound request fields with previously cached field values
/// looked up by a caller-supplied key.
#[async_trait]
pub trait FieldHydrationService: Interface {
    /// Returns the fields merged with cached data when the cache-key
    /// field is present and hits; otherwise returns the fields
    /// unchanged. Never writes to the cache.
    async fn hydrate(&self, fields: &FieldMap) -> FieldMap;
}

/// Default hydration service over a [`CacheStore`].
#[derive(Component)]
#[shaku(interface = FieldHydrationService)]
pub struct FieldHydrationServiceImpl {
    #[shaku(inject)]
    store: Arc<dyn CacheStore>,
}

impl FieldHydrationServiceImpl {
    /// Creates a hydration service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Overlays the cached map onto the original fields; cached values
    /// win on conflicting keys, keys unique to either side survive.
    fn merge(original: &FieldMap, cached: HashMap<String, String>) -> FieldMap {
        let mut enhanced = original.clone();
        let cached_len = cached.len();
        enhanced.extend(cached);

        debug!(
            "Hydrated fields with {} cached entries, total fields: {}",
            cached_len,
            enhanced.len()
        );
        enhanced
    }
}

#[async_trait]
impl FieldHydrationService for FieldHydrationServiceImpl {
    async fn hydrate(&self, fields: &FieldMap) -> FieldMap {
        let Some(cache_key) = fields.get(CACHE_KEY_FIELD) else {
            debug!("No cache key field found, returning original fields");
            return fields.clone();
        };

        let Some(cached_value) = self.store.get(cache_key).await else {
            debug!("Cache miss for key '{}', returning original fields", cache_key);
            return fields.clone();
        };

        info!("Cache hit for key '{}', hydrating fields", cache_key);
        match serde_json::from_str::<HashMap<String, String>>(&cached_value) {
            Ok(cached) => Self::merge(fields, cached),
            Err(e) => {
                warn!(
                    "Failed to deserialize cached data for key '{}': {} - returning original fields",
                    cache_key, e
                );
                fields.clone()
            }
        }
    }
}
