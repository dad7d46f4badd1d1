//! Cache population helper for development and demos.

use crate::store::CacheStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

/// Well-known key under which the sample entry is stored.
pub const TEST_CACHE_KEY: &str = "test-cache-key-123";

/// Seeds the cache with a well-known sample entry so hydration can be
/// exercised without a prior cached response.
pub struct CachePopulator {
    store: Arc<dyn CacheStore>,
}

impl CachePopulator {
    /// Creates a populator over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Stores the sample entry under [`TEST_CACHE_KEY`] with a 1 hour TTL.
    pub async fn populate(&self) {
        let mut sample: HashMap<&str, &str> = HashMap::new();
        sample.insert("tf_cache_key", TEST_CACHE_KEY);
        sample.insert("amount", "100.50");
        sample.insert("currency", "USD");
        sample.insert("timestamp", "1703123456789");
        sample.insert("status", "processed");
        sample.insert("facility_id", "facility_001");
        sample.insert("tablefacility_2", "sample_data_2");
        sample.insert("tablefacility_3", "sample_data_3");
        sample.insert("tablefacility_4", "sample_data_4");

        match serde_json::to_string(&sample) {
            Ok(serialized) => {
                self.store.put(TEST_CACHE_KEY, &serialized, 3600).await;
                info!("Cache populated with sample data for key '{}'", TEST_CACHE_KEY);
            }
            Err(e) => {
                error!("Failed to serialize sample cache data: {}", e);
            }
        }
    }

    /// Empties the cache through the store's `clear_all`.
    pub async fn clear(&self) {
        self.store.clear_all().await;
        info!("Cache cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCacheStore;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_populate_stores_sample_entry() {
        let store = Arc::new(InMemoryCacheStore::new());
        let populator = CachePopulator::new(store.clone());

        populator.populate().await;

        let stored = store.get(TEST_CACHE_KEY).await.expect("sample entry");
        let sample: HashMap<String, String> = serde_json::from_str(&stored).unwrap();
        assert_eq!(sample["amount"], "100.50");
        assert_eq!(sample["tablefacility_2"], "sample_data_2");
    }

    #[tokio::test]
    async fn test_clear_empties_the_store() {
        let store = Arc::new(InMemoryCacheStore::new());
        let populator = CachePopulator::new(store.clone());

        populator.populate().await;
        populator.clear().await;

        assert_eq!(store.get(TEST_CACHE_KEY).await, None);
    }
}
