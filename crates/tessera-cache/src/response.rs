//! Response caching: extracting cacheable fields into the store.
//!
//! The structural mirror of hydration: hydration merges cache-into-input
//! on the way in; this service splits output-into-cache on the way out,
//! so a later request can replay the cached fields by presenting the
//! returned key.

use crate::error::CacheResult;
use crate::keys::{generate_cache_key, is_cacheable_field, CACHE_KEY_FIELD};
use crate::store::CacheStore;
use async_trait::async_trait;
use shaku::{Component, Interface};
use std::collections::HashMap;
use std::sync::Arc;
use tessera_core::TransactionResponse;
use tracing::{debug, error, info};

/// Default TTL in seconds for cached response fields.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Extracts cacheable-prefixed fields from outbound responses, stores
/// them under a generated key, and replaces them with that key.
#[async_trait]
pub trait ResponseCacheService: Interface {
    /// Processes a response before it reaches the caller. Responses
    /// without cacheable fields pass through unchanged; a caching
    /// failure returns the original response rather than an error.
    async fn process_response(
        &self,
        response: TransactionResponse,
        trx_id: &str,
    ) -> TransactionResponse;
}

/// Default response cache service over a [`CacheStore`].
#[derive(Component)]
#[shaku(interface = ResponseCacheService)]
pub struct ResponseCacheServiceImpl {
    #[shaku(inject)]
    store: Arc<dyn CacheStore>,
    #[shaku(default = DEFAULT_TTL_SECS)]
    ttl_secs: i64,
}

impl ResponseCacheServiceImpl {
    /// Creates a response cache service with the given TTL.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>, ttl_secs: i64) -> Self {
        Self { store, ttl_secs }
    }

    async fn cache_fields(
        &self,
        response: &TransactionResponse,
        trx_id: &str,
    ) -> CacheResult<TransactionResponse> {
        let (cacheable, mut pass_through): (
            HashMap<String, Vec<String>>,
            HashMap<String, Vec<String>>,
        ) = response
            .fields()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .partition(|(name, _)| is_cacheable_field(name));

        debug!(
            "Partitioned response fields - cacheable: {}, pass-through: {}",
            cacheable.len(),
            pass_through.len()
        );

        let cache_key = generate_cache_key(trx_id);
        let serialized = Self::serialize_fields(&cacheable)?;
        self.store.put(&cache_key, &serialized, self.ttl_secs).await;

        info!(
            "Cached {} fields with key '{}' (ttl {}s)",
            cacheable.len(),
            cache_key,
            self.ttl_secs
        );

        pass_through.insert(CACHE_KEY_FIELD.to_string(), vec![cache_key]);
        Ok(TransactionResponse::from_fields(pass_through))
    }

    /// Serializes the cacheable set as a JSON object of single string
    /// values: multi-valued fields are flattened to their first value,
    /// empty value lists serialize as the empty string.
    fn serialize_fields(fields: &HashMap<String, Vec<String>>) -> CacheResult<String> {
        let flattened: HashMap<&str, &str> = fields
            .iter()
            .map(|(name, values)| {
                (
                    name.as_str(),
                    values.first().map(String::as_str).unwrap_or(""),
                )
            })
            .collect();

        Ok(serde_json::to_string(&flattened)?)
    }
}

#[async_trait]
impl ResponseCacheService for ResponseCacheServiceImpl {
    async fn process_response(
        &self,
        response: TransactionResponse,
        trx_id: &str,
    ) -> TransactionResponse {
        if response.is_empty() {
            return response;
        }

        if !response.fields().keys().any(|name| is_cacheable_field(name)) {
            debug!("No cacheable fields found, no caching needed");
            return response;
        }

        match self.cache_fields(&response, trx_id).await {
            Ok(replaced) => replaced,
            Err(e) => {
                error!(
                    "Error processing response for caching: {} - returning original response",
                    e
                );
                response
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCacheStore;
    use mockall::mock;
    use mockall::predicate::always;

    mock! {
        Store {}

        #[async_trait]
        impl CacheStore for Store {
            async fn get(&self, key: &str) -> Option<String>;
            async fn put(&self, key: &str, value: &str, ttl_secs: i64);
            async fn clear(&self, key: &str);
            async fn clear_all(&self);
        }
    }

    fn response(pairs: &[(&str, &[&str])]) -> TransactionResponse {
        let mut response = TransactionResponse::new();
        for (name, values) in pairs {
            response.add_field(
                (*name).to_string(),
                values.iter().map(|v| (*v).to_string()).collect(),
            );
        }
        response
    }

    fn service_with_store() -> (ResponseCacheServiceImpl, Arc<InMemoryCacheStore>) {
        let store = Arc::new(InMemoryCacheStore::new());
        let service = ResponseCacheServiceImpl::new(store.clone(), 3600);
        (service, store)
    }

    #[tokio::test]
    async fn test_concrete_response_scenario() {
        let (service, store) = service_with_store();
        let input = response(&[("tablefacility_1", &["x"]), ("status", &["ok"])]);

        let result = service.process_response(input, "trx-1").await;

        assert!(result.field("tablefacility_1").is_none());
        assert_eq!(result.field("status"), Some(&vec!["ok".to_string()]));

        let key = result.first_value(CACHE_KEY_FIELD).expect("cache key field");
        assert!(key.starts_with("TF_CACHE_trx-1_"));

        let stored = store.get(key).await.expect("stored entry");
        let cached: HashMap<String, String> = serde_json::from_str(&stored).unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached["tablefacility_1"], "x");
    }

    #[tokio::test]
    async fn test_round_trip_extracts_exactly_the_cacheable_fields() {
        let (service, store) = service_with_store();
        let input = response(&[
            ("TableFacility_A", &["a"]),
            ("tablefacility_b", &["b1", "b2"]),
            ("status", &["ok"]),
            ("amount", &["100.50"]),
        ]);

        let result = service.process_response(input, "trx-9").await;

        // No cacheable-prefixed field survives in the response.
        assert!(!result.fields().keys().any(|name| is_cacheable_field(name)));
        assert_eq!(result.field("status"), Some(&vec!["ok".to_string()]));
        assert_eq!(result.field("amount"), Some(&vec!["100.50".to_string()]));

        // The stored entry holds the removed fields, flattened to first values.
        let key = result.first_value(CACHE_KEY_FIELD).unwrap();
        let cached: HashMap<String, String> =
            serde_json::from_str(&store.get(key).await.unwrap()).unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached["TableFacility_A"], "a");
        assert_eq!(cached["tablefacility_b"], "b1");
    }

    #[tokio::test]
    async fn test_empty_value_list_serializes_as_empty_string() {
        let (service, store) = service_with_store();
        let input = response(&[("tablefacility_empty", &[])]);

        let result = service.process_response(input, "trx-2").await;
        let key = result.first_value(CACHE_KEY_FIELD).unwrap();

        let cached: HashMap<String, String> =
            serde_json::from_str(&store.get(key).await.unwrap()).unwrap();
        assert_eq!(cached["tablefacility_empty"], "");
    }

    #[tokio::test]
    async fn test_no_cacheable_fields_returns_response_unchanged_without_writes() {
        let mut store = MockStore::new();
        store.expect_put().times(0).returning(|_, _, _| ());
        let service = ResponseCacheServiceImpl::new(Arc::new(store), 3600);

        let input = response(&[("status", &["ok"]), ("amount", &["1"])]);
        let result = service.process_response(input.clone(), "trx-3").await;

        assert_eq!(result, input);
        assert!(result.field(CACHE_KEY_FIELD).is_none());
    }

    #[tokio::test]
    async fn test_empty_response_passes_through_without_writes() {
        let mut store = MockStore::new();
        store.expect_put().times(0).returning(|_, _, _| ());
        let service = ResponseCacheServiceImpl::new(Arc::new(store), 3600);

        let result = service
            .process_response(TransactionResponse::new(), "trx-4")
            .await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_configured_ttl_is_passed_to_the_store() {
        let mut store = MockStore::new();
        store
            .expect_put()
            .with(always(), always(), mockall::predicate::eq(120i64))
            .times(1)
            .returning(|_, _, _| ());
        let service = ResponseCacheServiceImpl::new(Arc::new(store), 120);

        let input = response(&[("tablefacility_1", &["x"])]);
        service.process_response(input, "trx-5").await;
    }
}
