//! Caching wrapper around a transaction runner.

use async_trait::async_trait;
use std::sync::Arc;
use tessera_cache::{FieldHydrationService, ResponseCacheService};
use tessera_core::{FieldMap, TesseraResult, TransactionResponse, TransactionRunner};
use tracing::debug;

/// Composes field hydration and response caching into a single
/// request/response interceptor around a delegate runner.
///
/// Inbound fields are hydrated from the cache before the delegate runs;
/// the delegate's response has its cacheable fields extracted and
/// replaced with a cache key before it reaches the caller.
pub struct CachedTransactionRunner {
    delegate: Arc<dyn TransactionRunner>,
    hydration: Arc<dyn FieldHydrationService>,
    response_cache: Arc<dyn ResponseCacheService>,
}

impl CachedTransactionRunner {
    /// Creates the wrapper around a delegate runner.
    #[must_use]
    pub fn new(
        delegate: Arc<dyn TransactionRunner>,
        hydration: Arc<dyn FieldHydrationService>,
        response_cache: Arc<dyn ResponseCacheService>,
    ) -> Self {
        Self {
            delegate,
            hydration,
            response_cache,
        }
    }
}

#[async_trait]
impl TransactionRunner for CachedTransactionRunner {
    async fn process(&self, fields: &FieldMap, trx_id: &str) -> TesseraResult<TransactionResponse> {
        debug!("Hydrating fields for transaction '{}'", trx_id);
        let hydrated = self.hydration.hydrate(fields).await;

        let response = self.delegate.process(&hydrated, trx_id).await?;

        debug!("Processing response fields for transaction '{}'", trx_id);
        Ok(self.response_cache.process_response(response, trx_id).await)
    }
}
