//! Mock transaction runner for development and testing.

use async_trait::async_trait;
use tessera_cache::keys::is_cacheable_field;
use tessera_core::{FieldMap, TesseraResult, TransactionResponse, TransactionRunner};
use tracing::debug;

/// Echo-style runner standing in for the real host system.
///
/// Input fields come back as single-valued response fields, except
/// cacheable-prefixed ones (those arrive via hydration and must not be
/// echoed); their count is reported in `tf_input_found`. A `mockTF`
/// input field generates that many `tablefacility_N` response fields so
/// the caching pipeline can be exercised end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTransactionRunner;

impl MockTransactionRunner {
    /// Creates a mock runner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransactionRunner for MockTransactionRunner {
    async fn process(&self, fields: &FieldMap, trx_id: &str) -> TesseraResult<TransactionResponse> {
        debug!("Mock runner processing transaction '{}'", trx_id);

        let mut response = TransactionResponse::new();

        let hydrated_count = fields.keys().filter(|name| is_cacheable_field(name)).count();

        for (name, value) in fields {
            if !is_cacheable_field(name) {
                response.add_field(name.clone(), vec![value.clone()]);
            }
        }

        if hydrated_count > 0 {
            response.add_field("tf_input_found", vec![hydrated_count.to_string()]);
        }

        if let Some(mock_tf) = fields.get("mockTF") {
            match mock_tf.parse::<i64>() {
                Ok(count) => {
                    for i in 1..=count {
                        response.add_field(
                            format!("tablefacility_{}", i),
                            vec![format!("mock_value_{}", i)],
                        );
                    }
                    response.add_field("tf_input_found", vec![count.to_string()]);
                }
                Err(_) => {
                    // Unparsable counts generate the historical default of 10.
                    for i in 1..=10 {
                        response.add_field(
                            format!("tablefacility_{}", i),
                            vec![format!("mock_value_{}", i)],
                        );
                    }
                }
            }
        }

        Ok(response)
    }
}
