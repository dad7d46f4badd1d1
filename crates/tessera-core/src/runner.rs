//! The transaction-runner seam.

use crate::{FieldMap, TesseraResult, TransactionResponse};
use async_trait::async_trait;
use shaku::Interface;

/// Processes a transaction against the backing host system.
///
/// Implementations range from mock runners used in development to the
/// caching wrapper that composes field hydration and response caching
/// around a delegate.
#[async_trait]
pub trait TransactionRunner: Interface {
    /// Processes a transaction with the given input fields and transaction ID.
    async fn process(&self, fields: &FieldMap, trx_id: &str) -> TesseraResult<TransactionResponse>;
}
