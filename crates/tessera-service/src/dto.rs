//! Transaction request DTOs.

use serde::{Deserialize, Serialize};
use tessera_core::FieldMap;
use utoipa::ToSchema;
use validator::Validate;

/// Inbound transaction request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TransactionRequest {
    /// Input fields for the transaction.
    pub fields: FieldMap,

    /// Transaction ID; a UUID is generated when absent.
    #[validate(length(min = 1, message = "trx_id cannot be empty"))]
    pub trx_id: Option<String>,
}
