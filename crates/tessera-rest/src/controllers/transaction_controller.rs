//! Transaction processing controller.

use crate::{
    responses::{ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use tessera_core::{TransactionResponse, ValidateExt};
use tessera_service::TransactionRequest;
use tracing::debug;
use uuid::Uuid;

/// Creates the transaction router.
pub fn router() -> Router<AppState> {
    Router::new().route("/transaction", post(process_transaction))
}

/// Processes a transaction.
#[utoipa::path(
    post,
    path = "/api/transaction",
    tag = "transaction",
    request_body = TransactionRequest,
    responses(
        (status = 200, description = "Transaction processed", body = TransactionResponse),
        (status = 400, description = "Invalid request", body = tessera_core::ErrorResponse)
    )
)]
pub async fn process_transaction(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> ApiResult<TransactionResponse> {
    request.validate_request().map_err(AppError)?;

    let trx_id = request
        .trx_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    debug!(
        "Processing transaction '{}' with {} fields (wrapper: {})",
        trx_id,
        request.fields.len(),
        state.wrapper_enabled
    );

    let runner = if state.wrapper_enabled {
        &state.cached_runner
    } else {
        &state.runner
    };

    let response = runner
        .process(&request.fields, &trx_id)
        .await
        .map_err(AppError)?;

    Ok(Json(response))
}
