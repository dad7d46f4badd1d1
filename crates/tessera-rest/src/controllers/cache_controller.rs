//! Cache management controller.

use crate::{
    responses::{ApiResult, MessageResponse},
    state::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Creates the cache management router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cache/populate", post(populate_cache))
        .route("/cache/clear", post(clear_cache))
        .route("/cache/status", get(cache_status))
}

/// Seeds the cache with sample data.
#[utoipa::path(
    post,
    path = "/api/cache/populate",
    tag = "cache",
    responses(
        (status = 200, description = "Cache populated", body = MessageResponse)
    )
)]
pub async fn populate_cache(State(state): State<AppState>) -> ApiResult<MessageResponse> {
    state.populator.populate().await;
    Ok(Json(MessageResponse::new("Cache populated with sample data")))
}

/// Empties the cache.
#[utoipa::path(
    post,
    path = "/api/cache/clear",
    tag = "cache",
    responses(
        (status = 200, description = "Cache cleared", body = MessageResponse)
    )
)]
pub async fn clear_cache(State(state): State<AppState>) -> ApiResult<MessageResponse> {
    state.populator.clear().await;
    Ok(Json(MessageResponse::new("Cache cleared")))
}

/// Reports cache service status.
#[utoipa::path(
    get,
    path = "/api/cache/status",
    tag = "cache",
    responses(
        (status = 200, description = "Cache service status", body = MessageResponse)
    )
)]
pub async fn cache_status() -> ApiResult<MessageResponse> {
    Ok(Json(MessageResponse::new("Cache service is running")))
}
