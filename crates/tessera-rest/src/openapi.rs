//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use crate::responses::MessageResponse;
use tessera_core::{ErrorResponse, TransactionResponse};
use tessera_service::TransactionRequest;
use utoipa::OpenApi;

/// OpenAPI documentation for the Tessera gateway API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tessera Transaction Gateway API",
        version = "0.1.0",
        description = "Transaction processing facade with a field caching layer",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::transaction_controller::process_transaction,
        crate::controllers::cache_controller::populate_cache,
        crate::controllers::cache_controller::clear_cache,
        crate::controllers::cache_controller::cache_status,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            TransactionRequest,
            TransactionResponse,
            ErrorResponse,
            MessageResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "transaction", description = "Transaction processing"),
        (name = "cache", description = "Cache management"),
        (name = "health", description = "Health checks"),
    )
)]
pub struct ApiDoc;
