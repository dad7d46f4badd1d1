//! # Tessera Transaction Gateway Server
//!
//! Main entry point: loads configuration, runs the cache bootstrap,
//! wires the dependency injection module, and serves the REST API.

use shaku::HasComponent;
use std::sync::Arc;
use tessera_cache::{
    CacheBootstrap, CachePopulator, CacheRuntime, CacheStore, FieldHydrationService,
    ResponseCacheService,
};
use tessera_config::{ConfigLoader, ObservabilityConfig};
use tessera_core::{TesseraError, TesseraResult, TransactionRunner};
use tessera_rest::{create_router, AppState};
use tessera_service::{CachedTransactionRunner, MockTransactionRunner};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod di;
mod startup;

use di::build_gateway_module;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> TesseraResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    // Initialize logging
    init_logging(&config.observability);

    startup::print_banner();
    info!("Starting Tessera Transaction Gateway...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    // Resolve the cache backend (one-shot, with health-checked fallback)
    let cache_runtime = Arc::new(CacheRuntime::new(
        config.caching.clone(),
        config_loader.caching_present(),
    ));
    CacheBootstrap::run(&cache_runtime, &config.redis).await;

    // Build DI module with the selected cache backend
    let module = build_gateway_module(&cache_runtime, &config.redis);
    let store: Arc<dyn CacheStore> = module.resolve();
    let hydration: Arc<dyn FieldHydrationService> = module.resolve();
    let response_cache: Arc<dyn ResponseCacheService> = module.resolve();

    // Wire the transaction runners
    let mock_runner: Arc<dyn TransactionRunner> = Arc::new(MockTransactionRunner::new());
    let cached_runner: Arc<dyn TransactionRunner> = Arc::new(CachedTransactionRunner::new(
        mock_runner.clone(),
        hydration,
        response_cache,
    ));
    let populator = Arc::new(CachePopulator::new(store));

    let state = AppState::new(
        mock_runner,
        cached_runner,
        populator,
        config.transaction.wrapper_enabled,
    );
    let router = create_router(state, &config.server);

    // Start REST server
    let addr = config.server.addr();
    startup::print_startup_info(&config.server.host, config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| TesseraError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TesseraError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
