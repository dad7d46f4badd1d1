//! # Tessera REST
//!
//! Thin Axum REST layer for the Tessera transaction gateway: the
//! transaction endpoint, cache management endpoints, and health checks.

pub mod controllers;
mod openapi;
mod responses;
mod router;
mod state;

pub use openapi::ApiDoc;
pub use responses::{AppError, MessageResponse};
pub use router::create_router;
pub use state::AppState;
