//! # Tessera Config
//!
//! Layered configuration loading for the Tessera transaction gateway:
//! TOML files under `config/`, `.env` support, and `TESSERA__*`
//! environment overrides.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
