//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use std::path::Path;
use std::sync::Arc;
use tessera_core::TesseraError;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader.
///
/// Besides the merged [`AppConfig`], the loader records whether any
/// `caching.*` key was explicitly supplied by a file or environment
/// source. Absent configuration and explicit `enabled = false` behave
/// identically at runtime; the distinction only makes startup logs
/// self-explanatory.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    caching_present: bool,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{config_dir}/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `TESSERA__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, TesseraError> {
        let config_dir = config_dir.into();
        let (config, caching_present) = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            caching_present,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, TesseraError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Whether any `caching.*` key was explicitly configured.
    #[must_use]
    pub fn caching_present(&self) -> bool {
        self.caching_present
    }

    fn load_config(config_dir: &str) -> Result<(AppConfig, bool), TesseraError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("TESSERA_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (TESSERA__ prefix)
        builder = builder.add_source(
            Environment::with_prefix("TESSERA")
                .separator("__")
                .try_parsing(true),
        );

        let merged = builder
            .build()
            .map_err(|e| TesseraError::Configuration(e.to_string()))?;

        let caching_present = merged
            .get_table("caching")
            .map(|table| !table.is_empty())
            .unwrap_or(false);

        let app_config: AppConfig = merged
            .try_deserialize()
            .map_err(|e| TesseraError::Configuration(e.to_string()))?;

        Ok((app_config, caching_present))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_defaults_without_any_files() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();

        let config = loader.get().await;
        assert!(!config.caching.enabled);
        assert_eq!(config.caching.backend, "in-memory");
        assert_eq!(config.caching.ttl_secs, 3600);
        assert_eq!(config.server.port, 8080);
        assert!(!loader.caching_present());
    }

    #[tokio::test]
    async fn test_caching_table_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            "[caching]\nenabled = true\nbackend = \"redis\"\nttl_secs = 60\n",
        );

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        assert!(loader.caching_present());

        let config = loader.get().await;
        assert!(config.caching.enabled);
        assert_eq!(config.caching.backend, "redis");
        assert_eq!(config.caching.ttl_secs, 60);
    }

    #[tokio::test]
    async fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "default.toml", "[server]\nport = 8080\n");
        write_config(dir.path(), "local.toml", "[server]\nport = 9001\n");

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 9001);
    }
}
