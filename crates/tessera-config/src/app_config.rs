//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Caching configuration.
    #[serde(default)]
    pub caching: CachingConfig,

    /// Redis configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Transaction runner configuration.
    #[serde(default)]
    pub transaction: TransactionConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Application version.
    #[serde(default = "default_app_version")]
    pub version: String,
    /// Environment (development, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            environment: default_environment(),
        }
    }
}

fn default_app_name() -> String {
    "tessera-gateway".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// REST server host.
    #[serde(default = "default_host")]
    pub host: String,
    /// REST server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enable CORS.
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
    /// CORS allowed origins.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_cors_enabled(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Returns the REST server bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_enabled() -> bool {
    true
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

/// Cache backend kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheBackend {
    /// Remote Redis-backed store.
    Redis,
    /// In-process map store.
    InMemory,
}

impl CacheBackend {
    /// Parses a configured backend string, case-insensitively.
    ///
    /// Returns `None` for unrecognized values; bootstrap resolves those
    /// to [`CacheBackend::InMemory`] with a warning.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "redis" => Some(Self::Redis),
            "in-memory" => Some(Self::InMemory),
            _ => None,
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redis => write!(f, "redis"),
            Self::InMemory => write!(f, "in-memory"),
        }
    }
}

/// Caching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachingConfig {
    /// Gates all cache interaction; disabled means the no-op backend.
    #[serde(default)]
    pub enabled: bool,
    /// Backend kind: `redis` or `in-memory`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// TTL in seconds applied to cached response-field entries.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: i64,
}

impl Default for CachingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            backend: default_backend(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CachingConfig {
    /// Returns the configured backend kind, or `None` if unrecognized.
    #[must_use]
    pub fn backend_kind(&self) -> Option<CacheBackend> {
        CacheBackend::parse(&self.backend)
    }
}

fn default_backend() -> String {
    "in-memory".to_string()
}

fn default_ttl_secs() -> i64 {
    3600
}

/// Redis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Connection pool size.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            pool_size: default_pool_size(),
        }
    }
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_pool_size() -> usize {
    16
}

/// Transaction runner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionConfig {
    /// Route requests through the caching wrapper instead of the plain runner.
    #[serde(default)]
    pub wrapper_enabled: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log format (json, pretty).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caching_defaults() {
        let caching = CachingConfig::default();
        assert!(!caching.enabled);
        assert_eq!(caching.backend, "in-memory");
        assert_eq!(caching.ttl_secs, 3600);
        assert_eq!(caching.backend_kind(), Some(CacheBackend::InMemory));
    }

    #[test]
    fn test_backend_parse_is_case_insensitive() {
        assert_eq!(CacheBackend::parse("Redis"), Some(CacheBackend::Redis));
        assert_eq!(CacheBackend::parse("REDIS"), Some(CacheBackend::Redis));
        assert_eq!(CacheBackend::parse("In-Memory"), Some(CacheBackend::InMemory));
        assert_eq!(CacheBackend::parse("memcached"), None);
        assert_eq!(CacheBackend::parse(""), None);
    }

    #[test]
    fn test_partial_caching_table_deserializes() {
        let caching: CachingConfig = toml::from_str("enabled = true").unwrap();
        assert!(caching.enabled);
        assert_eq!(caching.backend, "in-memory");
        assert_eq!(caching.ttl_secs, 3600);
    }

    #[test]
    fn test_server_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9999,
            ..ServerConfig::default()
        };
        assert_eq!(server.addr(), "127.0.0.1:9999");
    }

    #[test]
    fn test_backend_display_round_trips() {
        for backend in [CacheBackend::Redis, CacheBackend::InMemory] {
            assert_eq!(CacheBackend::parse(&backend.to_string()), Some(backend));
        }
    }
}
