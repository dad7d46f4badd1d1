//! Reserved field names and cache key generation.

use chrono::Utc;

/// Field name carrying the cache key, on both the request and response side.
pub const CACHE_KEY_FIELD: &str = "tf_cache_key";

/// Prefix of generated cache keys.
pub const CACHE_KEY_PREFIX: &str = "TF_CACHE_";

/// Case-insensitive field-name prefix marking response fields to extract
/// and cache.
pub const CACHEABLE_FIELD_PREFIX: &str = "tablefacility";

/// Reserved key used by the bootstrap liveness probe.
pub const HEALTH_CHECK_KEY: &str = "__health_check__";

/// Generates a cache key for a transaction.
///
/// Keys for the same transaction ID within the same millisecond collide;
/// the last write wins.
#[must_use]
pub fn generate_cache_key(trx_id: &str) -> String {
    format!(
        "{}{}_{}",
        CACHE_KEY_PREFIX,
        trx_id,
        Utc::now().timestamp_millis()
    )
}

/// Whether a response field name marks its field as cacheable.
#[must_use]
pub fn is_cacheable_field(name: &str) -> bool {
    name.to_ascii_lowercase().starts_with(CACHEABLE_FIELD_PREFIX)
}
