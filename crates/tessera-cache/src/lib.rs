//! # Tessera Cache
//!
//! The field caching layer of the Tessera transaction gateway:
//!
//! - [`CacheStore`]: backend-agnostic key/value store with TTL, in
//!   Redis-backed, in-memory, and no-op variants.
//! - [`CacheRuntime`] and [`CacheBootstrap`]: startup-time backend
//!   resolution with a health-checked fallback from Redis to the
//!   in-memory store.
//! - [`FieldHydrationService`]: merges previously cached fields into
//!   inbound request fields.
//! - [`ResponseCacheService`]: extracts cacheable response fields into
//!   the store and replaces them with a generated cache key.
//!
//! Failures never cross the cache boundary: every backend error
//! degrades to a miss or a skipped write, plus a log line.

pub mod bootstrap;
pub mod error;
pub mod hydration;
pub mod keys;
pub mod populator;
pub mod response;
pub mod runtime;
pub mod store;

pub use bootstrap::{select_store, CacheBootstrap};
pub use error::{CacheError, CacheResult};
pub use hydration::{FieldHydrationService, FieldHydrationServiceImpl, FieldHydrationServiceImplParameters};
pub use populator::{CachePopulator, TEST_CACHE_KEY};
pub use response::{
    ResponseCacheService, ResponseCacheServiceImpl, ResponseCacheServiceImplParameters,
    DEFAULT_TTL_SECS,
};
pub use runtime::CacheRuntime;
pub use store::{
    create_pool, CacheStore, InMemoryCacheStore, InMemoryCacheStoreParameters, NoOpCacheStore,
    RedisCacheStore, SWEEP_INTERVAL,
};
