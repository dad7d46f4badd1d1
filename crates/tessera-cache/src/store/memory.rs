//! In-memory cache store.

use super::CacheStore;
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use parking_lot::{Mutex, RwLock};
use shaku::Component;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Interval between background sweeps of expired entries.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(180);

/// A single stored value with its absolute expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-process cache store backed by a lock-protected map.
///
/// Expired entries are removed lazily on read and proactively by the
/// background sweeper; the sweeper bounds memory growth, lazy eviction
/// keeps reads correct between sweeps. The map lock is never held
/// across an await point.
#[derive(Component)]
#[shaku(interface = CacheStore)]
pub struct InMemoryCacheStore {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl InMemoryCacheStore {
    /// Creates an empty store. The sweeper is not started; call
    /// [`start_sweeper`](Self::start_sweeper) from within a Tokio
    /// runtime to enable proactive expiry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            sweeper: Mutex::new(None),
        }
    }

    /// Starts the background sweep task. Replaces (and aborts) any
    /// previously started sweeper.
    pub fn start_sweeper(&self, interval: Duration) {
        let entries = Arc::clone(&self.entries);
        let handle = tokio::spawn(async move {
            info!(
                "Starting in-memory cache sweeper with interval of {}s",
                interval.as_secs()
            );
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // first tick fires immediately
            loop {
                ticker.tick().await;
                let removed = Self::purge_expired_from(&entries);
                if removed > 0 {
                    info!("Cache sweep removed {} expired entries", removed);
                } else {
                    debug!("Cache sweep found no expired entries");
                }
            }
        });

        if let Some(old) = self.sweeper.lock().replace(handle) {
            old.abort();
        }
    }

    /// Removes all expired entries now; returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        Self::purge_expired_from(&self.entries)
    }

    /// Number of live (possibly expired, not yet purged) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn purge_expired_from(entries: &RwLock<HashMap<String, CacheEntry>>) -> usize {
        let now = Utc::now();
        let mut map = entries.write();
        let before = map.len();
        map.retain(|_, entry| !entry.is_expired(now));
        before - map.len()
    }
}

impl Default for InMemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InMemoryCacheStore {
    fn drop(&mut self) {
        if let Some(handle) = self.sweeper.lock().take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Option<String> {
        let now = Utc::now();
        {
            let map = self.entries.read();
            match map.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        // Lazy eviction on read; re-check under the write lock so a
        // concurrent overwrite is not discarded.
        let mut map = self.entries.write();
        if map.get(key).is_some_and(|entry| entry.is_expired(now)) {
            map.remove(key);
        }
        None
    }

    async fn put(&self, key: &str, value: &str, ttl_secs: i64) {
        let expires_at = if ttl_secs > 0 {
            Some(Utc::now() + ChronoDuration::seconds(ttl_secs))
        } else {
            None
        };
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at,
        };
        self.entries.write().insert(key.to_string(), entry);
    }

    async fn clear(&self, key: &str) {
        self.entries.write().remove(key);
    }

    async fn clear_all(&self) {
        self.entries.write().clear();
    }
}
