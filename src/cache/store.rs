//! Memory Store Module
//!
//! In-process cache engine: HashMap storage with TTL expiration and keyspace counters.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheInfo, CacheStore, Clock, SystemClock};
use crate::error::Result;

#[derive(Debug, Default)]
struct Inner {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Keyspace counters
    info: CacheInfo,
}

// == Memory Store ==
/// In-memory [`CacheStore`] with lazy expiry on read.
///
/// Expired entries are dropped when read, or in bulk by [`MemoryStore::purge_expired`].
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store driven by the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            clock,
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut inner = self.inner.write().await;

        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - inner.entries.len();

        let len = inner.entries.len();
        inner.info.set_keys(len);
        removed
    }

    // == TTL ==
    /// Remaining lifetime of a live key in whole seconds.
    pub async fn ttl_remaining_secs(&self, key: &str) -> Option<u64> {
        let now = self.clock.now_ms();
        let inner = self.inner.read().await;
        inner
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.ttl_remaining_secs(now))
    }

    // == Length ==
    /// Returns the number of stored entries, including not-yet-purged expired ones.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    // == Get ==
    /// Expired entries are removed and counted as misses.
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = self.clock.now_ms();
        // Write lock: reads update the keyspace counters
        let mut inner = self.inner.write().await;

        let expired = inner.entries.get(key).map(|entry| entry.is_expired_at(now));
        let live = match expired {
            Some(true) => {
                debug!(key, "Dropping expired entry on read");
                inner.entries.remove(key);
                None
            }
            Some(false) => inner.entries.get(key).map(|entry| entry.value.clone()),
            None => None,
        };

        match live {
            Some(_) => inner.info.record_hit(),
            None => inner.info.record_miss(),
        }
        let len = inner.entries.len();
        inner.info.set_keys(len);

        Ok(live)
    }

    // == Set ==
    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<()> {
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_secs);
        let mut inner = self.inner.write().await;

        inner.entries.insert(key.to_string(), entry);
        let len = inner.entries.len();
        inner.info.set_keys(len);

        debug!(key, ttl_secs, "Stored entry");
        Ok(())
    }

    // == Delete ==
    async fn delete(&self, key: &str) -> Result<bool> {
        let now = self.clock.now_ms();
        let mut inner = self.inner.write().await;

        let removed = inner
            .entries
            .remove(key)
            .is_some_and(|entry| !entry.is_expired_at(now));
        let len = inner.entries.len();
        inner.info.set_keys(len);

        Ok(removed)
    }

    // == Info ==
    async fn info(&self) -> Result<CacheInfo> {
        let inner = self.inner.read().await;
        let mut info = inner.info.clone();
        info.set_keys(inner.entries.len());
        Ok(info)
    }
}
