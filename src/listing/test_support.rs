//! Test doubles for the cache and property stores.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use crate::api::response_cache::RESPONSE_KEY_PREFIX;
use crate::cache::{CacheInfo, CacheStore, MemoryStore};
use crate::error::{AppError, Result};
use crate::listing::{PropertyRecord, PropertyStore};

pub(crate) fn flat() -> PropertyRecord {
    PropertyRecord {
        id: 1,
        title: "Flat".to_string(),
        description: "Nice".to_string(),
        price: 100000.0,
        location: "City".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    }
}

/// Property store that counts queries and can be slowed down or broken.
#[derive(Debug, Default)]
pub(crate) struct CountingPropertyStore {
    records: RwLock<Vec<PropertyRecord>>,
    queries: AtomicUsize,
    delay: Option<Duration>,
    fail: bool,
}

impl CountingPropertyStore {
    pub(crate) fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub(crate) async fn push(&self, record: PropertyRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl PropertyStore for CountingPropertyStore {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(AppError::BackingStore("connection refused".to_string()));
        }
        Ok(self.records.read().await.clone())
    }
}

/// Cache store whose every operation fails.
#[derive(Debug, Default)]
pub(crate) struct FailingCacheStore;

#[async_trait]
impl CacheStore for FailingCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(AppError::CacheBackend("connection reset".to_string()))
    }

    async fn set(&self, _key: &str, _value: String, _ttl_secs: u64) -> Result<()> {
        Err(AppError::CacheBackend("connection reset".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Err(AppError::CacheBackend("connection reset".to_string()))
    }

    async fn info(&self) -> Result<CacheInfo> {
        Err(AppError::CacheBackend("connection reset".to_string()))
    }
}

/// Empty cache store reporting fixed keyspace counters.
#[derive(Debug)]
pub(crate) struct FixedInfoStore {
    info: CacheInfo,
}

impl FixedInfoStore {
    pub(crate) fn new(hits: u64, misses: u64) -> Self {
        Self {
            info: CacheInfo {
                keyspace_hits: hits,
                keyspace_misses: misses,
                keys: 0,
            },
        }
    }
}

#[async_trait]
impl CacheStore for FixedInfoStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String, _ttl_secs: u64) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn info(&self) -> Result<CacheInfo> {
        Ok(self.info.clone())
    }
}

/// Memory store that refuses to delete cached responses.
#[derive(Debug, Default)]
pub(crate) struct ResponseDeleteFailingStore {
    inner: MemoryStore,
}

#[async_trait]
impl CacheStore for ResponseDeleteFailingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<()> {
        self.inner.set(key, value, ttl_secs).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        if key.starts_with(RESPONSE_KEY_PREFIX) {
            return Err(AppError::CacheBackend("READONLY replica".to_string()));
        }
        self.inner.delete(key).await
    }

    async fn info(&self) -> Result<CacheInfo> {
        self.inner.info().await
    }
}
