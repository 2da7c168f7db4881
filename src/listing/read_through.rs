//! Read-Through Cache
//!
//! Serves the property listing from the cache store, falling back to the
//! backing store on a miss and repopulating the cache with a TTL.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::error::Result;
use crate::listing::{PropertyListing, PropertyStore, LISTING_CACHE_KEY, LISTING_TTL_SECS};

// == Read-Through Cache ==
/// Cache-aside access to the full property listing.
///
/// Without single-flight, concurrent misses each query the backing store and
/// each overwrite the cached listing; the last write's TTL wins.
pub struct ReadThroughCache {
    cache: Arc<dyn CacheStore>,
    properties: Arc<dyn PropertyStore>,
    ttl_secs: u64,
    /// Held while refreshing when single-flight is enabled
    refresh_lock: Option<Mutex<()>>,
}

impl ReadThroughCache {
    // == Constructor ==
    /// Creates a read-through cache over the given stores with the default TTL.
    pub fn new(cache: Arc<dyn CacheStore>, properties: Arc<dyn PropertyStore>) -> Self {
        Self {
            cache,
            properties,
            ttl_secs: LISTING_TTL_SECS,
            refresh_lock: None,
        }
    }

    /// Overrides the TTL applied when the listing is repopulated.
    pub fn with_ttl(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Serializes refreshes so at most one backing-store query runs per miss
    /// window in this process.
    pub fn with_single_flight(mut self, enabled: bool) -> Self {
        self.refresh_lock = enabled.then(|| Mutex::new(()));
        self
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    // == Get All Properties ==
    /// Returns the cached listing, or loads and caches it on a miss.
    ///
    /// Backing-store failures propagate. Cache-store failures do not: an
    /// unreadable cache is treated as a miss and a failed write is logged.
    pub async fn get_all_properties(&self) -> Result<PropertyListing> {
        if let Some(listing) = self.cached().await {
            return Ok(listing);
        }

        match &self.refresh_lock {
            None => self.refresh().await,
            Some(lock) => {
                let _guard = lock.lock().await;
                // Another caller may have refreshed while we waited
                if let Some(listing) = self.cached().await {
                    return Ok(listing);
                }
                self.refresh().await
            }
        }
    }

    // == Invalidate ==
    /// Drops the cached listing. Returns true if one was present.
    pub async fn invalidate(&self) -> Result<bool> {
        let removed = self.cache.delete(LISTING_CACHE_KEY).await?;
        info!(key = LISTING_CACHE_KEY, removed, "Invalidated property listing cache");
        Ok(removed)
    }

    async fn cached(&self) -> Option<PropertyListing> {
        let raw = match self.cache.get(LISTING_CACHE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = LISTING_CACHE_KEY, "Cache miss");
                return None;
            }
            Err(e) => {
                warn!(key = LISTING_CACHE_KEY, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str::<PropertyListing>(&raw) {
            Ok(listing) => {
                debug!(key = LISTING_CACHE_KEY, count = listing.len(), "Cache hit");
                Some(listing)
            }
            Err(e) => {
                warn!(key = LISTING_CACHE_KEY, error = %e, "Undecodable cached listing, treating as miss");
                None
            }
        }
    }

    async fn refresh(&self) -> Result<PropertyListing> {
        let listing = PropertyListing::new(self.properties.fetch_all().await?);

        match serde_json::to_string(&listing) {
            Ok(payload) => {
                if let Err(e) = self.cache.set(LISTING_CACHE_KEY, payload, self.ttl_secs).await {
                    warn!(key = LISTING_CACHE_KEY, error = %e, "Cache write failed");
                }
            }
            Err(e) => warn!(key = LISTING_CACHE_KEY, error = %e, "Cannot encode listing for cache"),
        }

        info!(
            key = LISTING_CACHE_KEY,
            count = listing.len(),
            ttl_secs = self.ttl_secs,
            "Refreshed property listing from backing store"
        );
        Ok(listing)
    }
}
