//! Cache hit-ratio reporting.

use std::sync::Arc;

use tracing::warn;

use crate::cache::CacheStore;
use crate::error::Result;
use crate::listing::CacheMetricsSnapshot;

// == Metrics Reporter ==
/// Derives hit/miss metrics from the cache store's keyspace counters.
pub struct MetricsReporter {
    cache: Arc<dyn CacheStore>,
}

impl MetricsReporter {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    // == Get Cache Metrics ==
    /// Current hit/miss counters and hit ratio.
    ///
    /// Never fails: if the store cannot report, a zeroed snapshot is returned
    /// and the error is logged.
    pub async fn get_cache_metrics(&self) -> CacheMetricsSnapshot {
        self.try_snapshot().await.unwrap_or_else(|e| {
            warn!(error = %e, "Cache metrics unavailable, reporting zeros");
            CacheMetricsSnapshot::default()
        })
    }

    async fn try_snapshot(&self) -> Result<CacheMetricsSnapshot> {
        let info = self.cache.info().await?;
        Ok(CacheMetricsSnapshot::from_counters(
            info.keyspace_hits,
            info.keyspace_misses,
        ))
    }
}
