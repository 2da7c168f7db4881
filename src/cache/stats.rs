//! Cache Statistics Module
//!
//! Keyspace counters reported by a cache store's `info()` call.

use serde::Serialize;

// == Cache Info ==
/// Cumulative keyspace counters since the store was created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    /// Lookups that found a live entry
    pub keyspace_hits: u64,
    /// Lookups that found nothing or an expired entry
    pub keyspace_misses: u64,
    /// Live keys at the time of the call
    pub keys: usize,
}

impl CacheInfo {
    // == Constructor ==
    /// Creates a CacheInfo with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.keyspace_hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.keyspace_misses += 1;
    }

    // == Update Key Count ==
    pub fn set_keys(&mut self, count: usize) {
        self.keys = count;
    }
}
