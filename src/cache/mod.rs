//! Cache Module
//!
//! The key-value store interface the listing cache talks to, plus an
//! in-memory implementation with TTL expiration and keyspace counters.

mod clock;
mod entry;
mod stats;
mod store;


use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheInfo;
pub use store::MemoryStore;

// == Cache Store Trait ==
/// A key-value store with per-key TTL and cumulative keyspace counters.
///
/// Values are opaque serialized payloads. Implementations may block on I/O
/// and are responsible for their own timeouts.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the live value for `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value and TTL.
    async fn set(&self, key: &str, value: String, ttl_secs: u64) -> Result<()>;

    /// Removes `key`. Returns true if a live entry was removed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Cumulative hit/miss counters since the store was created.
    async fn info(&self) -> Result<CacheInfo>;
}
