//! Cache Entry Module
//!
//! Defines a stored value together with its absolute expiry.

// == Cache Entry ==
/// A single stored value and its expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload (serialized JSON)
    pub value: String,
    /// Write timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry written at `now_ms` that lives for `ttl_secs`.
    pub fn new(value: String, now_ms: u64, ttl_secs: u64) -> Self {
        Self {
            value,
            stored_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_secs.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// An entry is expired once `now_ms` reaches its expiration time.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime in whole seconds as of `now_ms`, zero once expired.
    pub fn ttl_remaining_secs(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms) / 1000
    }
}
