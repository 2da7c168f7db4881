//! Listing Module
//!
//! Read-through caching of the property listing and cache hit-ratio metrics.

mod backing;
mod metrics;
mod models;
mod read_through;

#[cfg(test)]
pub(crate) mod test_support;

pub use backing::{InMemoryPropertyStore, PropertyStore};
pub use metrics::MetricsReporter;
pub use models::{CacheMetricsSnapshot, PropertyListing, PropertyRecord};
pub use read_through::ReadThroughCache;

// == Public Constants ==
/// Cache key holding the serialized property listing
pub const LISTING_CACHE_KEY: &str = "all_properties";

/// Lifetime of the cached listing in seconds (1 hour)
pub const LISTING_TTL_SECS: u64 = 3600;
