//! API Handlers
//!
//! HTTP request handlers for each property cache endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::warn;

use crate::api::response_cache::{response_key, LISTING_PATH};
use crate::cache::CacheStore;
use crate::config::{Config, DEFAULT_RESPONSE_TTL};
use crate::error::Result;
use crate::listing::{CacheMetricsSnapshot, MetricsReporter, PropertyStore, ReadThroughCache};
use crate::models::{HealthResponse, InvalidateResponse, ListingResponse};

/// Application state shared across all handlers.
///
/// Store handles are injected at construction; nothing is process-global.
#[derive(Clone)]
pub struct AppState {
    /// Cache store shared by the listing cache and the response cache
    pub cache: Arc<dyn CacheStore>,
    /// Read-through access to the property listing
    pub listings: Arc<ReadThroughCache>,
    /// Hit-ratio reporting over `cache`
    pub metrics: Arc<MetricsReporter>,
    /// TTL in seconds for whole cached listing responses
    pub response_ttl: u64,
}

impl AppState {
    /// Creates a new AppState over the given stores with default TTLs.
    pub fn new(cache: Arc<dyn CacheStore>, properties: Arc<dyn PropertyStore>) -> Self {
        let listings = ReadThroughCache::new(cache.clone(), properties);
        Self::assemble(cache, listings, DEFAULT_RESPONSE_TTL)
    }

    /// Creates a new AppState with TTLs and refresh policy from the Config.
    pub fn from_config(
        config: &Config,
        cache: Arc<dyn CacheStore>,
        properties: Arc<dyn PropertyStore>,
    ) -> Self {
        let listings = ReadThroughCache::new(cache.clone(), properties)
            .with_ttl(config.listing_ttl)
            .with_single_flight(config.single_flight);
        Self::assemble(cache, listings, config.response_ttl)
    }

    fn assemble(cache: Arc<dyn CacheStore>, listings: ReadThroughCache, response_ttl: u64) -> Self {
        Self {
            metrics: Arc::new(MetricsReporter::new(cache.clone())),
            listings: Arc::new(listings),
            cache,
            response_ttl,
        }
    }
}

/// Handler for GET /properties
///
/// Returns every property record wrapped in `{"data": [...]}`.
pub async fn property_list_handler(State(state): State<AppState>) -> Result<Json<ListingResponse>> {
    let listing = state.listings.get_all_properties().await?;
    Ok(Json(ListingResponse::new(listing)))
}

/// Handler for GET /metrics/cache
///
/// Always succeeds; reports zeros when the cache store cannot be queried.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<CacheMetricsSnapshot> {
    Json(state.metrics.get_cache_metrics().await)
}

/// Handler for DELETE /properties/cache
///
/// Drops both the cached listing and the cached listing response.
///
/// Fails only if the listing could not be dropped; a stale response expires
/// on its own TTL.
pub async fn invalidate_handler(State(state): State<AppState>) -> Result<Json<InvalidateResponse>> {
    let listing = state.listings.invalidate().await?;
    let response = match state.cache.delete(&response_key(LISTING_PATH)).await {
        Ok(removed) => removed,
        Err(e) => {
            warn!(error = %e, "Cached listing response not dropped");
            false
        }
    };

    Ok(Json(InvalidateResponse { listing, response }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::error::AppError;
    use crate::listing::test_support::{
        flat, CountingPropertyStore, FailingCacheStore, ResponseDeleteFailingStore,
    };

    fn state_with(properties: CountingPropertyStore) -> (AppState, Arc<CountingPropertyStore>) {
        let properties = Arc::new(properties);
        let state = AppState::new(Arc::new(MemoryStore::new()), properties.clone());
        (state, properties)
    }

    #[tokio::test]
    async fn test_property_list_handler() {
        let (state, properties) = state_with(CountingPropertyStore::new(vec![flat()]));

        let response = property_list_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.data, vec![flat()]);

        property_list_handler(State(state)).await.unwrap();
        assert_eq!(properties.queries(), 1);
    }

    #[tokio::test]
    async fn test_property_list_handler_backing_failure() {
        let (state, _) = state_with(CountingPropertyStore::failing());

        let result = property_list_handler(State(state)).await;
        assert!(matches!(result, Err(AppError::BackingStore(_))));
    }

    #[tokio::test]
    async fn test_metrics_handler_after_miss_and_hit() {
        let (state, _) = state_with(CountingPropertyStore::new(vec![flat()]));

        property_list_handler(State(state.clone())).await.unwrap(); // miss
        property_list_handler(State(state.clone())).await.unwrap(); // hit

        let response = metrics_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.hit_ratio, 0.5);
    }

    #[tokio::test]
    async fn test_metrics_handler_fail_soft() {
        let properties = Arc::new(CountingPropertyStore::new(vec![]));
        let state = AppState::new(Arc::new(FailingCacheStore), properties);

        let response = metrics_handler(State(state)).await;
        assert_eq!(response.0, CacheMetricsSnapshot::default());
    }

    #[tokio::test]
    async fn test_invalidate_handler() {
        let (state, properties) = state_with(CountingPropertyStore::new(vec![flat()]));

        property_list_handler(State(state.clone())).await.unwrap();
        let response = invalidate_handler(State(state.clone())).await.unwrap();
        assert!(response.listing);
        assert!(!response.response);

        property_list_handler(State(state)).await.unwrap();
        assert_eq!(properties.queries(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_handler_survives_response_delete_failure() {
        let properties = Arc::new(CountingPropertyStore::new(vec![flat()]));
        let state = AppState::new(Arc::new(ResponseDeleteFailingStore::default()), properties.clone());

        property_list_handler(State(state.clone())).await.unwrap();
        let response = invalidate_handler(State(state.clone())).await.unwrap();
        assert!(response.listing);
        assert!(!response.response);

        property_list_handler(State(state)).await.unwrap();
        assert_eq!(properties.queries(), 2);
    }

    #[tokio::test]
    async fn test_from_config_applies_ttls() {
        let config = Config {
            listing_ttl: 60,
            response_ttl: 30,
            ..Config::default()
        };
        let properties = Arc::new(CountingPropertyStore::new(vec![]));
        let state = AppState::from_config(&config, Arc::new(MemoryStore::new()), properties);

        assert_eq!(state.listings.ttl_secs(), 60);
        assert_eq!(state.response_ttl, 30);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
