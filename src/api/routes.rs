//! API Routes
//!
//! Configures the Axum router with all property cache endpoints.

use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, invalidate_handler, metrics_handler, property_list_handler, AppState,
};
use super::response_cache::{cache_response, LISTING_PATH};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /properties` - Property listing (response-cached)
/// - `DELETE /properties/cache` - Drop cached listing and response
/// - `GET /metrics/cache` - Cache hit/miss metrics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Response cache on the listing route only
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cached = Router::new()
        .route(LISTING_PATH, get(property_list_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            cache_response,
        ));

    Router::new()
        .merge(cached)
        .route("/properties/cache", delete(invalidate_handler))
        .route("/metrics/cache", get(metrics_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
