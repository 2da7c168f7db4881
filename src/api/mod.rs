//! API Module
//!
//! HTTP handlers and routing for the property cache REST API.
//!
//! # Endpoints
//! - `GET /properties` - Property listing, `{"data": [...]}`
//! - `DELETE /properties/cache` - Invalidate cached listing
//! - `GET /metrics/cache` - Cache hit/miss metrics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod response_cache;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
