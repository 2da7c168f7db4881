//! Response Cache Middleware
//!
//! Caches whole GET responses in the cache store under their own TTL,
//! stacked on top of the listing data cache.

use axum::{
    body::{self, Body, HttpBody},
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use super::handlers::AppState;
use crate::error::AppError;

/// Path of the response-cached listing endpoint
pub const LISTING_PATH: &str = "/properties";

/// Prefix separating cached responses from cached data
pub const RESPONSE_KEY_PREFIX: &str = "response:";

/// Largest response body that will be buffered for caching
pub const MAX_CACHED_BODY: usize = 8 * 1024 * 1024;

/// Cache key for responses served at `path`.
///
/// The query string is ignored so one delete drops every cached variant.
pub fn response_key(path: &str) -> String {
    format!("{RESPONSE_KEY_PREFIX}{path}")
}

/// Serves cached JSON responses and stores fresh 200 responses.
///
/// Only GET requests are cached. Cache store failures fall through to the
/// inner handler.
pub async fn cache_response(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = response_key(request.uri().path());
    let ttl = state.response_ttl;

    match state.cache.get(&key).await {
        Ok(Some(body)) => {
            debug!(key = %key, "Response cache hit");
            return cached_json(body, ttl);
        }
        Ok(None) => debug!(key = %key, "Response cache miss"),
        Err(e) => warn!(key = %key, error = %e, "Response cache read failed"),
    }

    let mut response = next.run(request).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    // Bodies of unknown or oversized length are served uncached
    let cacheable = response
        .body()
        .size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_CACHED_BODY as u64);
    if !cacheable {
        debug!(key = %key, "Response too large to cache");
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, max_age(ttl));
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match body::to_bytes(body, MAX_CACHED_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return AppError::Internal(format!("cannot buffer response: {e}")).into_response();
        }
    };

    match std::str::from_utf8(&bytes) {
        Ok(text) => {
            if let Err(e) = state.cache.set(&key, text.to_string(), ttl).await {
                warn!(key = %key, error = %e, "Response cache write failed");
            }
        }
        Err(e) => warn!(key = %key, error = %e, "Skipping non-UTF-8 response body"),
    }

    parts.headers.insert(header::CACHE_CONTROL, max_age(ttl));
    Response::from_parts(parts, Body::from(bytes))
}

fn cached_json(body: String, ttl: u64) -> Response {
    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::CACHE_CONTROL, max_age(ttl));
    response
}

fn max_age(ttl: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("max-age={ttl}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}
