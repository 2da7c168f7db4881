//! Response DTOs for the property cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::listing::{PropertyListing, PropertyRecord};

/// Response body for the listing endpoint (GET /properties)
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    /// Property records in backing-store order
    pub data: Vec<PropertyRecord>,
}

impl ListingResponse {
    pub fn new(listing: PropertyListing) -> Self {
        Self {
            data: listing.into_records(),
        }
    }
}

/// Response body for cache invalidation (DELETE /properties/cache)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// Whether a cached listing was dropped
    pub listing: bool,
    /// Whether a cached listing response was dropped
    pub response: bool,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
