//! Property Cache - A read-through cache service for property listings
//!
//! Serves listings from a TTL cache, refills from the backing store on miss,
//! and reports cache hit-ratio metrics.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
