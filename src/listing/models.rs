//! Property listing data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Property Record ==
/// One property row, projected to the fields the listing exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

// == Property Listing ==
/// All property records in backing-store order.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyListing(pub Vec<PropertyRecord>);

impl PropertyListing {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.0
    }

    pub fn into_records(self) -> Vec<PropertyRecord> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PropertyRecord>> for PropertyListing {
    fn from(records: Vec<PropertyRecord>) -> Self {
        Self(records)
    }
}

// == Cache Metrics Snapshot ==
/// Hit/miss counters and the derived hit ratio at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheMetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
    /// hits / (hits + misses), two decimals, 0 when there were no lookups
    pub hit_ratio: f64,
}

impl CacheMetricsSnapshot {
    pub fn from_counters(hits: u64, misses: u64) -> Self {
        // Summed as floats: external stores may report counters near u64::MAX
        let total = hits as f64 + misses as f64;
        let hit_ratio = if total == 0.0 {
            0.0
        } else {
            round2(hits as f64 / total)
        };
        Self {
            hits,
            misses,
            hit_ratio,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
