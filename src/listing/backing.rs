//! Backing property store interface and the in-memory implementation.

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{AppError, Result};
use crate::listing::PropertyRecord;

// == Property Store Trait ==
/// The durable source of property records.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Every property row, projected to the listing fields.
    ///
    /// No ordering, filtering or pagination is applied.
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>>;
}

// == In-Memory Property Store ==
/// Property rows held in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryPropertyStore {
    records: RwLock<Vec<PropertyRecord>>,
}

impl InMemoryPropertyStore {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Loads rows from a JSON file containing an array of records.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let records: Vec<PropertyRecord> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("invalid records in {}: {}", path.display(), e)))?;

        info!(count = records.len(), path = %path.display(), "Loaded property records");
        Ok(Self::new(records))
    }

    /// Appends a row. The cached listing is not touched.
    pub async fn insert(&self, record: PropertyRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl PropertyStore for InMemoryPropertyStore {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>> {
        Ok(self.records.read().await.clone())
    }
}
