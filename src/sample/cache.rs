//! Caller-owned cache of a single sample record

use super::source::RecordSource;
use crate::error::Result;
use crate::types::JsonObject;
use tokio::sync::RwLock;
use tracing::debug;

/// Cache holding the current sample record
///
/// Explicit operations only: `get` serves the cached record and fetches once
/// on a cold cache, `update` replaces it, `refresh` forces a re-fetch. The
/// cache is owned and passed around by the CLI layer; the schema engine
/// never sees it.
pub struct SampleCache {
    source: Box<dyn RecordSource>,
    current: RwLock<Option<JsonObject>>,
}

impl SampleCache {
    /// Create an empty cache over the given source
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self {
            source,
            current: RwLock::new(None),
        }
    }

    /// Return the cached record, fetching once on a cold cache
    pub async fn get(&self) -> Result<JsonObject> {
        if let Some(record) = self.current.read().await.as_ref() {
            return Ok(record.clone());
        }

        self.refresh().await
    }

    /// Replace the cached record
    pub async fn update(&self, record: JsonObject) {
        *self.current.write().await = Some(record);
    }

    /// Force a re-fetch, replacing the cached record
    pub async fn refresh(&self) -> Result<JsonObject> {
        let record = self.source.fetch().await?;
        debug!("Refreshed sample record ({} top-level keys)", record.len());

        *self.current.write().await = Some(record.clone());
        Ok(record)
    }
}
