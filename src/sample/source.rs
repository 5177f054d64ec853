//! Sample record sources

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::JsonObject;
use async_trait::async_trait;
use rand::Rng;
use tracing::debug;
use url::Url;

/// Where sample records come from
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch one sample record
    async fn fetch(&self) -> Result<JsonObject>;
}

/// Fetches a random user record from a JSONPlaceholder-style API
///
/// Each fetch draws an id uniformly from the configured range and GETs
/// `{base_url}/users/{id}`.
pub struct HttpRecordSource {
    client: HttpClient,
    base_url: Url,
    min_id: u32,
    max_id: u32,
}

impl HttpRecordSource {
    /// Create a source over the given base URL and record id range
    pub fn new(client: HttpClient, base_url: &str, min_id: u32, max_id: u32) -> Result<Self> {
        if min_id > max_id {
            return Err(Error::config(format!(
                "invalid sample id range: {min_id}..={max_id}"
            )));
        }

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            min_id,
            max_id,
        })
    }

    fn record_url(&self, id: u32) -> Result<Url> {
        Ok(self.base_url.join(&format!("users/{id}"))?)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<JsonObject> {
        let id = rand::thread_rng().gen_range(self.min_id..=self.max_id);
        let url = self.record_url(id)?;
        debug!("Fetching sample record from {url}");

        let record: JsonObject = self.client.get_json(url.as_str()).await?;
        Ok(record)
    }
}
