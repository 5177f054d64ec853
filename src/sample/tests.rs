//! Sample cache and source tests

use super::*;
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::JsonObject;
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Source that counts fetches and stamps each record with the fetch number
struct CountingSource {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl RecordSource for CountingSource {
    async fn fetch(&self) -> Result<JsonObject> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut record = JsonObject::new();
        record.insert("fetch".to_string(), json!(n));
        Ok(record)
    }
}

fn counting_cache() -> (SampleCache, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let cache = SampleCache::new(Box::new(CountingSource {
        calls: calls.clone(),
    }));
    (cache, calls)
}

#[tokio::test]
async fn test_get_fetches_once_and_caches() {
    let (cache, calls) = counting_cache();

    let first = cache.get().await.unwrap();
    let second = cache.get().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_refresh_forces_refetch() {
    let (cache, calls) = counting_cache();

    let first = cache.get().await.unwrap();
    let refreshed = cache.refresh().await.unwrap();

    assert_ne!(first, refreshed);
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // The refreshed record is now the cached one.
    assert_eq!(cache.get().await.unwrap(), refreshed);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_update_replaces_without_fetching() {
    let (cache, calls) = counting_cache();

    let mut replacement = JsonObject::new();
    replacement.insert("custom".to_string(), json!(true));
    cache.update(replacement.clone()).await;

    assert_eq!(cache.get().await.unwrap(), replacement);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_http_source_fetches_user_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "name": "Chelsey Dietrich",
            "address": {"city": "Roscoeview"}
        })))
        .mount(&mock_server)
        .await;

    // Pinning the id range to a single value makes the draw deterministic.
    let source = HttpRecordSource::new(HttpClient::new(), &mock_server.uri(), 5, 5).unwrap();
    let record = source.fetch().await.unwrap();

    assert_eq!(record.get("id"), Some(&json!(5)));
    assert_eq!(record.get("name"), Some(&json!("Chelsey Dietrich")));
}

#[tokio::test]
async fn test_http_source_rejects_inverted_id_range() {
    let result = HttpRecordSource::new(HttpClient::new(), "http://localhost", 9, 1);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_http_source_rejects_invalid_base_url() {
    let result = HttpRecordSource::new(HttpClient::new(), "not a url", 1, 9);
    assert!(result.is_err());
}
