//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow: fetched sample record → schema inference →
//! top-level filtering → canonical schema JSON.

use json2spark::config::Settings;
use json2spark::http::HttpClient;
use json2spark::sample::{HttpRecordSource, SampleCache};
use json2spark::schema::{filter_fields, infer_schema, StructType, TypeTag};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A JSONPlaceholder-style user record
fn user_fixture() -> serde_json::Value {
    json!({
        "id": 3,
        "name": "Clementine Bauch",
        "username": "Samantha",
        "email": "Nathan@yesenia.net",
        "address": {
            "street": "Douglas Extension",
            "suite": "Suite 847",
            "city": "McKenziehaven",
            "zipcode": "59590-4157",
            "geo": {"lat": "-68.6102", "lng": "-47.0653"}
        },
        "phone": "1-463-123-4447",
        "website": "ramiro.info",
        "company": {
            "name": "Romaguera-Jacobson",
            "catchPhrase": "Face to face bifurcated interface",
            "bs": "e-enable strategic applications"
        }
    })
}

async fn mock_user_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_fixture()))
        .mount(&mock_server)
        .await;

    mock_server
}

fn user_cache(server: &MockServer) -> SampleCache {
    let source = HttpRecordSource::new(HttpClient::new(), &server.uri(), 3, 3).unwrap();
    SampleCache::new(Box::new(source))
}

// ============================================================================
// End-to-end: fetch → infer → canonical JSON
// ============================================================================

#[tokio::test]
async fn test_sample_to_schema_end_to_end() {
    let mock_server = mock_user_server().await;
    let cache = user_cache(&mock_server);

    let record = cache.get().await.unwrap();
    let schema = infer_schema(&record).unwrap();

    let string_field = |name: &str| {
        json!({"name": name, "type": "string", "nullable": false, "metadata": {}})
    };

    assert_eq!(
        schema.to_json(),
        json!({
            "type": "struct",
            "fields": [
                {"name": "id", "type": "integer", "nullable": false, "metadata": {}},
                string_field("name"),
                string_field("username"),
                string_field("email"),
                {
                    "name": "address",
                    "type": {
                        "type": "struct",
                        "fields": [
                            string_field("street"),
                            string_field("suite"),
                            string_field("city"),
                            string_field("zipcode"),
                            {
                                "name": "geo",
                                "type": {
                                    "type": "struct",
                                    "fields": [string_field("lat"), string_field("lng")]
                                },
                                "nullable": false,
                                "metadata": {}
                            }
                        ]
                    },
                    "nullable": false,
                    "metadata": {}
                },
                string_field("phone"),
                string_field("website"),
                {
                    "name": "company",
                    "type": {
                        "type": "struct",
                        "fields": [
                            string_field("name"),
                            string_field("catchPhrase"),
                            string_field("bs")
                        ]
                    },
                    "nullable": false,
                    "metadata": {}
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_sample_cache_fetches_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_fixture()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cache = user_cache(&mock_server);
    let first = cache.get().await.unwrap();
    let second = cache.get().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_refresh_hits_the_server_again() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_fixture()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let cache = user_cache(&mock_server);
    cache.get().await.unwrap();
    cache.refresh().await.unwrap();
}

// ============================================================================
// Settings-driven filtering
// ============================================================================

#[tokio::test]
async fn test_settings_include_set_filters_top_level() {
    let mock_server = mock_user_server().await;
    let cache = user_cache(&mock_server);
    let record = cache.get().await.unwrap();

    let settings = Settings::from_yaml("included_types: [string, struct]").unwrap();
    let schema = infer_schema(&record).unwrap();

    let filtered = filter_fields(&schema, record, &settings.included_set());
    let filtered_schema = infer_schema(&filtered).unwrap();

    // The integer id is dropped; strings and structs survive in order.
    let names: Vec<_> = filtered_schema.field_names().collect();
    assert_eq!(
        names,
        vec![
            "name", "username", "email", "address", "phone", "website", "company"
        ]
    );
}

#[tokio::test]
async fn test_filter_keeps_nested_fields_intact() {
    let mock_server = mock_user_server().await;
    let cache = user_cache(&mock_server);
    let record = cache.get().await.unwrap();

    let schema = infer_schema(&record).unwrap();
    let included = [TypeTag::Struct].into_iter().collect();
    let filtered = filter_fields(&schema, record, &included);

    assert_eq!(
        serde_json::Value::Object(filtered),
        json!({
            "address": user_fixture()["address"],
            "company": user_fixture()["company"]
        })
    );
}

// ============================================================================
// Canonical JSON round-trip
// ============================================================================

#[tokio::test]
async fn test_schema_round_trip() {
    let mock_server = mock_user_server().await;
    let cache = user_cache(&mock_server);
    let record = cache.get().await.unwrap();

    let schema = infer_schema(&record).unwrap();
    let restored: StructType = serde_json::from_value(schema.to_json()).unwrap();

    assert_eq!(restored, schema);
}
