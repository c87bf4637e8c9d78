//! Tests for the HTTP client module

use super::*;
use crate::auth::API_KEY_HEADER;
use crate::config::ClientConfig;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .base_url(base_url)
        .api_key("test-key")
        .build()
        .unwrap()
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page", "1")
        .query("limit", "100")
        .header("X-Request-Id", "abc123");

    assert_eq!(config.query[0], ("page".to_string(), "1".to_string()));
    assert_eq!(config.query[1], ("limit".to_string(), "100".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
}

#[tokio::test]
async fn test_get_sends_api_key_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/ping"))
        .and(header(API_KEY_HEADER, "test-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(test_config(&mock_server.uri())).unwrap();
    let response = client.get("/api/v1/ping").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_get_with_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("limit", "100"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(test_config(&mock_server.uri())).unwrap();
    let response = client
        .get_with_config(
            "/api/v1/search",
            RequestConfig::new().query("limit", "100").query("page", "2"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_status_is_passed_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(test_config(&mock_server.uri())).unwrap();
    let response = client.get("/api/v1/missing").await.unwrap();

    // No retry, no error mapping at this layer
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_full_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    // Base URL points nowhere useful; the absolute URL wins
    let client = HttpClient::new(test_config("https://otx.invalid")).unwrap();
    let response = client
        .get(&format!("{}/elsewhere", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[test]
fn test_debug_hides_api_key() {
    let client = HttpClient::new(test_config("https://otx.invalid")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(!debug.contains("test-key"));
}
