//! Tests for the HTTP transport module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::PageRequest;
use chrono::{TimeZone, Utc};
use reqwest::Method;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::new(server.uri(), "test-token").unwrap();
    HttpClient::new(config).unwrap()
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page", 1)
        .query("size", "10")
        .json(serde_json::json!({"key": "value"}))
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query_value("page"), Some("1"));
    assert_eq!(config.query_value("size"), Some("10"));
    assert!(config.body.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_request_config_omits_empty_filters() {
    let config = RequestConfig::new()
        .page(PageRequest::default())
        .query_non_empty("name", None)
        .query_non_empty("accessPolicy", Some(""))
        .query_non_zero("start", 0)
        .query_timestamp("createdAfter", None);

    assert_eq!(
        config.query,
        vec![
            ("page".to_string(), "0".to_string()),
            ("size".to_string(), "100".to_string()),
        ]
    );
}

#[test]
fn test_request_config_includes_set_filters() {
    let after = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let config = RequestConfig::new()
        .query_non_empty("name", Some("docs"))
        .query_non_zero("end", 20)
        .query_timestamp("createdAfter", Some(&after));

    assert_eq!(config.query_value("name"), Some("docs"));
    assert_eq!(config.query_value("end"), Some("20"));
    assert_eq!(config.query_value("createdAfter"), Some("2024-01-02T03:04:05Z"));
}

#[test]
fn test_repeated_query_keys() {
    let config = RequestConfig::new().query("label", "a").query("label", "b");
    let labels: Vec<_> = config
        .query
        .iter()
        .filter(|(k, _)| k == "label")
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(labels, vec!["a", "b"]);
}

#[tokio::test]
async fn test_request_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stages"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .request(Method::GET, "/stages", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(body.unwrap()["total"], 0);
}

#[tokio::test]
async fn test_request_query_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search_stores"))
        .and(query_param("dryRun", "true"))
        .and(body_json(serde_json::json!({"name": "store"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "ss-1"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .request(
            Method::POST,
            "/search_stores",
            RequestConfig::new()
                .query("dryRun", "true")
                .json(serde_json::json!({"name": "store"})),
        )
        .await
        .unwrap();

    assert_eq!(body.unwrap()["id"], "ss-1");
}

#[tokio::test]
async fn test_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connectors"))
        .and(header("X-Project", "p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .api_key("k")
        .header("X-Project", "p-1")
        .build()
        .unwrap();
    let client = HttpClient::new(config).unwrap();

    let body = client
        .request(Method::GET, "/connectors", RequestConfig::new())
        .await
        .unwrap();
    assert!(body.is_some());
}

#[tokio::test]
async fn test_no_content_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/stages/s-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .request(Method::DELETE, "/stages/s-1", RequestConfig::new())
        .await
        .unwrap();

    assert!(body.is_none());
}

#[tokio::test]
async fn test_404_and_500_surface_identically() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stages/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stages/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client
        .request(Method::GET, "/stages/missing", RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404, ref body } if body == "Not found"));

    let err = client
        .request(Method::GET, "/stages/broken", RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, ref body } if body == "boom"));
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request(Method::GET, "/stages", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .request(
            Method::GET,
            "/slow",
            RequestConfig::new().timeout(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_request_raw_returns_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stages/s-1/files/f-1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7".to_vec()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client
        .request_raw(Method::GET, "/stages/s-1/files/f-1", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(&bytes[..], b"%PDF-1.7");
}

#[tokio::test]
async fn test_with_namespace_prefixes_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).with_namespace("/api/v1");
    client
        .request(Method::GET, "/repositories", RequestConfig::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fetch_rejects_missing_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stages/s-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result: crate::Result<serde_json::Value> =
        fetch(&client, Method::GET, "/stages/s-1", RequestConfig::new()).await;

    assert!(matches!(result, Err(Error::Decode { .. })));
}
