//! Integration tests for the HTTP transport layer.
//!
//! These tests verify URL construction, header merging, query encoding,
//! and the mapping of transport outcomes onto [`HttpError`] variants.

use heroes_api::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Request/Response Round Trips
// ============================================================================

#[tokio::test]
async fn test_get_parses_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "A"}])))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Get, "api/heroes")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!([{"id": 1, "name": "A"}]));
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Get, "api/heroes")
        .build()
        .unwrap();

    assert!(client.request(request).await.is_ok());
}

#[tokio::test]
async fn test_body_type_sets_content_type_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/heroes"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "Zorg"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7, "name": "Zorg"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Post, "api/heroes")
        .body(json!({"name": "Zorg"}))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_query_params_are_percent_encoded() {
    let server = MockServer::start().await;
    // The matcher compares decoded values, so matching proves the raw
    // ampersand traveled encoded rather than splitting the query string.
    Mock::given(method("GET"))
        .and(path("/api/heroes/"))
        .and(query_param("name", "a&b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Get, "api/heroes/")
        .query_param("name", "a&b")
        .build()
        .unwrap();

    assert!(client.request(request).await.is_ok());
}

#[tokio::test]
async fn test_empty_body_degrades_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/heroes/7"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Delete, "api/heroes/7")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.body, json!({}));
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_non_2xx_maps_to_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/heroes/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Get, "api/heroes/42")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 404);
            assert!(e.message.contains("Not found"));
        }
        other => panic!("expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_message_falls_back_to_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/heroes/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Get, "api/heroes/42")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(error.to_string().contains("HTTP 404"));
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = HttpClient::new(uri, None);
    let request = HttpRequest::builder(HttpMethod::Get, "api/heroes")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;

    // Builder-level rejection
    assert!(HttpRequest::builder(HttpMethod::Put, "api/heroes")
        .build()
        .is_err());

    // Nothing reached the server
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}
