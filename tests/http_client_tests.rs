//! Integration tests for the HTTP client functionality.
//!
//! These tests verify request building, response parsing and error
//! handling against a mock server.

use std::collections::BTreeMap;

use serde_json::json;
use stormpath::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use stormpath::{ApiKey, BaseUrl, InvalidHttpRequestError, StormpathConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the given base URL.
fn create_test_config(base_url: &str) -> StormpathConfig {
    StormpathConfig::builder()
        .api_key(ApiKey::new("test-id", "test-secret").unwrap())
        .base_url(BaseUrl::new(base_url).unwrap())
        .user_agent_prefix("MyApp/1.0")
        .build()
        .unwrap()
}

// ============================================================================
// Integration Tests
// ============================================================================

#[tokio::test]
async fn test_full_workflow_config_to_client_to_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/applications"))
        .and(query_param("limit", "50"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Stormpath-Request-Id", "req-1")
                .set_body_json(json!({"size": 0, "items": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&format!("{}/v1", server.uri()));
    let client = HttpClient::new(&config).unwrap();

    assert!(client.default_headers()["User-Agent"].starts_with("MyApp/1.0 | "));

    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/v1/applications", server.uri()))
        .query(BTreeMap::from([("limit".to_string(), "50".to_string())]))
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(response.is_ok());
    assert_eq!(response.request_id(), Some("req-1"));
    assert_eq!(response.body["size"], json!(0));
}

#[tokio::test]
async fn test_post_sends_json_body_with_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/applications"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "my-app"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"name": "my-app"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&format!("{}/v1", server.uri()));
    let client = HttpClient::new(&config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Post, format!("{}/v1/applications", server.uri()))
        .body(json!({"name": "my-app"}))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_empty_response_body_decodes_as_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/applications/a1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let config = create_test_config(&format!("{}/v1", server.uri()));
    let client = HttpClient::new(&config).unwrap();

    let request =
        HttpRequest::builder(HttpMethod::Delete, format!("{}/v1/applications/a1", server.uri()))
            .build()
            .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_error_response_keeps_code_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/applications/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "message": "The requested resource does not exist."
        })))
        .mount(&server)
        .await;

    let config = create_test_config(&format!("{}/v1", server.uri()));
    let client = HttpClient::new(&config).unwrap();

    let request = HttpRequest::builder(
        HttpMethod::Get,
        format!("{}/v1/applications/missing", server.uri()),
    )
    .tries(3)
    .build()
    .unwrap();

    let err = client.request(request).await.unwrap_err();

    // 404 is never retried, whatever `tries` says.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
    let HttpError::Response(response) = err else {
        panic!("expected a response error");
    };
    assert_eq!(response.code, 404);
    assert_eq!(
        response.body["message"],
        json!("The requested resource does not exist.")
    );
}

#[tokio::test]
async fn test_invalid_request_produces_correct_error() {
    // POST without body should fail
    let result = HttpRequest::builder(HttpMethod::Post, "https://api.stormpath.com/v1/applications")
        .build();

    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::MissingBody { .. })
    ));

    // Body without body_type should fail when we manually construct
    let request = HttpRequest {
        http_method: HttpMethod::Get,
        url: "https://api.stormpath.com/v1/applications".to_string(),
        body: Some(json!({"key": "value"})),
        body_type: None,
        query: None,
        tries: 1,
    };

    assert!(matches!(
        request.verify(),
        Err(InvalidHttpRequestError::MissingBodyType)
    ));
}

#[test]
fn test_http_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
}
