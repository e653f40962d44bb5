//! Integration tests for the HTTP client functionality.
//!
//! These tests verify request building, signing headers, response parsing,
//! and error handling behavior against a mock server.

use std::collections::HashMap;

use serde_json::json;
use starkbank::auth::signing_message;
use starkbank::clients::{HttpClient, HttpMethod, HttpRequest};
use starkbank::{
    Environment, HostUrl, HttpError, InvalidHttpRequestError, Language, Project, ProjectId,
    StarkConfig, User,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_user() -> User {
    Project::new(
        Environment::Sandbox,
        ProjectId::new("5656565656565656").unwrap(),
        |message: &str| format!("sig-{}", message.len()),
    )
    .into()
}

fn create_test_client(server: &MockServer, language: Language) -> HttpClient {
    let config = StarkConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .language(language)
        .user_agent_prefix("TestApp/1.0")
        .build();
    HttpClient::new(&config).unwrap()
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_get_request_carries_default_and_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/transfer"))
        .and(query_param("limit", "5"))
        .and(header("Access-Id", "project/5656565656565656"))
        .and(header_exists("Access-Time"))
        .and(header_exists("Access-Signature"))
        .and(header("Accept-Language", "pt-BR"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transfers": []})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "transfer")
        .query_param("limit", "5")
        .build()
        .unwrap();

    let response = create_test_client(&server, Language::PtBr)
        .request(request, &create_test_user())
        .await;

    let response = assert_ok!(response);
    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!({"transfers": []}));
}

#[tokio::test]
async fn test_post_request_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/boleto-holmes"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"holmes": [{"boletoId": "1"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"holmes": []})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Post, "boleto-holmes")
        .body(json!({"holmes": [{"boletoId": "1"}]}))
        .build()
        .unwrap();

    let response = create_test_client(&server, Language::EnUs)
        .request(request, &create_test_user())
        .await;
    assert!(assert_ok!(response).is_ok());
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/boleto/1"))
        .and(header("X-Custom-Header", "custom-value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"boleto": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "boleto/1")
        .header("X-Custom-Header", "custom-value")
        .build()
        .unwrap();

    let response = create_test_client(&server, Language::EnUs)
        .request(request, &create_test_user())
        .await;
    assert_ok!(response);
}

#[test]
fn test_signature_covers_access_id_time_and_body() {
    let user = create_test_user();
    let headers = HttpClient::auth_headers(&user, 1_600_000_000, "{}");

    let message = signing_message("project/5656565656565656", "1600000000", "{}");
    assert_eq!(message, "project/5656565656565656:1600000000:{}");
    assert_eq!(
        headers.get("Access-Signature"),
        Some(&format!("sig-{}", message.len()))
    );
}

#[test]
fn test_invalid_request_produces_correct_error() {
    let result = HttpRequest::builder(HttpMethod::Post, "transfer").build();
    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::MissingBody { .. })
    ));

    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "transfer".to_string(),
        body: Some(json!({"key": "value"})),
        query: None,
        extra_headers: Some(HashMap::new()),
    };
    assert!(matches!(
        request.verify(),
        Err(InvalidHttpRequestError::UnexpectedBody { .. })
    ));
}

// ============================================================================
// Response Tests
// ============================================================================

#[tokio::test]
async fn test_error_statuses_are_returned_as_responses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/transfer/1"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("X-Request-Id", "req-123")
                .set_body_json(json!({"errors": [{"code": "invalidId", "message": "Bad id"}]})),
        )
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "transfer/1")
        .build()
        .unwrap();
    let response = create_test_client(&server, Language::EnUs)
        .request(request, &create_test_user())
        .await;

    let response = assert_ok!(response);
    assert_eq!(response.code, 400);
    assert!(!response.is_ok());
    assert_eq!(response.request_id(), Some("req-123"));
    assert_eq!(response.body["errors"][0]["code"], "invalidId");
}

#[tokio::test]
async fn test_non_json_and_empty_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/text"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/empty"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let client = create_test_client(&server, Language::EnUs);
    let user = create_test_user();

    let request = HttpRequest::builder(HttpMethod::Get, "text").build().unwrap();
    let response = client.request(request, &user).await.unwrap();
    assert_eq!(response.body, json!({"raw_body": "Bad Gateway"}));

    let request = HttpRequest::builder(HttpMethod::Delete, "empty")
        .build()
        .unwrap();
    let response = client.request(request, &user).await.unwrap();
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on a port released right after binding it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = StarkConfig::builder()
        .host(HostUrl::new(format!("http://127.0.0.1:{port}")).unwrap())
        .build();
    let client = HttpClient::new(&config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "transfer")
        .build()
        .unwrap();
    let result = client.request(request, &create_test_user()).await;

    assert!(matches!(assert_err!(result), HttpError::Network(_)));
}
