//! Integration tests for API version and environment routing.

use serde_json::json;
use starkbank::clients::{HttpClient, HttpMethod, HttpRequest};
use starkbank::{
    ApiVersion, ConfigError, Environment, HostUrl, Project, ProjectId, StarkConfig, User,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_in(environment: Environment) -> User {
    Project::new(
        environment,
        ProjectId::new("5656565656565656").unwrap(),
        |_: &str| "signature".to_string(),
    )
    .into()
}

// =============================================================================
// Version Parsing Tests
// =============================================================================

#[test]
fn test_latest_version_is_default() {
    assert_eq!(ApiVersion::default(), ApiVersion::latest());
    assert_eq!(StarkConfig::default().api_version(), &ApiVersion::V2);
}

#[test]
fn test_future_versions_are_accepted_as_custom() {
    let version: ApiVersion = "v3".parse().unwrap();
    assert_eq!(version, ApiVersion::Custom("v3".to_string()));
    assert_eq!(version.to_string(), "v3");
}

#[test]
fn test_malformed_versions_are_rejected() {
    for input in ["", "2", "version2", "v2.1"] {
        let result = input.parse::<ApiVersion>();
        assert!(
            matches!(result, Err(ConfigError::InvalidApiVersion { .. })),
            "{input:?} should be rejected"
        );
    }
}

// =============================================================================
// Environment Routing Tests
// =============================================================================

#[test]
fn test_host_follows_user_environment() {
    let client = HttpClient::new(&StarkConfig::default()).unwrap();

    assert_eq!(
        client.base_uri(&user_in(Environment::Sandbox)),
        "https://sandbox.api.starkbank.com"
    );
    assert_eq!(
        client.base_uri(&user_in(Environment::Production)),
        "https://api.starkbank.com"
    );
}

#[test]
fn test_configured_host_overrides_environment() {
    let config = StarkConfig::builder()
        .host(HostUrl::new("http://localhost:8080").unwrap())
        .build();
    let client = HttpClient::new(&config).unwrap();

    assert_eq!(
        client.base_uri(&user_in(Environment::Production)),
        "http://localhost:8080"
    );
}

#[tokio::test]
async fn test_requests_use_configured_version_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/transfer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transfers": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = StarkConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .api_version("v3".parse().unwrap())
        .build();
    let client = HttpClient::new(&config).unwrap();

    let request = HttpRequest::builder(HttpMethod::Get, "transfer")
        .build()
        .unwrap();
    let response = client
        .request(request, &user_in(Environment::Sandbox))
        .await
        .unwrap();

    assert!(response.is_ok());
}
