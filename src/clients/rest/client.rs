//! REST client implementation for the Stark Bank API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization and per-call credentials.

use std::collections::HashMap;

use crate::auth::User;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, StarkConfig};

/// REST API client for the Stark Bank API.
///
/// Provides `get`, `post`, `patch` and `delete` methods. Each takes the
/// [`User`] the call is made for; the client itself holds no credentials.
///
/// # Thread Safety
///
/// `RestClient` is `Clone + Send + Sync`. Clones share the connection pool,
/// which is how paginated listings keep using the client after the call
/// that created them returns.
///
/// # Example
///
/// ```rust,ignore
/// use starkbank::{RestClient, StarkConfig};
///
/// let client = RestClient::new(&StarkConfig::default())?;
///
/// let response = client.get("transfer/log", None, &user).await?;
///
/// let body = serde_json::json!({"transfers": [{"amount": 100}]});
/// let response = client.post("transfer", body, &user).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP transport cannot be created.
    pub fn new(config: &StarkConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            api_version = %config.api_version(),
            host = ?config.host().map(AsRef::<str>::as_ref),
            "Created Stark Bank REST client"
        );

        Ok(Self {
            http_client,
            api_version: config.api_version().clone(),
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("limit".to_string(), "50".to_string());
    /// let response = client.get("transfer/log", Some(query), &user).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
        user: &User,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, user)
            .await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        user: &User,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), None, user)
            .await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        user: &User,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Patch, path, Some(body), None, user)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str, user: &User) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, None, user)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
        user: &User,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client
            .request(request, user)
            .await
            .map_err(Into::into)
    }
}

/// Normalizes a REST API path by stripping leading and trailing `/`.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("/transfer/log")?, "transfer/log");
/// assert_eq!(normalize_path("boleto/")?, "boleto");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let normalized = path.trim_start_matches('/').trim_end_matches('/');

    if normalized.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(normalized.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/transfer").unwrap(), "transfer");
        assert_eq!(normalize_path("//transfer").unwrap(), "transfer");
    }

    #[test]
    fn test_normalize_path_strips_trailing_slash() {
        assert_eq!(normalize_path("transfer/log/").unwrap(), "transfer/log");
    }

    #[test]
    fn test_normalize_path_keeps_nested_segments() {
        assert_eq!(
            normalize_path("/boleto-holmes/log/123").unwrap(),
            "boleto-holmes/log/123"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path == "/"
        ));
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_new_uses_configured_version() {
        let client = RestClient::new(&StarkConfig::default()).unwrap();
        assert_eq!(client.api_version(), &ApiVersion::latest());
        assert_eq!(client.http_client().base_path(), "/v2");

        let config = StarkConfig::builder()
            .api_version(ApiVersion::Custom("v3".to_string()))
            .build();
        let client = RestClient::new(&config).unwrap();
        assert_eq!(client.http_client().base_path(), "/v3");
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
