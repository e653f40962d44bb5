//! HTTP client for Stark Bank API communication.
//!
//! This module provides the [`HttpClient`] type for making signed requests
//! to the Stark Bank API.

use std::collections::HashMap;

use crate::auth::{signing_message, User};
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::StarkConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Stark Bank API.
///
/// The client handles:
/// - Base URI selection from the configured host or the user's environment
/// - Default headers including User-Agent and Accept-Language
/// - Per-request authentication headers (`Access-Id`, `Access-Time`, `Access-Signature`)
///
/// It does not retry. Every response that arrives is returned, whatever its
/// status; only validation and transport failures are errors.
///
/// # Thread Safety
///
/// `HttpClient` is `Clone + Send + Sync`. Clones share the underlying
/// connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use starkbank::clients::{HttpClient, HttpRequest, HttpMethod};
/// use starkbank::StarkConfig;
///
/// let client = HttpClient::new(&StarkConfig::default())?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "transfer/log")
///     .build()
///     .unwrap();
///
/// let response = client.request(request, &user).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Host override; `None` selects the user's environment host.
    host: Option<String>,
    /// Base path (e.g., "/v2").
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &StarkConfig) -> Result<Self, HttpError> {
        let base_path = format!("/{}", config.api_version());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}Rust-{rust_version}-SDK-{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Accept-Language".to_string(),
            config.language().as_tag().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            host: config.host().map(|host| host.as_ref().to_string()),
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI requests for `user` are sent to.
    #[must_use]
    pub fn base_uri(&self, user: &User) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| user.environment().host().to_string())
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the authentication headers for a request with `body`, signed
    /// at `access_time` (unix seconds).
    #[must_use]
    pub fn auth_headers(user: &User, access_time: i64, body: &str) -> HashMap<String, String> {
        let access_id = user.access_id();
        let access_time = access_time.to_string();
        let signature = user.sign(&signing_message(&access_id, &access_time, body));

        let mut headers = HashMap::new();
        headers.insert("Access-Id".to_string(), access_id);
        headers.insert("Access-Time".to_string(), access_time);
        headers.insert("Access-Signature".to_string(), signature);
        headers
    }

    /// Sends an HTTP request to the Stark Bank API on behalf of `user`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network or timeout error occurs (`Network`)
    pub async fn request(
        &self,
        request: HttpRequest,
        user: &User,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri(user), self.base_path, request.path);
        let body = request.body_text();

        let mut headers = self.default_headers.clone();
        headers.extend(Self::auth_headers(
            user,
            chrono::Utc::now().timestamp(),
            &body,
        ));
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if request.body.is_some() {
            req_builder = req_builder.body(body);
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending request to Stark Bank API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received response from Stark Bank API"
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
