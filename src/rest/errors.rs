//! Resource-specific error types for REST API operations.
//!
//! This module contains the public error taxonomy of the SDK, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics.
//!
//! # Error Handling
//!
//! HTTP status codes are mapped to semantic variants:
//!
//! - **401/403**: [`ResourceError::Auth`] - Credentials rejected
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **Other non-2xx**: [`ResourceError::Api`] - Error list reported by the API
//!
//! Input that fails validation is reported as [`ResourceError::Validation`]
//! before any request is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use starkbank::rest::{resources::transfer, ResourceError};
//!
//! match transfer::get(&client, &user, "5656565656565656").await {
//!     Ok(transfer) => println!("Found: {}", transfer.amount),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::Api { errors, .. }) => {
//!         for error in errors {
//!             println!("{}: {}", error.code, error.message);
//!         }
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpError, HttpResponse, RestError};
use crate::rest::check::ValidationError;

/// One entry of the API's `{"errors": [...]}` list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorEntry {
    /// Machine-readable error code (e.g., `invalidAmount`).
    #[serde(default)]
    pub code: String,
    /// Human-readable message, in the configured language.
    #[serde(default)]
    pub message: String,
}

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use starkbank::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "TransferLog",
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "TransferLog with id 123 not found");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Caller input failed validation; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network-level failure (connection, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// The API rejected the credentials (HTTP 401/403).
    #[error("Authentication failed (HTTP {status}): {}", summarize(errors))]
    Auth {
        /// The HTTP status code.
        status: u16,
        /// Errors reported by the API.
        errors: Vec<ApiErrorEntry>,
    },

    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource name (e.g., "Transfer", "BoletoLog").
        resource: &'static str,
        /// The id that was requested, or the request path for listings.
        id: String,
    },

    /// The API rejected the request (any other non-2xx status).
    #[error("API error (HTTP {status}): {}", summarize(errors))]
    Api {
        /// The HTTP status code.
        status: u16,
        /// Errors reported by the API.
        errors: Vec<ApiErrorEntry>,
    },

    /// A successful response did not have the expected shape.
    #[error("Invalid {resource} response: {reason}")]
    InvalidResponse {
        /// The resource name.
        resource: &'static str,
        /// What was wrong with the body.
        reason: String,
    },

    /// A REST-level error occurred (e.g., invalid path).
    #[error(transparent)]
    Rest(RestError),
}

impl ResourceError {
    /// Creates a `ResourceError` from a non-2xx HTTP response.
    ///
    /// Maps HTTP status codes to semantic error variants:
    /// - 401, 403 -> `Auth`
    /// - 404 -> `NotFound` when `id` names an entity, `Api` otherwise
    /// - Other -> `Api`
    ///
    /// # Example
    ///
    /// ```rust
    /// use starkbank::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     400,
    ///     &json!({"errors": [{"code": "invalidLimit", "message": "Limit too high"}]}),
    ///     "Transfer",
    ///     None,
    /// );
    /// assert!(matches!(error, ResourceError::Api { status: 400, .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        let errors = parse_api_errors(body);
        match code {
            401 | 403 => Self::Auth {
                status: code,
                errors,
            },
            404 => match id {
                Some(id) => Self::NotFound {
                    resource,
                    id: id.to_string(),
                },
                None => Self::Api {
                    status: code,
                    errors,
                },
            },
            _ => Self::Api {
                status: code,
                errors,
            },
        }
    }

    /// Converts an HTTP response into the error it represents, if any.
    pub(crate) fn check_response(
        response: &HttpResponse,
        resource: &'static str,
        id: Option<&str>,
    ) -> Result<(), Self> {
        if response.is_ok() {
            return Ok(());
        }
        tracing::debug!(
            status = response.code,
            resource,
            request_id = ?response.request_id(),
            "Stark Bank API returned an error"
        );
        Err(Self::from_http_response(
            response.code,
            &response.body,
            resource,
            id,
        ))
    }

    /// Returns the errors reported by the API, if this error carries any.
    #[must_use]
    pub fn api_errors(&self) -> &[ApiErrorEntry] {
        match self {
            Self::Auth { errors, .. } | Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(HttpError::Network(e)) => Self::Transport(e),
            other => Self::Rest(other),
        }
    }
}

impl From<HttpError> for ResourceError {
    fn from(error: HttpError) -> Self {
        RestError::Http(error).into()
    }
}

/// Parses the API's error list.
///
/// The API returns:
/// ```json
/// {"errors": [{"code": "invalidAmount", "message": "Amount must be positive"}]}
/// ```
///
/// Plain string entries are kept as messages with an empty code.
fn parse_api_errors(body: &serde_json::Value) -> Vec<ApiErrorEntry> {
    let Some(serde_json::Value::Array(entries)) = body.get("errors") else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            serde_json::Value::String(message) => Some(ApiErrorEntry {
                code: String::new(),
                message: message.clone(),
            }),
            other => serde_json::from_value(other.clone()).ok(),
        })
        .collect()
}

fn summarize(errors: &[ApiErrorEntry]) -> String {
    if errors.is_empty() {
        return "no error details".to_string();
    }
    errors
        .iter()
        .map(|error| format!("{}: {}", error.code, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
