//! HTTP-specific error types for the Stark Bank SDK.
//!
//! The HTTP layer only fails for two reasons: the request was rejected
//! before sending, or the transport failed. Any response that arrives,
//! whatever its status, is returned to the caller as an
//! [`HttpResponse`](crate::clients::HttpResponse); mapping statuses to
//! domain errors happens in the resource layer.
//!
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use starkbank::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request, &user).await {
//!     Ok(response) => println!("{}: {}", response.code, response.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent:
/// - `POST` or `PATCH` without a body
/// - `GET` or `DELETE` with a body
///
/// # Example
///
/// ```rust
/// use starkbank::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
