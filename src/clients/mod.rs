//! HTTP client types for Stark Bank API communication.
//!
//! This module provides the HTTP layer for making signed requests to the
//! Stark Bank API.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Authentication
//!
//! Every request carries `Access-Id`, `Access-Time` and `Access-Signature`
//! headers derived from the [`User`](crate::User) passed to the call. The
//! signature covers `"{access_id}:{access_time}:{body}"`.
//!
//! # Retry Behavior
//!
//! Requests are attempted exactly once.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};
