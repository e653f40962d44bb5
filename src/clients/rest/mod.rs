//! REST API client for the Stark Bank API.
//!
//! This module provides a higher-level REST client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `patch()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use starkbank::{RestClient, StarkConfig};
//!
//! let client = RestClient::new(&StarkConfig::default())?;
//! let response = client.get("transfer", None, &user).await?;
//! println!("Transfers: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! Leading and trailing slashes are stripped: `/transfer/log/` -> `transfer/log`.
//! A path that is empty after normalization is rejected.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
