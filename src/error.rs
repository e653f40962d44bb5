//! Error types for the Stark Bank SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and credential validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use starkbank::{ConfigError, ProjectId};
//!
//! let result = ProjectId::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidProjectId { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration and credential types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Project ID is empty or not numeric.
    #[error("Invalid project id '{id}'. Expected a non-empty numeric id (e.g., '5656565656565656').")]
    InvalidProjectId {
        /// The invalid id that was provided.
        id: String,
    },

    /// Organization ID is empty or not numeric.
    #[error("Invalid organization id '{id}'. Expected a non-empty numeric id.")]
    InvalidOrganizationId {
        /// The invalid id that was provided.
        id: String,
    },

    /// Workspace ID is empty or not numeric.
    #[error("Invalid workspace id '{id}'. Expected a non-empty numeric id.")]
    InvalidWorkspaceId {
        /// The invalid id that was provided.
        id: String,
    },

    /// Environment name is not recognized.
    #[error("Invalid environment '{environment}'. Expected 'sandbox' or 'production'.")]
    InvalidEnvironment {
        /// The invalid environment string that was provided.
        environment: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'v<number>' (e.g., 'v2').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Language is not supported by the API.
    #[error("Invalid language '{language}'. Expected 'en-US' or 'pt-BR'.")]
    InvalidLanguage {
        /// The invalid language tag that was provided.
        language: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
