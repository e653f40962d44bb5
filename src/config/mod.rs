//! Configuration types for the Stark Bank SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK's HTTP layer.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StarkConfig`]: The main configuration struct holding all SDK settings
//! - [`StarkConfigBuilder`]: A builder for constructing [`StarkConfig`] instances
//! - [`ProjectId`], [`OrganizationId`], [`WorkspaceId`]: Validated credential ids
//! - [`HostUrl`]: A validated base URL override
//! - [`ApiVersion`]: The API version to use
//! - [`Environment`]: Sandbox or production
//! - [`Language`]: Language for API error messages
//!
//! Credentials are not part of the configuration. They are passed to every
//! operation explicitly as a [`User`](crate::User).
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use starkbank::{StarkConfig, ApiVersion, Language};
//!
//! let config = StarkConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .language(Language::PtBr)
//!     .timeout(Duration::from_secs(15))
//!     .build();
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{HostUrl, OrganizationId, ProjectId, WorkspaceId};
pub use version::{ApiVersion, Environment, Language};

/// Configuration for the Stark Bank SDK.
///
/// Every field has a default, so `StarkConfig::default()` is a valid
/// configuration that targets the host of each user's environment.
///
/// # Thread Safety
///
/// `StarkConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use starkbank::{StarkConfig, HostUrl};
///
/// let config = StarkConfig::builder()
///     .host(HostUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build();
///
/// assert_eq!(config.host().map(AsRef::as_ref), Some("http://localhost:8080"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StarkConfig {
    host: Option<HostUrl>,
    api_version: ApiVersion,
    language: Language,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StarkConfig {
    /// Creates a new builder for constructing a `StarkConfig`.
    #[must_use]
    pub fn builder() -> StarkConfigBuilder {
        StarkConfigBuilder::new()
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the language sent as `Accept-Language`.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StarkConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StarkConfig>();
};

/// Builder for constructing [`StarkConfig`] instances.
///
/// # Defaults
///
/// - `host`: `None` (use the user's environment host)
/// - `api_version`: Latest stable version
/// - `language`: `en-US`
/// - `timeout`: `None` (no timeout beyond the transport's own)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StarkConfigBuilder {
    host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    language: Option<Language>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StarkConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API host for every request.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the language for API error messages.
    #[must_use]
    pub const fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the per-request HTTP timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StarkConfig`].
    #[must_use]
    pub fn build(self) -> StarkConfig {
        StarkConfig {
            host: self.host,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            language: self.language.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StarkConfig::builder().build();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert_eq!(config.language(), Language::EnUs);
        assert!(config.host().is_none());
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let config = StarkConfig::default();
        assert_eq!(config.api_version(), &ApiVersion::V2);
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://localhost:3000").unwrap();

        let config = StarkConfig::builder()
            .host(host.clone())
            .api_version(ApiVersion::Custom("v3".to_string()))
            .language(Language::PtBr)
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .build();

        assert_eq!(config.host(), Some(&host));
        assert_eq!(config.api_version().to_string(), "v3");
        assert_eq!(config.language(), Language::PtBr);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StarkConfig>();
    }
}
