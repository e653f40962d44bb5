//! Validated newtype wrappers for configuration and credential values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}

/// A validated Stark Bank project id.
///
/// Project ids are opaque numeric strings issued when the project is
/// registered.
///
/// # Example
///
/// ```rust
/// use starkbank::ProjectId;
///
/// let id = ProjectId::new("5656565656565656").unwrap();
/// assert_eq!(id.as_ref(), "5656565656565656");
/// assert!(ProjectId::new("project-1").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    /// Creates a new validated project id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProjectId`] if the id is empty or not numeric.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if !is_numeric_id(&id) {
            return Err(ConfigError::InvalidProjectId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Stark Bank organization id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrganizationId(String);

impl OrganizationId {
    /// Creates a new validated organization id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrganizationId`] if the id is empty or not numeric.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if !is_numeric_id(&id) {
            return Err(ConfigError::InvalidOrganizationId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for OrganizationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated workspace id, used to scope organization credentials.
///
/// # Serialization
///
/// `WorkspaceId` serializes to and deserializes from its plain string form:
///
/// ```rust
/// use starkbank::WorkspaceId;
///
/// let id = WorkspaceId::new("4545454545454545").unwrap();
/// let json = serde_json::to_string(&id).unwrap();
/// assert_eq!(json, r#""4545454545454545""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    /// Creates a new validated workspace id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkspaceId`] if the id is empty or not numeric.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if !is_numeric_id(&id) {
            return Err(ConfigError::InvalidWorkspaceId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for WorkspaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for WorkspaceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WorkspaceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL overriding the environment's API host.
///
/// Mostly useful for pointing the SDK at a proxy or a local mock server.
/// Any trailing `/` is dropped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use starkbank::HostUrl;
///
/// let url = HostUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("localhost"));
/// assert_eq!(url.as_ref(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_rejects_empty_and_non_numeric() {
        assert!(matches!(
            ProjectId::new(""),
            Err(ConfigError::InvalidProjectId { .. })
        ));
        assert!(ProjectId::new("12ab").is_err());
        assert!(ProjectId::new("  5656565656565656 ").is_ok());
    }

    #[test]
    fn test_organization_and_workspace_ids_are_validated() {
        assert!(OrganizationId::new("123").is_ok());
        assert!(matches!(
            OrganizationId::new("org"),
            Err(ConfigError::InvalidOrganizationId { .. })
        ));
        assert!(matches!(
            WorkspaceId::new(""),
            Err(ConfigError::InvalidWorkspaceId { .. })
        ));
    }

    #[test]
    fn test_workspace_id_round_trip_serialization() {
        let original = WorkspaceId::new("4545454545454545").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: WorkspaceId = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_workspace_id_deserialize_rejects_invalid() {
        let result: Result<WorkspaceId, _> = serde_json::from_str(r#""abc""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://sandbox.api.starkbank.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("sandbox.api.starkbank.com"));

        let url = HostUrl::new("http://127.0.0.1:3000/").unwrap();
        assert_eq!(url.host_name(), Some("127.0.0.1"));
        assert_eq!(url.as_ref(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("api.starkbank.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
    }
}
