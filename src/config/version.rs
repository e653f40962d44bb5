//! API version, environment, and language definitions.
//!
//! This module provides the [`ApiVersion`], [`Environment`] and [`Language`]
//! enums that select which Stark Bank API the SDK talks to and how.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stark Bank API version.
///
/// The API is versioned by path segment (`/v2/`). This enum provides a
/// variant for the current version plus a `Custom` variant for future ones.
///
/// # Example
///
/// ```rust
/// use starkbank::ApiVersion;
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// assert_eq!(version.to_string(), "v2");
/// assert_eq!(ApiVersion::latest(), ApiVersion::V2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2.
    V2,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    fn is_valid_version_format(s: &str) -> bool {
        s.strip_prefix('v').is_some_and(|number| {
            !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
        })
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v2" => Ok(Self::V2),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}

/// The Stark Bank environment a set of credentials belongs to.
///
/// Each environment has its own API host; sandbox credentials are rejected
/// by production and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test environment with simulated settlement.
    #[default]
    Sandbox,
    /// Live environment.
    Production,
}

impl Environment {
    /// Returns the API host for this environment.
    #[must_use]
    pub const fn host(&self) -> &'static str {
        match self {
            Self::Sandbox => "https://sandbox.api.starkbank.com",
            Self::Production => "https://api.starkbank.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => f.write_str("sandbox"),
            Self::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvironment {
                environment: other.to_string(),
            }),
        }
    }
}

/// Language for error messages returned by the API (`Accept-Language`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (United States).
    #[default]
    EnUs,
    /// Portuguese (Brazil).
    PtBr,
}

impl Language {
    /// Returns the IETF language tag sent to the API.
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::PtBr => "pt-BR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en-US" => Ok(Self::EnUs),
            "pt-BR" => Ok(Self::PtBr),
            other => Err(ConfigError::InvalidLanguage {
                language: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_and_future_versions() {
        assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!(" V2 ".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!(
            "v3".parse::<ApiVersion>().unwrap(),
            ApiVersion::Custom("v3".to_string())
        );
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("2".parse::<ApiVersion>().is_err());
        assert!("v".parse::<ApiVersion>().is_err());
        assert!("v2-beta".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(ApiVersion::V2.to_string(), "v2");
        assert_eq!(ApiVersion::Custom("v3".to_string()).to_string(), "v3");
    }

    #[test]
    fn test_environment_hosts() {
        assert_eq!(
            Environment::Sandbox.host(),
            "https://sandbox.api.starkbank.com"
        );
        assert_eq!(Environment::Production.host(), "https://api.starkbank.com");
    }

    #[test]
    fn test_environment_parse_and_display() {
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(Environment::Sandbox.to_string(), "sandbox");
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(ConfigError::InvalidEnvironment { .. })
        ));
    }

    #[test]
    fn test_environment_serde() {
        let json = serde_json::to_string(&Environment::Production).unwrap();
        assert_eq!(json, r#""production""#);
        let env: Environment = serde_json::from_str(r#""sandbox""#).unwrap();
        assert_eq!(env, Environment::Sandbox);
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::default().as_tag(), "en-US");
        assert_eq!("pt-BR".parse::<Language>().unwrap(), Language::PtBr);
        assert!("fr-FR".parse::<Language>().is_err());
    }
}
