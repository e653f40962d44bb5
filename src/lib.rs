//! # Stark Bank Rust SDK
//!
//! A Rust SDK for the Stark Bank API, providing type-safe configuration,
//! request signing, and typed access to the API's resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StarkConfig`] and [`StarkConfigBuilder`]
//! - Validated newtypes for credential ids and the host override
//! - Explicit credentials via [`User`] ([`Project`] or [`Organization`])
//! - Signed requests through the pluggable [`auth::Signer`] seam
//! - Generic REST operations and a lazy, cursor-paginated query generator
//! - Validation of dates, datetimes and amounts via [`rest::check`]
//! - Typed resource modules under [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use starkbank::{Environment, Project, ProjectId, RestClient, StarkConfig, User};
//!
//! let config = StarkConfig::builder().build();
//! let client = RestClient::new(&config).unwrap();
//!
//! // Any `Fn(&str) -> String` can sign requests
//! let user: User = Project::new(
//!     Environment::Sandbox,
//!     ProjectId::new("5656565656565656").unwrap(),
//!     |message: &str| format!("signature-of-{}", message.len()),
//! )
//! .into();
//!
//! assert_eq!(user.access_id(), "project/5656565656565656");
//! ```
//!
//! ## Querying Resources
//!
//! ```rust,ignore
//! use starkbank::rest::resources::transfer;
//!
//! // Lazily walks every page, requesting at most 100 items at a time
//! let mut logs = transfer::log::query(&client, &user, Some(150), &Default::default())?;
//! while let Some(log) = logs.next().await {
//!     let log = log?;
//!     println!("{:?}: {}", log.id, log.kind);
//! }
//!
//! // Or page manually
//! let page = transfer::page(&client, &user, None, Some(5), &Default::default()).await?;
//! let next = transfer::page(&client, &user, page.cursor(), Some(5), &Default::default()).await?;
//! ```
//!
//! ## Organizations and Workspaces
//!
//! ```rust
//! use starkbank::{Environment, Organization, OrganizationId, User, WorkspaceId};
//!
//! let organization = Organization::new(
//!     Environment::Sandbox,
//!     OrganizationId::new("4545454545454545").unwrap(),
//!     |message: &str| message.to_string(),
//! );
//! let workspace = organization.replace(WorkspaceId::new("1212121212121212").unwrap());
//!
//! assert_eq!(
//!     User::from(workspace).access_id(),
//!     "organization/4545454545454545/workspace/1212121212121212"
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: credentials and configuration are passed explicitly
//! - **Fail-fast validation**: newtypes and field checks reject bad input
//!   before any request is sent
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **No retries**: every error is surfaced to the caller as it happens

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{Organization, Project, User};
pub use config::{
    ApiVersion, Environment, HostUrl, Language, OrganizationId, ProjectId, StarkConfig,
    StarkConfigBuilder, WorkspaceId,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RestClient, RestError,
};

// Re-export REST resource types
pub use rest::{Page, QueryStream, Resource, ResourceError, ValidationError};
