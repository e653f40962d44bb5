//! Authentication types for the Stark Bank SDK.
//!
//! # Overview
//!
//! - [`User`]: The identity an API call is made for (project or organization)
//! - [`Project`]: Credentials bound to a single workspace
//! - [`Organization`]: Credentials for an organization, optionally scoped to a workspace
//! - [`Signer`]: The seam that produces request signatures
//!
//! There is no global "current user": every REST operation takes a `&User`.
//!
//! # Example
//!
//! ```rust
//! use starkbank::{Environment, Project, ProjectId, User};
//!
//! let user: User = Project::new(
//!     Environment::Sandbox,
//!     ProjectId::new("5656565656565656").unwrap(),
//!     |message: &str| format!("sig({message})"),
//! )
//! .into();
//!
//! assert_eq!(user.access_id(), "project/5656565656565656");
//! ```

mod signer;
mod user;

pub use signer::{signing_message, Signer};
pub use user::{Organization, Project, User};
