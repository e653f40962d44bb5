//! Credentials passed to every API operation.
//!
//! This module provides the [`User`] type, the explicit replacement for a
//! process-wide "current user". Each operation receives the user it acts
//! for, so independent call sites never share mutable credential state.

use std::fmt;
use std::sync::Arc;

use crate::auth::signer::{MaskedSigner, Signer};
use crate::config::{Environment, OrganizationId, ProjectId, WorkspaceId};

/// A project: credentials bound to a single workspace.
///
/// # Example
///
/// ```rust
/// use starkbank::{Environment, Project, ProjectId};
///
/// let project = Project::new(
///     Environment::Sandbox,
///     ProjectId::new("5656565656565656").unwrap(),
///     |message: &str| format!("sig({message})"),
/// );
///
/// assert_eq!(project.access_id(), "project/5656565656565656");
/// ```
#[derive(Clone)]
pub struct Project {
    id: ProjectId,
    environment: Environment,
    signer: Arc<dyn Signer>,
}

impl Project {
    /// Creates project credentials.
    #[must_use]
    pub fn new(environment: Environment, id: ProjectId, signer: impl Signer + 'static) -> Self {
        Self {
            id,
            environment,
            signer: Arc::new(signer),
        }
    }

    /// Returns the project id.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the environment these credentials belong to.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the `Access-Id` header value.
    #[must_use]
    pub fn access_id(&self) -> String {
        format!("project/{}", self.id)
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("environment", &self.environment)
            .field("signer", &MaskedSigner)
            .finish()
    }
}

/// An organization: credentials that can act on any of its workspaces.
///
/// Most resources are workspace-scoped; use [`Organization::replace`] to
/// obtain credentials for a specific workspace.
///
/// # Example
///
/// ```rust
/// use starkbank::{Environment, Organization, OrganizationId, WorkspaceId};
///
/// let organization = Organization::new(
///     Environment::Production,
///     OrganizationId::new("111").unwrap(),
///     |message: &str| format!("sig({message})"),
/// );
/// assert_eq!(organization.access_id(), "organization/111");
///
/// let scoped = organization.replace(WorkspaceId::new("222").unwrap());
/// assert_eq!(scoped.access_id(), "organization/111/workspace/222");
/// ```
#[derive(Clone)]
pub struct Organization {
    id: OrganizationId,
    environment: Environment,
    workspace_id: Option<WorkspaceId>,
    signer: Arc<dyn Signer>,
}

impl Organization {
    /// Creates organization credentials without a workspace scope.
    #[must_use]
    pub fn new(
        environment: Environment,
        id: OrganizationId,
        signer: impl Signer + 'static,
    ) -> Self {
        Self {
            id,
            environment,
            workspace_id: None,
            signer: Arc::new(signer),
        }
    }

    /// Returns a copy of these credentials scoped to `workspace_id`.
    ///
    /// The signer is shared with the original; nothing is mutated.
    #[must_use]
    pub fn replace(&self, workspace_id: WorkspaceId) -> Self {
        Self {
            workspace_id: Some(workspace_id),
            ..self.clone()
        }
    }

    /// Returns the organization id.
    #[must_use]
    pub const fn id(&self) -> &OrganizationId {
        &self.id
    }

    /// Returns the workspace scope, if any.
    #[must_use]
    pub const fn workspace_id(&self) -> Option<&WorkspaceId> {
        self.workspace_id.as_ref()
    }

    /// Returns the environment these credentials belong to.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the `Access-Id` header value.
    #[must_use]
    pub fn access_id(&self) -> String {
        self.workspace_id.as_ref().map_or_else(
            || format!("organization/{}", self.id),
            |workspace| format!("organization/{}/workspace/{workspace}", self.id),
        )
    }
}

impl fmt::Debug for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Organization")
            .field("id", &self.id)
            .field("environment", &self.environment)
            .field("workspace_id", &self.workspace_id)
            .field("signer", &MaskedSigner)
            .finish()
    }
}

/// The identity an API call is made on behalf of.
///
/// # Thread Safety
///
/// `User` is `Send + Sync` and cheap to clone; the signer is shared.
#[derive(Clone, Debug)]
pub enum User {
    /// Project credentials.
    Project(Project),
    /// Organization credentials, optionally scoped to a workspace.
    Organization(Organization),
}

impl User {
    /// Returns the `Access-Id` header value.
    #[must_use]
    pub fn access_id(&self) -> String {
        match self {
            Self::Project(project) => project.access_id(),
            Self::Organization(organization) => organization.access_id(),
        }
    }

    /// Returns the environment these credentials belong to.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        match self {
            Self::Project(project) => project.environment(),
            Self::Organization(organization) => organization.environment(),
        }
    }

    /// Signs a request message with this user's signer.
    #[must_use]
    pub fn sign(&self, message: &str) -> String {
        match self {
            Self::Project(project) => project.signer.sign(message),
            Self::Organization(organization) => organization.signer.sign(message),
        }
    }
}

impl From<Project> for User {
    fn from(project: Project) -> Self {
        Self::Project(project)
    }
}

impl From<Organization> for User {
    fn from(organization: Organization) -> Self {
        Self::Organization(organization)
    }
}

// Verify User is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<User>();
};
