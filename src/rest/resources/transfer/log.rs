//! Transfer logs.
//!
//! The API records a log every time a transfer changes status. Logs are
//! never created by the caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Transfer;
use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::{get_id, get_list, get_page, Page, QueryStream, Resource, ResourceError};

/// One status change of a [`Transfer`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Unique id of the log.
    pub id: Option<String>,

    /// The transfer as it was after the event.
    pub transfer: Transfer,

    /// Errors linked to the event.
    #[serde(default)]
    pub errors: Vec<String>,

    /// The event type (e.g., `"processing"`, `"success"`).
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(with = "crate::rest::check::serde::datetime")]
    pub created: DateTime<Utc>,
}

impl Resource for Log {
    const NAME: &'static str = "TransferLog";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Filters for listing transfer logs.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    #[serde(
        with = "crate::rest::check::serde::option_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub after: Option<NaiveDate>,

    #[serde(
        with = "crate::rest::check::serde::option_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub before: Option<NaiveDate>,

    /// Event types to keep (e.g., `"success"`, `"failed"`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Only logs of these transfers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transfer_ids: Vec<String>,
}

/// Retrieves a transfer log by id.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if no log has this id.
pub async fn get(client: &RestClient, user: &User, id: &str) -> Result<Log, ResourceError> {
    get_id(client, user, id).await
}

/// Lists transfer logs lazily, up to `limit` items (unbounded if `None`).
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `params` cannot be encoded.
pub fn query(
    client: &RestClient,
    user: &User,
    limit: Option<usize>,
    params: &LogQuery,
) -> Result<QueryStream<Log>, ResourceError> {
    get_list(client, user, params, limit)
}

/// Retrieves one page of transfer logs.
///
/// # Errors
///
/// Returns any error the listing request produces.
pub async fn page(
    client: &RestClient,
    user: &User,
    cursor: Option<&str>,
    limit: Option<usize>,
    params: &LogQuery,
) -> Result<Page<Log>, ResourceError> {
    get_page(client, user, params, cursor, limit).await
}
