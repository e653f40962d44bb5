//! Boleto Holmes, the boleto status investigator.
//!
//! A [`BoletoHolmes`] asks the API to check, with the issuing bank, the
//! current status of a boleto. The outcome is reported in `result`.
//! Singular and plural envelope keys are both `holmes`.

pub mod log;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::{get_id, get_list, get_page, post, Page, QueryStream, Resource, ResourceError};

/// A boleto status investigation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoletoHolmes {
    /// Unique id. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Id of the boleto to investigate.
    pub boleto_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Investigation status (e.g., `"solving"`, `"solved"`). Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Boleto status found (e.g., `"paid"`, `"registered"`). Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<DateTime<Utc>>,
}

impl Resource for BoletoHolmes {
    const NAME: &'static str = "BoletoHolmes";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Filters for listing investigations.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoHolmesQuery {
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Only investigations of this boleto.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boleto_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}

/// Starts investigations in a single request.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the API rejects any investigation.
pub async fn create(
    client: &RestClient,
    user: &User,
    holmes: &[BoletoHolmes],
) -> Result<Vec<BoletoHolmes>, ResourceError> {
    post(client, user, holmes).await
}

/// Retrieves an investigation by id.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if no investigation has this id.
pub async fn get(
    client: &RestClient,
    user: &User,
    id: &str,
) -> Result<BoletoHolmes, ResourceError> {
    get_id(client, user, id).await
}

/// Lists investigations lazily, up to `limit` items (unbounded if `None`).
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `params` cannot be encoded.
pub fn query(
    client: &RestClient,
    user: &User,
    limit: Option<usize>,
    params: &BoletoHolmesQuery,
) -> Result<QueryStream<BoletoHolmes>, ResourceError> {
    get_list(client, user, params, limit)
}

/// Retrieves one page of investigations.
///
/// # Errors
///
/// Returns any error the listing request produces.
pub async fn page(
    client: &RestClient,
    user: &User,
    cursor: Option<&str>,
    limit: Option<usize>,
    params: &BoletoHolmesQuery,
) -> Result<Page<BoletoHolmes>, ResourceError> {
    get_page(client, user, params, cursor, limit).await
}
