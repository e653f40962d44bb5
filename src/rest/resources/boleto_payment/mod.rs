//! Payments of boletos issued by other institutions.
//!
//! A [`BoletoPayment`] is identified by either its digitable `line` or its
//! `bar_code`; the amount is read from the boleto by the API.

pub mod log;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::{
    delete_id, get_id, get_list, get_page, post, Page, QueryStream, Resource, ResourceError,
};

/// A boleto payment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoletoPayment {
    /// Unique id. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Digitable line. Either this or `bar_code` must be set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_code: Option<String>,

    /// Tax id of the boleto receiver.
    pub tax_id: String,

    /// Text shown on the workspace statement.
    pub description: String,

    /// Payment date. Defaults to today when unset.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Amount paid, in cents. Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<i64>,

    /// Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<i64>,

    /// Current status (e.g., `"created"`, `"success"`). Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
}

impl Resource for BoletoPayment {
    const NAME: &'static str = "BoletoPayment";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Filters for listing boleto payments.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoPaymentQuery {
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

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}

/// Creates boleto payments in a single request.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the API rejects any payment.
pub async fn create(
    client: &RestClient,
    user: &User,
    payments: &[BoletoPayment],
) -> Result<Vec<BoletoPayment>, ResourceError> {
    post(client, user, payments).await
}

/// Retrieves a boleto payment by id.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if no payment has this id.
pub async fn get(
    client: &RestClient,
    user: &User,
    id: &str,
) -> Result<BoletoPayment, ResourceError> {
    get_id(client, user, id).await
}

/// Lists boleto payments lazily, up to `limit` items (unbounded if `None`).
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `params` cannot be encoded.
pub fn query(
    client: &RestClient,
    user: &User,
    limit: Option<usize>,
    params: &BoletoPaymentQuery,
) -> Result<QueryStream<BoletoPayment>, ResourceError> {
    get_list(client, user, params, limit)
}

/// Retrieves one page of boleto payments.
///
/// # Errors
///
/// Returns any error the listing request produces.
pub async fn page(
    client: &RestClient,
    user: &User,
    cursor: Option<&str>,
    limit: Option<usize>,
    params: &BoletoPaymentQuery,
) -> Result<Page<BoletoPayment>, ResourceError> {
    get_page(client, user, params, cursor, limit).await
}

/// Cancels a scheduled boleto payment, returning its final state.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the payment can no longer be canceled.
pub async fn delete(
    client: &RestClient,
    user: &User,
    id: &str,
) -> Result<BoletoPayment, ResourceError> {
    delete_id(client, user, id).await
}
