//! Payments of Pix BR Codes.
//!
//! A [`BrcodePayment`] pays a static or dynamic BR Code. Scheduled payments
//! are canceled with [`cancel`] (a `PATCH` of the status) rather than deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::{
    get_id, get_list, get_page, patch_id, post, Page, QueryStream, Resource, ResourceError,
};

/// A BR Code payment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrcodePayment {
    /// Unique id. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The BR Code string to pay.
    pub brcode: String,

    /// Tax id of the receiver.
    pub tax_id: String,

    pub description: String,

    /// Amount in cents. Required only for static BR Codes without an amount.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<i64>,

    #[serde(
        default,
        with = "crate::rest::check::serde::option_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Receiver name. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Current status (e.g., `"created"`, `"success"`, `"canceled"`). Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// BR Code type (`"static"` or `"dynamic"`). Read-only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<i64>,

    /// Read-only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transaction_ids: Vec<String>,

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

impl Resource for BrcodePayment {
    const NAME: &'static str = "BrcodePayment";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Fields that can be changed on an existing payment.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrcodePaymentUpdate {
    /// New status. Only `"canceled"` is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Filters for listing BR Code payments.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrcodePaymentQuery {
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

/// Creates BR Code payments in a single request.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the API rejects any payment.
pub async fn create(
    client: &RestClient,
    user: &User,
    payments: &[BrcodePayment],
) -> Result<Vec<BrcodePayment>, ResourceError> {
    post(client, user, payments).await
}

/// Retrieves a BR Code payment by id.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if no payment has this id.
pub async fn get(
    client: &RestClient,
    user: &User,
    id: &str,
) -> Result<BrcodePayment, ResourceError> {
    get_id(client, user, id).await
}

/// Lists BR Code payments lazily, up to `limit` items (unbounded if `None`).
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `params` cannot be encoded.
pub fn query(
    client: &RestClient,
    user: &User,
    limit: Option<usize>,
    params: &BrcodePaymentQuery,
) -> Result<QueryStream<BrcodePayment>, ResourceError> {
    get_list(client, user, params, limit)
}

/// Retrieves one page of BR Code payments.
///
/// # Errors
///
/// Returns any error the listing request produces.
pub async fn page(
    client: &RestClient,
    user: &User,
    cursor: Option<&str>,
    limit: Option<usize>,
    params: &BrcodePaymentQuery,
) -> Result<Page<BrcodePayment>, ResourceError> {
    get_page(client, user, params, cursor, limit).await
}

/// Updates a BR Code payment.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the API refuses the change.
pub async fn update(
    client: &RestClient,
    user: &User,
    id: &str,
    changes: &BrcodePaymentUpdate,
) -> Result<BrcodePayment, ResourceError> {
    patch_id(client, user, id, changes).await
}

/// Cancels a scheduled BR Code payment.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the payment can no longer be canceled.
pub async fn cancel(
    client: &RestClient,
    user: &User,
    id: &str,
) -> Result<BrcodePayment, ResourceError> {
    let changes = BrcodePaymentUpdate {
        status: Some("canceled".to_string()),
    };
    update(client, user, id, &changes).await
}
