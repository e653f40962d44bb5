//! Boletos issued by the workspace.
//!
//! A [`Boleto`] is a payment slip that a customer pays to the workspace.
//! Deleting a boleto cancels it while it is still unpaid.

pub mod log;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::{
    delete_id, get_id, get_list, get_page, post, Page, QueryStream, Resource, ResourceError,
};

/// A line of text printed on the boleto, optionally with an amount.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Description {
    pub text: String,

    #[serde(
        default,
        with = "crate::rest::check::serde::option_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<i64>,
}

/// A discount granted if the boleto is paid up to `date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    /// Percentage of the amount, from 0 to 100.
    pub percentage: f64,

    #[serde(with = "crate::rest::check::serde::date")]
    pub date: NaiveDate,
}

/// A boleto.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Boleto {
    /// Unique id. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount in cents.
    #[serde(with = "crate::rest::check::serde::amount")]
    pub amount: i64,

    /// Payer's full name.
    pub name: String,

    /// Payer's CPF or CNPJ.
    pub tax_id: String,

    pub street_line_1: String,

    pub street_line_2: String,

    pub district: String,

    pub city: String,

    /// Two-letter state code (e.g., `"SP"`).
    pub state_code: String,

    pub zip_code: String,

    /// Due date. Defaults to two days after creation when unset.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due: Option<NaiveDate>,

    /// Fine percentage charged after the due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine: Option<f64>,

    /// Monthly interest percentage charged after the due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,

    /// Days after the due date until the boleto expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overdue_limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_tax_id: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<Description>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<Discount>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Fee charged, in cents. Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<i64>,

    /// Digitable line. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    /// Barcode number. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_code: Option<String>,

    /// Current status (e.g., `"registered"`, `"paid"`). Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

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
}

impl Resource for Boleto {
    const NAME: &'static str = "Boleto";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Filters for listing boletos.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletoQuery {
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

/// Creates boletos in a single request.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the API rejects any boleto.
pub async fn create(
    client: &RestClient,
    user: &User,
    boletos: &[Boleto],
) -> Result<Vec<Boleto>, ResourceError> {
    post(client, user, boletos).await
}

/// Retrieves a boleto by id.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if no boleto has this id.
pub async fn get(client: &RestClient, user: &User, id: &str) -> Result<Boleto, ResourceError> {
    get_id(client, user, id).await
}

/// Lists boletos lazily, up to `limit` items (unbounded if `None`).
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `params` cannot be encoded.
pub fn query(
    client: &RestClient,
    user: &User,
    limit: Option<usize>,
    params: &BoletoQuery,
) -> Result<QueryStream<Boleto>, ResourceError> {
    get_list(client, user, params, limit)
}

/// Retrieves one page of boletos.
///
/// # Errors
///
/// Returns any error the listing request produces.
pub async fn page(
    client: &RestClient,
    user: &User,
    cursor: Option<&str>,
    limit: Option<usize>,
    params: &BoletoQuery,
) -> Result<Page<Boleto>, ResourceError> {
    get_page(client, user, params, cursor, limit).await
}

/// Cancels an unpaid boleto, returning its final state.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if no boleto has this id.
pub async fn delete(client: &RestClient, user: &User, id: &str) -> Result<Boleto, ResourceError> {
    delete_id(client, user, id).await
}
