//! Transfers to bank accounts.
//!
//! A [`Transfer`] sends money from the workspace balance to an account at
//! any bank. Every status change is recorded as a [`log::Log`].
//!
//! # Example
//!
//! ```rust,ignore
//! use starkbank::rest::resources::transfer::{self, Transfer};
//!
//! let created = transfer::create(
//!     &client,
//!     &user,
//!     &[Transfer {
//!         amount: 100,
//!         name: "Tony Stark".to_string(),
//!         tax_id: "012.345.678-90".to_string(),
//!         bank_code: "01".to_string(),
//!         branch_code: "0001".to_string(),
//!         account_number: "10000-0".to_string(),
//!         ..Default::default()
//!     }],
//! )
//! .await?;
//!
//! let canceled = transfer::delete(&client, &user, created[0].id.as_deref().unwrap_or_default()).await?;
//! ```

pub mod log;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::{
    delete_id, get_id, get_list, get_page, post, Page, QueryStream, Resource, ResourceError,
};

/// A transfer to a bank account.
///
/// Fields marked read-only are assigned by the API and left out of creation
/// payloads while unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Unique id. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount in cents.
    #[serde(with = "crate::rest::check::serde::amount")]
    pub amount: i64,

    /// Receiver's full name.
    pub name: String,

    /// Receiver's CPF or CNPJ.
    pub tax_id: String,

    /// Receiver's bank code (or ISPB for Pix).
    pub bank_code: String,

    /// Receiver's bank branch.
    pub branch_code: String,

    /// Receiver's account number, with verification digit.
    pub account_number: String,

    /// Receiver's account type (e.g., `"checking"`, `"salary"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    /// Caller-defined unique id used to avoid duplicated transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// When the transfer should be processed.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled: Option<DateTime<Utc>>,

    /// Text shown on the receiver's statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Fee charged, in cents. Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee: Option<i64>,

    /// Current status (e.g., `"created"`, `"processing"`, `"success"`). Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Ledger transactions linked to this transfer. Read-only.
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

impl Resource for Transfer {
    const NAME: &'static str = "Transfer";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Filters for listing transfers.
///
/// All fields are optional; unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferQuery {
    /// Only transfers created on or after this date.
    #[serde(
        with = "crate::rest::check::serde::option_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub after: Option<NaiveDate>,

    /// Only transfers created on or before this date.
    #[serde(
        with = "crate::rest::check::serde::option_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub before: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transaction_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Receiver tax id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    /// Sort order (e.g., `"-created"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}

/// Creates transfers in a single request.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the API rejects any transfer.
pub async fn create(
    client: &RestClient,
    user: &User,
    transfers: &[Transfer],
) -> Result<Vec<Transfer>, ResourceError> {
    post(client, user, transfers).await
}

/// Retrieves a transfer by id.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if no transfer has this id.
pub async fn get(client: &RestClient, user: &User, id: &str) -> Result<Transfer, ResourceError> {
    get_id(client, user, id).await
}

/// Lists transfers lazily, up to `limit` items (unbounded if `None`).
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `params` cannot be encoded.
pub fn query(
    client: &RestClient,
    user: &User,
    limit: Option<usize>,
    params: &TransferQuery,
) -> Result<QueryStream<Transfer>, ResourceError> {
    get_list(client, user, params, limit)
}

/// Retrieves one page of transfers.
///
/// # Errors
///
/// Returns any error the listing request produces.
pub async fn page(
    client: &RestClient,
    user: &User,
    cursor: Option<&str>,
    limit: Option<usize>,
    params: &TransferQuery,
) -> Result<Page<Transfer>, ResourceError> {
    get_page(client, user, params, cursor, limit).await
}

/// Cancels a scheduled transfer, returning its final state.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the transfer can no longer be canceled.
pub async fn delete(client: &RestClient, user: &User, id: &str) -> Result<Transfer, ResourceError> {
    delete_id(client, user, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;
    use serde_json::json;

    #[test]
    fn test_transfer_routes() {
        assert_eq!(Transfer::endpoint(), "transfer");
        assert_eq!(Transfer::singular_key(), "transfer");
        assert_eq!(Transfer::plural_key(), "transfers");
    }

    #[test]
    fn test_creation_payload_omits_read_only_fields() {
        let transfer = Transfer {
            amount: 100,
            name: "Tony Stark".to_string(),
            tax_id: "012.345.678-90".to_string(),
            bank_code: "01".to_string(),
            branch_code: "0001".to_string(),
            account_number: "10000-0".to_string(),
            tags: vec!["iron".to_string()],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&transfer).unwrap(),
            json!({
                "amount": 100,
                "name": "Tony Stark",
                "taxId": "012.345.678-90",
                "bankCode": "01",
                "branchCode": "0001",
                "accountNumber": "10000-0",
                "tags": ["iron"]
            })
        );
    }

    #[test]
    fn test_parses_api_representation() {
        let transfer: Transfer = serde_json::from_value(json!({
            "id": "5656565656565656",
            "amount": "1500",
            "name": "Tony Stark",
            "taxId": "012.345.678-90",
            "bankCode": "01",
            "branchCode": "0001",
            "accountNumber": "10000-0",
            "accountType": "checking",
            "fee": 0,
            "status": "success",
            "transactionIds": ["123"],
            "created": "2020-03-10 10:30:00.000",
            "updated": "2020-03-10T10:31:00.000000+00:00",
            "rules": []
        }))
        .unwrap();

        assert_eq!(transfer.id(), Some("5656565656565656"));
        assert_eq!(transfer.amount, 1500);
        assert_eq!(transfer.fee, Some(0));

        let value = serde_json::to_value(&transfer).unwrap();
        assert_eq!(value["created"], "2020-03-10T10:30:00+00:00");
        assert_eq!(value["updated"], "2020-03-10T10:31:00+00:00");
    }

    #[test]
    fn test_query_filters_encode_as_query_params() {
        let params = TransferQuery {
            after: NaiveDate::from_ymd_opt(2020, 3, 10),
            status: Some("success".to_string()),
            ids: vec!["1".to_string(), "2".to_string()],
            ..Default::default()
        };

        let query = serialize_to_query(&params).unwrap();
        assert_eq!(query.len(), 3);
        assert_eq!(query["after"], "2020-03-10");
        assert_eq!(query["status"], "success");
        assert_eq!(query["ids"], "1,2");
    }
}
