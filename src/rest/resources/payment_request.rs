//! Payment requests sent to a cost center for approval.
//!
//! A [`PaymentRequest`] wraps a payment (a transfer, a boleto payment or a
//! BR Code payment) that is only executed after the cost center approves it.
//! On the wire the wrapped payment is sent as `payment` together with its
//! kind in `type`:
//!
//! ```json
//! {"centerId": "5656565656565656", "type": "transfer", "payment": {...}}
//! ```
//!
//! Kinds this crate does not model are kept as raw JSON in
//! [`RequestPayment::Other`].
//!
//! # Example
//!
//! ```rust,ignore
//! use starkbank::rest::resources::payment_request::{self, PaymentRequest, PaymentRequestQuery};
//!
//! let requests = payment_request::create(
//!     &client,
//!     &user,
//!     &[PaymentRequest::new("5656565656565656", transfer)],
//! )
//! .await?;
//!
//! let pending = payment_request::query(
//!     &client,
//!     &user,
//!     Some(10),
//!     &PaymentRequestQuery::new("5656565656565656"),
//! )?
//! .try_collect()
//! .await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::check::ValidationError;
use crate::rest::resources::{BoletoPayment, BrcodePayment, Transfer};
use crate::rest::{get_list, get_page, post, Page, QueryStream, Resource, ResourceError};

/// The payment carried by a request.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(try_from = "TaggedPayment")]
pub enum RequestPayment {
    Transfer(Transfer),
    BoletoPayment(BoletoPayment),
    BrcodePayment(BrcodePayment),
    /// A payment kind without a typed model (e.g., `"utility-payment"`).
    Other {
        kind: String,
        payment: Value,
    },
}

impl RequestPayment {
    /// Returns the wire name of the payment kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Transfer(_) => "transfer",
            Self::BoletoPayment(_) => "boleto-payment",
            Self::BrcodePayment(_) => "brcode-payment",
            Self::Other { kind, .. } => kind,
        }
    }
}

impl Serialize for RequestPayment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RequestPayment", 2)?;
        state.serialize_field("type", self.kind())?;
        match self {
            Self::Transfer(transfer) => state.serialize_field("payment", transfer)?,
            Self::BoletoPayment(payment) => state.serialize_field("payment", payment)?,
            Self::BrcodePayment(payment) => state.serialize_field("payment", payment)?,
            Self::Other { payment, .. } => state.serialize_field("payment", payment)?,
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct TaggedPayment {
    #[serde(rename = "type")]
    kind: String,
    payment: Value,
}

impl TryFrom<TaggedPayment> for RequestPayment {
    type Error = String;

    fn try_from(tagged: TaggedPayment) -> Result<Self, Self::Error> {
        let TaggedPayment { kind, payment } = tagged;
        let parsed = match kind.as_str() {
            "transfer" => serde_json::from_value(payment).map(Self::Transfer),
            "boleto-payment" => serde_json::from_value(payment).map(Self::BoletoPayment),
            "brcode-payment" => serde_json::from_value(payment).map(Self::BrcodePayment),
            _ => return Ok(Self::Other { kind, payment }),
        };
        parsed.map_err(|e| format!("invalid {kind} payment: {e}"))
    }
}

impl From<Transfer> for RequestPayment {
    fn from(transfer: Transfer) -> Self {
        Self::Transfer(transfer)
    }
}

impl From<BoletoPayment> for RequestPayment {
    fn from(payment: BoletoPayment) -> Self {
        Self::BoletoPayment(payment)
    }
}

impl From<BrcodePayment> for RequestPayment {
    fn from(payment: BrcodePayment) -> Self {
        Self::BrcodePayment(payment)
    }
}

/// A payment awaiting cost center approval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Unique id. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The cost center that must approve the payment.
    pub center_id: String,

    #[serde(flatten)]
    pub payment: RequestPayment,

    /// Date after which the request expires.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub due: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Read-only.
    #[serde(
        default,
        with = "crate::rest::check::serde::option_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<i64>,

    /// Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Approval status (e.g., `"pending"`, `"approved"`). Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Approval history. Read-only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Value>,

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

impl PaymentRequest {
    /// Creates a request for `payment` addressed to a cost center.
    #[must_use]
    pub fn new(center_id: impl Into<String>, payment: impl Into<RequestPayment>) -> Self {
        Self {
            id: None,
            center_id: center_id.into(),
            payment: payment.into(),
            due: None,
            tags: Vec::new(),
            amount: None,
            description: None,
            status: None,
            actions: Vec::new(),
            created: None,
            updated: None,
        }
    }
}

impl Resource for PaymentRequest {
    const NAME: &'static str = "PaymentRequest";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Filters for listing payment requests.
///
/// The API only lists requests of one cost center at a time, so
/// `center_id` is required.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestQuery {
    pub center_id: String,

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

    /// Payment kind (e.g., `"transfer"`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}

impl PaymentRequestQuery {
    /// Creates a filter for one cost center with no other constraints.
    #[must_use]
    pub fn new(center_id: impl Into<String>) -> Self {
        Self {
            center_id: center_id.into(),
            after: None,
            before: None,
            status: None,
            kind: None,
            sort: None,
            tags: Vec::new(),
            ids: Vec::new(),
        }
    }

    fn validate(&self) -> Result<&Self, ValidationError> {
        if self.center_id.trim().is_empty() {
            return Err(ValidationError::new(
                "centerId",
                "a non-empty cost center id",
                &*self.center_id,
            ));
        }
        Ok(self)
    }
}

/// Creates payment requests in a single request.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the API rejects any request.
pub async fn create(
    client: &RestClient,
    user: &User,
    requests: &[PaymentRequest],
) -> Result<Vec<PaymentRequest>, ResourceError> {
    post(client, user, requests).await
}

/// Lists payment requests lazily, up to `limit` items (unbounded if `None`).
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `center_id` is empty.
pub fn query(
    client: &RestClient,
    user: &User,
    limit: Option<usize>,
    params: &PaymentRequestQuery,
) -> Result<QueryStream<PaymentRequest>, ResourceError> {
    get_list(client, user, params.validate()?, limit)
}

/// Retrieves one page of payment requests.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `center_id` is empty, or any
/// error the listing request produces.
pub async fn page(
    client: &RestClient,
    user: &User,
    cursor: Option<&str>,
    limit: Option<usize>,
    params: &PaymentRequestQuery,
) -> Result<Page<PaymentRequest>, ResourceError> {
    get_page(client, user, params.validate()?, cursor, limit).await
}
