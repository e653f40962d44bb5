//! Boleto Holmes logs, one per investigation status change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::BoletoHolmes;
use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::{get_id, get_list, get_page, Page, QueryStream, Resource, ResourceError};

/// One status change of a [`BoletoHolmes`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub id: Option<String>,

    pub holmes: BoletoHolmes,

    #[serde(default)]
    pub errors: Vec<String>,

    /// The event type (e.g., `"solving"`, `"solved"`).
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(with = "crate::rest::check::serde::datetime")]
    pub created: DateTime<Utc>,
}

impl Resource for Log {
    const NAME: &'static str = "BoletoHolmesLog";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Filters for listing investigation logs.
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

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holmes_ids: Vec<String>,
}

/// Retrieves an investigation log by id.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if no log has this id.
pub async fn get(client: &RestClient, user: &User, id: &str) -> Result<Log, ResourceError> {
    get_id(client, user, id).await
}

/// Lists investigation logs lazily, up to `limit` items (unbounded if `None`).
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

/// Retrieves one page of investigation logs.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_routes() {
        assert_eq!(Log::endpoint(), "boleto-holmes/log");
        assert_eq!(Log::plural_key(), "logs");
    }

    #[test]
    fn test_holmes_ids_filter_name() {
        let query = crate::rest::serialize_to_query(&LogQuery {
            holmes_ids: vec!["1".to_string()],
            types: vec!["solved".to_string()],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(query["holmesIds"], "1");
        assert_eq!(query["types"], "solved");
    }
}
