//! The [`Resource`] trait and the generic REST operations built on it.
//!
//! Every typed resource module is a thin layer over these functions:
//!
//! - [`get_id`]: `GET /{endpoint}/{id}`, reading `{"<singular>": {...}}`
//! - [`get_page`]: one `GET /{endpoint}` listing request, returning a [`Page`]
//! - [`get_list`]: a lazy [`QueryStream`] chaining pages by cursor
//! - [`post`]: `POST /{endpoint}` with `{"<plural>": [...]}`
//! - [`patch_id`]: `PATCH /{endpoint}/{id}`
//! - [`delete_id`]: `DELETE /{endpoint}/{id}`
//!
//! # Implementing a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use starkbank::rest::Resource;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Workspace {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub username: String,
//! }
//!
//! impl Resource for Workspace {
//!     const NAME: &'static str = "Workspace";
//!
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//! }
//!
//! assert_eq!(Workspace::endpoint(), "workspace");
//! assert_eq!(Workspace::plural_key(), "workspaces");
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::auth::User;
use crate::clients::{HttpResponse, RestClient};
use crate::rest::check::ValidationError;
use crate::rest::path::{endpoint, id_path, plural_key, singular_key};
use crate::rest::{Page, QueryStream, ResourceError};

/// The largest page the API serves.
pub const MAX_PAGE_LIMIT: usize = 100;

/// A typed representation of a remote entity.
///
/// The name drives the REST route and the JSON envelope keys; see
/// [`path`](crate::rest::endpoint) for the derivation rules.
///
/// # Required Bounds
///
/// Resources must be serializable, deserializable, cloneable, and thread-safe.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized + 'static {
    /// The CamelCase resource name (e.g., `"TransferLog"`).
    const NAME: &'static str;

    /// Returns the server-assigned id, or `None` for a creation payload.
    fn id(&self) -> Option<&str>;

    /// Returns the route of this resource (e.g., `"transfer/log"`).
    #[must_use]
    fn endpoint() -> String {
        endpoint(Self::NAME)
    }

    /// Returns the key wrapping a single resource (e.g., `"log"`).
    #[must_use]
    fn singular_key() -> String {
        singular_key(Self::NAME)
    }

    /// Returns the key wrapping a list of resources (e.g., `"logs"`).
    #[must_use]
    fn plural_key() -> String {
        plural_key(Self::NAME)
    }
}

/// Retrieves a single resource by id.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] for an empty id, before any request.
/// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
pub async fn get_id<T: Resource>(
    client: &RestClient,
    user: &User,
    id: &str,
) -> Result<T, ResourceError> {
    let path = id_path(&T::endpoint(), validate_id(id)?);

    let response = client.get(&path, None, user).await?;
    ResourceError::check_response(&response, T::NAME, Some(id))?;

    parse_entity(&response, T::NAME, &T::singular_key())
}

/// Retrieves one page of a listing.
///
/// `limit` is clamped to [`MAX_PAGE_LIMIT`]; when `None`, the server default
/// applies. Pass the cursor of the previous page to continue a listing.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `params` cannot be turned into
/// query parameters, or any error the request produces.
pub async fn get_page<T: Resource, P: Serialize + ?Sized>(
    client: &RestClient,
    user: &User,
    params: &P,
    cursor: Option<&str>,
    limit: Option<usize>,
) -> Result<Page<T>, ResourceError> {
    let query = serialize_to_query(params)?;
    fetch_page(client, user, &query, cursor, limit).await
}

/// Lists resources lazily, following cursors until `limit` items have been
/// yielded or the listing ends.
///
/// No request is made until the returned stream is polled.
///
/// # Errors
///
/// Returns [`ResourceError::Validation`] if `params` cannot be turned into
/// query parameters.
pub fn get_list<T: Resource, P: Serialize + ?Sized>(
    client: &RestClient,
    user: &User,
    params: &P,
    limit: Option<usize>,
) -> Result<QueryStream<T>, ResourceError> {
    let query = serialize_to_query(params)?;
    Ok(QueryStream::new(client.clone(), user.clone(), query, limit))
}

/// Creates resources in a single request.
///
/// # Errors
///
/// Returns [`ResourceError::Api`] if the API rejects any entity.
pub async fn post<T: Resource>(
    client: &RestClient,
    user: &User,
    entities: &[T],
) -> Result<Vec<T>, ResourceError> {
    let plural = T::plural_key();

    let mut envelope = serde_json::Map::new();
    envelope.insert(plural.clone(), to_json(&plural, entities)?);

    let response = client
        .post(&T::endpoint(), Value::Object(envelope), user)
        .await?;
    ResourceError::check_response(&response, T::NAME, None)?;

    parse_entity(&response, T::NAME, &plural)
}

/// Partially updates a resource.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
pub async fn patch_id<T: Resource, B: Serialize + ?Sized>(
    client: &RestClient,
    user: &User,
    id: &str,
    body: &B,
) -> Result<T, ResourceError> {
    let path = id_path(&T::endpoint(), validate_id(id)?);
    let body = to_json("body", body)?;

    let response = client.patch(&path, body, user).await?;
    ResourceError::check_response(&response, T::NAME, Some(id))?;

    parse_entity(&response, T::NAME, &T::singular_key())
}

/// Deletes (or cancels) a resource, returning its final state.
///
/// # Errors
///
/// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
pub async fn delete_id<T: Resource>(
    client: &RestClient,
    user: &User,
    id: &str,
) -> Result<T, ResourceError> {
    let path = id_path(&T::endpoint(), validate_id(id)?);

    let response = client.delete(&path, user).await?;
    ResourceError::check_response(&response, T::NAME, Some(id))?;

    parse_entity(&response, T::NAME, &T::singular_key())
}

/// Issues one listing request with already-serialized filters.
pub(crate) async fn fetch_page<T: Resource>(
    client: &RestClient,
    user: &User,
    filters: &HashMap<String, String>,
    cursor: Option<&str>,
    limit: Option<usize>,
) -> Result<Page<T>, ResourceError> {
    let mut query = filters.clone();
    if let Some(limit) = limit {
        query.insert("limit".to_string(), limit.min(MAX_PAGE_LIMIT).to_string());
    }
    if let Some(cursor) = cursor {
        query.insert("cursor".to_string(), cursor.to_string());
    }

    let path = T::endpoint();
    let response = client.get(&path, Some(query), user).await?;
    ResourceError::check_response(&response, T::NAME, None)?;

    let page = Page::from_http_response(&response, T::NAME, &T::plural_key())?;

    tracing::debug!(
        resource = T::NAME,
        cursor = ?cursor,
        limit = ?limit,
        items = page.len(),
        has_next = page.has_next(),
        "Fetched page"
    );

    Ok(page)
}

fn validate_id(id: &str) -> Result<&str, ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::new("id", "a non-empty id", id));
    }
    Ok(id)
}

fn to_json<B: Serialize + ?Sized>(field: &str, value: &B) -> Result<Value, ValidationError> {
    serde_json::to_value(value)
        .map_err(|e| ValidationError::new(field, "a JSON-serializable payload", e.to_string()))
}

fn parse_entity<R: DeserializeOwned>(
    response: &HttpResponse,
    resource: &'static str,
    key: &str,
) -> Result<R, ResourceError> {
    let value = response
        .body
        .get(key)
        .ok_or_else(|| ResourceError::InvalidResponse {
            resource,
            reason: format!("missing key '{key}' in response body"),
        })?;

    decode(value, resource, key)
}

/// Decodes the value found under `key`, naming the offending field path
/// (`logs[2].created`) when decoding fails.
pub(crate) fn decode<R: DeserializeOwned>(
    value: &Value,
    resource: &'static str,
    key: &str,
) -> Result<R, ResourceError> {
    serde_path_to_error::deserialize(value.clone()).map_err(|e| {
        let path = e.path().to_string();
        let location = match path.as_str() {
            "." => key.to_string(),
            _ if path.starts_with('[') => format!("{key}{path}"),
            _ => format!("{key}.{path}"),
        };
        ResourceError::InvalidResponse {
            resource,
            reason: format!("{location}: {}", e.inner()),
        }
    })
}

/// Serializes a params struct to a query parameter map.
///
/// Nulls are omitted, lists are comma-joined and nested objects are sent
/// as JSON.
///
/// # Errors
///
/// Returns [`ValidationError`] if `params` does not serialize to a JSON object.
pub fn serialize_to_query<T: Serialize + ?Sized>(
    params: &T,
) -> Result<HashMap<String, String>, ValidationError> {
    let value = to_json("query", params)?;

    let mut query = HashMap::new();

    match value {
        Value::Object(map) => {
            for (key, val) in map {
                match val {
                    Value::Null => {}
                    Value::String(s) => {
                        query.insert(key, s);
                    }
                    Value::Number(n) => {
                        query.insert(key, n.to_string());
                    }
                    Value::Bool(b) => {
                        query.insert(key, b.to_string());
                    }
                    Value::Array(arr) => {
                        let values: Vec<String> = arr
                            .iter()
                            .filter_map(|v| match v {
                                Value::String(s) => Some(s.clone()),
                                Value::Number(n) => Some(n.to_string()),
                                Value::Bool(b) => Some(b.to_string()),
                                _ => None,
                            })
                            .collect();
                        if !values.is_empty() {
                            query.insert(key, values.join(","));
                        }
                    }
                    Value::Object(_) => {
                        query.insert(key, val.to_string());
                    }
                }
            }
        }
        Value::Null => {}
        other => {
            return Err(ValidationError::new(
                "query",
                "a struct or map of filters",
                other.to_string(),
            ))
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct MockLog {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(rename = "type")]
        kind: String,
    }

    impl Resource for MockLog {
        const NAME: &'static str = "BoletoPaymentLog";

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct MockQuery {
        #[serde(
            with = "crate::rest::check::serde::option_date",
            skip_serializing_if = "Option::is_none"
        )]
        after: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        types: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        payment_ids: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        active: Option<bool>,
    }

    #[test]
    fn test_resource_defaults_derive_from_name() {
        assert_eq!(MockLog::endpoint(), "boleto-payment/log");
        assert_eq!(MockLog::singular_key(), "log");
        assert_eq!(MockLog::plural_key(), "logs");
    }

    #[test]
    fn test_id_returns_none_for_new_resource() {
        let log = MockLog {
            id: None,
            kind: "created".to_string(),
        };
        assert!(log.id().is_none());
        assert_eq!(serde_json::to_value(&log).unwrap(), serde_json::json!({"type": "created"}));
    }

    #[test]
    fn test_serialize_to_query_omits_absent_fields() {
        let query = serialize_to_query(&MockQuery::default()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_serialize_to_query_formats_filters() {
        let query = serialize_to_query(&MockQuery {
            after: NaiveDate::from_ymd_opt(2020, 3, 10),
            types: Some(vec!["success".to_string(), "failed".to_string()]),
            payment_ids: Some(vec!["1".to_string(), "2".to_string()]),
            active: Some(true),
        })
        .unwrap();

        assert_eq!(query.get("after"), Some(&"2020-03-10".to_string()));
        assert_eq!(query.get("types"), Some(&"success,failed".to_string()));
        assert_eq!(query.get("paymentIds"), Some(&"1,2".to_string()));
        assert_eq!(query.get("active"), Some(&"true".to_string()));
    }

    #[test]
    fn test_serialize_to_query_skips_empty_lists() {
        let query = serialize_to_query(&MockQuery {
            types: Some(Vec::new()),
            ..MockQuery::default()
        })
        .unwrap();
        assert!(!query.contains_key("types"));
    }

    #[test]
    fn test_serialize_to_query_accepts_unit_and_maps() {
        assert!(serialize_to_query(&()).unwrap().is_empty());

        let mut map = HashMap::new();
        map.insert("status", "paid");
        assert_eq!(serialize_to_query(&map).unwrap().get("status"), Some(&"paid".to_string()));
    }

    #[test]
    fn test_serialize_to_query_rejects_scalars() {
        let error = serialize_to_query(&42).unwrap_err();
        assert_eq!(error.field, "query");
    }

    #[test]
    fn test_validate_id_rejects_blank_ids() {
        assert!(validate_id("5656565656565656").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("  ").is_err());
    }

    #[test]
    fn test_parse_entity_reports_missing_key() {
        let response = HttpResponse::new(200, HashMap::new(), serde_json::json!({"other": {}}));
        let result: Result<MockLog, _> = parse_entity(&response, MockLog::NAME, "log");
        assert!(matches!(
            result,
            Err(ResourceError::InvalidResponse { resource: "BoletoPaymentLog", .. })
        ));
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: Resource>() {}
        assert_trait_bounds::<MockLog>();
    }
}
