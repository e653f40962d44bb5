//! A single page of a cursor-paginated listing.
//!
//! [`Page<T>`] pairs the items of one listing request with the cursor that
//! continues it. It implements `Deref<Target = [T]>`, so it can be used like
//! a slice:
//!
//! ```rust
//! use starkbank::rest::Page;
//!
//! let page = Page::new(vec!["a", "b"], Some("next".to_string()));
//! assert_eq!(page.len(), 2);
//! assert_eq!(page[0], "a");
//! assert!(page.has_next());
//!
//! let (items, cursor) = page.into_parts();
//! assert_eq!(items, vec!["a", "b"]);
//! assert_eq!(cursor.as_deref(), Some("next"));
//! ```

use std::ops::Deref;

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::resource::decode;
use crate::rest::ResourceError;

/// One bounded batch of results plus its continuation cursor.
///
/// A `None` cursor means there are no further pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    cursor: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page. An empty cursor is treated as no cursor.
    #[must_use]
    pub fn new(items: Vec<T>, cursor: Option<String>) -> Self {
        Self {
            items,
            cursor: cursor.filter(|cursor| !cursor.is_empty()),
        }
    }

    /// Returns the cursor for the next page, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Returns `true` if the listing continues after this page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns the items of this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items and cursor.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.items, self.cursor)
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Parses a listing response `{"<plural>": [...], "cursor": ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidResponse`] if the list is missing, an
    /// item fails to decode, or the cursor is neither a string nor null.
    pub fn from_http_response(
        response: &HttpResponse,
        resource: &'static str,
        plural: &str,
    ) -> Result<Self, ResourceError> {
        let items_value =
            response
                .body
                .get(plural)
                .ok_or_else(|| ResourceError::InvalidResponse {
                    resource,
                    reason: format!("missing key '{plural}' in response body"),
                })?;

        let items: Vec<T> = decode(items_value, resource, plural)?;

        let cursor = match response.body.get("cursor") {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(cursor)) => Some(cursor.clone()),
            Some(other) => {
                return Err(ResourceError::InvalidResponse {
                    resource,
                    reason: format!("expected a string or null cursor, got {other}"),
                })
            }
        };

        Ok(Self::new(items, cursor))
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// Verify Page is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Page<String>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    fn response(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body)
    }

    #[test]
    fn test_page_parses_items_and_cursor() {
        let page: Page<Item> = Page::from_http_response(
            &response(json!({"logs": [{"id": "1"}, {"id": "2"}], "cursor": "abc"})),
            "TransferLog",
            "logs",
        )
        .unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page[1].id, "2");
        assert_eq!(page.cursor(), Some("abc"));
    }

    #[test]
    fn test_null_absent_and_empty_cursors_end_the_listing() {
        for body in [
            json!({"logs": [], "cursor": null}),
            json!({"logs": []}),
            json!({"logs": [], "cursor": ""}),
        ] {
            let page: Page<Item> =
                Page::from_http_response(&response(body), "TransferLog", "logs").unwrap();
            assert!(!page.has_next());
            assert!(page.cursor().is_none());
        }
    }

    #[test]
    fn test_missing_list_is_invalid_response() {
        let result: Result<Page<Item>, _> =
            Page::from_http_response(&response(json!({"cursor": null})), "TransferLog", "logs");

        assert!(matches!(
            result,
            Err(ResourceError::InvalidResponse { resource: "TransferLog", ref reason }) if reason.contains("logs")
        ));
    }

    #[test]
    fn test_undecodable_item_is_invalid_response() {
        let result: Result<Page<Item>, _> = Page::from_http_response(
            &response(json!({"logs": [{"id": 5}]})),
            "TransferLog",
            "logs",
        );
        assert!(matches!(result, Err(ResourceError::InvalidResponse { .. })));
    }

    #[test]
    fn test_undecodable_field_is_named_by_its_path() {
        #[derive(Debug, Deserialize)]
        struct Log {
            #[allow(dead_code)]
            id: String,
            #[serde(with = "crate::rest::check::serde::datetime")]
            #[allow(dead_code)]
            created: chrono::DateTime<chrono::Utc>,
        }

        let result: Result<Page<Log>, _> = Page::from_http_response(
            &response(json!({"logs": [
                {"id": "1", "created": "2020-03-10T10:30:00+00:00"},
                {"id": "2", "created": "2020-03-10T10:30:00+00:00"},
                {"id": "3", "created": "yesterday"}
            ]})),
            "TransferLog",
            "logs",
        );

        let Err(ResourceError::InvalidResponse { reason, .. }) = &result else {
            panic!("Expected InvalidResponse, got {result:?}");
        };
        assert!(
            reason.starts_with("logs[2].created: "),
            "unexpected reason: {reason}"
        );
        assert!(reason.contains("yesterday"));
    }

    #[test]
    fn test_non_string_cursor_is_invalid_response() {
        for cursor in [json!(42), json!(true), json!({"next": "abc"})] {
            let result: Result<Page<Item>, _> = Page::from_http_response(
                &response(json!({"logs": [{"id": "1"}], "cursor": cursor})),
                "TransferLog",
                "logs",
            );
            assert!(matches!(
                result,
                Err(ResourceError::InvalidResponse { ref reason, .. }) if reason.contains("cursor")
            ));
        }
    }

    #[test]
    fn test_page_into_iterator_preserves_order() {
        let page = Page::new(vec![1, 2, 3], None);
        let collected: Vec<i32> = page.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
