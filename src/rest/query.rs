//! The paginated query generator.
//!
//! [`QueryStream`] turns a cursor-paginated listing into a lazy sequence of
//! resources. It is an explicit state machine: a page is requested only when
//! the items buffered from the previous one have all been consumed, and
//! nothing is requested once the caller's limit has been reached.
//!
//! # Example
//!
//! ```rust,ignore
//! use starkbank::rest::resources::transfer;
//!
//! let mut logs = transfer::log::query(&client, &user, Some(150), &Default::default())?;
//! while let Some(log) = logs.next().await {
//!     let log = log?;
//!     println!("{:?} {}", log.id, log.kind);
//! }
//! ```
//!
//! The same sequence is available as a [`Stream`]:
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//!
//! let logs: Vec<_> = transfer::log::query(&client, &user, Some(5), &Default::default())?
//!     .into_stream()
//!     .try_collect()
//!     .await?;
//! ```

use std::collections::{HashMap, VecDeque};
use std::fmt;

use futures::Stream;

use crate::auth::User;
use crate::clients::RestClient;
use crate::rest::resource::{fetch_page, MAX_PAGE_LIMIT};
use crate::rest::{Resource, ResourceError};

/// A lazy, limit-bounded sequence of resources chained across pages.
///
/// Created by [`get_list`](crate::rest::get_list) and the `query` function
/// of each resource module. Every `QueryStream` starts from the first page;
/// build a new one to restart a listing.
///
/// Dropping the stream stops all further requests.
pub struct QueryStream<T> {
    client: RestClient,
    user: User,
    filters: HashMap<String, String>,
    cursor: Option<String>,
    remaining: Option<usize>,
    buffer: VecDeque<T>,
    finished: bool,
}

impl<T: Resource> QueryStream<T> {
    pub(crate) fn new(
        client: RestClient,
        user: User,
        filters: HashMap<String, String>,
        limit: Option<usize>,
    ) -> Self {
        Self {
            client,
            user,
            filters,
            cursor: None,
            remaining: limit,
            buffer: VecDeque::new(),
            finished: false,
        }
    }

    /// Returns the number of items still allowed by the limit, if any.
    #[must_use]
    pub const fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    /// Yields the next resource, fetching the next page when needed.
    ///
    /// Returns `None` once the limit is reached or the listing ends. After an
    /// error is yielded, the stream is finished.
    pub async fn next(&mut self) -> Option<Result<T, ResourceError>> {
        loop {
            if self.remaining == Some(0) {
                self.finish();
                return None;
            }

            if let Some(item) = self.buffer.pop_front() {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some(Ok(item));
            }

            if self.finished {
                return None;
            }

            let page_limit = self
                .remaining
                .map_or(MAX_PAGE_LIMIT, |remaining| remaining.min(MAX_PAGE_LIMIT));

            let page = match fetch_page::<T>(
                &self.client,
                &self.user,
                &self.filters,
                self.cursor.as_deref(),
                Some(page_limit),
            )
            .await
            {
                Ok(page) => page,
                Err(error) => {
                    self.finish();
                    return Some(Err(error));
                }
            };

            let (items, cursor) = page.into_parts();
            if items.is_empty() && cursor.is_some() {
                tracing::warn!(
                    resource = T::NAME,
                    cursor = ?cursor,
                    "Received an empty page with a cursor, following it"
                );
            }

            self.finished = cursor.is_none();
            self.cursor = cursor;
            self.buffer.extend(items);
        }
    }

    /// Drains the stream into a vector, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced while fetching pages.
    pub async fn try_collect(mut self) -> Result<Vec<T>, ResourceError> {
        let mut items = Vec::with_capacity(self.remaining.unwrap_or(0).min(MAX_PAGE_LIMIT));
        while let Some(item) = self.next().await {
            items.push(item?);
        }
        Ok(items)
    }

    /// Converts this query into a [`Stream`].
    pub fn into_stream(self) -> impl Stream<Item = Result<T, ResourceError>> {
        futures::stream::unfold(self, |mut query| async move {
            query.next().await.map(|item| (item, query))
        })
    }

    fn finish(&mut self) {
        self.finished = true;
        self.buffer.clear();
    }
}

impl<T> fmt::Debug for QueryStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryStream")
            .field("filters", &self.filters)
            .field("cursor", &self.cursor)
            .field("remaining", &self.remaining)
            .field("buffered", &self.buffer.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

// Verify QueryStream is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryStream<String>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Project;
    use crate::config::{Environment, HostUrl, ProjectId, StarkConfig};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct MockLog {
        id: Option<String>,
    }

    impl Resource for MockLog {
        const NAME: &'static str = "TransferLog";

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    fn create_test_stream(limit: Option<usize>) -> QueryStream<MockLog> {
        // Nothing listens on a port released right after binding it.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = StarkConfig::builder()
            .host(HostUrl::new(format!("http://127.0.0.1:{port}")).unwrap())
            .build();
        let user = Project::new(
            Environment::Sandbox,
            ProjectId::new("1").unwrap(),
            |message: &str| message.to_string(),
        );
        QueryStream::new(
            RestClient::new(&config).unwrap(),
            user.into(),
            HashMap::new(),
            limit,
        )
    }

    #[tokio::test]
    async fn test_zero_limit_yields_nothing_without_requests() {
        let mut stream = create_test_stream(Some(0));
        assert!(stream.next().await.is_none());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_error_finishes_stream() {
        let mut stream = create_test_stream(Some(10));

        let first = stream.next().await;
        assert!(matches!(first, Some(Err(ResourceError::Transport(_)))));
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let stream = create_test_stream(Some(3));
        let debug_output = format!("{stream:?}");
        assert!(debug_output.contains("remaining: Some(3)"));
        assert!(!debug_output.contains("project/"));
    }
}
