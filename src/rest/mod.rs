//! REST resource infrastructure for the Stark Bank API.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: the name-driven description of a remote entity
//! - **Generic operations**: [`get_id`], [`get_page`], [`get_list`], [`post`],
//!   [`patch_id`] and [`delete_id`], shared by every resource
//! - **[`Page<T>`]**: one batch of a listing plus its continuation cursor
//! - **[`QueryStream<T>`]**: the lazy, limit-bounded query generator
//! - **[`check`]**: validation of dates, datetimes and amounts
//! - **[`ResourceError`]**: semantic error types for resource operations
//! - **[`resources`]**: the typed resource modules
//!
//! # Example
//!
//! ```rust,ignore
//! use starkbank::rest::resources::{transfer, transfer::TransferQuery};
//!
//! let params = TransferQuery {
//!     status: Some("success".to_string()),
//!     ..Default::default()
//! };
//!
//! // One page at a time
//! let page = transfer::page(&client, &user, None, Some(10), &params).await?;
//! if let Some(cursor) = page.cursor() {
//!     let next = transfer::page(&client, &user, Some(cursor), Some(10), &params).await?;
//! }
//!
//! // Or a lazy query across pages
//! let mut transfers = transfer::query(&client, &user, Some(150), &params)?;
//! while let Some(transfer) = transfers.next().await {
//!     println!("{:?}", transfer?.id);
//! }
//! ```

pub mod check;
mod errors;
mod page;
mod path;
mod query;
mod resource;
pub mod resources;

pub use check::ValidationError;
pub use errors::{ApiErrorEntry, ResourceError};
pub use page::Page;
pub use path::{endpoint, id_path, kebab_case, plural_key, singular_key};
pub use query::QueryStream;
pub use resource::{
    delete_id, get_id, get_list, get_page, patch_id, post, serialize_to_query, Resource,
    MAX_PAGE_LIMIT,
};
