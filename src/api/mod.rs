//! Inventory API
//!
//! Client side of the remote inventory service, organized by concern.

mod error;
mod http;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::models::{Item, ItemId, Listing};

pub use error::{ApiError, ApiResult};
pub use http::HttpInventoryClient;

/// Remote inventory operations.
///
/// Futures are not `Send`: everything runs on the browser's main thread.
#[async_trait(?Send)]
pub trait InventoryApi {
    /// `GET /inventory`
    async fn list(&self) -> ApiResult<Vec<Item>>;

    /// `POST /inventory`. `None` when the server accepts without echoing the record.
    async fn create(&self, listing: &Listing) -> ApiResult<Option<Item>>;

    /// `PUT /inventory/{id}` with the full record
    async fn update(&self, item: &Item) -> ApiResult<Option<Item>>;

    /// `DELETE /inventory/{id}`
    async fn delete(&self, id: ItemId) -> ApiResult<()>;
}
