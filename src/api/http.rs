//! HTTP Inventory Client
//!
//! `InventoryApi` over the REST endpoints at `{base}/inventory`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, InventoryApi};
use crate::config::AppConfig;
use crate::models::{Item, ItemId, Listing};

#[derive(Clone, Debug)]
pub struct HttpInventoryClient {
    config: AppConfig,
    client: reqwest::Client,
}

impl HttpInventoryClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }

    /// Send, check status, return the body text
    async fn send(
        &self,
        method: &'static str,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<(String, String)> {
        log::debug!("[API] {} {}", method, url);
        let response = match request.send().await {
            Ok(r) => r,
            Err(source) => return Err(ApiError::Transport { method, url, source }),
        };
        let status = response.status();
        if !status.is_success() {
            log::warn!("[API] {} {} -> {}", method, url, status);
            return Err(ApiError::Status { method, url, status: status.as_u16() });
        }
        match response.text().await {
            Ok(body) => Ok((url, body)),
            Err(source) => Err(ApiError::Transport { method, url, source }),
        }
    }
}

fn decode<T: DeserializeOwned>(method: &'static str, url: String, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { method, url, source })
}

/// Decode the listing array record by record; records that still fail
/// (no usable `id`) are skipped with a warning
fn decode_items(method: &'static str, url: String, body: &str) -> ApiResult<Vec<Item>> {
    let records: Vec<serde_json::Value> = decode(method, url, body)?;
    let total = records.len();
    let items: Vec<Item> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Item>(record) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("[API] skipping unreadable listing: {}", e);
                None
            }
        })
        .collect();
    if items.len() < total {
        log::warn!("[API] {} of {} listings skipped", total - items.len(), total);
    }
    Ok(items)
}

/// Decode an optional echoed record; blank bodies are fine
fn decode_optional<T: DeserializeOwned>(method: &'static str, url: String, body: &str) -> ApiResult<Option<T>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode(method, url, body).map(Some)
}

#[async_trait(?Send)]
impl InventoryApi for HttpInventoryClient {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let url = self.config.inventory_url();
        let request = self.client.get(&url);
        let (url, body) = self.send("GET", url, request).await?;
        decode_items("GET", url, &body)
    }

    async fn create(&self, listing: &Listing) -> ApiResult<Option<Item>> {
        let url = self.config.inventory_url();
        let request = self.client.post(&url).json(listing);
        let (url, body) = self.send("POST", url, request).await?;
        decode_optional("POST", url, &body)
    }

    async fn update(&self, item: &Item) -> ApiResult<Option<Item>> {
        let url = self.config.item_url(item.id);
        let request = self.client.put(&url).json(item);
        let (url, body) = self.send("PUT", url, request).await?;
        decode_optional("PUT", url, &body)
    }

    async fn delete(&self, id: ItemId) -> ApiResult<()> {
        let url = self.config.item_url(id);
        let request = self.client.delete(&url);
        self.send("DELETE", url, request).await?;
        Ok(())
    }
}
