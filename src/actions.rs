//! Inventory Actions
//!
//! Persisted mutations: each one talks to the inventory API and then asks
//! the caller to refresh the store. Components run these under `spawn_local`.

use thiserror::Error;

use crate::api::{ApiError, InventoryApi};
use crate::catalog::EventInfo;
use crate::listing_form::ListingDraft;
use crate::models::{Item, ItemId, Listing};
use crate::validation::FieldError;

/// Why a new listing was not created
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Blocked locally; no request was sent
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("Could not create listing: {0}")]
    Api(#[from] ApiError),
}

/// What the add-listing form shows after a submit attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormUpdate {
    /// Set only after a successful create: the form goes back to defaults
    pub reset_to: Option<ListingDraft>,
    /// Replaces whatever field errors were on screen
    pub field_errors: Vec<FieldError>,
    /// Event the table should show; set only after a successful create
    pub active_event_id: Option<String>,
    /// Banner message when the server refused the listing
    pub error: Option<String>,
}

impl FormUpdate {
    pub fn created(&self) -> bool {
        self.reset_to.is_some()
    }
}

/// Per-item outcome of a batch of independent calls
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub succeeded: Vec<ItemId>,
    pub failed: Vec<(ItemId, String)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// One-line summary, e.g. `Deleted 1 of 2 listings; failed #5 (HTTP 500)`
    pub fn summary(&self, verb: &str) -> String {
        let mut line = format!("{} {} of {} listing(s)", verb, self.succeeded.len(), self.total());
        if !self.failed.is_empty() {
            let failures: Vec<String> = self
                .failed
                .iter()
                .map(|(id, reason)| format!("#{} ({})", id, reason))
                .collect();
            line.push_str("; failed ");
            line.push_str(&failures.join(", "));
        }
        line
    }
}

fn short_reason(err: &ApiError) -> String {
    match err.status() {
        Some(status) => format!("HTTP {}", status),
        None => err.to_string(),
    }
}

pub async fn load_inventory<A: InventoryApi + ?Sized>(api: &A) -> Result<Vec<Item>, ApiError> {
    let items = api.list().await?;
    log::info!("[API] loaded {} listings", items.len());
    Ok(items)
}

/// Validate the draft and create the listing.
///
/// Returns the listing that was sent so the caller can focus its event.
pub async fn submit_listing<A: InventoryApi + ?Sized>(
    api: &A,
    draft: &ListingDraft,
    events: &[EventInfo],
) -> Result<Listing, SubmitError> {
    let listing = draft.to_listing(events).map_err(|errors| {
        log::warn!("[FORM] submit blocked: {} invalid field(s)", errors.len());
        SubmitError::Invalid(errors)
    })?;

    let created = api
        .create(&listing)
        .await
        .inspect_err(|e| log::error!("[FORM] create failed: {}", e))?;
    log::info!(
        "[FORM] created listing {} for {:?}",
        created.map(|i| format!("#{}", i.id)).unwrap_or_default(),
        listing.event_id
    );
    Ok(listing)
}

/// Submit the form and work out what it shows next.
///
/// After a create the draft resets and the submitted event becomes active.
/// On any failure the draft is left as typed.
pub async fn submit_form<A: InventoryApi + ?Sized>(
    api: &A,
    draft: &ListingDraft,
    events: &[EventInfo],
) -> FormUpdate {
    match submit_listing(api, draft, events).await {
        Ok(listing) => FormUpdate {
            reset_to: Some(ListingDraft::default()),
            active_event_id: listing.event_id,
            ..FormUpdate::default()
        },
        Err(SubmitError::Invalid(field_errors)) => FormUpdate { field_errors, ..FormUpdate::default() },
        Err(e @ SubmitError::Api(_)) => FormUpdate { error: Some(e.to_string()), ..FormUpdate::default() },
    }
}

/// Persist a row edit, then refresh whatever the outcome
pub async fn save_item<A, F>(api: &A, item: &Item, refresh: F) -> Result<(), ApiError>
where
    A: InventoryApi + ?Sized,
    F: FnOnce(),
{
    let result = api.update(item).await.map(|_| ());
    match &result {
        Ok(()) => log::info!("[TABLE] saved #{}", item.id),
        Err(e) => log::error!("[TABLE] save #{} failed: {}", item.id, e),
    }
    refresh();
    result
}

/// Send each update independently; one failure does not stop the rest
pub async fn save_items<A, F>(api: &A, items: &[Item], refresh: F) -> BatchReport
where
    A: InventoryApi + ?Sized,
    F: FnOnce(),
{
    let mut report = BatchReport::default();
    for item in items {
        match api.update(item).await {
            Ok(_) => report.succeeded.push(item.id),
            Err(e) => {
                log::error!("[TABLE] bulk save #{} failed: {}", item.id, e);
                report.failed.push((item.id, short_reason(&e)));
            }
        }
    }
    log::info!("[TABLE] {}", report.summary("Updated"));
    refresh();
    report
}

/// Delete each id independently, then refresh once
pub async fn delete_items<A, F>(api: &A, ids: &[ItemId], refresh: F) -> BatchReport
where
    A: InventoryApi + ?Sized,
    F: FnOnce(),
{
    let mut report = BatchReport::default();
    for &id in ids {
        match api.delete(id).await {
            Ok(()) => report.succeeded.push(id),
            Err(e) => {
                log::error!("[TABLE] delete #{} failed: {}", id, e);
                report.failed.push((id, short_reason(&e)));
            }
        }
    }
    log::info!("[TABLE] {}", report.summary("Deleted"));
    refresh();
    report
}
