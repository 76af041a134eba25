//! Inventory Store
//!
//! Local copy of the listing collection and the active event selection.
//! Uses Leptos reactive_stores so views re-render on change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, ItemId};
use crate::table_edit::clone_item;

/// App-wide inventory state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct InventoryState {
    /// Listings as of the last fetch, plus local clones
    pub items: Vec<Item>,
    /// Event the table is showing; empty when none is chosen
    pub active_event_id: String,
}

/// Handle to the inventory state, provided via context by `App`
#[derive(Clone, Copy)]
pub struct InventoryStore {
    state: Store<InventoryState>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self { state: Store::new(InventoryState::default()) }
    }

    /// Tracked read of all items
    pub fn items(&self) -> Vec<Item> {
        self.state.items().get()
    }

    /// Untracked read, for event handlers
    pub fn items_untracked(&self) -> Vec<Item> {
        self.state.items().get_untracked()
    }

    pub fn find_item(&self, id: ItemId) -> Option<Item> {
        self.state
            .items()
            .with_untracked(|items| items.iter().find(|i| i.id == id).cloned())
    }

    /// Replace the whole collection
    pub fn set_items(&self, next: Vec<Item>) {
        log::debug!("[STORE] set {} items", next.len());
        *self.state.items().write() = next;
    }

    pub fn active_event_id(&self) -> String {
        self.state.active_event_id().get()
    }

    pub fn set_active_event_id(&self, id: impl Into<String>) {
        let id = id.into();
        log::debug!("[STORE] active event -> {:?}", id);
        *self.state.active_event_id().write() = id;
    }

    /// Swap in a locally merged copy of an item
    pub fn replace_item(&self, updated: Item) {
        if let Some(item) = self.state.items().write().iter_mut().find(|i| i.id == updated.id) {
            *item = updated;
        }
    }

    pub fn append_item(&self, item: Item) {
        self.state.items().write().push(item);
    }

    /// Append a local-only copy of `id`; nothing is sent to the server.
    pub fn append_clone(&self, id: ItemId, now_millis: u64) -> Option<Item> {
        let clone = self.state.items().with_untracked(|items| {
            items
                .iter()
                .find(|i| i.id == id)
                .map(|source| clone_item(source, items, now_millis))
        })?;
        log::info!("[STORE] cloned #{} as local-only #{}", id, clone.id);
        self.append_item(clone.clone());
        Some(clone)
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the inventory store from context
pub fn use_inventory_store() -> InventoryStore {
    expect_context::<InventoryStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Listing;

    fn make_item(id: u64, event_id: &str) -> Item {
        Item::new(
            id,
            Listing {
                event_id: Some(event_id.to_string()),
                quantity: 2,
                face_value: 50.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_set_and_get() {
        let store = InventoryStore::new();
        assert!(store.items_untracked().is_empty());
        assert_eq!(store.active_event_id(), "");

        store.set_items(vec![make_item(1, "event1"), make_item(2, "event2")]);
        store.set_active_event_id("event2");

        assert_eq!(store.items_untracked().len(), 2);
        assert_eq!(store.active_event_id(), "event2");

        store.set_items(vec![make_item(3, "event1")]);
        let ids: Vec<u64> = store.items_untracked().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_replace_item() {
        let store = InventoryStore::new();
        store.set_items(vec![make_item(1, "event1"), make_item(2, "event1")]);

        let mut updated = make_item(2, "event1");
        updated.listing.quantity = 9;
        store.replace_item(updated);

        assert_eq!(store.find_item(2).unwrap().listing.quantity, 9);
        assert_eq!(store.find_item(1).unwrap().listing.quantity, 2);

        // Unknown ids are ignored
        store.replace_item(make_item(42, "event1"));
        assert_eq!(store.items_untracked().len(), 2);
    }

    #[test]
    fn test_append_clone() {
        let store = InventoryStore::new();
        store.set_items(vec![make_item(7, "event1")]);

        let clone = store.append_clone(7, 1_700_000_000_000).unwrap();

        let items = store.items_untracked();
        assert_eq!(items.len(), 2);
        assert_ne!(items[1].id, 7);
        assert_eq!(items[1], clone);
        assert_eq!(items[1].listing, items[0].listing);

        assert!(store.append_clone(99, 1_700_000_000_000).is_none());
        assert_eq!(store.items_untracked().len(), 2);
    }
}
