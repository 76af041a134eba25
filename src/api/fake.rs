//! In-memory `InventoryApi` for tests
//!
//! Records every call and can be told to fail for chosen ids.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use async_trait::async_trait;

use super::{ApiError, ApiResult, InventoryApi};
use crate::models::{Item, ItemId, Listing};

#[derive(Default)]
pub struct FakeInventoryApi {
    pub items: RefCell<Vec<Item>>,
    pub created: RefCell<Vec<Listing>>,
    pub updated: RefCell<Vec<Item>>,
    pub deleted: RefCell<Vec<ItemId>>,
    failing_ids: RefCell<BTreeSet<ItemId>>,
    fail_all: Cell<bool>,
    next_id: Cell<ItemId>,
}

impl FakeInventoryApi {
    pub fn with_items(items: Vec<Item>) -> Self {
        let next = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let api = Self::default();
        *api.items.borrow_mut() = items;
        api.next_id.set(next);
        api
    }

    /// Make update/delete of `id` answer HTTP 500
    pub fn fail_for(&self, id: ItemId) {
        self.failing_ids.borrow_mut().insert(id);
    }

    /// Make every call answer HTTP 503
    pub fn fail_everything(&self) {
        self.fail_all.set(true);
    }

    fn check(&self, method: &'static str, id: Option<ItemId>) -> ApiResult<()> {
        let url = match id {
            Some(id) => format!("fake://inventory/{}", id),
            None => "fake://inventory".to_string(),
        };
        if self.fail_all.get() {
            return Err(ApiError::Status { method, url, status: 503 });
        }
        if id.is_some_and(|id| self.failing_ids.borrow().contains(&id)) {
            return Err(ApiError::Status { method, url, status: 500 });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl InventoryApi for FakeInventoryApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        self.check("GET", None)?;
        Ok(self.items.borrow().clone())
    }

    async fn create(&self, listing: &Listing) -> ApiResult<Option<Item>> {
        self.created.borrow_mut().push(listing.clone());
        self.check("POST", None)?;
        let id = self.next_id.get().max(1);
        self.next_id.set(id + 1);
        let item = Item::new(id, listing.clone());
        self.items.borrow_mut().push(item.clone());
        Ok(Some(item))
    }

    async fn update(&self, item: &Item) -> ApiResult<Option<Item>> {
        self.updated.borrow_mut().push(item.clone());
        self.check("PUT", Some(item.id))?;
        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(Some(item.clone()))
            }
            None => Err(ApiError::Status {
                method: "PUT",
                url: format!("fake://inventory/{}", item.id),
                status: 404,
            }),
        }
    }

    async fn delete(&self, id: ItemId) -> ApiResult<()> {
        self.deleted.borrow_mut().push(id);
        self.check("DELETE", Some(id))?;
        self.items.borrow_mut().retain(|i| i.id != id);
        Ok(())
    }
}
