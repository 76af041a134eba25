//! Ticket Inventory App
//!
//! Composition root: owns the inventory store, loads listings, lays out
//! the add-listing form above the inventory table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{InventoryTable, ListingForm, NavSidebar, NoticeBanner};
use crate::config::AppConfig;
use crate::context::{AppContext, Notice};
use crate::store::InventoryStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = InventoryStore::new();
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (notice, set_notice), config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load listings on mount and whenever something invalidates the store
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[APP] loading inventory, trigger={}", trigger);
        spawn_local(async move {
            match actions::load_inventory(&ctx.api()).await {
                Ok(loaded) => store.set_items(loaded),
                Err(e) => {
                    log::error!("[APP] load failed: {}", e);
                    ctx.notify_error(format!("Could not load inventory: {}", e));
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <NavSidebar active="/inventory" />
            <main class="main-content">
                <NoticeBanner />
                <ListingForm />
                <InventoryTable />
            </main>
        </div>
    }
}
