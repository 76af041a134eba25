//! Inventory Table Component
//!
//! Listings of the active event, grouped by event, with the bulk action bar.

use leptos::prelude::*;

use crate::components::bulk_action_bar::BulkActionBar;
use crate::components::event_group_table::EventGroupTable;
use crate::grouping::visible_groups;
use crate::store::use_inventory_store;
use crate::table_edit::TableEditState;

#[component]
pub fn InventoryTable() -> impl IntoView {
    let store = use_inventory_store();
    let table = RwSignal::new(TableEditState::new());

    // Drop selection and edits for rows a refetch removed
    Effect::new(move |_| {
        let items = store.items();
        table.update(|t| t.retain_existing(&items));
    });

    let groups = Memo::new(move |_| visible_groups(&store.items(), &store.active_event_id()));

    view! {
        <section class="inventory-panel">
            <div class="panel-header">
                <h2>"Inventory"</h2>
            </div>
            <Show when=move || !groups.with(Vec::is_empty)>
                <BulkActionBar table=table />
            </Show>
            {move || {
                if store.active_event_id().is_empty() {
                    view! {
                        <div class="empty-state">"Please select a Match event to add or view inventory"</div>
                    }.into_any()
                } else if groups.with(Vec::is_empty) {
                    view! { <div class="empty-state">"Currently no data available."</div> }.into_any()
                } else {
                    groups.get()
                        .into_iter()
                        .map(|group| view! { <EventGroupTable group=group table=table /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}
