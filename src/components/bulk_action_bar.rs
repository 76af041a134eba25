//! Bulk Action Bar Component
//!
//! Selection and bulk edit/delete controls above the grouped tables.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, BatchReport};
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, AppContext};
use crate::store::use_inventory_store;
use crate::table_edit::{BulkSave, TableEditState};

fn report_outcome(ctx: AppContext, report: &BatchReport, verb: &str) {
    if report.is_clean() {
        ctx.notify_info(report.summary(verb));
    } else {
        ctx.notify_error(report.summary(verb));
    }
}

#[component]
pub fn BulkActionBar(table: RwSignal<TableEditState>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_inventory_store();
    let (busy, set_busy) = signal(false);

    let selection_len = move || table.with(|t| t.selection_len());
    let bulk_editing = move || table.with(|t| t.is_bulk_editing());

    // Every listing in the store, not just the event on screen
    let on_select_all = move |_| {
        let items = store.items_untracked();
        table.update(|t| t.select_all(&items));
    };
    let on_deselect = move |_| table.update(|t| t.deselect_all());
    let on_start_edit = move |_| table.update(|t| t.start_bulk_edit());
    let on_cancel_edit = move |_| table.update(|t| t.cancel_bulk_edit());

    let on_save_edit = move |_| {
        let items = store.items_untracked();
        let mut outcome = BulkSave::NotEditing;
        table.update(|t| outcome = t.save_bulk_edit(&items));

        let BulkSave::Commit { ready, invalid } = outcome else {
            return;
        };
        let needs_fixing = (!invalid.is_empty())
            .then(|| format!("{} row(s) have invalid values and stay in edit", invalid.len()));

        if ready.is_empty() {
            match needs_fixing {
                Some(message) => ctx.notify_error(message),
                None => ctx.notify_info("No changes to save"),
            }
            return;
        }

        for item in &ready {
            store.replace_item(item.clone());
        }
        set_busy.set(true);
        spawn_local(async move {
            let report = actions::save_items(&ctx.api(), &ready, move || ctx.reload()).await;
            match needs_fixing {
                Some(message) => ctx.notify_error(format!("{}; {}", report.summary("Updated"), message)),
                None => report_outcome(ctx, &report, "Updated"),
            }
            set_busy.set(false);
        });
    };

    let on_delete_selected = Callback::new(move |_: ()| {
        let mut ids = Vec::new();
        table.update(|t| ids = t.take_selection());
        if ids.is_empty() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let report = actions::delete_items(&ctx.api(), &ids, move || ctx.reload()).await;
            report_outcome(ctx, &report, "Deleted");
            set_busy.set(false);
        });
    });

    view! {
        <div class="bulk-action-bar">
            <button class="bar-btn" on:click=on_select_all prop:disabled=move || busy.get()>"Select All"</button>
            <button class="bar-btn" on:click=on_deselect prop:disabled=move || busy.get() || selection_len() == 0>
                "Deselect"
            </button>
            {move || if bulk_editing() {
                view! {
                    <button class="bar-btn primary" on:click=on_save_edit prop:disabled=move || busy.get()>"Save edit"</button>
                    <button class="bar-btn" on:click=on_cancel_edit>"Cancel"</button>
                }.into_any()
            } else {
                view! {
                    <button class="bar-btn" on:click=on_start_edit prop:disabled=move || busy.get()>"Edit"</button>
                }.into_any()
            }}
            <Show when=move || { selection_len() != 0 && !busy.get() }>
                <DeleteConfirmButton
                    button_class="bar-btn danger"
                    label="Delete selected"
                    prompt=Signal::derive(move || format!("Delete {} listing(s)?", selection_len()))
                    on_confirm=on_delete_selected
                />
            </Show>
            <span class="selection-count">{move || format!("{} selected", selection_len())}</span>
        </div>
    }
}
