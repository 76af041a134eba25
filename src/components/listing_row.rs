//! Listing Row Component
//!
//! A table row that switches between read-only cells and edit inputs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Item;
use crate::store::use_inventory_store;
use crate::table_edit::{EditField, RowSave, RowState, TableEditState};

/// Edit input for one cell; the value lives in the table's edit buffer
#[component]
fn CellEditor(item: StoredValue<Item>, field: EditField, table: RwSignal<TableEditState>) -> impl IntoView {
    let id = item.with_value(|i| i.id);
    let value = move || table.with(|t| item.with_value(|i| t.field_value(i, field)));
    let error = move || table.with(|t| t.field_error(id, field));
    let on_change = move |raw: String| {
        table.update(|t| {
            t.edit_field(id, field, raw);
        });
    };

    let input = match field.options() {
        Some(options) => view! {
            <select
                prop:value=value
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                <option value="">"Select"</option>
                {options.iter().map(|opt| view! { <option value=*opt>{*opt}</option> }).collect_view()}
            </select>
        }.into_any(),
        None => view! {
            <input
                type=field.input_type()
                prop:value=value
                on:input=move |ev| on_change(event_target_value(&ev))
            />
        }.into_any(),
    };

    view! {
        <div class=move || if error().is_some() { "cell-editor has-error" } else { "cell-editor" }>
            {input}
            {move || error().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </div>
    }
}

#[component]
pub fn ListingRow(item: Item, table: RwSignal<TableEditState>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_inventory_store();

    let id = item.id;
    let item = StoredValue::new(item);
    // Only changes when this row enters or leaves an edit mode, not per keystroke
    let row_state = Memo::new(move |_| table.with(|t| t.row_state(id)));
    let selected = move || table.with(|t| t.is_selected(id));

    let on_edit = move |_| {
        item.with_value(|current| {
            table.update(|t| {
                t.start_row_edit(current);
            })
        });
    };

    let on_cancel = move |_| table.update(|t| t.cancel_row_edit(id));

    let on_save = move |_| {
        let mut outcome = RowSave::NotEditing;
        item.with_value(|current| table.update(|t| outcome = t.save_row_edit(current)));

        if let RowSave::Ready(merged) = outcome {
            store.replace_item(merged.clone());
            spawn_local(async move {
                if let Err(e) = actions::save_item(&ctx.api(), &merged, move || ctx.reload()).await {
                    ctx.notify_error(format!("Could not save listing #{}: {}", merged.id, e));
                }
            });
        }
    };

    let on_clone = move |_| {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        if let Some(clone) = store.append_clone(id, now) {
            ctx.notify_info(format!("Cloned #{} as #{} (not saved to the server)", id, clone.id));
        }
    };

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            let report = actions::delete_items(&ctx.api(), &[id], move || ctx.reload()).await;
            if !report.is_clean() {
                ctx.notify_error(report.summary("Deleted"));
            }
        });
    });

    let cells = EditField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <td>
                    {move || match row_state.get() {
                        RowState::Viewing => view! {
                            <span class="cell-value">{item.with_value(|i| field.read(&i.listing))}</span>
                        }.into_any(),
                        _ => view! { <CellEditor item=item field=field table=table /> }.into_any(),
                    }}
                </td>
            }
        })
        .collect_view();

    view! {
        <tr class=move || if selected() { "listing-row selected" } else { "listing-row" }>
            <td class="select-cell">
                <input
                    type="checkbox"
                    prop:checked=selected
                    on:change=move |_| table.update(|t| t.toggle_select(id))
                />
            </td>
            {cells}
            <td class="row-actions">
                {move || match row_state.get() {
                    RowState::Viewing => view! {
                        <button class="row-btn" on:click=on_edit>"Edit"</button>
                        <button class="row-btn" on:click=on_clone>"Clone"</button>
                        <DeleteConfirmButton button_class="row-btn danger" prompt=format!("Delete #{}?", id) on_confirm=on_delete />
                    }.into_any(),
                    RowState::RowEditing => view! {
                        <button class="row-btn primary" on:click=on_save>"Save"</button>
                        <button class="row-btn" on:click=on_cancel>"Cancel"</button>
                    }.into_any(),
                    RowState::BulkEditing => ().into_any(),
                }}
            </td>
        </tr>
    }
}
