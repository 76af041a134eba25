//! Event Group Table Component
//!
//! One table per event: a header with the event's metadata and a checkbox
//! that selects the whole group, then one row per listing.

use leptos::prelude::*;

use crate::components::listing_row::ListingRow;
use crate::grouping::EventGroup;
use crate::models::ItemId;
use crate::table_edit::{EditField, TableEditState};

#[component]
pub fn EventGroupTable(group: EventGroup, table: RwSignal<TableEditState>) -> impl IntoView {
    let ids = StoredValue::new(group.items.iter().map(|i| i.id).collect::<Vec<ItemId>>());

    let all_selected = move || table.with(|t| ids.with_value(|ids| t.all_selected(ids)));
    let on_group_toggle = move |ev| {
        let checked = event_target_checked(&ev);
        ids.with_value(|ids| table.update(|t| t.set_selected(ids, checked)));
    };

    let group_key = group.key().to_string();
    let event_name = group.display_name().to_string();
    let event_day = group.display_day().to_string();
    let event_time = group.display_time().to_string();
    let venue = group.display_venue().to_string();

    view! {
        <table class="inventory-table" data-event=group_key>
            <thead>
                <tr class="group-header">
                    <th class="select-cell">
                        <input type="checkbox" prop:checked=all_selected on:change=on_group_toggle />
                    </th>
                    <th colspan="10">
                        <span class="event-name">{event_name}</span>
                        <span class="event-day">{event_day}</span>
                        <span class="event-time">{event_time}</span>
                        <span class="event-venue">{venue}</span>
                    </th>
                </tr>
                <tr class="column-header">
                    <th></th>
                    {EditField::ALL.iter().map(|field| view! { <th>{field.label()}</th> }).collect_view()}
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {group.items
                    .into_iter()
                    .map(|item| view! { <ListingRow item=item table=table /> })
                    .collect_view()}
            </tbody>
        </table>
    }
}
