//! Listing Form Component
//!
//! "Add Inventory" form for creating a listing under one of the catalog events.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::catalog::{self, find_event, EVENTS};
use crate::components::form_fields::{plain_options, SelectField, TextField};
use crate::context::use_app_context;
use crate::listing_form::ListingDraft;
use crate::store::use_inventory_store;
use crate::validation::{message_for, FieldError};

type Getter = fn(&ListingDraft) -> &String;
type Setter = fn(&mut ListingDraft, String);

#[component]
pub fn ListingForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_inventory_store();

    let draft = RwSignal::new(ListingDraft::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);
    let file_input = NodeRef::<html::Input>::new();

    // Field bindings
    let value = move |get: Getter| Signal::derive(move || draft.with(|d| get(d).clone()));
    let setter = move |set: Setter| Callback::new(move |v: String| draft.update(|d| set(d, v)));
    let error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| message_for(e, field).map(str::to_string)))
    };

    let event_options: Vec<(String, String)> =
        EVENTS.iter().map(|e| (e.id.to_string(), e.name.to_string())).collect();

    // Choosing an event focuses the table on it
    let on_event_change = Callback::new(move |event_id: String| {
        store.set_active_event_id(event_id.clone());
        draft.update(|d| d.event_id = event_id);
    });

    let selected_event = move || draft.with(|d| find_event(EVENTS, &d.event_id).copied());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() { return; }
        let current = draft.get_untracked();
        set_submitting.set(true);

        spawn_local(async move {
            let update = actions::submit_form(&ctx.api(), &current, EVENTS).await;
            let created = update.created();
            errors.set(update.field_errors);
            if let Some(next) = update.reset_to {
                draft.set(next);
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
            if let Some(event_id) = update.active_event_id {
                store.set_active_event_id(event_id);
            }
            if let Some(message) = update.error {
                ctx.notify_error(message);
            }
            if created {
                ctx.reload();
                ctx.notify_info("Listing added");
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="listing-form-panel">
            <div class="panel-header">
                <h1>"Add Inventory"</h1>
            </div>
            <form class="listing-form" on:submit=on_submit>
                <div class="form-grid">
                    <SelectField
                        label="Select Event *"
                        options=event_options
                        value=value(|d| &d.event_id)
                        on_change=on_event_change
                        error=error("eventId")
                    />

                    {move || selected_event().map(|event| view! {
                        <div class="form-field readonly">
                            <span class="form-label">"Date & Time"</span>
                            <span class="form-value">{format!("{} at {}", event.date, event.time)}</span>
                        </div>
                        <div class="form-field readonly">
                            <span class="form-label">"Venue"</span>
                            <span class="form-value">{event.venue}</span>
                        </div>
                    })}

                    <SelectField
                        label="Ticket Type *"
                        options=plain_options(catalog::TICKET_TYPES)
                        value=value(|d| &d.ticket_type)
                        on_change=setter(|d, v| d.ticket_type = v)
                        error=error("ticketType")
                    />
                    <SelectField
                        label="Quantity *"
                        options=plain_options(catalog::FORM_QUANTITIES)
                        value=value(|d| &d.quantity)
                        on_change=setter(|d, v| d.quantity = v)
                        error=error("quantity")
                    />
                    <SelectField
                        label="Split Type"
                        options=plain_options(catalog::SPLIT_TYPES)
                        value=value(|d| &d.split_type)
                        on_change=setter(|d, v| d.split_type = v)
                    />
                    <SelectField
                        label="Seating Arrangement *"
                        options=plain_options(catalog::SEATING_ARRANGEMENTS)
                        value=value(|d| &d.seating_arrangement)
                        on_change=setter(|d, v| d.seating_arrangement = v)
                        error=error("seatingArrangement")
                    />
                    <SelectField
                        label="Max Display Quantity"
                        options=plain_options(catalog::MAX_DISPLAY_QUANTITIES)
                        value=value(|d| &d.max_display_qty)
                        on_change=setter(|d, v| d.max_display_qty = v)
                        error=error("maxDisplayQty")
                    />
                    <SelectField
                        label="Fan Area"
                        options=plain_options(catalog::FAN_AREAS)
                        value=value(|d| &d.fan_area)
                        on_change=setter(|d, v| d.fan_area = v)
                    />
                    <SelectField
                        label="Category *"
                        options=plain_options(catalog::CATEGORIES)
                        value=value(|d| &d.category)
                        on_change=setter(|d, v| d.category = v)
                        error=error("category")
                    />
                    <SelectField
                        label="Section/Block"
                        options=plain_options(catalog::SECTION_BLOCKS)
                        value=value(|d| &d.section_block)
                        on_change=setter(|d, v| d.section_block = v)
                    />
                    <TextField
                        label="Row"
                        value=value(|d| &d.row)
                        on_change=setter(|d, v| d.row = v)
                    />
                    <TextField
                        label="First Seat"
                        value=value(|d| &d.seating)
                        on_change=setter(|d, v| d.seating = v)
                    />
                    <TextField
                        label="Face Value"
                        value=value(|d| &d.face_value)
                        on_change=setter(|d, v| d.face_value = v)
                        error=error("faceValue")
                    />
                    <TextField
                        label="Payout Price *"
                        value=value(|d| &d.payout_price)
                        on_change=setter(|d, v| d.payout_price = v)
                        error=error("payoutPrice")
                    />
                    <SelectField
                        label="Benefits"
                        options=plain_options(catalog::BENEFITS)
                        value=value(|d| &d.benefits)
                        on_change=setter(|d, v| d.benefits = v)
                    />
                    <SelectField
                        label="Restrictions"
                        options=plain_options(catalog::RESTRICTIONS)
                        value=value(|d| &d.restrictions)
                        on_change=setter(|d, v| d.restrictions = v)
                    />
                    <TextField
                        label="Date to ship *"
                        input_type="date"
                        value=value(|d| &d.ship_date)
                        on_change=setter(|d, v| d.ship_date = v)
                        error=error("eventDate")
                    />

                    <label class="form-field checkbox-field">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.tickets_in_hand)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                draft.update(|d| d.tickets_in_hand = checked);
                            }
                        />
                        <span>"Tickets in hand"</span>
                    </label>

                    <label class="form-field upload-field">
                        <span class="form-label">"Upload tickets"</span>
                        <input
                            type="file"
                            accept=".pdf,.jpg,.png"
                            node_ref=file_input
                            on:change=move |ev| {
                                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                let name = input.files().and_then(|files| files.get(0)).map(|file| file.name());
                                draft.update(|d| d.upload = name);
                            }
                        />
                    </label>
                </div>

                <div class="form-actions">
                    <button type="submit" class="primary-btn" prop:disabled=move || submitting.get()>
                        {move || if submitting.get() { "Adding..." } else { "+ Add Listing" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
