//! Delete Confirm Button Component
//!
//! Delete action that swaps itself for a Yes/No prompt before firing.

use leptos::prelude::*;

/// Inline delete confirmation.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `label` - Initial button text, "Delete" when omitted
/// * `prompt` - Question shown while confirming, "Delete?" when omitted
/// * `on_confirm` - Runs once the operator answers Yes
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(into, optional)] prompt: MaybeProp<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let button_class = StoredValue::new(button_class);
    let prompt_text = move || prompt.get().unwrap_or_else(|| "Delete?".to_string());

    move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt_text}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Yes"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "No"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.get_value()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    {label.unwrap_or("Delete")}
                </button>
            }
            .into_any()
        }
    }
}
