//! Form Field Components
//!
//! Labelled select and text inputs with an inline error line.

use leptos::prelude::*;

/// `(value, label)` pairs where the label is the value itself
pub fn plain_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

/// Labelled `<select>` with a leading empty "Select" option
#[component]
pub fn SelectField(
    label: &'static str,
    options: Vec<(String, String)>,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, optional)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class=move || if error.get().is_some() { "form-field has-error" } else { "form-field" }>
            <span class="form-label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"Select"</option>
                {options.into_iter().map(|(value, text)| view! {
                    <option value=value>{text}</option>
                }).collect_view()}
            </select>
            {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}

/// Labelled `<input>`; `input_type` defaults to `text`
#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(into, optional)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <label class=move || if error.get().is_some() { "form-field has-error" } else { "form-field" }>
            <span class="form-label">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="field-error">{msg}</span> })}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_options() {
        assert_eq!(
            plain_options(&["Any", "Home"]),
            vec![("Any".to_string(), "Any".to_string()), ("Home".to_string(), "Home".to_string())]
        );
    }
}
