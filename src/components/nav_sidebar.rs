//! Navigation Sidebar Component
//!
//! Narrow rail with the brand and section links.

use leptos::prelude::*;

/// (href, label) of each rail entry
pub const NAV_ENTRIES: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/events", "Events"),
    ("/inventory", "Inventory"),
    ("/reports", "Reports"),
    ("/settings", "Settings"),
];

#[component]
pub fn NavSidebar(#[prop(into)] active: String) -> impl IntoView {
    view! {
        <aside class="nav-sidebar">
            <div class="nav-brand">"1Box"</div>
            <nav class="nav-links">
                {NAV_ENTRIES.iter().map(|(href, label)| {
                    let class = if *href == active { "nav-link active" } else { "nav-link" };
                    view! {
                        <a class=class href=*href title=*label>{label.chars().next().map(String::from)}</a>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
