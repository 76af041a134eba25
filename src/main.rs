#![allow(warnings)]
//! Ticket Inventory Frontend Entry Point

mod actions;
mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod grouping;
mod listing_form;
mod models;
mod store;
mod table_edit;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("[APP] inventory API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
