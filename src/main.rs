//! To-do Widget Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod persistence;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let mut config = AppConfig::default();
    // `<body data-storage-key="...">` gives the page its own list
    if let Some(key) = document().body().and_then(|b| b.get_attribute("data-storage-key")) {
        config = config.with_storage_key(key);
    }
    if let Err(e) = console_log::init_with_level(config.log_level) {
        // Logging is optional; keep going without it
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("To-do widget starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
