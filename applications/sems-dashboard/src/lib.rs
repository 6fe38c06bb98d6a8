use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod feed;
pub mod format;
pub mod models;
pub mod state;

use config::DashboardConfig;

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    let config = DashboardConfig::from_env();
    log::info!("Starting SEMS Dashboard (push channel {})", config.ws_url);

    // Mount into the configured container; without it there is nothing to render into
    let Some(container) = document()
        .get_element_by_id(&config.mount_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::error!("Mount element #{} not found, dashboard not started", config.mount_id);
        return;
    };

    mount_to(container, move || view! { <app::App config=config /> });
}
