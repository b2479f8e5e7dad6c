//! Entry point for the WASM application

use clientcard_frontend::{App, LOG_LEVEL};
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 Client Card - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
