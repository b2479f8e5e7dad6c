//! Client Card - Frontend Rust/Leptos Application
//!
//! A WebAssembly view of a client's construction-payment status, as shown
//! in the client lists of the client-management app.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Payments context (PaymentTracker)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ClientSection × 3 (building, deposit, built)                │
//! │  └── ClientCard                                              │
//! │      ├── PaymentProgressBar                                  │
//! │      └── history / visibility buttons                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (ClientRow, AppError)
//! - [`components`] - UI components (ClientCard, PaymentProgressBar, icons)
//! - [`hooks`] - Payment progress context
//! - [`events`] - Click handling for nested buttons
//! - [`services`] - Demo data

use chrono::Utc;
use clientcard::{ClientCategory, StaticPayments};
use leptos::*;
use leptos_meta::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod events;
pub mod hooks;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Lists
    ClientRow,
    // Errors
    AppError, AppResult,
};

// Hooks
pub use hooks::{provide_payments, use_client_payments, Payments};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 Client Card - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (rows, payments) = match services::load_sample(Utc::now()) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("❌ {}", e);
            (Vec::new(), StaticPayments::new())
        }
    };
    provide_payments(payments);

    let rows = create_rw_signal(rows);
    let (last_action, set_last_action) = create_signal(None::<String>);

    view! {
        <Title text=APP_NAME/>
        <main class="max-w-6xl mx-auto p-4 space-y-6">
            <For
                each=move || ClientCategory::ALL
                key=|category| *category
                children=move |category| {
                    view! {
                        <ClientSection rows=rows category=category last_action=set_last_action/>
                    }
                }
            />

            <Show when=move || last_action.get().is_some() fallback=|| view! {}>
                <div class="text-xs text-gray-500">{move || last_action.get()}</div>
            </Show>
        </main>
    }
}
