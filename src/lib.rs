//! # sadqa-tracker
//!
//! Leptos + WASM frontend for a personal charity-donation ("sadqa")
//! tracker. Users sign in with Google, record gifts (type, amount,
//! reason, recipient, date), and review history and aggregate totals
//! against an external REST backend.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the session-token lifecycle (storage, expiry polling,
//! route guarding). Browser-only code is gated behind the `hydrate`
//! feature so the core logic stays testable on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic/log plumbing and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
