//! # client
//!
//! Leptos + WASM frontend for the EdgeRisk credit-risk dashboard.
//!
//! This crate contains pages, components, view-state machines, and the HTTP
//! client for the remote analysis service. Dashboard data modelling and
//! chart rendering live in the `riskmetrics` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
