//! # cashdrive-portal
//!
//! Leptos + WASM front end for the Cash&Drive vehicle leasing business:
//! administrative dashboards, collection and financial reports, dealer
//! management, and the customer self-service portal. All data comes from
//! the externally owned REST backend.
//!
//! This crate contains pages, components, shared reactive state, the REST
//! client with its wire DTOs, and pure utility helpers (timestamp
//! normalization, money formatting, CSV export, schedule derivation).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
