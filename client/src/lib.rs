//! # client
//!
//! Leptos + WASM frontend for the CashCue studio website.
//!
//! This crate contains the route pages, the shared site chrome, the static
//! content catalog, form state, and the browser-side connectivity guard and
//! route-transition loader. The `server` crate renders it with SSR and the
//! `hydrate` feature builds the WASM bundle that takes over in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
