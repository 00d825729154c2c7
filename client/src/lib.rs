//! # client
//!
//! Leptos + WASM frontend for the job marketplace.
//!
//! This crate contains pages, components, the session store, route guards,
//! typed REST calls and their wire types. The `server` crate renders it with
//! SSR and the browser hydrates it via [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
