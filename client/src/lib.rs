//! # client
//!
//! Leptos + WASM frontend for the miniblog application.
//!
//! This crate contains pages, components, application state, REST helpers,
//! and browser utilities. The server crate renders it with SSR and the
//! browser hydrates the same tree, so everything touching `web_sys` is
//! gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
