//! # client
//!
//! Leptos + WASM moderation console for a classifieds marketplace.
//!
//! Pages list, inspect and moderate advertisements and show moderation
//! statistics. All data comes from the backend REST API through
//! [`net::api::ApiClient`]; the `ssr` build renders the shell and the
//! `hydrate` build performs every request from the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
