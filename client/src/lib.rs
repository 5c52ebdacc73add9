//! # client
//!
//! Leptos + WASM frontend for the Mabit scrape-target dashboard.
//!
//! The crate holds the route table, pages, components, and the page-owned
//! state models. It is compiled with `hydrate` for the browser bundle and
//! with `ssr` when linked into the host server.

pub mod app;
pub mod components;
pub mod pages;
pub mod route;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating mabit client");
    leptos::mount::hydrate_body(app::App);
}
