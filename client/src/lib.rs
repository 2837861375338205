//! # client
//!
//! Leptos frontend for the Velan Properties marketing site. Rendered on the
//! server by `server` (feature `ssr`) and hydrated in the browser (feature
//! `hydrate`).
//!
//! This crate contains the page, its section components, plain-data UI state
//! (scroll-reveal flags, contact form fields), and thin browser helpers.

pub mod app;
pub mod components;
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
