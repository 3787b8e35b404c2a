//! # client
//!
//! Leptos frontend for the Hoops Mania landing site.
//!
//! The crate renders on the server (`ssr` feature) through the `server`
//! binary and hydrates in the browser (`hydrate` feature). It holds the
//! document shell, the application root with page metadata, and the home
//! page with its hero block.

pub mod app;
pub mod components;
pub mod pages;
pub mod site;

/// Hydration entry point for the WASM build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already initialized: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
