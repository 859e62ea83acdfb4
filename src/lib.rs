//! Prestige Academy - marketing landing site
//!
//! Server-rendered and hydrated with Leptos. Sections reveal themselves on
//! scroll through a shared animation policy that honors reduced motion, and
//! the light/dark theme is persisted in the browser.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
