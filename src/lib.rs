//! Alumni Connect - alumni network homepage
//!
//! A server-rendered, hydrated landing page for an alumni community: hero
//! banner, benefits, upcoming events, statistics, testimonials, partners and
//! a closing call-to-action, built with Leptos and served by axum.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::logging::log!("hydrating alumni homepage");
    leptos::mount::hydrate_body(App);
}
