//! # corazones-client
//!
//! Leptos + WASM frontend for the Conectando Corazones profile-sharing
//! platform: sign-in, a public profile listing, third-party profile
//! pages, and an editor for the caller's own profile with image uploads.
//!
//! This crate contains pages, components, application state, the wire
//! schema, and the REST service wrappers. Browser-only dependencies are
//! gated behind the `hydrate` feature; native builds fall back to stubs
//! so the crate stays unit-testable with plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
