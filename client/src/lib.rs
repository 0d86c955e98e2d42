//! # auth-bridge-client
//!
//! Leptos frontend for the authentication-state bridge. Hosts an
//! `auth_bridge::AuthBridge` inside a component, mirrors its snapshot into a
//! signal, and ships login/dashboard pages that react to it.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
