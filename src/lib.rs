//! # authgate
//!
//! Leptos + WASM single-page app for registration, login, and session
//! management against a remote authentication API.
//!
//! The crate is a thin presentation layer: pages collect form input and
//! delegate to the session service in [`net::auth_client`], which drives
//! the pure state machine in [`state::session`], mirrors the session into
//! `localStorage` ([`util::session_store`]), and gates the routes through
//! [`guards`].

pub mod app;
pub mod components;
pub mod guards;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
