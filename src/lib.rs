//! # medstock
//!
//! Leptos + WASM front-end for a medical-supply inventory distributor.
//!
//! The core of the crate is the client-side session model: a token-based
//! main session validated once at startup (`state::auth`), a centralized
//! bearer-token HTTP gateway with shared error reactions (`net::gateway`),
//! a role-gated route guard (`components::protected_route`), and a
//! separate client-encrypted admin sub-session with its own lockout and
//! lifetime policy (`state::admin`). Persistence is browser storage
//! behind `util::storage`, with off-browser fallbacks so the whole model
//! tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
