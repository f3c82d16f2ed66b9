//! # client
//!
//! Leptos + WASM frontend of the tutoring admin dashboard.
//!
//! Every screen is composed from the generic renderers in [`components`]
//! (`DynamicForm`, `DynamicTable`, `DynamicDetail`, `RemoteSelector`), which
//! are thin views over the headless state types of the `engine` crate. Feature
//! screens in [`pages`] supply descriptors and REST callbacks from [`net`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire up logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
