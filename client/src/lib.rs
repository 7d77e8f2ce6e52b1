//! Browser front end for the camera panel's safe-area editor.
//!
//! ARCHITECTURE
//! ============
//! `app` reads the camera from the page URL and mounts the launcher.
//! `components::safe_area_editor` owns the popup and drives
//! [`editor::session::Editor`]; `net::api` implements the editor's
//! [`editor::backend::Backend`] over HTTP. Everything that touches the browser
//! is gated behind the `csr` feature so the state logic tests on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
