//! Canvas input mapping and window helpers.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use editor::config::EditorConfig;
use editor::input::{Modifiers, Shortcut};
use editor::viewport::editor_bounds;

pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Resolve a key press while the popup is open.
///
/// Typing into a form field never triggers an editor shortcut.
pub fn shortcut_for(key: &str, modifiers: Modifiers, target_is_text_input: bool) -> Option<Shortcut> {
    if target_is_text_input {
        return None;
    }
    Shortcut::from_key(key, modifiers)
}

/// Editor bounds for a window of the given inner size.
pub fn bounds_for_window(width: f64, height: f64, config: &EditorConfig) -> (f64, f64) {
    editor_bounds(width, height, config)
}

#[cfg(feature = "csr")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> editor::geometry::Point {
    editor::geometry::Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn key_shortcut(ev: &leptos::ev::KeyboardEvent) -> Option<Shortcut> {
    use wasm_bindgen::JsCast;

    let target_is_text_input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"));
    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
    shortcut_for(&ev.key(), modifiers, target_is_text_input)
}

/// Bounds for the current browser window; the configured maximum when the
/// window size is unavailable.
#[cfg(feature = "csr")]
pub fn window_bounds(config: &EditorConfig) -> (f64, f64) {
    let size = web_sys::window().and_then(|w| {
        let width = w.inner_width().ok()?.as_f64()?;
        let height = w.inner_height().ok()?.as_f64()?;
        Some((width, height))
    });
    match size {
        Some((width, height)) => bounds_for_window(width, height, config),
        None => (config.max_width, config.max_height),
    }
}

/// Browser `confirm` dialog; `false` when it cannot be shown.
#[cfg(feature = "csr")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(feature = "csr")]
pub fn alert(message: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    if let Err(err) = w.alert_with_message(message) {
        log::warn!("alert failed: {err:?}");
    }
}
