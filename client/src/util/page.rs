//! Page URL helpers.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use editor::session::CameraId;

/// Camera shown when the page URL does not name one.
pub const DEFAULT_PAGE_CAMERA: &str = "cam_1";

/// `camera_id` query value, falling back to [`DEFAULT_PAGE_CAMERA`].
pub fn camera_id_or_default(raw: Option<String>) -> CameraId {
    match raw.map(|id| id.trim().to_owned()) {
        Some(id) if !id.is_empty() => CameraId::new(id),
        _ => CameraId::new(DEFAULT_PAGE_CAMERA),
    }
}

/// Camera named by `?camera_id=` on the current page.
#[cfg(feature = "csr")]
pub fn camera_id_from_location() -> CameraId {
    let raw = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("camera_id"));
    camera_id_or_default(raw)
}
