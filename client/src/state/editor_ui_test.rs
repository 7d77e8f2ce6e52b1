use super::*;
use editor::backend::BackendError;

fn cam() -> CameraId {
    CameraId::new("cam_1")
}

// =============================================================
// StatusLine
// =============================================================

#[test]
fn status_line_default_hidden() {
    let status = StatusLine::default();
    assert_eq!(status, StatusLine::Hidden);
    assert_eq!(status.text(), None);
}

#[test]
fn status_line_text_and_class() {
    let status = StatusLine::Error("boom".to_owned());
    assert_eq!(status.text(), Some("boom"));
    assert!(status.class().ends_with("--error"));
    assert!(StatusLine::Success(String::new()).class().ends_with("--success"));
}

// =============================================================
// EditorUiState transitions
// =============================================================

#[test]
fn default_is_closed_and_idle() {
    let state = EditorUiState::default();
    assert!(!state.open);
    assert!(!state.busy);
    assert_eq!(state.camera_id, None);
}

#[test]
fn loading_opens_busy_popup() {
    let mut state = EditorUiState::default();
    state.loading(&cam());
    assert!(state.open);
    assert!(state.busy);
    assert_eq!(state.camera_id, Some(cam()));
    assert_eq!(state.status, StatusLine::Info("Loading snapshot for cam_1...".to_owned()));
}

#[test]
fn ready_enables_controls() {
    let mut state = EditorUiState::default();
    state.loading(&cam());
    state.ready();
    assert!(state.open);
    assert!(!state.busy);
    assert_eq!(state.status, StatusLine::Hidden);
}

#[test]
fn open_failed_closes_and_reports() {
    let mut state = EditorUiState::default();
    state.loading(&cam());
    let err = EditorError::Snapshot { camera_id: cam(), source: BackendError::Status(404) };
    let message = state.open_failed(&err);
    assert_eq!(state, EditorUiState::default());
    assert_eq!(
        message,
        "Cannot edit safe areas: could not load a snapshot for camera cam_1: server responded with status 404"
    );
}

#[test]
fn disconnected_open_message() {
    let mut state = EditorUiState::default();
    let message = state.open_failed(&EditorError::CameraDisconnected(cam()));
    assert_eq!(message, "Cannot edit safe areas: camera cam_1 is not connected");
}

#[test]
fn save_success_keeps_controls_disabled() {
    let mut state = EditorUiState::default();
    state.loading(&cam());
    state.ready();
    state.saving();
    assert!(state.busy);
    state.saved(2);
    assert!(state.busy);
    assert_eq!(state.status, StatusLine::Success("Saved 2 safe areas".to_owned()));
}

#[test]
fn saved_message_singular() {
    let mut state = EditorUiState::default();
    state.saved(1);
    assert_eq!(state.status.text(), Some("Saved 1 safe area"));
}

#[test]
fn save_failure_reenables_controls() {
    let mut state = EditorUiState::default();
    state.loading(&cam());
    state.ready();
    state.saving();
    state.save_failed("request failed: offline");
    assert!(!state.busy);
    assert!(state.open);
    assert_eq!(state.status, StatusLine::Error("Save failed: request failed: offline".to_owned()));
}

#[test]
fn edit_dismisses_error_only() {
    let mut state = EditorUiState::default();
    state.save_failed("x");
    state.after_edit();
    assert_eq!(state.status, StatusLine::Hidden);

    state.saving();
    state.after_edit();
    assert_eq!(state.status, StatusLine::Info("Saving...".to_owned()));
}

#[test]
fn close_resets_everything() {
    let mut state = EditorUiState::default();
    state.loading(&cam());
    state.save_failed("x");
    state.close();
    assert_eq!(state, EditorUiState::default());
}

// =============================================================
// Launcher
// =============================================================

#[test]
fn launcher_requires_connected_camera() {
    let state = EditorUiState::default();
    assert!(launcher_enabled(CameraLink::Connected, &state));
    assert!(!launcher_enabled(CameraLink::Disconnected, &state));
}

#[test]
fn launcher_disabled_while_open() {
    let mut state = EditorUiState::default();
    state.loading(&cam());
    assert!(!launcher_enabled(CameraLink::Connected, &state));
}

#[test]
fn launcher_title_explains_disconnect() {
    assert_eq!(launcher_title(CameraLink::Disconnected), "Camera is not connected");
}

#[test]
fn launcher_follows_camera_reconnect() {
    use leptos::prelude::*;

    let link = RwSignal::new(CameraLink::Disconnected);
    let state = EditorUiState::default();
    let enabled = move || launcher_enabled(link.get_untracked(), &state);

    assert!(!enabled());
    link.set(CameraLink::Connected);
    assert!(enabled());
    assert_eq!(launcher_title(link.get_untracked()), launcher_title(CameraLink::Connected));
}

#[test]
fn launcher_reenables_after_refused_open() {
    let mut state = EditorUiState::default();
    state.open_failed(&EditorError::CameraDisconnected(cam()));
    assert!(!launcher_enabled(CameraLink::Disconnected, &state));
    assert!(launcher_enabled(CameraLink::Connected, &state));
}
