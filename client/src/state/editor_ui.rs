//! Popup chrome state for the safe-area editor.
//!
//! DESIGN
//! ======
//! The editing state itself (polygons, viewport, lifecycle) lives in
//! `editor::session::Editor`, which is not `Send` and stays inside the
//! component. This struct holds only what the view renders reactively:
//! whether the popup is shown, the status line, and whether the controls are
//! disabled.

#[cfg(test)]
#[path = "editor_ui_test.rs"]
mod editor_ui_test;

use editor::session::{CameraId, CameraLink, EditorError};

/// Message shown under the canvas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusLine {
    #[default]
    Hidden,
    Info(String),
    Success(String),
    Error(String),
}

impl StatusLine {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Info(text) | Self::Success(text) | Self::Error(text) => Some(text),
        }
    }

    /// CSS modifier class for the status element.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Hidden => "safe-area-status safe-area-status--hidden",
            Self::Info(_) => "safe-area-status safe-area-status--info",
            Self::Success(_) => "safe-area-status safe-area-status--success",
            Self::Error(_) => "safe-area-status safe-area-status--error",
        }
    }
}

/// Editor popup state, provided as `RwSignal<EditorUiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorUiState {
    pub open: bool,
    pub camera_id: Option<CameraId>,
    pub status: StatusLine,
    /// Controls are disabled while loading, saving, or closing after a save.
    pub busy: bool,
}

impl EditorUiState {
    pub fn loading(&mut self, camera_id: &CameraId) {
        self.open = true;
        self.camera_id = Some(camera_id.clone());
        self.status = StatusLine::Info(format!("Loading snapshot for {camera_id}..."));
        self.busy = true;
    }

    pub fn ready(&mut self) {
        self.status = StatusLine::Hidden;
        self.busy = false;
    }

    /// Close after a refused or failed open. Returns the alert text.
    pub fn open_failed(&mut self, err: &EditorError) -> String {
        self.close();
        format!("Cannot edit safe areas: {err}")
    }

    pub fn saving(&mut self) {
        self.status = StatusLine::Info("Saving...".to_owned());
        self.busy = true;
    }

    /// Input stays disabled until the popup auto-closes.
    pub fn saved(&mut self, count: usize) {
        self.status = StatusLine::Success(saved_message(count));
        self.busy = true;
    }

    pub fn save_failed(&mut self, message: &str) {
        self.status = StatusLine::Error(format!("Save failed: {message}"));
        self.busy = false;
    }

    /// Any edit dismisses a save error.
    pub fn after_edit(&mut self) {
        if matches!(self.status, StatusLine::Error(_)) {
            self.status = StatusLine::Hidden;
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

fn saved_message(count: usize) -> String {
    match count {
        1 => "Saved 1 safe area".to_owned(),
        n => format!("Saved {n} safe areas"),
    }
}

/// Whether the "Edit safe areas" launcher should be clickable.
pub fn launcher_enabled(link: CameraLink, ui: &EditorUiState) -> bool {
    link == CameraLink::Connected && !ui.open
}

/// Tooltip for the launcher.
pub fn launcher_title(link: CameraLink) -> &'static str {
    match link {
        CameraLink::Connected => "Draw the regions this camera treats as safe",
        CameraLink::Disconnected => "Camera is not connected",
    }
}
