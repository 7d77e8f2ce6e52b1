//! Root application component and context providers.

use leptos::prelude::*;

use editor::session::CameraLink;

use crate::components::safe_area_editor::SafeAreaEditor;
use crate::state::editor_ui::EditorUiState;

/// How often the header re-checks whether the camera is reachable.
pub const CAMERA_STATUS_POLL_MS: u32 = 5_000;

#[cfg(feature = "csr")]
fn probe_camera_status(camera_id: editor::session::CameraId, link: RwSignal<CameraLink>) {
    leptos::task::spawn_local(async move {
        let status = crate::net::api::fetch_camera_status(&camera_id).await;
        if link.get_untracked() != status {
            log::info!("camera {camera_id} is now {status:?}");
            link.set(status);
        }
    });
}

/// Root application component.
///
/// Provides the editor UI state, resolves the camera from the page URL, and
/// polls its status so the launcher follows the camera going on and offline.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(EditorUiState::default());
    provide_context(ui);

    #[cfg(feature = "csr")]
    let camera_id = crate::util::page::camera_id_from_location();
    #[cfg(not(feature = "csr"))]
    let camera_id = crate::util::page::camera_id_or_default(None);

    let link = RwSignal::new(CameraLink::Disconnected);

    #[cfg(feature = "csr")]
    {
        probe_camera_status(camera_id.clone(), link);
        let polled = camera_id.clone();
        gloo_timers::callback::Interval::new(CAMERA_STATUS_POLL_MS, move || {
            probe_camera_status(polled.clone(), link);
        })
        .forget();
    }

    let status_text = move || match link.get() {
        CameraLink::Connected => "connected",
        CameraLink::Disconnected => "disconnected",
    };
    let status_class = move || match link.get() {
        CameraLink::Connected => "camera-status camera-status--connected",
        CameraLink::Disconnected => "camera-status camera-status--disconnected",
    };
    let heading = format!("Camera {camera_id}");

    view! {
        <main class="camera-panel">
            <header class="camera-panel__header">
                <h1>{heading}</h1>
                <span class=status_class>{status_text}</span>
            </header>
            <SafeAreaEditor camera_id=camera_id link=link/>
        </main>
    }
}
