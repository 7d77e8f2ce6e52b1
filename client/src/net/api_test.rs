use super::*;

fn status(camera_id: &str, connected: bool) -> CameraStatusResponse {
    CameraStatusResponse { camera_id: CameraId::new(camera_id), connected }
}

#[test]
fn snapshot_url_carries_camera_and_cache_buster() {
    assert_eq!(snapshot_url("cam_1", 1_700_000_000_000), "/snapshot.jpg?camera_id=cam_1&t=1700000000000");
}

#[test]
fn snapshot_url_keeps_encoded_id() {
    assert_eq!(snapshot_url("lobby%20east", 7), "/snapshot.jpg?camera_id=lobby%20east&t=7");
}

#[test]
fn connected_status_for_requested_camera() {
    let link = link_from_status(&CameraId::new("cam_1"), &status("cam_1", true));
    assert_eq!(link, CameraLink::Connected);
}

#[test]
fn disconnected_status_is_disconnected() {
    let link = link_from_status(&CameraId::new("cam_1"), &status("cam_1", false));
    assert_eq!(link, CameraLink::Disconnected);
}

#[test]
fn status_for_other_camera_is_disconnected() {
    let link = link_from_status(&CameraId::new("cam_1"), &status("cam_2", true));
    assert_eq!(link, CameraLink::Disconnected);
}

#[test]
fn image_load_failed_message_names_source() {
    assert_eq!(image_load_failed_message("/snapshot.jpg?camera_id=cam_1&t=1"), "failed to load /snapshot.jpg?camera_id=cam_1&t=1");
}
