//! HTTP access to the camera panel backend.
//!
//! Browser (`csr`): [`HttpBackend`] implements [`Backend`] with `gloo-net`,
//! and decodes snapshots through an `HtmlImageElement`.
//! Host builds: only the pure URL/status helpers exist, so they can be tested
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps onto [`editor::backend::BackendError`]; whether it is
//! fatal is decided by the editor session, not here. The camera status probe
//! treats any failure as "disconnected".

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use editor::session::{CameraId, CameraLink};
#[cfg(any(test, feature = "csr"))]
use editor::wire::{CameraStatusResponse, SNAPSHOT_PATH};

#[cfg(feature = "csr")]
use async_trait::async_trait;
#[cfg(feature = "csr")]
use editor::backend::{Backend, BackendError};
#[cfg(feature = "csr")]
use editor::geometry::SafeAreaSet;
#[cfg(feature = "csr")]
use editor::wire::{CAMERA_STATUS_PATH, COMMAND_PATH, CommandRequest, GET_SAFE_AREAS_PATH, SET_SAFE_AREAS_PATH, SetSafeAreasRequest};
#[cfg(feature = "csr")]
use gloo_net::http::{Request, Response};
#[cfg(feature = "csr")]
use wasm_bindgen_futures::JsFuture;
#[cfg(feature = "csr")]
use web_sys::HtmlImageElement;

/// `/snapshot.jpg` URL for an already URI-encoded camera id.
#[cfg(any(test, feature = "csr"))]
fn snapshot_url(encoded_camera_id: &str, cache_buster: u64) -> String {
    format!("{SNAPSHOT_PATH}?camera_id={encoded_camera_id}&t={cache_buster}")
}

/// A status reply only counts when it is about the camera we asked for.
#[cfg(any(test, feature = "csr"))]
fn link_from_status(requested: &CameraId, status: &CameraStatusResponse) -> CameraLink {
    if status.connected && status.camera_id == *requested {
        CameraLink::Connected
    } else {
        CameraLink::Disconnected
    }
}

#[cfg(any(test, feature = "csr"))]
fn image_load_failed_message(src: &str) -> String {
    format!("failed to load {src}")
}

/// [`Backend`] over the panel's HTTP endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn decode(err: impl std::fmt::Display) -> BackendError {
    BackendError::Decode(err.to_string())
}

#[cfg(feature = "csr")]
fn expect_ok(resp: Response) -> Result<Response, BackendError> {
    if resp.ok() { Ok(resp) } else { Err(BackendError::Status(resp.status())) }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Backend for HttpBackend {
    type Image = HtmlImageElement;

    async fn load_safe_areas(&self, camera_id: &CameraId) -> Result<SafeAreaSet, BackendError> {
        let resp = Request::get(GET_SAFE_AREAS_PATH)
            .query([("camera_id", camera_id.as_str())])
            .send()
            .await
            .map_err(transport)?;
        expect_ok(resp)?.json::<SafeAreaSet>().await.map_err(decode)
    }

    async fn save_safe_areas(&self, camera_id: &CameraId, safe_areas: &SafeAreaSet) -> Result<(), BackendError> {
        let body = SetSafeAreasRequest { camera_id: camera_id.clone(), safe_areas: safe_areas.clone() };
        let resp = Request::post(SET_SAFE_AREAS_PATH)
            .json(&body)
            .map_err(decode)?
            .send()
            .await
            .map_err(transport)?;
        expect_ok(resp).map(|_| ())
    }

    async fn notify_safe_areas(&self, camera_id: &CameraId, safe_areas: &SafeAreaSet) -> Result<(), BackendError> {
        let body = CommandRequest::update_safe_areas(camera_id, safe_areas).map_err(decode)?;
        let resp = Request::post(COMMAND_PATH)
            .json(&body)
            .map_err(decode)?
            .send()
            .await
            .map_err(transport)?;
        expect_ok(resp).map(|_| ())
    }

    async fn load_snapshot(&self, camera_id: &CameraId, cache_buster: u64) -> Result<HtmlImageElement, BackendError> {
        let encoded = String::from(js_sys::encode_uri_component(camera_id.as_str()));
        decode_image(&snapshot_url(&encoded, cache_buster)).await
    }
}

/// Load `src` into a detached image and resolve once it has decoded.
#[cfg(feature = "csr")]
async fn decode_image(src: &str) -> Result<HtmlImageElement, BackendError> {
    let image = HtmlImageElement::new().map_err(|_| BackendError::Image("cannot create image element".to_owned()))?;
    let decoded = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);
    let result = JsFuture::from(decoded).await;
    image.set_onload(None);
    image.set_onerror(None);
    match result {
        Ok(_) => Ok(image),
        Err(_) => Err(BackendError::Image(image_load_failed_message(src))),
    }
}

/// Ask the backend whether `camera_id` is reachable right now.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn fetch_camera_status(camera_id: &CameraId) -> CameraLink {
    #[cfg(feature = "csr")]
    {
        let Ok(resp) = Request::get(CAMERA_STATUS_PATH)
            .query([("camera_id", camera_id.as_str())])
            .send()
            .await
        else {
            return CameraLink::Disconnected;
        };
        if !resp.ok() {
            return CameraLink::Disconnected;
        }
        match resp.json::<CameraStatusResponse>().await {
            Ok(status) => link_from_status(camera_id, &status),
            Err(err) => {
                log::warn!("camera status for {camera_id} unreadable: {err}");
                CameraLink::Disconnected
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        CameraLink::Disconnected
    }
}

/// Cache buster for snapshot requests.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
