//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the camera panel backend; the wire schema itself lives in
//! `editor::wire` so the backend and the browser share one definition.

pub mod api;
