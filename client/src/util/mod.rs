//! Browser helpers shared by the app and the editor popup.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate DOM access (events, window size, location) from the
//! component so the mapping rules stay testable on the host.

pub mod canvas_input;
pub mod page;
