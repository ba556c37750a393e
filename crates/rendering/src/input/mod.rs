//! Per-frame input systems for the placement pipeline.
//!
//! Split into sub-modules by concern:
//! - `types`: resources shared across the editor (cursor hit, snap state, status line)
//! - `cursor`: cursor projection, anchor derivation, connector snap resolution
//! - `wheel`: scroll-with-modifier template cycling and rotation
//! - `confirm`: the commit gate, snap toggle, and escape cascade

mod confirm;
mod cursor;
mod types;
mod wheel;

#[cfg(test)]
mod tests;

pub use confirm::{
    handle_confirm_key, handle_escape_key, toggle_connector_snap, toggle_editor_active,
};
pub use cursor::{
    anchor_from_hit, tick_status_message, update_connector_snap, update_cursor_hit,
    update_session_anchor,
};
pub use types::{editor_active, CursorHit, EditorActive, SnapState, StatusMessage};
pub use wheel::{handle_scroll_input, scroll_steps, wheel_delta};
