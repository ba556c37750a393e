//! Egui input guard: prevents click-through from UI elements to the world.
//!
//! When egui (the room palette, status line) is handling pointer input, the
//! world-level input systems should skip processing so scrolling a list or
//! clicking a button never places or rotates a room underneath the UI.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer — i.e. the cursor is over an
/// egui panel or egui is actively handling a drag/click. Input systems should
/// early-return when this is `true`.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
