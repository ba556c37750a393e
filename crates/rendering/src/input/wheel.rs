use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use placement::keybindings::KeyBindings;
use placement::session::PlacementSession;
use placement::templates::RoomLibrary;

use crate::egui_input_guard::egui_wants_pointer;

/// Pixel-unit wheels (trackpads) report deltas roughly this many times
/// larger than line-unit wheels.
const PIXELS_PER_LINE: f32 = 100.0;

/// Convert one wheel event into line units.
pub fn wheel_delta(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => y,
        MouseScrollUnit::Pixel => y / PIXELS_PER_LINE,
    }
}

/// Collapse one frame's accumulated wheel delta into whole steps. Deltas
/// under a full line still produce a single step so trackpad scrolling
/// never feels dead.
pub fn scroll_steps(total: f32) -> i32 {
    if total == 0.0 {
        0
    } else if total.abs() < 1.0 {
        total.signum() as i32
    } else {
        total.round() as i32
    }
}

/// Scroll with the cycle modifier held changes the selected template; with
/// the rotate modifier held it turns the candidate in 90-degree steps.
/// Plain scrolling is left to the camera zoom.
pub fn handle_scroll_input(
    mut contexts: EguiContexts,
    mut wheel: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    library: Res<RoomLibrary>,
    mut session: ResMut<PlacementSession>,
) {
    let cycle = bindings.cycle_modifier.held(&keys);
    let rotate = bindings.rotate_modifier.held(&keys);
    if !cycle && !rotate {
        return;
    }
    if egui_wants_pointer(&mut contexts) {
        wheel.clear();
        return;
    }

    let total: f32 = wheel.read().map(|e| wheel_delta(e.unit, e.y)).sum();
    let steps = scroll_steps(total);
    if steps == 0 {
        return;
    }

    if cycle {
        session.cycle_selection(steps, library.len());
    } else {
        session.rotate(steps);
    }
}
