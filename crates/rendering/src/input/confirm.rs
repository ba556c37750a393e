use bevy::prelude::*;

use placement::keybindings::KeyBindings;
use placement::rooms::{spawn_room, RoomIdAllocator};
use placement::session::{PlacementSession, SessionPhase};
use placement::templates::RoomLibrary;
use placement::undo_redo::EditorAction;

use crate::preview::RoomPreview;

use super::types::{EditorActive, SnapState, StatusMessage};

/// The commit gate: on the confirm key, materialize the previewed candidate
/// into the scene at its last resolved transform and record the placement in
/// the action ledger. Runs after snap resolution, so what spawns is exactly
/// what was previewed this frame. Repeat presses place repeatedly.
#[allow(clippy::too_many_arguments)]
pub fn handle_confirm_key(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    library: Res<RoomLibrary>,
    session: Res<PlacementSession>,
    mut allocator: ResMut<RoomIdAllocator>,
    mut actions: EventWriter<EditorAction>,
    mut status: ResMut<StatusMessage>,
    mut commands: Commands,
) {
    if !bindings.confirm.just_pressed(&keys) {
        return;
    }

    // State gating should make an invalid confirm unreachable; reject it
    // anyway rather than spawning at a stale transform.
    if !session.previewable() {
        status.set("Nothing to place here", true);
        return;
    }
    let Some(transform) = session.resolved_transform() else {
        status.set("Nothing to place here", true);
        return;
    };
    let Some(template) = library.get(session.selected) else {
        status.set("No room selected", true);
        return;
    };

    let id = allocator.allocate();
    spawn_room(&mut commands, id, session.selected, transform);
    actions.send(EditorAction::PlaceRoom {
        room: id,
        template: session.selected,
        transform,
    });
    status.set(format!("Placed {}", template.name), false);
}

/// Toggle automatic connector snapping.
pub fn toggle_connector_snap(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut snap: ResMut<SnapState>,
    mut status: ResMut<StatusMessage>,
) {
    if bindings.toggle_snap.just_pressed(&keys) {
        snap.enabled = !snap.enabled;
        if snap.enabled {
            status.set("Connector snap ON", false);
        } else {
            status.set("Connector snap OFF", false);
        }
    }
}

/// Engage/disengage the placement tool. The placement systems only run
/// while the tool is engaged; disengaging also idles the session and hides
/// the ghost so nothing lingers on screen.
pub fn toggle_editor_active(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut active: ResMut<EditorActive>,
    mut session: ResMut<PlacementSession>,
    mut status: ResMut<StatusMessage>,
    mut preview: Query<&mut Visibility, With<RoomPreview>>,
) {
    if !bindings.toggle_tool.just_pressed(&keys) {
        return;
    }
    active.0 = !active.0;
    if active.0 {
        status.set("Placement tool engaged", false);
    } else {
        session.phase = SessionPhase::Idle;
        session.anchor = None;
        session.snap_override = None;
        if let Ok(mut vis) = preview.get_single_mut() {
            *vis = Visibility::Hidden;
        }
        status.set("Placement tool off", false);
    }
}

/// Escape cascade: first press clears accumulated rotation, second returns
/// to the first template. Each press handles exactly one level.
pub fn handle_escape_key(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut session: ResMut<PlacementSession>,
) {
    if !bindings.escape.just_pressed(&keys) {
        return;
    }

    if session.rotation_steps != 0 {
        session.rotation_steps = 0;
        return;
    }

    // Rotation is already clear here, so the reset-on-selection-change rule
    // holds without touching it.
    if session.selected != 0 {
        session.selected = 0;
    }
}
