use bevy::prelude::*;
use bevy_egui::EguiContexts;

use placement::raycast::{raycast_scene, Collider};
use placement::rooms::{room_collider, room_connectors, PlacedRoom};
use placement::session::{PlacementSession, SessionPhase};
use placement::snap::{resolve_snap, world_connectors};
use placement::templates::RoomLibrary;

use crate::egui_input_guard::egui_wants_pointer;

use super::types::{CursorHit, SnapState, StatusMessage};

/// Project the cursor into the world: viewport ray against the ground plane
/// and every placed room's bounds, nearest hit wins. While egui owns the
/// pointer the hit is invalid, which idles the rest of the pipeline.
pub fn update_cursor_hit(
    mut contexts: EguiContexts,
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    library: Res<RoomLibrary>,
    rooms: Query<(&PlacedRoom, &Transform)>,
    mut cursor: ResMut<CursorHit>,
) {
    cursor.valid = false;

    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    let Some(screen_pos) = window.cursor_position() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_transform, screen_pos) else {
        return;
    };

    // Colliders are rebuilt from live scene state every frame, so external
    // edits (undo, deletions) are picked up immediately.
    let colliders: Vec<Collider> = rooms
        .iter()
        .filter_map(|(room, transform)| {
            library.get(room.template).map(|t| room_collider(t, transform))
        })
        .collect();

    if let Some(hit) = raycast_scene(ray.origin, *ray.direction, &colliders) {
        cursor.point = hit.point;
        cursor.normal = hit.normal;
        cursor.valid = true;
    }
}

/// Seat position for a room: the hit point pushed out along the surface
/// normal by half the room's height.
pub fn anchor_from_hit(point: Vec3, normal: Vec3, half_height: f32) -> Vec3 {
    point + normal * half_height
}

/// Derive the session phase and anchor from the latest cursor hit. An empty
/// library is reported once and leaves the session idle; a raycast miss
/// idles it silently.
pub fn update_session_anchor(
    cursor: Res<CursorHit>,
    library: Res<RoomLibrary>,
    mut session: ResMut<PlacementSession>,
    mut status: ResMut<StatusMessage>,
) {
    if library.is_empty() {
        if !session.warned_empty {
            warn!("room library is empty; placement stays idle");
            status.set("No room templates available", true);
            session.warned_empty = true;
        }
        session.phase = SessionPhase::Idle;
        session.anchor = None;
        session.snap_override = None;
        return;
    }
    session.warned_empty = false;

    // The library can shrink between sessions; never index past its end.
    if session.selected >= library.len() {
        session.selected = 0;
        session.rotation_steps = 0;
    }

    if !cursor.valid {
        session.phase = SessionPhase::Idle;
        session.anchor = None;
        session.snap_override = None;
        return;
    }

    let half_height = library
        .get(session.selected)
        .map(|t| t.half_height())
        .unwrap_or(0.0);
    session.anchor = Some(anchor_from_hit(cursor.point, cursor.normal, half_height));
    session.phase = SessionPhase::Previewing;
}

/// Resolve connector snapping for the current candidate against every placed
/// room's connectors, queried fresh this frame. A qualifying match replaces
/// the anchor with a corrected position; rotation is never touched.
pub fn update_connector_snap(
    library: Res<RoomLibrary>,
    rooms: Query<(&PlacedRoom, &Transform)>,
    mut session: ResMut<PlacementSession>,
    mut snap: ResMut<SnapState>,
) {
    snap.matched = None;
    session.snap_override = None;

    if !snap.enabled || session.phase != SessionPhase::Previewing {
        return;
    }
    let Some(anchor) = session.anchor else {
        return;
    };
    let Some(template) = library.get(session.selected) else {
        return;
    };

    let candidate_root = Transform::from_translation(anchor).with_rotation(session.yaw());
    let candidate = world_connectors(template, &candidate_root);

    let mut placed = Vec::new();
    for (room, transform) in &rooms {
        let Some(t) = library.get(room.template) else {
            continue;
        };
        placed.extend(room_connectors(t, transform));
    }

    if let Some(result) = resolve_snap(anchor, &candidate, &placed) {
        session.snap_override = Some(result.position);
        snap.matched = Some(result);
    }
}

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}
