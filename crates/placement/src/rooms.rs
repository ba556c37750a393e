//! Committed rooms: identifiers, the scene-graph component, and the
//! world-space collider/connector views the per-frame systems query.

use bevy::prelude::*;

use crate::raycast::Collider;
use crate::snap::{world_connectors, WorldConnector};
use crate::templates::RoomTemplate;

/// Monotonically increasing identifier for committed rooms. Stable across
/// undo/redo, so the ledger can refer to rooms without holding entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub u64);

/// Hands out `RoomId`s. Never reuses an id, even after undo.
#[derive(Resource, Default)]
pub struct RoomIdAllocator {
    next: u64,
}

impl RoomIdAllocator {
    pub fn allocate(&mut self) -> RoomId {
        let id = RoomId(self.next);
        self.next += 1;
        id
    }
}

/// A committed room in the scene graph. The entity carries the world
/// transform; child entities carry the per-part meshes.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlacedRoom {
    pub id: RoomId,
    pub template: usize,
}

/// Spawn a committed room entity at `transform`. Child part meshes are
/// attached by the rendering layer when it sees the new `PlacedRoom`.
pub fn spawn_room(
    commands: &mut Commands,
    id: RoomId,
    template: usize,
    transform: Transform,
) -> Entity {
    commands
        .spawn((PlacedRoom { id, template }, transform, Visibility::default()))
        .id()
}

/// World-space door connectors of one placed room.
pub fn room_connectors(template: &RoomTemplate, transform: &Transform) -> Vec<WorldConnector> {
    world_connectors(template, transform)
}

/// World-space axis-aligned bounds of one placed room, accounting for the
/// room's yaw.
pub fn room_collider(template: &RoomTemplate, transform: &Transform) -> Collider {
    let he = template.half_extents();
    let rot = Mat3::from_quat(transform.rotation);
    let abs = Mat3::from_cols(rot.x_axis.abs(), rot.y_axis.abs(), rot.z_axis.abs());
    Collider {
        center: transform.translation,
        half_extents: abs * he,
    }
}
