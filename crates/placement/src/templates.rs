//! Room template data model and the built-in library catalog.
//!
//! A template is a named hierarchy of cuboid parts plus a set of door
//! connectors, all in local space relative to the template root. The root
//! origin sits at the center of the template volume; `half_height` is used
//! to seat a room on whatever surface the cursor ray hit.

use bevy::prelude::*;

/// One mesh piece of a room template: a cuboid with a local transform
/// relative to the template root.
#[derive(Debug, Clone)]
pub struct TemplatePart {
    pub size: Vec3,
    pub color: Color,
    pub local: Transform,
}

/// A door connector: a local-space anchor marking where this room can join
/// another room. `local_facing` points out through the doorway.
#[derive(Debug, Clone)]
pub struct ConnectorSlot {
    pub local_pos: Vec3,
    pub local_facing: Vec3,
}

/// An immutable placeable room definition.
#[derive(Debug, Clone)]
pub struct RoomTemplate {
    pub name: &'static str,
    pub parts: Vec<TemplatePart>,
    pub connectors: Vec<ConnectorSlot>,
}

impl RoomTemplate {
    /// Local-space half-extents of the template volume, from the union of
    /// its parts. Parts are axis-aligned in local space.
    pub fn half_extents(&self) -> Vec3 {
        let mut he = Vec3::ZERO;
        for part in &self.parts {
            let corner = part.local.translation.abs() + part.size * 0.5;
            he = he.max(corner);
        }
        he
    }

    /// Half the vertical extent, used to offset the anchor along the hit
    /// normal so the room seats on the surface.
    pub fn half_height(&self) -> f32 {
        self.half_extents().y
    }
}

/// Ordered library of placeable room templates. Indices are stable for the
/// lifetime of the session.
#[derive(Resource, Default)]
pub struct RoomLibrary {
    pub templates: Vec<RoomTemplate>,
}

impl RoomLibrary {
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RoomTemplate> {
        self.templates.get(index)
    }

    /// The built-in room catalog.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                corridor(),
                corner(),
                t_junction(),
                small_room(),
                great_hall(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

const WALL: f32 = 0.3;
const ROOM_HEIGHT: f32 = 3.0;

const FLOOR_COLOR: Color = Color::srgb(0.55, 0.52, 0.50);
const WALL_COLOR: Color = Color::srgb(0.75, 0.73, 0.68);

fn part(size: Vec3, color: Color, at: Vec3) -> TemplatePart {
    TemplatePart {
        size,
        color,
        local: Transform::from_translation(at),
    }
}

/// Door anchors sit one unit above the floor line so rooms of different
/// heights still meet flush at their doorways.
fn door(pos: Vec3, facing: Vec3) -> ConnectorSlot {
    ConnectorSlot {
        local_pos: pos,
        local_facing: facing,
    }
}

fn corridor() -> RoomTemplate {
    // 8 long, 4 wide, open at both ends (+X / -X).
    let hh = ROOM_HEIGHT * 0.5;
    RoomTemplate {
        name: "Corridor",
        parts: vec![
            part(Vec3::new(8.0, WALL, 4.0), FLOOR_COLOR, Vec3::new(0.0, -hh + WALL * 0.5, 0.0)),
            part(Vec3::new(8.0, ROOM_HEIGHT, WALL), WALL_COLOR, Vec3::new(0.0, 0.0, -2.0 + WALL * 0.5)),
            part(Vec3::new(8.0, ROOM_HEIGHT, WALL), WALL_COLOR, Vec3::new(0.0, 0.0, 2.0 - WALL * 0.5)),
        ],
        connectors: vec![
            door(Vec3::new(4.0, 1.0 - hh, 0.0), Vec3::X),
            door(Vec3::new(-4.0, 1.0 - hh, 0.0), Vec3::NEG_X),
        ],
    }
}

fn corner() -> RoomTemplate {
    // 8x8 square, doors on +X and +Z, walls closing the other two sides.
    let hh = ROOM_HEIGHT * 0.5;
    RoomTemplate {
        name: "Corner",
        parts: vec![
            part(Vec3::new(8.0, WALL, 8.0), FLOOR_COLOR, Vec3::new(0.0, -hh + WALL * 0.5, 0.0)),
            part(Vec3::new(WALL, ROOM_HEIGHT, 8.0), WALL_COLOR, Vec3::new(-4.0 + WALL * 0.5, 0.0, 0.0)),
            part(Vec3::new(8.0, ROOM_HEIGHT, WALL), WALL_COLOR, Vec3::new(0.0, 0.0, -4.0 + WALL * 0.5)),
        ],
        connectors: vec![
            door(Vec3::new(4.0, 1.0 - hh, 0.0), Vec3::X),
            door(Vec3::new(0.0, 1.0 - hh, 4.0), Vec3::Z),
        ],
    }
}

fn t_junction() -> RoomTemplate {
    // 8x8 square, doors on +X, -X and +Z.
    let hh = ROOM_HEIGHT * 0.5;
    RoomTemplate {
        name: "T-Junction",
        parts: vec![
            part(Vec3::new(8.0, WALL, 8.0), FLOOR_COLOR, Vec3::new(0.0, -hh + WALL * 0.5, 0.0)),
            part(Vec3::new(8.0, ROOM_HEIGHT, WALL), WALL_COLOR, Vec3::new(0.0, 0.0, -4.0 + WALL * 0.5)),
        ],
        connectors: vec![
            door(Vec3::new(4.0, 1.0 - hh, 0.0), Vec3::X),
            door(Vec3::new(-4.0, 1.0 - hh, 0.0), Vec3::NEG_X),
            door(Vec3::new(0.0, 1.0 - hh, 4.0), Vec3::Z),
        ],
    }
}

fn small_room() -> RoomTemplate {
    // 8x8 dead-end room with a single door on +X.
    let hh = ROOM_HEIGHT * 0.5;
    RoomTemplate {
        name: "Small Room",
        parts: vec![
            part(Vec3::new(8.0, WALL, 8.0), FLOOR_COLOR, Vec3::new(0.0, -hh + WALL * 0.5, 0.0)),
            part(Vec3::new(WALL, ROOM_HEIGHT, 8.0), WALL_COLOR, Vec3::new(-4.0 + WALL * 0.5, 0.0, 0.0)),
            part(Vec3::new(8.0, ROOM_HEIGHT, WALL), WALL_COLOR, Vec3::new(0.0, 0.0, -4.0 + WALL * 0.5)),
            part(Vec3::new(8.0, ROOM_HEIGHT, WALL), WALL_COLOR, Vec3::new(0.0, 0.0, 4.0 - WALL * 0.5)),
        ],
        connectors: vec![door(Vec3::new(4.0, 1.0 - hh, 0.0), Vec3::X)],
    }
}

fn great_hall() -> RoomTemplate {
    // 16x12 hall, taller than the standard rooms, doors on all four sides.
    let height = 5.0;
    let hh = height * 0.5;
    let pillar = Vec3::new(0.6, height, 0.6);
    let pillar_color = Color::srgb(0.62, 0.58, 0.52);
    RoomTemplate {
        name: "Great Hall",
        parts: vec![
            part(Vec3::new(16.0, WALL, 12.0), FLOOR_COLOR, Vec3::new(0.0, -hh + WALL * 0.5, 0.0)),
            part(pillar, pillar_color, Vec3::new(-7.3, 0.0, -5.3)),
            part(pillar, pillar_color, Vec3::new(7.3, 0.0, -5.3)),
            part(pillar, pillar_color, Vec3::new(-7.3, 0.0, 5.3)),
            part(pillar, pillar_color, Vec3::new(7.3, 0.0, 5.3)),
        ],
        connectors: vec![
            door(Vec3::new(8.0, 1.0 - hh, 0.0), Vec3::X),
            door(Vec3::new(-8.0, 1.0 - hh, 0.0), Vec3::NEG_X),
            door(Vec3::new(0.0, 1.0 - hh, 6.0), Vec3::Z),
            door(Vec3::new(0.0, 1.0 - hh, -6.0), Vec3::NEG_Z),
        ],
    }
}
