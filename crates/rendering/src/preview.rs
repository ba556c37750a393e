//! Ghost preview of the placement candidate.
//!
//! A single preview root entity carries translucent copies of the selected
//! template's parts as children. The children are rebuilt only when the
//! selection changes; the root transform follows the resolved candidate
//! transform every frame, and the whole hierarchy hides on a raycast miss.

use bevy::prelude::*;

use placement::session::PlacementSession;
use placement::snap::world_connectors;
use placement::templates::RoomLibrary;

use crate::input::SnapState;

const GHOST_ALPHA: f32 = 0.45;

/// Marker for the ghost preview root. `built` records which template the
/// current children were spawned from.
#[derive(Component)]
pub struct RoomPreview {
    built: Option<usize>,
}

pub fn spawn_room_preview(mut commands: Commands) {
    commands.spawn((
        RoomPreview { built: None },
        Transform::default(),
        Visibility::Hidden,
    ));
}

/// Rebuild the ghost's child parts when the selected template changes.
pub fn rebuild_preview_parts(
    mut commands: Commands,
    session: Res<PlacementSession>,
    library: Res<RoomLibrary>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut preview: Query<(Entity, &mut RoomPreview)>,
) {
    let Ok((root, mut state)) = preview.get_single_mut() else {
        return;
    };
    let target = library.get(session.selected).map(|_| session.selected);
    if state.built == target {
        return;
    }
    state.built = target;

    commands.entity(root).despawn_descendants();
    let Some(template) = target.and_then(|index| library.get(index)) else {
        return;
    };
    commands.entity(root).with_children(|parent| {
        for part in &template.parts {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::from_size(part.size))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: part.color.with_alpha(GHOST_ALPHA),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    ..default()
                })),
                part.local,
            ));
        }
    });
}

/// Follow the resolved candidate transform, or hide when there is nothing
/// previewable this frame (miss or empty library: zero preview draws).
pub fn update_room_preview(
    session: Res<PlacementSession>,
    mut preview: Query<(&mut Transform, &mut Visibility), With<RoomPreview>>,
) {
    let Ok((mut transform, mut vis)) = preview.get_single_mut() else {
        return;
    };
    if !session.previewable() {
        *vis = Visibility::Hidden;
        return;
    }
    match session.resolved_transform() {
        Some(resolved) => {
            *transform = resolved;
            *vis = Visibility::Visible;
        }
        None => *vis = Visibility::Hidden,
    }
}

/// Ring per candidate connector, with a brighter highlight on the connector
/// that produced this frame's snap and on its target.
pub fn draw_connector_gizmos(
    session: Res<PlacementSession>,
    library: Res<RoomLibrary>,
    snap: Res<SnapState>,
    mut gizmos: Gizmos,
) {
    if !session.previewable() {
        return;
    }
    let Some(root) = session.resolved_transform() else {
        return;
    };
    let Some(template) = library.get(session.selected) else {
        return;
    };

    let flat = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
    for (index, connector) in world_connectors(template, &root).iter().enumerate() {
        let matched = snap.matched.is_some_and(|m| m.connector == index);
        let (radius, color) = if matched {
            (0.9, Color::srgba(0.2, 1.0, 0.4, 1.0))
        } else {
            (0.6, Color::srgba(0.2, 0.8, 1.0, 0.8))
        };
        gizmos.circle(Isometry3d::new(connector.pos, flat), radius, color);
        gizmos.line(
            connector.pos,
            connector.pos + connector.facing * 1.2,
            color,
        );
    }

    if let Some(m) = snap.matched {
        gizmos.circle(
            Isometry3d::new(m.target, flat),
            1.1,
            Color::srgba(1.0, 0.9, 0.2, 0.9),
        );
    }
}
