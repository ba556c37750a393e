use bevy::prelude::*;

use placement::config::GROUND_HALF_EXTENT;
use placement::rooms::PlacedRoom;
use placement::templates::RoomLibrary;

/// Attach child part meshes to rooms the commit gate (or redo) just spawned.
/// The logic crate only creates the bare `PlacedRoom` entity; visuals are
/// this crate's concern.
pub fn attach_room_meshes(
    mut commands: Commands,
    rooms: Query<(Entity, &PlacedRoom), Added<PlacedRoom>>,
    library: Res<RoomLibrary>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, room) in &rooms {
        let Some(template) = library.get(room.template) else {
            warn!(
                "placed room {:?} references unknown template {}",
                room.id, room.template
            );
            continue;
        };
        commands.entity(entity).with_children(|parent| {
            for part in &template.parts {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::from_size(part.size))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: part.color,
                        perceptual_roughness: 0.9,
                        ..default()
                    })),
                    part.local,
                ));
            }
        });
    }
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Buildable ground slab.
    commands.spawn((
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(GROUND_HALF_EXTENT * 2.0, GROUND_HALF_EXTENT * 2.0),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.42, 0.36),
            perceptual_roughness: 1.0,
            ..default()
        })),
    ));

    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
