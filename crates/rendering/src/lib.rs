use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod input;
pub mod preview;
pub mod room_render;

use camera::CameraOrbitDrag;
use input::{CursorHit, EditorActive, SnapState, StatusMessage};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraOrbitDrag>()
            .init_resource::<CursorHit>()
            .init_resource::<EditorActive>()
            .init_resource::<SnapState>()
            .init_resource::<StatusMessage>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    room_render::setup_scene,
                    preview::spawn_room_preview,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan_keyboard,
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera,
                ),
            )
            // The placement pipeline runs in a fixed order every frame:
            // projection, input, snap resolution, preview, then the commit
            // gate, so a confirm spawns exactly what was last previewed.
            .add_systems(
                Update,
                (
                    input::update_cursor_hit,
                    input::handle_scroll_input,
                    input::update_session_anchor,
                    input::update_connector_snap,
                    preview::rebuild_preview_parts,
                    preview::update_room_preview,
                    preview::draw_connector_gizmos,
                    input::handle_confirm_key,
                )
                    .chain()
                    .run_if(input::editor_active),
            )
            .add_systems(
                Update,
                (
                    input::toggle_connector_snap.run_if(input::editor_active),
                    input::handle_escape_key.run_if(input::editor_active),
                    input::toggle_editor_active,
                    input::tick_status_message,
                    room_render::attach_room_meshes,
                ),
            );
    }
}
