use std::path::Path;

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use placement::keybindings::KeyBindings;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "RoomForge".to_string(),
                resolution: (1280.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // Reactive low-power mode: the editor repaints on input (pointer
        // movement included) rather than spinning a render loop.
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .insert_resource(KeyBindings::load_or_default(Path::new("keybindings.json")))
        .add_plugins((
            placement::PlacementPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ))
        .run();
}
