use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod palette;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, palette::palette_ui);
    }
}
