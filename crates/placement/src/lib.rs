//! Placement logic for the room editor.
//!
//! This is the headless core: the template library, the placement-session
//! state machine, the connector snap resolver, scene raycast math, the
//! committed-room registry, and the undo/redo ledger. Per-frame input and
//! rendering systems live in the `rendering` crate; egui panels in `ui`.

use bevy::prelude::*;

pub mod config;
#[cfg(test)]
mod integration_tests;
pub mod keybindings;
pub mod raycast;
pub mod rooms;
pub mod session;
pub mod snap;
pub mod templates;
pub mod undo_redo;

use keybindings::KeyBindings;
use rooms::RoomIdAllocator;
use session::PlacementSession;
use templates::RoomLibrary;

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementSession>()
            .init_resource::<RoomIdAllocator>();

        // The app may have inserted bindings loaded from disk, or a custom
        // library, before this plugin runs.
        if !app.world().contains_resource::<KeyBindings>() {
            app.insert_resource(KeyBindings::default());
        }
        if !app.world().contains_resource::<RoomLibrary>() {
            app.insert_resource(RoomLibrary::builtin());
        }

        app.add_plugins(undo_redo::UndoRedoPlugin);
    }
}
