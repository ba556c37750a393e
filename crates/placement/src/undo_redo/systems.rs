//! Systems and core logic for undo/redo processing.

use bevy::prelude::*;

use crate::keybindings::KeyBindings;
use crate::rooms::{spawn_room, PlacedRoom};

use super::history::{ActionHistory, RedoRequested, UndoRequested};
use super::types::EditorAction;

/// Collects `EditorAction` events and pushes them onto the history. This is
/// the only way actions enter the ledger; producers never touch the stacks.
pub fn collect_actions(mut events: EventReader<EditorAction>, mut history: ResMut<ActionHistory>) {
    for action in events.read() {
        history.push(action.clone());
    }
}

/// Keyboard listener for the configured undo/redo bindings.
///
/// Uses `Option<Res<...>>` so the system is a no-op in headless tests where
/// Bevy's InputPlugin (and thus ButtonInput<KeyCode>) is not present.
pub fn keyboard_undo_redo(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<KeyBindings>,
    mut undo_events: EventWriter<UndoRequested>,
    mut redo_events: EventWriter<RedoRequested>,
) {
    let Some(keys) = keys else { return };

    // Check the shifted redo binding before plain undo, since it is the
    // more specific chord.
    if bindings.redo_alt.just_pressed(&keys) {
        redo_events.send(RedoRequested);
    } else if bindings.undo.just_pressed(&keys) {
        undo_events.send(UndoRequested);
    }

    if bindings.redo.just_pressed(&keys) {
        redo_events.send(RedoRequested);
    }
}

/// Processes undo requests: the most recent placement is removed from the
/// scene and moved onto the redo stack.
pub fn process_undo(
    mut events: EventReader<UndoRequested>,
    mut history: ResMut<ActionHistory>,
    mut commands: Commands,
    rooms: Query<(Entity, &PlacedRoom)>,
) {
    for _ in events.read() {
        if let Some(action) = history.pop_undo() {
            undo_action(&action, &mut commands, &rooms);
            history.push_redo(action);
        }
    }
}

/// Processes redo requests: the placement is replayed with its original
/// `RoomId` and transform.
pub fn process_redo(
    mut events: EventReader<RedoRequested>,
    mut history: ResMut<ActionHistory>,
    mut commands: Commands,
) {
    for _ in events.read() {
        if let Some(action) = history.pop_redo() {
            redo_action(&action, &mut commands);
            history.push_undo_no_clear(action);
        }
    }
}

fn undo_action(
    action: &EditorAction,
    commands: &mut Commands,
    rooms: &Query<(Entity, &PlacedRoom)>,
) {
    match action {
        EditorAction::PlaceRoom { room, .. } => {
            for (entity, placed) in rooms.iter() {
                if placed.id == *room {
                    commands.entity(entity).despawn_recursive();
                    break;
                }
            }
        }
    }
}

fn redo_action(action: &EditorAction, commands: &mut Commands) {
    match action {
        EditorAction::PlaceRoom {
            room,
            template,
            transform,
        } => {
            spawn_room(commands, *room, *template, *transform);
        }
    }
}

pub struct UndoRedoPlugin;

impl Plugin for UndoRedoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionHistory>()
            .add_event::<EditorAction>()
            .add_event::<UndoRequested>()
            .add_event::<RedoRequested>()
            .add_systems(
                Update,
                (
                    keyboard_undo_redo,
                    collect_actions,
                    process_undo,
                    process_redo,
                )
                    .chain(),
            );
    }
}
