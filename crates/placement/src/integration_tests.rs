//! Headless integration tests for the commit-and-ledger pipeline.
//!
//! A minimal Bevy app runs the undo/redo systems without a window or
//! renderer; placements are committed the way the commit gate does it
//! (spawn + `EditorAction` event) and the resulting scene state asserted.

use bevy::prelude::*;

use crate::keybindings::KeyBindings;
use crate::rooms::{spawn_room, PlacedRoom, RoomId, RoomIdAllocator};
use crate::undo_redo::{ActionHistory, EditorAction, RedoRequested, UndoRedoPlugin, UndoRequested};

fn editor_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(KeyBindings::default());
    app.init_resource::<RoomIdAllocator>();
    app.add_plugins(UndoRedoPlugin);
    app
}

/// Commit a placement exactly the way the confirm gate does: spawn the room
/// entity and append a creation record to the ledger.
fn commit(app: &mut App, template: usize, transform: Transform) -> RoomId {
    let id = app.world_mut().resource_mut::<RoomIdAllocator>().allocate();
    let mut commands = app.world_mut().commands();
    spawn_room(&mut commands, id, template, transform);
    app.world_mut().flush();
    app.world_mut().send_event(EditorAction::PlaceRoom {
        room: id,
        template,
        transform,
    });
    app.update();
    id
}

fn placed_ids(app: &mut App) -> Vec<RoomId> {
    let mut query = app.world_mut().query::<&PlacedRoom>();
    query.iter(app.world()).map(|room| room.id).collect()
}

#[test]
fn each_confirm_places_one_room_and_one_ledger_record() {
    let mut app = editor_app();

    // Three confirms with no state change in between: three rooms, no
    // debouncing.
    let a = commit(&mut app, 0, Transform::from_xyz(0.0, 1.5, 0.0));
    let b = commit(&mut app, 0, Transform::from_xyz(8.0, 1.5, 0.0));
    let c = commit(&mut app, 1, Transform::from_xyz(16.0, 1.5, 0.0));

    let ids = placed_ids(&mut app);
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&a) && ids.contains(&b) && ids.contains(&c));
    assert_ne!(a, b);
    assert_ne!(b, c);

    let history = app.world().resource::<ActionHistory>();
    assert_eq!(history.undo_stack.len(), 3);
    assert!(history.redo_stack.is_empty());
}

#[test]
fn committed_transform_matches_the_resolved_candidate() {
    let mut app = editor_app();
    let transform = Transform::from_xyz(3.0, 1.5, -2.0)
        .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
    commit(&mut app, 2, transform);

    let mut query = app.world_mut().query::<(&PlacedRoom, &Transform)>();
    let (room, placed) = query.single(app.world());
    assert_eq!(room.template, 2);
    assert_eq!(*placed, transform);
}

#[test]
fn undo_removes_the_most_recent_placement() {
    let mut app = editor_app();
    let first = commit(&mut app, 0, Transform::from_xyz(0.0, 1.5, 0.0));
    commit(&mut app, 0, Transform::from_xyz(8.0, 1.5, 0.0));

    app.world_mut().send_event(UndoRequested);
    app.update();

    let ids = placed_ids(&mut app);
    assert_eq!(ids, vec![first]);
    let history = app.world().resource::<ActionHistory>();
    assert_eq!(history.undo_stack.len(), 1);
    assert_eq!(history.redo_stack.len(), 1);
}

#[test]
fn redo_respawns_with_the_same_id() {
    let mut app = editor_app();
    let first = commit(&mut app, 0, Transform::from_xyz(0.0, 1.5, 0.0));
    let second = commit(&mut app, 1, Transform::from_xyz(8.0, 1.5, 0.0));

    app.world_mut().send_event(UndoRequested);
    app.update();
    app.world_mut().send_event(RedoRequested);
    app.update();

    let mut ids = placed_ids(&mut app);
    ids.sort_by_key(|id| id.0);
    assert_eq!(ids, vec![first, second]);
    let history = app.world().resource::<ActionHistory>();
    assert_eq!(history.undo_stack.len(), 2);
    assert!(history.redo_stack.is_empty());
}
