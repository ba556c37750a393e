//! Unit tests for the undo/redo ledger.

use bevy::prelude::*;

use crate::rooms::RoomId;
use crate::undo_redo::history::ActionHistory;
use crate::undo_redo::types::{EditorAction, MAX_HISTORY};

fn place(id: u64) -> EditorAction {
    EditorAction::PlaceRoom {
        room: RoomId(id),
        template: 0,
        transform: Transform::from_xyz(id as f32, 0.0, 0.0),
    }
}

#[test]
fn push_and_undo() {
    let mut history = ActionHistory::default();
    history.push(place(0));
    assert_eq!(history.undo_stack.len(), 1);
    assert!(history.redo_stack.is_empty());

    let undone = history.pop_undo();
    assert!(undone.is_some());
    assert!(history.undo_stack.is_empty());
}

#[test]
fn push_clears_redo_stack() {
    let mut history = ActionHistory::default();
    history.push(place(0));
    let action = history.pop_undo().unwrap();
    history.push_redo(action);
    assert_eq!(history.redo_stack.len(), 1);

    history.push(place(1));
    assert!(history.redo_stack.is_empty());
}

#[test]
fn max_history_limit() {
    let mut history = ActionHistory::default();
    for i in 0..(MAX_HISTORY as u64 + 50) {
        history.push(place(i));
    }
    assert_eq!(history.undo_stack.len(), MAX_HISTORY);

    // The oldest actions were dropped, the newest kept.
    let EditorAction::PlaceRoom { room, .. } = history.undo_stack.last().unwrap();
    assert_eq!(*room, RoomId(MAX_HISTORY as u64 + 49));
}

#[test]
fn can_undo_can_redo() {
    let mut history = ActionHistory::default();
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    history.push(place(0));
    assert!(history.can_undo());
    assert!(!history.can_redo());

    let action = history.pop_undo().unwrap();
    history.push_redo(action);
    assert!(!history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn push_undo_no_clear_preserves_redo() {
    let mut history = ActionHistory::default();
    history.push_redo(place(0));
    history.push_undo_no_clear(place(1));
    assert_eq!(history.undo_stack.len(), 1);
    assert_eq!(history.redo_stack.len(), 1);
}
