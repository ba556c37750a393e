//! Types and constants for the undo/redo ledger.

use bevy::prelude::*;

use crate::rooms::RoomId;

/// Maximum number of actions kept in the undo stack.
pub const MAX_HISTORY: usize = 100;

/// A single undoable/redoable editor action. Each variant stores enough
/// data to reverse and replay the action.
#[derive(Debug, Clone, Event)]
pub enum EditorAction {
    /// A room was committed into the scene at its resolved transform.
    PlaceRoom {
        room: RoomId,
        template: usize,
        transform: Transform,
    },
}
