//! Undo/redo ledger for editor actions.
//!
//! Implements the command pattern for room placements. An `ActionHistory`
//! resource maintains undo and redo stacks (capped at `MAX_HISTORY`
//! entries). The commit gate records placements via the `EditorAction`
//! event — it only appends; Ctrl+Z / Ctrl+Y (or Ctrl+Shift+Z) trigger undo
//! and redo. Undo despawns the room (children included); redo respawns it
//! with the same `RoomId`.

pub mod history;
pub mod systems;
pub mod types;

#[cfg(test)]
mod tests;

pub use history::{ActionHistory, RedoRequested, UndoRequested};
pub use systems::{
    collect_actions, keyboard_undo_redo, process_redo, process_undo, UndoRedoPlugin,
};
pub use types::{EditorAction, MAX_HISTORY};
