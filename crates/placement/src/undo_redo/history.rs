//! Action history resource and marker events for the undo/redo ledger.

use bevy::prelude::*;

use super::types::{EditorAction, MAX_HISTORY};

/// Stores undo and redo stacks for editor actions.
#[derive(Resource, Default)]
pub struct ActionHistory {
    pub undo_stack: Vec<EditorAction>,
    pub redo_stack: Vec<EditorAction>,
}

impl ActionHistory {
    /// Push a new action onto the undo stack, clearing the redo stack.
    /// If the stack exceeds `MAX_HISTORY`, the oldest action is dropped.
    pub fn push(&mut self, action: EditorAction) {
        self.redo_stack.clear();
        self.undo_stack.push(action);
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Pop the most recent action from the undo stack for undoing.
    pub fn pop_undo(&mut self) -> Option<EditorAction> {
        self.undo_stack.pop()
    }

    /// Pop the most recent action from the redo stack for redoing.
    pub fn pop_redo(&mut self) -> Option<EditorAction> {
        self.redo_stack.pop()
    }

    /// Push an action onto the redo stack (after undo).
    pub fn push_redo(&mut self, action: EditorAction) {
        self.redo_stack.push(action);
    }

    /// Push an action onto the undo stack (after redo), without clearing redo.
    pub fn push_undo_no_clear(&mut self, action: EditorAction) {
        self.undo_stack.push(action);
        if self.undo_stack.len() > MAX_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

/// Marker event: the operator wants to undo.
#[derive(Event)]
pub struct UndoRequested;

/// Marker event: the operator wants to redo.
#[derive(Event)]
pub struct RedoRequested;
