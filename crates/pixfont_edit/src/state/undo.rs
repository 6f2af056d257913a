//! Undo/redo system
//!
//! All modifications go through the undo system: every operation pushes one
//! item onto the undo stack, and pushing truncates the redo side.

use crate::{Result, UndoOp, UndoState, UndoStack};

use super::FontEditState;

impl FontEditState {
    /// Push an undo operation and execute it (redo)
    pub(crate) fn push_undo_action(&mut self, op: UndoOp) -> Result<()> {
        op.redo(self)?;
        if op.changes_data() {
            self.is_dirty = true;
        }
        self.undo_stack.push(op);
        Ok(())
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.undo_stack.redo_len()
    }

    /// Get access to the undo stack for serialization
    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo_stack
    }
}

impl UndoState for FontEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        let Some(op) = self.undo_stack.pop_undo() else {
            return Ok(());
        };

        if op.changes_data() {
            self.is_dirty = true;
        }

        let result = op.undo(self);
        self.undo_stack.push_redo(op);
        result
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        let Some(op) = self.undo_stack.pop_redo() else {
            return Ok(());
        };

        if op.changes_data() {
            self.is_dirty = true;
        }

        let result = op.redo(self);
        self.undo_stack.push_restored(op);
        result
    }
}
