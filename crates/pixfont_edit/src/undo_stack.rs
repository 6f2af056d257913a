//! Undo stack for font editing
//!
//! Provides the trait and stack type for undo/redo operations.

use serde::{Deserialize, Serialize};

use crate::{Result, UndoOp};

/// Trait for types that support undo/redo operations
pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation
    fn undo(&mut self) -> Result<()>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation
    fn redo(&mut self) -> Result<()>;
}

/// Type of operation for grouping related undos
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    /// Unknown/default operation
    Unknown,
    /// Pixel editing (drawing)
    EditPixels,
    /// Glyph transformation (flip, inverse, etc.)
    Transform,
    /// Wholesale font replacement (import)
    Replace,
    /// Font resize
    Resize,
}

/// Serializable undo/redo stack.
///
/// Pushing a new operation truncates the redo side, so redo is only
/// available directly after an undo.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UndoStack {
    undo_stack: Vec<UndoOp>,
    redo_stack: Vec<UndoOp>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: UndoOp) {
        self.redo_stack.clear();
        self.undo_stack.push(op);
    }

    pub fn pop_undo(&mut self) -> Option<UndoOp> {
        self.undo_stack.pop()
    }

    pub fn push_redo(&mut self, op: UndoOp) {
        self.redo_stack.push(op);
    }

    pub fn pop_redo(&mut self) -> Option<UndoOp> {
        self.redo_stack.pop()
    }

    /// Push an undone-then-redone operation back without clearing redo.
    pub(crate) fn push_restored(&mut self, op: UndoOp) {
        self.undo_stack.push(op);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(UndoOp::description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(UndoOp::description)
    }
}
