//! Undo operations for font editing
//!
//! Serializable enum-based undo operation type. Every mutation of the glyph
//! store is expressed as one of these operations; `redo` applies it and
//! `undo` reverts it, so replaying the stack reproduces the edit history.

use pixfont_engine::{Glyph, PixelFont, Size};
use serde::{Deserialize, Serialize};

use crate::{FontEditState, FontOrigin, OperationType, Result};

/// Serializable undo operation enum for font editing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum UndoOp {
    /// Edit glyph pixels
    EditGlyph { code: u8, old: Glyph, new: Glyph },

    /// Clear glyph (set all pixels to off)
    ClearGlyph { code: u8, old: Glyph },

    /// Inverse glyph (toggle all pixels)
    InverseGlyph { code: u8 },

    /// Flip glyph horizontally or vertically
    FlipGlyph { code: u8, horizontal: bool },

    /// Wholesale font replacement (bitmask import)
    ReplaceFont {
        old: Box<PixelFont>,
        old_origin: FontOrigin,
        new: Box<PixelFont>,
    },

    /// Resize all glyphs in the font
    ResizeFont { old: Box<PixelFont>, new_size: Size },
}

impl UndoOp {
    /// Get a description of this operation for display
    pub fn description(&self) -> String {
        match self {
            UndoOp::EditGlyph { .. } => "Edit glyph".to_string(),
            UndoOp::ClearGlyph { .. } => "Clear glyph".to_string(),
            UndoOp::InverseGlyph { .. } => "Inverse glyph".to_string(),
            UndoOp::FlipGlyph { horizontal, .. } => {
                if *horizontal {
                    "Flip glyph horizontally".to_string()
                } else {
                    "Flip glyph vertically".to_string()
                }
            }
            UndoOp::ReplaceFont { new, .. } => format!("Load font '{}'", new.name),
            UndoOp::ResizeFont { new_size, .. } => format!("Resize font to {new_size}"),
        }
    }

    /// Get the operation type for grouping
    pub fn operation_type(&self) -> OperationType {
        match self {
            UndoOp::EditGlyph { .. } | UndoOp::ClearGlyph { .. } => OperationType::EditPixels,
            UndoOp::InverseGlyph { .. } | UndoOp::FlipGlyph { .. } => OperationType::Transform,
            UndoOp::ReplaceFont { .. } => OperationType::Replace,
            UndoOp::ResizeFont { .. } => OperationType::Resize,
        }
    }

    /// Whether this operation changes data (affects dirty flag)
    pub fn changes_data(&self) -> bool {
        true
    }

    /// Apply this operation
    pub(crate) fn redo(&self, state: &mut FontEditState) -> Result<()> {
        match self {
            UndoOp::EditGlyph { code, new, .. } => state.font.set_glyph(*code, new.clone()),
            UndoOp::ClearGlyph { code, .. } => {
                let blank = Glyph::new(state.font.size());
                state.font.set_glyph(*code, blank)
            }
            UndoOp::InverseGlyph { code } => {
                inverse_glyph(state, *code);
                Ok(())
            }
            UndoOp::FlipGlyph { code, horizontal } => {
                flip_glyph(state, *code, *horizontal);
                Ok(())
            }
            UndoOp::ReplaceFont { new, .. } => {
                state.font = (**new).clone();
                state.origin = FontOrigin::Loaded;
                Ok(())
            }
            UndoOp::ResizeFont { old, new_size } => {
                state.font = old.resized(*new_size);
                Ok(())
            }
        }
    }

    /// Revert this operation
    pub(crate) fn undo(&self, state: &mut FontEditState) -> Result<()> {
        match self {
            UndoOp::EditGlyph { code, old, .. } | UndoOp::ClearGlyph { code, old } => state.font.set_glyph(*code, old.clone()),
            // Inverse and flip are their own inverses
            UndoOp::InverseGlyph { code } => {
                inverse_glyph(state, *code);
                Ok(())
            }
            UndoOp::FlipGlyph { code, horizontal } => {
                flip_glyph(state, *code, *horizontal);
                Ok(())
            }
            UndoOp::ReplaceFont { old, old_origin, .. } => {
                state.font = (**old).clone();
                state.origin = *old_origin;
                Ok(())
            }
            UndoOp::ResizeFont { old, .. } => {
                state.font = (**old).clone();
                Ok(())
            }
        }
    }
}

fn inverse_glyph(state: &mut FontEditState, code: u8) {
    let inverted: Vec<bool> = state.font.glyph(code).pixels().iter().map(|p| !p).collect();
    state.font.glyphs[code as usize] = Glyph::from_pixels(inverted);
}

fn flip_glyph(state: &mut FontEditState, code: u8, horizontal: bool) {
    let Size { width, height } = state.font.size();
    let glyph = state.font.glyph(code);
    let mut flipped = Vec::with_capacity(glyph.pixels().len());
    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = if horizontal { (width - 1 - x, y) } else { (x, height - 1 - y) };
            flipped.push(glyph.pixel(width, sx, sy));
        }
    }
    state.font.glyphs[code as usize] = Glyph::from_pixels(flipped);
}
