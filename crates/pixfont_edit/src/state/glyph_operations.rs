//! Glyph-level operations
//!
//! Operations that work on individual glyphs:
//! - Pixel editing (set_pixel, toggle_pixel)
//! - Clear glyph
//! - Inverse
//! - Flip (horizontal/vertical)
//!
//! All of these go through the undo system. Out-of-range pixel writes are
//! rejected with `OutOfBounds` and leave the glyph untouched.

use pixfont_engine::{EngineError, Glyph, Result};

use crate::UndoOp;

use super::FontEditState;

impl FontEditState {
    fn check_bounds(&self, x: i32, y: i32) -> Result<()> {
        let (width, height) = self.font_size();
        if x < 0 || x >= width || y < 0 || y >= height {
            return Err(EngineError::OutOfBounds { x, y, width, height });
        }
        Ok(())
    }

    /// Set a single pixel value
    pub fn set_pixel(&mut self, code: u8, x: i32, y: i32, value: bool) -> Result<()> {
        self.check_bounds(x, y)?;

        let old = self.font.glyph(code).clone();
        if old.pixel(self.font.width(), x, y) == value {
            return Ok(());
        }
        let mut new = old.clone();
        new.set_pixel(self.font.width(), x, y, value);

        let op = UndoOp::EditGlyph { code, old, new };
        self.push_undo_action(op)
    }

    /// Toggle a single pixel (flip its value)
    pub fn toggle_pixel(&mut self, code: u8, x: i32, y: i32) -> Result<()> {
        let current = self.font.pixel(code, x, y);
        self.set_pixel(code, x, y, !current)
    }

    /// Replace a glyph's pixel grid wholesale (with undo)
    pub fn set_glyph_pixels(&mut self, code: u8, new: Glyph) -> Result<()> {
        let old = self.font.glyph(code).clone();
        let op = UndoOp::EditGlyph { code, old, new };
        self.push_undo_action(op)
    }

    /// Clear glyph (set all pixels to off)
    pub fn clear_glyph(&mut self, code: u8) -> Result<()> {
        let old = self.font.glyph(code).clone();
        let op = UndoOp::ClearGlyph { code, old };
        self.push_undo_action(op)
    }

    /// Inverse all pixels in a single glyph
    pub fn inverse_glyph(&mut self, code: u8) -> Result<()> {
        self.push_undo_action(UndoOp::InverseGlyph { code })
    }

    /// Flip glyph horizontally (mirror along vertical axis)
    pub fn flip_glyph_x(&mut self, code: u8) -> Result<()> {
        self.push_undo_action(UndoOp::FlipGlyph { code, horizontal: true })
    }

    /// Flip glyph vertically (mirror along horizontal axis)
    pub fn flip_glyph_y(&mut self, code: u8) -> Result<()> {
        self.push_undo_action(UndoOp::FlipGlyph { code, horizontal: false })
    }
}
