//! Font-level operations
//!
//! Operations that affect the entire font:
//! - Wholesale replacement (bitmask import)
//! - Resize font dimensions

use pixfont_engine::{bitmask, EngineError, PixelFont, Result, Size};

use crate::{UndoOp, MAX_FONT_HEIGHT, MAX_FONT_WIDTH, MIN_FONT_HEIGHT, MIN_FONT_WIDTH};

use super::FontEditState;

impl FontEditState {
    /// Atomically swap the entire font.
    ///
    /// Validates the proposed font first: every code 0..=255 must carry a
    /// glyph matching the declared cell size, otherwise the replacement is
    /// rejected with `IncompleteFont` (or `GlyphSizeMismatch`) and the prior
    /// font stays queryable unchanged. Never applied partially.
    pub fn replace_font(&mut self, new_font: PixelFont) -> Result<()> {
        new_font.validate()?;

        let op = UndoOp::ReplaceFont {
            old: Box::new(self.font.clone()),
            old_origin: self.origin,
            new: Box::new(new_font),
        };
        self.push_undo_action(op)
    }

    /// Decode a bitmask byte buffer and replace the current font with it.
    ///
    /// Decoding is a pure function of the bytes; on failure nothing changes.
    pub fn import_bitmask(&mut self, name: impl Into<String>, bytes: &[u8]) -> Result<()> {
        let font = bitmask::decode(name, bytes)?;
        self.replace_font(font)?;
        log::info!("imported bitmask font '{}' ({})", self.font.name, self.font.size());
        Ok(())
    }

    /// Encode the current font into the bitmask byte layout.
    pub fn export_bitmask(&self) -> Vec<u8> {
        bitmask::encode(&self.font)
    }

    /// Resize the font to new dimensions.
    ///
    /// Glyphs are replaced wholesale: content is preserved top-left aligned,
    /// new cells start unset and clipped cells are lost.
    pub fn resize_font(&mut self, new_width: i32, new_height: i32) -> Result<()> {
        if !(MIN_FONT_WIDTH..=MAX_FONT_WIDTH).contains(&new_width) || !(MIN_FONT_HEIGHT..=MAX_FONT_HEIGHT).contains(&new_height) {
            return Err(EngineError::generic(format!("unsupported font size {new_width}x{new_height}")));
        }
        let (width, height) = self.font_size();
        if new_width == width && new_height == height {
            return Ok(());
        }

        let op = UndoOp::ResizeFont {
            old: Box::new(self.font.clone()),
            new_size: Size::new(new_width, new_height),
        };
        self.push_undo_action(op)
    }
}
