//! Preview strip model
//!
//! A fixed-length line of character cells rendered with the font being
//! edited, so every edit is immediately visible in running text. The cell
//! buffer is editable: printable ASCII replaces the cell under the cursor
//! and advances it, Backspace/Delete blank cells, arrows move the cursor.

use pixfont_engine::{raster, Size};

use crate::FontEditState;

use super::EditorTool;

/// Default preview text, a pangram so most letter glyphs are visible.
pub const DEFAULT_PREVIEW_TEXT: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

const BLANK: u8 = b' ';

pub struct PreviewStrip {
    cells: Vec<u8>,
    cursor_pos: usize,
    /// Cells whose glyph changed since the consumer last drained them
    dirty: Vec<usize>,
}

impl Default for PreviewStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewStrip {
    pub fn new() -> Self {
        Self::with_text(DEFAULT_PREVIEW_TEXT)
    }

    /// Create a strip showing `text` (character codes taken byte-wise).
    pub fn with_text(text: &str) -> Self {
        Self {
            cells: text.bytes().collect(),
            cursor_pos: 0,
            dirty: Vec::new(),
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn set_cursor_pos(&mut self, pos: usize) {
        self.cursor_pos = pos.min(self.cells.len().saturating_sub(1));
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos + 1 < self.cells.len() {
            self.cursor_pos += 1;
        }
    }

    /// Type a printable ASCII character (32..=126) into the cursor cell and
    /// advance the cursor. Returns the changed cell index, or `None` if the
    /// code is not printable.
    pub fn type_char(&mut self, code: u8) -> Option<usize> {
        if !(32..=126).contains(&code) || self.cells.is_empty() {
            return None;
        }
        let index = self.cursor_pos;
        self.cells[index] = code;
        if self.cursor_pos + 1 < self.cells.len() {
            self.cursor_pos += 1;
        }
        Some(index)
    }

    /// Step the cursor back and blank that cell. Returns the changed index.
    pub fn backspace(&mut self) -> Option<usize> {
        if self.cursor_pos == 0 {
            return None;
        }
        self.cursor_pos -= 1;
        self.cells[self.cursor_pos] = BLANK;
        Some(self.cursor_pos)
    }

    /// Blank the cell under the cursor without moving it.
    pub fn delete(&mut self) -> Option<usize> {
        if self.cells.is_empty() {
            return None;
        }
        self.cells[self.cursor_pos] = BLANK;
        Some(self.cursor_pos)
    }

    /// Rasterize one cell with the store's foreground color, or `None` when
    /// the glyph is empty and the consumer can skip drawing the cell.
    pub fn cell_raster(&self, index: usize, state: &FontEditState) -> Option<Vec<u8>> {
        let code = *self.cells.get(index)?;
        if !state.has_any_pixels(code) {
            return None;
        }
        Some(state.raster_buffer(code))
    }

    /// Rasterize the whole strip into a single RGBA image.
    pub fn rasterize(&self, state: &FontEditState) -> (Size, Vec<u8>) {
        raster::rasterize_strip(state.font(), &self.cells, state.foreground())
    }

    /// Drain the cell indices whose glyphs changed since the last call.
    pub fn take_dirty_cells(&mut self) -> Vec<usize> {
        let mut dirty = std::mem::take(&mut self.dirty);
        dirty.sort_unstable();
        dirty.dedup();
        dirty
    }

    fn mark_all_dirty(&mut self) {
        self.dirty = (0..self.cells.len()).collect();
    }
}

impl EditorTool for PreviewStrip {
    fn name(&self) -> &str {
        "Preview"
    }

    fn on_glyph_changed(&mut self, code: u8, _state: &FontEditState) {
        for (i, cell) in self.cells.iter().enumerate() {
            if *cell == code {
                self.dirty.push(i);
            }
        }
    }

    fn on_font_replaced(&mut self, _state: &FontEditState) {
        self.mark_all_dirty();
    }

    fn on_font_resized(&mut self, _state: &FontEditState) {
        self.mark_all_dirty();
    }
}
