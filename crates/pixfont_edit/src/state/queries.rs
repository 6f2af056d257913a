//! Glyph store read side
//!
//! The query surface consumers (glyph grid, preview strip, edit canvas)
//! render from. Raster buffers are derived projections: recomputed on
//! demand, owned by the caller, never cached here.

use pixfont_engine::{raster, Glyph};

use super::FontEditState;

impl FontEditState {
    /// True iff the glyph for `code` has at least one set cell.
    ///
    /// An empty glyph rasterizes to an all-transparent buffer, so consumers
    /// may skip rendering it entirely.
    pub fn has_any_pixels(&self, code: u8) -> bool {
        self.font.has_any_pixels(code)
    }

    /// Get the pixel grid for a character (read-only)
    pub fn glyph_pixels(&self, code: u8) -> &Glyph {
        self.font.glyph(code)
    }

    /// Rasterize the glyph for `code` with the current foreground color.
    ///
    /// Returns a `width * height * 4` RGBA buffer reflecting the most recent
    /// edit; set pixels carry the foreground color, unset pixels are fully
    /// transparent.
    pub fn raster_buffer(&self, code: u8) -> Vec<u8> {
        raster::rasterize_glyph(self.font.glyph(code), self.font.size(), self.foreground)
    }
}
