use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result, Size, FONT_LENGTH};

/// One character's raster: a flat, row-major boolean grid.
///
/// The grid is exactly `width * height` cells with (0, 0) at the top-left.
/// Width and height are owned by the containing [`PixelFont`] - every glyph
/// of a font shares the same cell size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pixels: Vec<bool>,
}

impl Glyph {
    /// Create an empty glyph (all pixels off) for the given cell size.
    pub fn new(size: Size) -> Self {
        Glyph {
            pixels: vec![false; size.cells()],
        }
    }

    pub fn from_pixels(pixels: Vec<bool>) -> Self {
        Glyph { pixels }
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// True iff at least one cell is set.
    pub fn has_any_pixels(&self) -> bool {
        self.pixels.iter().any(|p| *p)
    }

    /// Read a pixel. Out-of-range coordinates read as unset.
    pub fn pixel(&self, width: i32, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= width {
            return false;
        }
        self.pixels.get((y * width + x) as usize).copied().unwrap_or(false)
    }

    /// Write a pixel. The caller is responsible for bounds checking;
    /// [`PixelFont::set_pixel`] provides the checked variant.
    ///
    /// # Panics
    ///
    /// Panics if `y * width + x` is outside the grid.
    pub fn set_pixel(&mut self, width: i32, x: i32, y: i32, value: bool) {
        self.pixels[(y * width + x) as usize] = value;
    }

    /// Debug rendering, one row per line, '#' for set and '-' for unset cells.
    pub fn render(&self, width: i32) -> String {
        let mut s = String::new();
        for (y, row) in self.pixels.chunks(width.max(1) as usize).enumerate() {
            s.push_str(&format!("{y:2}"));
            for set in row {
                s.push(if *set { '#' } else { '-' });
            }
            s.push('\n');
        }
        s.push_str("---");
        s
    }
}

/// The active working font: 256 glyphs sharing one declared cell size.
///
/// Every character code 0..=255 has exactly one glyph at all times, even if
/// fully empty. Glyphs are mutated in place by editing operations and replaced
/// wholesale on import or resize; codes are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelFont {
    pub name: String,
    pub path_opt: Option<PathBuf>,
    size: Size,
    pub glyphs: Vec<Glyph>,
}

impl Default for PixelFont {
    fn default() -> Self {
        PixelFont::new("Blank", Size::new(crate::BITMASK_WIDTH, 16))
    }
}

impl PixelFont {
    /// Create a blank font: all 256 glyphs present, all pixels off.
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        PixelFont {
            name: name.into(),
            path_opt: None,
            size,
            glyphs: (0..FONT_LENGTH).map(|_| Glyph::new(size)).collect(),
        }
    }

    /// Build a font from pre-decoded glyph grids.
    ///
    /// # Errors
    ///
    /// `IncompleteFont` if fewer than 256 glyphs are supplied,
    /// `GlyphSizeMismatch` if any grid does not match the declared size.
    pub fn from_glyphs(name: impl Into<String>, size: Size, glyphs: Vec<Glyph>) -> Result<Self> {
        let font = PixelFont {
            name: name.into(),
            path_opt: None,
            size,
            glyphs,
        };
        font.validate()?;
        Ok(font)
    }

    /// Check that every code 0..=255 has a well-formed glyph.
    ///
    /// # Errors
    ///
    /// `IncompleteFont` if a code is missing, `GlyphSizeMismatch` if a grid
    /// does not match the declared cell size.
    pub fn validate(&self) -> Result<()> {
        if self.glyphs.len() < FONT_LENGTH {
            return Err(EngineError::IncompleteFont {
                code: self.glyphs.len() as u8,
            });
        }
        let expected = self.size.cells();
        for (code, glyph) in self.glyphs.iter().enumerate() {
            if glyph.pixels.len() != expected {
                return Err(EngineError::GlyphSizeMismatch {
                    code: code as u8,
                    actual: glyph.pixels.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn glyph(&self, code: u8) -> &Glyph {
        &self.glyphs[code as usize]
    }

    pub fn glyph_mut(&mut self, code: u8) -> &mut Glyph {
        &mut self.glyphs[code as usize]
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// True iff the glyph at `code` has at least one set cell.
    pub fn has_any_pixels(&self, code: u8) -> bool {
        self.glyphs[code as usize].has_any_pixels()
    }

    /// Read a single pixel; out-of-range coordinates read as unset.
    pub fn pixel(&self, code: u8, x: i32, y: i32) -> bool {
        self.glyphs[code as usize].pixel(self.size.width, x, y)
    }

    /// Mutate a single cell.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` when (x, y) is outside the declared cell size. The glyph
    /// is left unchanged in that case.
    pub fn set_pixel(&mut self, code: u8, x: i32, y: i32, value: bool) -> Result<()> {
        if x < 0 || x >= self.size.width || y < 0 || y >= self.size.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.size.width,
                height: self.size.height,
            });
        }
        self.glyphs[code as usize].set_pixel(self.size.width, x, y, value);
        Ok(())
    }

    /// Replace a glyph's grid wholesale.
    ///
    /// # Errors
    ///
    /// `GlyphSizeMismatch` if the grid length does not match the cell size.
    pub fn set_glyph(&mut self, code: u8, glyph: Glyph) -> Result<()> {
        let expected = self.size.cells();
        if glyph.pixels.len() != expected {
            return Err(EngineError::GlyphSizeMismatch {
                code,
                actual: glyph.pixels.len(),
                expected,
            });
        }
        self.glyphs[code as usize] = glyph;
        Ok(())
    }

    /// Copy this font into a new cell size, preserving content top-left
    /// aligned. Added cells are unset, removed cells are clipped.
    pub fn resized(&self, new_size: Size) -> PixelFont {
        let mut result = PixelFont::new(self.name.clone(), new_size);
        result.path_opt = self.path_opt.clone();
        for code in 0..FONT_LENGTH {
            let src = &self.glyphs[code];
            let dst = &mut result.glyphs[code];
            for y in 0..new_size.height.min(self.size.height) {
                for x in 0..new_size.width.min(self.size.width) {
                    if src.pixel(self.size.width, x, y) {
                        dst.set_pixel(new_size.width, x, y, true);
                    }
                }
            }
        }
        result
    }
}
