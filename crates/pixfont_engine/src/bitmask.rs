//! Headerless bitmask font format.
//!
//! The format fixes glyph width at 8 pixels: one byte encodes one pixel row
//! (bit 7 = leftmost pixel), each glyph occupies `height` contiguous row
//! bytes, and the 256 glyphs are stored in character code order. A file of
//! `L` bytes therefore describes an 8 x (L/256) font. Existing bitmask files
//! additionally keep the row count a multiple of 8, and decoding rejects
//! anything else for compatibility, although the raster model itself never
//! relies on that.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{EngineError, Glyph, PixelFont, Result, Size, BITMASK_WIDTH, FONT_LENGTH};

/// Decode a raw byte buffer into a complete 256-glyph font.
///
/// Pure function of the input; the caller decides whether to apply the result.
///
/// # Errors
///
/// `InvalidFormat` unless `bytes.len()` is a multiple of 256 and the derived
/// row count `bytes.len() / 256` is itself a multiple of 8.
pub fn decode(name: impl Into<String>, bytes: &[u8]) -> Result<PixelFont> {
    let length = bytes.len();
    if length == 0 || length % FONT_LENGTH != 0 || (length / FONT_LENGTH) % 8 != 0 {
        return Err(EngineError::InvalidFormat { length });
    }
    let height = (length / FONT_LENGTH) as i32;
    let size = Size::new(BITMASK_WIDTH, height);

    let mut glyphs = Vec::with_capacity(FONT_LENGTH);
    for code in 0..FONT_LENGTH {
        let mut pixels = Vec::with_capacity(size.cells());
        for y in 0..height as usize {
            let row = bytes[code * height as usize + y];
            for x in 0..BITMASK_WIDTH {
                pixels.push(row & (1 << (7 - x)) != 0);
            }
        }
        glyphs.push(Glyph::from_pixels(pixels));
    }
    PixelFont::from_glyphs(name, size, glyphs)
}

/// Encode a font back into the bitmask byte layout (inverse of [`decode`]).
///
/// Columns beyond 8 cannot be represented and are dropped; fonts produced by
/// [`decode`] or the blank constructors are always exactly 8 wide.
pub fn encode(font: &PixelFont) -> Vec<u8> {
    let width = font.width();
    if width > BITMASK_WIDTH {
        log::error!("bitmask encode: clipping {width} pixel wide glyphs to 8");
    }
    let mut result = Vec::with_capacity(FONT_LENGTH * font.height() as usize);
    for code in 0..FONT_LENGTH {
        let glyph = font.glyph(code as u8);
        for y in 0..font.height() {
            let mut byte = 0u8;
            for x in 0..width.min(BITMASK_WIDTH) {
                if glyph.pixel(width, x, y) {
                    byte |= 1 << (7 - x);
                }
            }
            result.push(byte);
        }
    }
    result
}

/// Load a bitmask font from a file, naming it after the file.
///
/// # Errors
///
/// I/O failures and everything [`decode`] rejects.
pub fn load(file_name: &Path) -> Result<PixelFont> {
    let mut f = File::open(file_name)?;
    let mut bytes = Vec::new();
    f.read_to_end(&mut bytes)?;
    let name = file_name
        .file_stem()
        .map_or_else(|| "Font".to_string(), |s| s.to_string_lossy().to_string());
    let mut font = decode(name, &bytes)?;
    font.path_opt = Some(file_name.to_path_buf());
    Ok(font)
}
