//! Glyph rasterization.
//!
//! Projects boolean pixel grids into packed RGBA buffers for display. Set
//! pixels get the foreground color, unset pixels stay fully transparent - the
//! rasterizer never paints a background, that belongs to the surface the
//! buffer is blitted onto. Everything here is a pure function of its inputs.

use std::io::Write;

use crate::{Color, EngineError, Glyph, PixelFont, Result, Size};

/// Rasterize one glyph into a `width * height * 4` byte RGBA buffer,
/// row-major, 4 bytes per pixel.
pub fn rasterize_glyph(glyph: &Glyph, size: Size, color: Color) -> Vec<u8> {
    let mut data = vec![0u8; size.cells() * 4];
    let rgba = color.rgba_data();
    for (i, set) in glyph.pixels().iter().enumerate() {
        if *set {
            data[i * 4..i * 4 + 4].copy_from_slice(&rgba);
        }
    }
    data
}

/// Compose a horizontal run of glyphs into a single RGBA image.
///
/// Cell `i` of the strip shows the glyph for `codes[i]`; empty glyphs stay
/// fully transparent. Returns the strip dimensions together with the buffer.
pub fn rasterize_strip(font: &PixelFont, codes: &[u8], color: Color) -> (Size, Vec<u8>) {
    let cell = font.size();
    let strip = Size::new(cell.width * codes.len() as i32, cell.height);
    let mut data = vec![0u8; strip.cells() * 4];
    let rgba = color.rgba_data();
    for (i, code) in codes.iter().enumerate() {
        let glyph = font.glyph(*code);
        if !glyph.has_any_pixels() {
            continue;
        }
        for y in 0..cell.height {
            for x in 0..cell.width {
                if glyph.pixel(cell.width, x, y) {
                    let offset = ((y * strip.width + i as i32 * cell.width + x) * 4) as usize;
                    data[offset..offset + 4].copy_from_slice(&rgba);
                }
            }
        }
    }
    (strip, data)
}

/// Encode an RGBA buffer as a PNG.
///
/// # Errors
///
/// `RasterSizeMismatch` if the buffer does not match `size`, otherwise
/// whatever the PNG encoder reports.
pub fn export_png(writer: impl Write, size: Size, data: &[u8]) -> Result<()> {
    let expected = size.cells() * 4;
    if data.len() != expected {
        return Err(EngineError::RasterSizeMismatch {
            actual: data.len(),
            expected,
            size,
        });
    }
    let mut encoder = png::Encoder::new(writer, size.width as u32, size.height as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;
    png_writer.finish()?;
    Ok(())
}
