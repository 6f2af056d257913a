//! Rasterizer tests
//!
//! The contract: set pixels carry the foreground RGBA bytes, unset pixels
//! are four zero bytes, and the buffer is `width * height * 4` long.

use pixfont_engine::{bitmask, raster, Color, EngineError, Glyph, PixelFont, Size, WHITE};

#[test]
fn test_empty_glyph_rasterizes_fully_transparent() {
    let size = Size::new(8, 16);
    let glyph = Glyph::new(size);

    let data = raster::rasterize_glyph(&glyph, size, WHITE);

    assert_eq!(data.len(), 8 * 16 * 4);
    assert!(data.iter().all(|b| *b == 0));
    assert!(!glyph.has_any_pixels());
}

#[test]
fn test_single_pixel_raster_offsets() {
    let size = Size::new(8, 8);
    let color = Color::new(10, 20, 30);
    let (x, y) = (3, 5);

    let mut glyph = Glyph::new(size);
    glyph.set_pixel(size.width, x, y, true);

    let data = raster::rasterize_glyph(&glyph, size, color);

    let offset = ((y * size.width + x) * 4) as usize;
    assert_eq!(&data[offset..offset + 4], &[10, 20, 30, 255]);
    for (i, b) in data.iter().enumerate() {
        if !(offset..offset + 4).contains(&i) {
            assert_eq!(*b, 0, "byte {i} should be transparent");
        }
    }
}

#[test]
fn test_foreground_alpha_is_respected() {
    let size = Size::new(8, 8);
    let mut glyph = Glyph::new(size);
    glyph.set_pixel(size.width, 0, 0, true);

    let data = raster::rasterize_glyph(&glyph, size, Color::new(255, 255, 255).with_alpha(128));
    assert_eq!(&data[0..4], &[255, 255, 255, 128]);
}

#[test]
fn test_strip_composes_cells_side_by_side() {
    let mut bytes = vec![0u8; 256 * 8];
    // Glyph 'B' gets its top-left pixel set, 'A' stays empty
    bytes[b'B' as usize * 8] = 0b1000_0000;
    let font = bitmask::decode("strip", &bytes).unwrap();

    let (size, data) = raster::rasterize_strip(&font, &[b'A', b'B'], WHITE);

    assert_eq!(size, Size::new(16, 8));
    assert_eq!(data.len(), 16 * 8 * 4);
    // Cell 0 ('A') is transparent
    assert!(data[0..8 * 4].iter().all(|b| *b == 0));
    // Cell 1 ('B') starts at x = 8 on row 0
    let offset = 8 * 4;
    assert_eq!(&data[offset..offset + 4], &[255, 255, 255, 255]);
}

#[test]
fn test_strip_of_empty_glyphs_is_fully_transparent() {
    let font = PixelFont::new("empty", Size::new(8, 8));
    let (size, data) = raster::rasterize_strip(&font, &[0, 1, 2, 3], WHITE);
    assert_eq!(size, Size::new(32, 8));
    assert!(data.iter().all(|b| *b == 0));
}

#[test]
fn test_export_png_writes_signature() {
    let size = Size::new(8, 8);
    let mut glyph = Glyph::new(size);
    glyph.set_pixel(size.width, 4, 4, true);
    let data = raster::rasterize_glyph(&glyph, size, WHITE);

    let mut out = Vec::new();
    raster::export_png(&mut out, size, &data).unwrap();

    assert_eq!(&out[0..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
}

#[test]
fn test_export_png_rejects_wrong_buffer_size() {
    let err = raster::export_png(Vec::new(), Size::new(8, 8), &[0u8; 16]).unwrap_err();
    assert!(matches!(err, EngineError::RasterSizeMismatch { actual: 16, .. }));
}
