//! Bitmask decode/encode tests
//!
//! The format under test: headerless, 256 glyphs, one byte per 8-pixel row,
//! bit 7 = leftmost pixel.

use pixfont_engine::{bitmask, EngineError, PixelFont, Size, FONT_LENGTH};

/// A valid 8x8 font file: 256 glyphs * 8 row bytes.
fn blank_8x8_bytes() -> Vec<u8> {
    vec![0u8; FONT_LENGTH * 8]
}

#[test]
fn test_decode_rejects_length_not_multiple_of_256() {
    let err = bitmask::decode("bad", &vec![0u8; 100]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidFormat { length: 100 }));
}

#[test]
fn test_decode_rejects_height_not_multiple_of_8() {
    // 512 bytes is a multiple of 256, but 512/256 = 2 rows per glyph
    let err = bitmask::decode("bad", &vec![0u8; 512]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidFormat { length: 512 }));
}

#[test]
fn test_decode_rejects_empty_input() {
    let err = bitmask::decode("bad", &[]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidFormat { length: 0 }));
}

#[test]
fn test_decode_derives_size_from_length() {
    let font = bitmask::decode("8x8", &blank_8x8_bytes()).unwrap();
    assert_eq!(font.size(), Size::new(8, 8));
    assert_eq!(font.glyphs.len(), FONT_LENGTH);

    let font = bitmask::decode("8x16", &vec![0u8; FONT_LENGTH * 16]).unwrap();
    assert_eq!(font.size(), Size::new(8, 16));
}

#[test]
fn test_decode_bit_order_msb_is_leftmost() {
    // Glyph 65 ('A'), row 0 at offset 65 * height
    let mut bytes = blank_8x8_bytes();
    bytes[65 * 8] = 0b0011_1100;

    let font = bitmask::decode("test", &bytes).unwrap();
    for x in 0..8 {
        let expected = (2..=5).contains(&x);
        assert_eq!(font.pixel(65, x, 0), expected, "pixel ({x}, 0) of glyph 65");
    }
    // No other row of the glyph picked anything up
    for y in 1..8 {
        for x in 0..8 {
            assert!(!font.pixel(65, x, y));
        }
    }
}

#[test]
fn test_decode_glyph_offsets() {
    // Mark the last row of the last glyph
    let mut bytes = vec![0u8; FONT_LENGTH * 16];
    bytes[255 * 16 + 15] = 0b1000_0001;

    let font = bitmask::decode("test", &bytes).unwrap();
    assert!(font.pixel(255, 0, 15));
    assert!(font.pixel(255, 7, 15));
    assert!(!font.pixel(255, 1, 15));
    assert!(!font.has_any_pixels(254));
}

#[test]
fn test_encode_decode_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut font = PixelFont::new("roundtrip", Size::new(8, 8));
    // A few recognizable patterns spread across codes
    font.set_pixel(0, 0, 0, true).unwrap();
    font.set_pixel(65, 3, 4, true).unwrap();
    font.set_pixel(65, 7, 7, true).unwrap();
    font.set_pixel(255, 7, 0, true).unwrap();
    for x in 0..8 {
        font.set_pixel(128, x, 2, true).unwrap();
    }

    let bytes = bitmask::encode(&font);
    assert_eq!(bytes.len(), FONT_LENGTH * 8);

    let decoded = bitmask::decode("roundtrip", &bytes).unwrap();
    for code in 0..=255u8 {
        assert_eq!(decoded.glyph(code), font.glyph(code), "glyph {code} did not round-trip");
    }
}

#[test]
fn test_encode_row_byte_layout() {
    let mut font = PixelFont::new("layout", Size::new(8, 8));
    font.set_pixel(65, 2, 0, true).unwrap();
    font.set_pixel(65, 3, 0, true).unwrap();
    font.set_pixel(65, 4, 0, true).unwrap();
    font.set_pixel(65, 5, 0, true).unwrap();

    let bytes = bitmask::encode(&font);
    assert_eq!(bytes[65 * 8], 0b0011_1100);
}

#[test]
fn test_load_from_file() {
    let mut bytes = blank_8x8_bytes();
    bytes[66 * 8 + 1] = 0b1111_1111;

    let path = std::env::temp_dir().join("pixfont_bitmask_load_test.fnt");
    std::fs::write(&path, &bytes).unwrap();

    let font = bitmask::load(&path).unwrap();
    assert_eq!(font.size(), Size::new(8, 8));
    assert!(font.pixel(66, 0, 1));
    assert_eq!(font.path_opt.as_deref(), Some(path.as_path()));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = bitmask::load(std::path::Path::new("/nonexistent/font.fnt")).unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}
