//! Glyph store contract tests
//!
//! The store operations every tool depends on: pixel mutation, raster
//! queries, wholesale font replacement and the default/loaded state machine.

use pixfont_edit::{bitmask, EngineError, FontEditState, FontOrigin, Glyph, PixelFont, Size, SharedFontState, FONT_LENGTH};

fn valid_8x8_bytes() -> Vec<u8> {
    vec![0u8; FONT_LENGTH * 8]
}

#[test]
fn test_new_state_is_default_blank_8x16() {
    let state = FontEditState::new();
    assert_eq!(state.origin(), FontOrigin::Default);
    assert_eq!(state.font_size(), (8, 16));
    assert!(!state.is_dirty());
    for code in 0..=255u8 {
        assert!(!state.has_any_pixels(code));
    }
}

#[test]
fn test_set_pixel_and_query() {
    let mut state = FontEditState::new();

    state.set_pixel(b'A', 3, 5, true).unwrap();

    assert!(state.glyph_pixels(b'A').pixel(8, 3, 5));
    assert!(state.has_any_pixels(b'A'));
    assert!(state.is_dirty());
}

#[test]
fn test_set_pixel_out_of_bounds_is_rejected() {
    let mut state = FontEditState::new();

    let err = state.set_pixel(b'A', 8, 0, true).unwrap_err();
    assert!(matches!(err, EngineError::OutOfBounds { x: 8, .. }));

    let err = state.set_pixel(b'A', 0, 16, true).unwrap_err();
    assert!(matches!(err, EngineError::OutOfBounds { y: 16, .. }));

    // The single rejected mutation corrupted nothing
    assert!(!state.has_any_pixels(b'A'));
    assert!(!state.is_dirty());
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_toggle_pixel() {
    let mut state = FontEditState::new();

    state.toggle_pixel(b'X', 0, 0).unwrap();
    assert!(state.glyph_pixels(b'X').pixel(8, 0, 0));

    state.toggle_pixel(b'X', 0, 0).unwrap();
    assert!(!state.glyph_pixels(b'X').pixel(8, 0, 0));
}

#[test]
fn test_raster_buffer_reflects_most_recent_edit() {
    let mut state = FontEditState::new();
    let fg = state.foreground().rgba_data();

    state.set_pixel(b'A', 1, 0, true).unwrap();
    let data = state.raster_buffer(b'A');
    assert_eq!(data.len(), 8 * 16 * 4);
    assert_eq!(&data[4..8], &fg);

    state.set_pixel(b'A', 1, 0, false).unwrap();
    let data = state.raster_buffer(b'A');
    assert!(data.iter().all(|b| *b == 0));
}

#[test]
fn test_replace_font_switches_origin_to_loaded() {
    let mut state = FontEditState::new();
    let font = bitmask::decode("loaded", &valid_8x8_bytes()).unwrap();

    state.replace_font(font).unwrap();

    assert_eq!(state.origin(), FontOrigin::Loaded);
    assert_eq!(state.font_size(), (8, 8));
    assert_eq!(state.font().name, "loaded");
}

#[test]
fn test_replace_font_rejects_incomplete_font() {
    let mut state = FontEditState::new();
    state.set_pixel(b'A', 0, 0, true).unwrap();

    let mut incomplete = PixelFont::new("broken", Size::new(8, 8));
    incomplete.glyphs.truncate(255);

    let err = state.replace_font(incomplete).unwrap_err();
    assert!(matches!(err, EngineError::IncompleteFont { code: 255 }));

    // Prior font stays queryable unchanged
    assert_eq!(state.font_size(), (8, 16));
    assert!(state.has_any_pixels(b'A'));
    assert_eq!(state.origin(), FontOrigin::Default);
}

#[test]
fn test_import_bitmask_invalid_format_leaves_state_untouched() {
    let mut state = FontEditState::new();
    state.set_pixel(b'A', 0, 0, true).unwrap();

    let err = state.import_bitmask("bad", &[0u8; 100]).unwrap_err();
    assert!(matches!(err, EngineError::InvalidFormat { length: 100 }));
    assert_eq!(state.font_size(), (8, 16));
    assert!(state.has_any_pixels(b'A'));
}

#[test]
fn test_import_then_export_round_trips() {
    let mut bytes = valid_8x8_bytes();
    bytes[65 * 8] = 0b0011_1100;
    bytes[200 * 8 + 7] = 0b1000_0001;

    let mut state = FontEditState::new();
    state.import_bitmask("rt", &bytes).unwrap();

    assert_eq!(state.export_bitmask(), bytes);
}

#[test]
fn test_resize_font_preserves_content() {
    let mut state = FontEditState::new();
    state.set_pixel(b'A', 2, 3, true).unwrap();

    state.resize_font(8, 8).unwrap();

    assert_eq!(state.font_size(), (8, 8));
    assert!(state.glyph_pixels(b'A').pixel(8, 2, 3));
    state.font().validate().unwrap();
}

#[test]
fn test_resize_font_rejects_unsupported_dimensions() {
    let mut state = FontEditState::new();

    assert!(matches!(state.resize_font(9, 16), Err(EngineError::Generic(_))));
    assert!(matches!(state.resize_font(8, 0), Err(EngineError::Generic(_))));
    assert!(matches!(state.resize_font(8, 33), Err(EngineError::Generic(_))));
    assert_eq!(state.font_size(), (8, 16));
    assert!(!state.is_dirty());
}

#[test]
fn test_set_glyph_pixels_wholesale() {
    let mut state = FontEditState::new();
    let mut glyph = Glyph::new(state.font().size());
    glyph.set_pixel(8, 7, 15, true);

    state.set_glyph_pixels(b'Z', glyph.clone()).unwrap();
    assert_eq!(state.glyph_pixels(b'Z'), &glyph);
}

#[test]
fn test_shared_state_hands_one_store_to_many_consumers() {
    let shared = SharedFontState::with_default_font();
    let other = shared.clone();

    shared.write(|state| state.set_pixel(b'A', 0, 0, true).unwrap());

    assert!(other.read(|state| state.has_any_pixels(b'A')));
    assert_eq!(other.read(pixfont_edit::FontEditState::font_size), (8, 16));
}

#[test]
fn test_clear_inverse_flip() {
    let mut state = FontEditState::new();
    state.set_pixel(b'A', 0, 0, true).unwrap();

    state.inverse_glyph(b'A').unwrap();
    assert!(!state.glyph_pixels(b'A').pixel(8, 0, 0));
    assert!(state.glyph_pixels(b'A').pixel(8, 1, 0));

    state.inverse_glyph(b'A').unwrap();
    assert!(state.glyph_pixels(b'A').pixel(8, 0, 0));
    assert!(!state.glyph_pixels(b'A').pixel(8, 1, 0));

    state.flip_glyph_x(b'A').unwrap();
    assert!(state.glyph_pixels(b'A').pixel(8, 7, 0));
    assert!(!state.glyph_pixels(b'A').pixel(8, 0, 0));

    state.flip_glyph_y(b'A').unwrap();
    assert!(state.glyph_pixels(b'A').pixel(8, 7, 15));

    state.clear_glyph(b'A').unwrap();
    assert!(!state.has_any_pixels(b'A'));
}
