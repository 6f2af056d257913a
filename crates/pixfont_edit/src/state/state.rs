//! Font edit state
//!
//! The main state container for pixel-font editing: the single source of
//! truth every tool reads and writes (the glyph store). There is exactly one
//! current font; it is handed to components by reference instead of living in
//! ambient global state, and all mutation goes through the methods here so
//! the undo system sees every change.

use std::path::PathBuf;

use pixfont_engine::{Color, PixelFont, Result};
use serde::{Deserialize, Serialize};

use crate::undo_stack::UndoStack;

/// Where the current font came from.
///
/// The store starts out `Default` (a blank fixed-size font) and becomes
/// `Loaded` once a font replacement is applied. Transitions are
/// one-directional wholesale replacements, never partial merges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontOrigin {
    /// Initial blank font created at editor start
    Default,
    /// Replaced via import or loaded from a file
    Loaded,
}

/// Main state container for pixel-font editing
///
/// Owns the current [`PixelFont`] plus the session state around it:
/// selected character code, foreground color, file path, dirty flag and
/// the undo/redo stacks. The UI layer should only read from this state
/// and call methods to modify it.
pub struct FontEditState {
    /// The current font - the single source of truth for all glyph data
    pub(crate) font: PixelFont,

    /// State machine: default blank font vs. loaded font
    pub(crate) origin: FontOrigin,

    /// Currently selected character code (0-255)
    pub(crate) selected_code: u8,

    /// Foreground color used when rasterizing glyphs for display
    pub(crate) foreground: Color,

    /// File path (if loaded from/saved to file)
    pub(crate) file_path: Option<PathBuf>,

    /// Whether the font has been modified since last save
    pub(crate) is_dirty: bool,

    /// Undo stack (serializable)
    pub(crate) undo_stack: UndoStack,
}

impl Default for FontEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl FontEditState {
    /// Create a new edit state with a blank default 8x16 font.
    pub fn new() -> Self {
        let mut state = Self::from_font(PixelFont::default());
        state.origin = FontOrigin::Default;
        state
    }

    /// Create an edit state from an existing font.
    pub fn from_font(font: PixelFont) -> Self {
        Self {
            font,
            origin: FontOrigin::Loaded,
            selected_code: b'A',
            foreground: Color::default(),
            file_path: None,
            is_dirty: false,
            undo_stack: UndoStack::new(),
        }
    }

    /// Create an edit state from a bitmask font file.
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let font = pixfont_engine::bitmask::load(&path)?;
        let mut state = Self::from_font(font);
        state.file_path = Some(path);
        Ok(state)
    }

    pub fn font(&self) -> &PixelFont {
        &self.font
    }

    /// Get font dimensions (width, height)
    pub fn font_size(&self) -> (i32, i32) {
        (self.font.width(), self.font.height())
    }

    pub fn origin(&self) -> FontOrigin {
        self.origin
    }

    pub fn selected_code(&self) -> u8 {
        self.selected_code
    }

    pub fn set_selected_code(&mut self, code: u8) {
        self.selected_code = code;
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
    }

    /// Check if the font has been modified since the last save
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Mark as saved (clears dirty flag)
    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }
}
