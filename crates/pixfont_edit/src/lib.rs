//! Editing model for 256-glyph pixel fonts.
//!
//! Provides the model layer for a pixel-font editor, including:
//! - [`FontEditState`] - the glyph store every tool reads and writes
//! - Undo/redo operations for all font editing actions
//! - The tool registry with optional lifecycle hooks
//! - Preview strip, zoom and bitmask import session models
//!
//! This crate contains no UI; it follows the engine/edit split where
//! `pixfont_engine` owns the pure data model and this crate owns the
//! editing session built on top of it.

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]

mod state;
pub use state::*;

/// Maximum allowed font height (rows per glyph)
pub const MAX_FONT_HEIGHT: i32 = 32;

/// Minimum allowed font height (rows per glyph)
pub const MIN_FONT_HEIGHT: i32 = 1;

/// Maximum allowed font width (columns per glyph)
pub const MAX_FONT_WIDTH: i32 = 8;

/// Minimum allowed font width (columns per glyph)
pub const MIN_FONT_WIDTH: i32 = 1;

mod undo_op;
pub use undo_op::*;

mod undo_stack;
pub use undo_stack::*;

mod shared;
pub use shared::*;

pub mod tools;

// Re-export the engine types callers need alongside the edit state
pub use pixfont_engine::{bitmask, raster, Color, EngineError, Glyph, PixelFont, Result, Size, BITMASK_WIDTH, FONT_LENGTH};
