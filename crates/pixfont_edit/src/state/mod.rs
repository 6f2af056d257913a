//! Font edit state
//!
//! The implementation is split across multiple files:
//! - `state.rs` - Struct definition, constructors, getters, basic setters
//! - `glyph_operations.rs` - Single glyph operations (pixel, clear, flip, inverse)
//! - `font_operations.rs` - Font-level operations (replace, import, resize)
//! - `queries.rs` - Glyph store read side (raster buffers, pixel queries)
//! - `undo.rs` - Undo/redo system

mod font_operations;
mod glyph_operations;
mod queries;
#[allow(clippy::module_inception)]
mod state;
mod undo;

pub use state::*;
