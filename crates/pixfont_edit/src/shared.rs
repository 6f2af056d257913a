//! SharedFontState - a wrapper that allows sharing one edit state between
//! components
//!
//! Holds an `Arc<Mutex<FontEditState>>` so the glyph grid, preview strip and
//! edit canvas can all hold the single store. There is still exactly one
//! logical writer; the lock only carries the state across component
//! boundaries.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::FontEditState;

pub struct SharedFontState {
    inner: Arc<Mutex<FontEditState>>,
}

impl SharedFontState {
    /// Create a new SharedFontState wrapping the given Arc
    pub fn new(inner: Arc<Mutex<FontEditState>>) -> Self {
        Self { inner }
    }

    /// Create a new SharedFontState with a fresh default edit state
    pub fn with_default_font() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FontEditState::new())),
        }
    }

    /// Get access to the inner Arc for sharing with other components
    pub fn inner(&self) -> Arc<Mutex<FontEditState>> {
        self.inner.clone()
    }

    /// Run a closure with read access to the state
    pub fn read<T>(&self, f: impl FnOnce(&FontEditState) -> T) -> T {
        f(&self.inner.lock())
    }

    /// Run a closure with write access to the state
    pub fn write<T>(&self, f: impl FnOnce(&mut FontEditState) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl Clone for SharedFontState {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl Default for SharedFontState {
    fn default() -> Self {
        Self::with_default_font()
    }
}
