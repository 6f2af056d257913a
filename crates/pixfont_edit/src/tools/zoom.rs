//! Zoom model
//!
//! Integer pixel scale for the edit canvas, with clamped in/out steps and a
//! fit-to-viewport mode that recomputes when the font's cell size changes.

use pixfont_engine::Size;

use crate::FontEditState;

use super::EditorTool;

/// Smallest usable scale (1 screen pixel per font pixel).
pub const MIN_ZOOM: i32 = 1;
/// Largest scale before individual cells stop fitting common viewports.
pub const MAX_ZOOM: i32 = 64;

pub struct ZoomState {
    scale: i32,
    /// Viewport used by zoom-to-fit; remembered so a font resize can refit.
    viewport: Option<Size>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomState {
    pub fn new() -> Self {
        Self { scale: 16, viewport: None }
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale + 1).min(MAX_ZOOM);
        self.viewport = None;
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - 1).max(MIN_ZOOM);
        self.viewport = None;
    }

    /// Pick the largest scale at which one glyph fits the viewport.
    pub fn zoom_to_fit(&mut self, viewport: Size, cell: Size) {
        let fit_x = if cell.width > 0 { viewport.width / cell.width } else { MAX_ZOOM };
        let fit_y = if cell.height > 0 { viewport.height / cell.height } else { MAX_ZOOM };
        self.scale = fit_x.min(fit_y).clamp(MIN_ZOOM, MAX_ZOOM);
        self.viewport = Some(viewport);
    }
}

impl EditorTool for ZoomState {
    fn name(&self) -> &str {
        "Zoom"
    }

    fn on_font_replaced(&mut self, state: &FontEditState) {
        if let Some(viewport) = self.viewport {
            self.zoom_to_fit(viewport, state.font().size());
        }
    }

    fn on_font_resized(&mut self, state: &FontEditState) {
        self.on_font_replaced(state);
    }
}
