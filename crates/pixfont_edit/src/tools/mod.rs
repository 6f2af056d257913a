//! Editor tool models
//!
//! Tools are the per-feature objects of the editor (preview strip, zoom,
//! bitmask import). Each one implements [`EditorTool`], a capability-set
//! interface of optional lifecycle hooks with no-op defaults: a tool only
//! overrides the hooks it cares about, and the [`ToolRegistry`] broadcasts
//! store events to every registered tool.

mod import;
pub use import::*;

mod preview;
pub use preview::*;

mod zoom;
pub use zoom::*;

use crate::FontEditState;

/// Lifecycle hooks a tool may react to. All hooks default to no-ops.
pub trait EditorTool {
    fn name(&self) -> &str;

    /// A single glyph's pixels changed (edit, clear, inverse, flip, undo).
    fn on_glyph_changed(&mut self, _code: u8, _state: &FontEditState) {}

    /// The whole font was replaced (import, file load).
    fn on_font_replaced(&mut self, _state: &FontEditState) {}

    /// The font's cell size changed.
    fn on_font_resized(&mut self, _state: &FontEditState) {}
}

/// Owns the registered tools and fans store events out to them.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn EditorTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Box<dyn EditorTool>) {
        log::debug!("registered tool '{}'", tool.name());
        self.tools.push(tool);
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn tools_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn EditorTool>> {
        self.tools.iter_mut()
    }

    pub fn notify_glyph_changed(&mut self, code: u8, state: &FontEditState) {
        for tool in &mut self.tools {
            tool.on_glyph_changed(code, state);
        }
    }

    pub fn notify_font_replaced(&mut self, state: &FontEditState) {
        for tool in &mut self.tools {
            tool.on_font_replaced(state);
        }
    }

    pub fn notify_font_resized(&mut self, state: &FontEditState) {
        for tool in &mut self.tools {
            tool.on_font_resized(state);
        }
    }
}
