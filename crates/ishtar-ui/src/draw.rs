use ishtar_core::color::Rgba;
use ishtar_core::coords::{Rect, Vec2};

/// Renderer-agnostic draw command.
///
/// These are exactly the primitives the host must provide: solid
/// rectangle, 4-corner gradient rectangle, one glyph, one icon. Commands
/// are emitted in paint order — declaration order *is* z-order, the list
/// is never sorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    /// Solid axis-aligned rectangle.
    Rect { rect: Rect, color: Rgba },
    /// Axis-aligned rectangle with one color per corner, interpolated.
    ///
    /// Corner order: top-left, top-right, bottom-right, bottom-left.
    GradientRect { rect: Rect, corners: [Rgba; 4] },
    /// One glyph; `pos` is the top-left of the glyph box at `size`.
    Glyph { codepoint: char, pos: Vec2, size: f32, color: Rgba },
    /// One icon from the host's icon sheet, drawn in an `size`×`size` box.
    Icon { id: u16, pos: Vec2, size: f32, color: Rgba },
}

/// Recorded draw stream for one frame.
///
/// Cleared by `Ui::begin_frame`, filled by control declarations, drained
/// by the host after `Ui::end_frame`. Capacity is kept across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Commands in paint order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
