//! Host-supplied input.
//!
//! The core never polls devices. Once per frame the host snapshots its
//! pointer state into a [`PointerSample`] and hands it to the UI context;
//! every control resolved that frame reads the same sample.

use crate::coords::Vec2;

/// Pointer state for a single frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerSample {
    /// Cursor position in logical pixels.
    pub pos: Vec2,
    /// `true` while the primary button is held.
    pub down: bool,
    /// `true` for exactly the frame the primary button went down.
    pub pressed: bool,
    /// `true` for exactly the frame the primary button came up.
    pub released: bool,
    /// Wheel / trackpad delta this frame. Positive `y` scrolls down.
    pub wheel: Vec2,
}

impl PointerSample {
    /// A sample with the cursor at `pos` and no button activity.
    pub fn hover(pos: Vec2) -> Self {
        Self { pos, ..Self::default() }
    }
}
