use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::Control;

use crate::context::Ui;

impl Ui {
    /// Framed status strip, text left-aligned by default.
    pub fn status_bar(&mut self, bounds: Rect, text: &str) {
        let state = if self.is_enabled() { ControlState::Normal } else { ControlState::Disabled };
        self.draw_frame(bounds, Control::StatusBar, state);
        let inner = self.text_bounds(bounds, Control::StatusBar);
        self.draw_text(Control::StatusBar, state, text, inner);
    }
}
