use ishtar_core::coords::Rect;
use ishtar_core::style::Control;

use crate::context::Ui;

impl Ui {
    /// Push button. Returns `true` on the frame the pointer is released
    /// over it.
    pub fn button(&mut self, bounds: Rect, text: &str) -> bool {
        let (res, _) = self.resolve(bounds);

        self.draw_frame(bounds, Control::Button, res.state);
        let inner = self.text_bounds(bounds, Control::Button);
        self.draw_text(Control::Button, res.state, text, inner);

        res.fired
    }
}
