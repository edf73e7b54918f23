use ishtar_core::coords::Rect;
use ishtar_core::style::{BaseProp, CheckBoxProp, Control};

use crate::context::Ui;

impl Ui {
    /// Check square with a label to its right. `bounds` is the square; the
    /// label extends past it and is part of the hit area. Returns `true`
    /// on the frame `checked` flipped.
    pub fn checkbox(&mut self, bounds: Rect, text: &str, checked: &mut bool) -> bool {
        let padding = self.style().get_px(Control::CheckBox, BaseProp::TextPadding);
        let label_w = if text.is_empty() { 0.0 } else { self.measure_text(text).x + padding };
        let hit = Rect::new(
            bounds.origin.x,
            bounds.origin.y,
            bounds.size.x + label_w,
            bounds.size.y,
        );

        let (res, _) = self.resolve(hit);
        if res.fired {
            *checked = !*checked;
        }

        self.draw_frame(bounds, Control::CheckBox, res.state);
        if *checked {
            let border_w = self.style().get_px(Control::CheckBox, BaseProp::BorderWidth);
            let check_pad = self.style().get_px(Control::CheckBox, CheckBoxProp::CheckPadding);
            let mark = bounds.inset(border_w + check_pad);
            let color = self.text_color(Control::CheckBox, res.state);
            self.fill_rect(mark, color);
        }

        if !text.is_empty() {
            let label = Rect::new(
                bounds.right() + padding,
                bounds.origin.y,
                label_w - padding,
                bounds.size.y,
            );
            self.draw_text(Control::CheckBox, res.state, text, label);
        }

        res.fired
    }
}
