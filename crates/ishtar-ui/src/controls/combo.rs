use ishtar_core::coords::Rect;
use ishtar_core::style::{Control, ComboBoxProp};
use ishtar_core::text::HAlign;

use crate::context::Ui;

impl Ui {
    /// Cycling selector: the side button (or a click anywhere on the
    /// control) advances to the next item. Returns `true` when `active`
    /// changed.
    pub fn combo_box(&mut self, bounds: Rect, items: &[&str], active: &mut usize) -> bool {
        if items.is_empty() {
            return false;
        }
        *active = (*active).min(items.len() - 1);

        let button_w = self.style().get_px(Control::ComboBox, ComboBoxProp::ButtonWidth);
        let spacing = self.style().get_px(Control::ComboBox, ComboBoxProp::ButtonSpacing);
        let main = Rect::new(
            bounds.origin.x,
            bounds.origin.y,
            (bounds.size.x - button_w - spacing).max(0.0),
            bounds.size.y,
        );
        let button = Rect::new(
            main.right() + spacing,
            bounds.origin.y,
            button_w,
            bounds.size.y,
        );

        let (res, _) = self.resolve(bounds);
        let changed = res.fired;
        if changed {
            *active = (*active + 1) % items.len();
        }

        self.draw_frame(main, Control::ComboBox, res.state);
        let inner = self.text_bounds(main, Control::ComboBox);
        self.draw_text(Control::ComboBox, res.state, items[*active], inner);

        // Counter button shows position within the list.
        self.draw_frame(button, Control::Button, res.state);
        let counter = format!("{}/{}", *active + 1, items.len());
        let mut style = self.text_style(Control::Button);
        style.h_align = HAlign::Center;
        let color = self.text_color(Control::Button, res.state);
        let counter_bounds = self.text_bounds(button, Control::Button);
        self.draw_text_styled(&counter, counter_bounds, &style, color);

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{frame, released, ui};
    use ishtar_core::coords::Vec2;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 150.0, 24.0);

    #[test]
    fn click_cycles_through_items() {
        let mut ui = ui();
        let mut active = 0usize;

        frame(&mut ui, released(Vec2::new(50.0, 12.0)));
        assert!(ui.combo_box(BOUNDS, &["a", "b", "c"], &mut active));
        assert_eq!(active, 1);
        ui.end_frame();

        frame(&mut ui, released(Vec2::new(50.0, 12.0)));
        ui.combo_box(BOUNDS, &["a", "b", "c"], &mut active);
        assert_eq!(active, 2);
        ui.end_frame();

        // Wraps back to the first item.
        frame(&mut ui, released(Vec2::new(50.0, 12.0)));
        ui.combo_box(BOUNDS, &["a", "b", "c"], &mut active);
        assert_eq!(active, 0);
    }

    #[test]
    fn out_of_range_active_is_clamped() {
        let mut ui = ui();
        let mut active = 42usize;
        frame(&mut ui, ishtar_core::input::PointerSample::default());
        ui.combo_box(BOUNDS, &["a", "b"], &mut active);
        assert_eq!(active, 1);
    }

    #[test]
    fn empty_items_is_a_no_op() {
        let mut ui = ui();
        let mut active = 0usize;
        frame(&mut ui, released(Vec2::new(50.0, 12.0)));
        assert!(!ui.combo_box(BOUNDS, &[], &mut active));
        assert!(ui.draw_list().is_empty());
    }
}
