use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::Control;

use crate::context::Ui;

impl Ui {
    /// Two-state button. Flips `active` on click and returns `true` on the
    /// frame it flipped.
    pub fn toggle(&mut self, bounds: Rect, text: &str, active: &mut bool) -> bool {
        let (res, _) = self.resolve(bounds);
        if res.fired {
            *active = !*active;
        }

        // An active toggle at rest keeps the pressed visuals.
        let visual = if res.state == ControlState::Normal && *active {
            ControlState::Pressed
        } else {
            res.state
        };

        self.draw_frame(bounds, Control::Toggle, visual);
        let inner = self.text_bounds(bounds, Control::Toggle);
        self.draw_text(Control::Toggle, visual, text, inner);

        res.fired
    }

    /// Row of mutually exclusive toggles; `active` is the selected index.
    ///
    /// Returns `true` when the selection changed.
    pub fn toggle_group(&mut self, bounds: Rect, labels: &[&str], active: &mut usize) -> bool {
        if labels.is_empty() {
            return false;
        }
        let w = bounds.size.x / labels.len() as f32;
        let mut changed = false;
        for (i, text) in labels.iter().enumerate() {
            let cell = Rect::new(bounds.origin.x + i as f32 * w, bounds.origin.y, w, bounds.size.y);
            let mut on = *active == i;
            if self.toggle(cell, text, &mut on) && on {
                *active = i;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::testing::{frame, hover, released, ui};
    use ishtar_core::coords::Vec2;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 30.0);

    #[test]
    fn click_flips_state() {
        let mut ui = ui();
        let mut active = false;

        frame(&mut ui, released(Vec2::new(50.0, 15.0)));
        assert!(ui.toggle(BOUNDS, "On", &mut active));
        assert!(active);
        ui.end_frame();

        frame(&mut ui, released(Vec2::new(50.0, 15.0)));
        ui.toggle(BOUNDS, "On", &mut active);
        assert!(!active);
    }

    #[test]
    fn active_toggle_at_rest_draws_pressed_colors() {
        let mut ui = ui();
        let expected = ui.base_color(Control::Toggle, ControlState::Pressed);
        let mut active = true;

        frame(&mut ui, hover(Vec2::new(500.0, 500.0)));
        ui.toggle(BOUNDS, "On", &mut active);
        match ui.draw_list().commands()[1] {
            DrawCmd::Rect { color, .. } => assert_eq!(color, expected),
            _ => panic!("expected rect"),
        }
    }

    #[test]
    fn toggle_group_selects_clicked_cell() {
        let mut ui = ui();
        let mut active = 0usize;

        // Three 50px cells; click the middle one.
        frame(&mut ui, released(Vec2::new(75.0, 10.0)));
        let changed = ui.toggle_group(
            Rect::new(0.0, 0.0, 150.0, 20.0),
            &["a", "b", "c"],
            &mut active,
        );
        assert!(changed);
        assert_eq!(active, 1);
    }
}
