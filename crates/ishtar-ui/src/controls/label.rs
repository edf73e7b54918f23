use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::Control;

use crate::context::Ui;

impl Ui {
    /// Static text. Not interactive — only the normal and disabled text
    /// colors apply.
    pub fn label(&mut self, bounds: Rect, text: &str) {
        let (res, _) = self.resolve(bounds);
        let state = match res.state {
            ControlState::Disabled => ControlState::Disabled,
            _ => ControlState::Normal,
        };
        let inner = self.text_bounds(bounds, Control::Label);
        self.draw_text(Control::Label, state, text, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::testing::{frame, hover, ui};
    use ishtar_core::coords::Vec2;
    use ishtar_core::input::PointerSample;

    #[test]
    fn label_draws_glyphs_only() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        ui.label(Rect::new(0.0, 0.0, 100.0, 20.0), "Hi");
        let cmds = ui.draw_list().commands();
        assert_eq!(cmds.len(), 2);
        assert!(cmds.iter().all(|c| matches!(c, DrawCmd::Glyph { .. })));
    }

    #[test]
    fn label_ignores_hover_color() {
        let mut ui = ui();
        let normal = ui.text_color(Control::Label, ControlState::Normal);

        frame(&mut ui, hover(Vec2::new(5.0, 5.0)));
        ui.label(Rect::new(0.0, 0.0, 100.0, 20.0), "x");
        match ui.draw_list().commands()[0] {
            DrawCmd::Glyph { color, .. } => assert_eq!(color, normal),
            _ => panic!("expected glyph"),
        }
    }

    #[test]
    fn empty_bounds_draw_nothing() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        ui.label(Rect::new(0.0, 0.0, 0.0, 0.0), "Hi");
        assert!(ui.draw_list().is_empty());
    }
}
