use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::{BaseProp, Control, ProgressBarProp};

use crate::context::Ui;

impl Ui {
    /// Read-only progress bar; `value` is displayed clamped to
    /// `[min, max]`.
    pub fn progress_bar(
        &mut self,
        bounds: Rect,
        text_left: &str,
        text_right: &str,
        value: f32,
        min: f32,
        max: f32,
    ) {
        // Not interactive: no hit test, no declaration key consumed.
        let state = if self.is_enabled() { ControlState::Normal } else { ControlState::Disabled };

        let border_w = self.style().get_px(Control::ProgressBar, BaseProp::BorderWidth);
        let padding = self.style().get_px(Control::ProgressBar, ProgressBarProp::ProgressPadding);

        self.draw_frame(bounds, Control::ProgressBar, state);

        let span = max - min;
        let t = if span.abs() > f32::EPSILON {
            ((value - min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let track = bounds.inset(border_w + padding);
        let fill = Rect::new(track.origin.x, track.origin.y, track.size.x * t, track.size.y);
        let fill_state = if state == ControlState::Disabled {
            ControlState::Disabled
        } else {
            ControlState::Pressed
        };
        let color = self.base_color(Control::ProgressBar, fill_state);
        self.fill_rect(fill, color);

        self.draw_side_labels(bounds, Control::ProgressBar, state, text_left, text_right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::testing::{frame, ui};
    use ishtar_core::input::PointerSample;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 102.0, 22.0);

    #[test]
    fn fill_width_tracks_value() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        // Border 1 + padding 1 → track is 98px wide.
        ui.progress_bar(BOUNDS, "", "", 0.5, 0.0, 1.0);
        match ui.draw_list().commands()[2] {
            DrawCmd::Rect { rect, .. } => assert_eq!(rect.size.x, 49.0),
            _ => panic!("expected rect"),
        }
    }

    #[test]
    fn value_is_clamped_to_range() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        ui.progress_bar(BOUNDS, "", "", 99.0, 0.0, 1.0);
        match ui.draw_list().commands()[2] {
            DrawCmd::Rect { rect, .. } => assert_eq!(rect.size.x, 98.0),
            _ => panic!("expected rect"),
        }
    }

    #[test]
    fn consumes_no_declaration_key() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        ui.progress_bar(BOUNDS, "", "", 0.5, 0.0, 1.0);
        assert_eq!(ui.take_key().0, 0);
    }
}
