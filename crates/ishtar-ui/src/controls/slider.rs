use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::{BaseProp, Control, SliderProp};
use ishtar_core::text::{HAlign, VAlign};

use crate::context::Ui;

impl Ui {
    /// Slider with a movable thumb. `text_left` / `text_right` are side
    /// labels drawn outside the bounds. Returns `true` when `value`
    /// changed this frame.
    pub fn slider(
        &mut self,
        bounds: Rect,
        text_left: &str,
        text_right: &str,
        value: &mut f32,
        min: f32,
        max: f32,
    ) -> bool {
        let thumb_w = self.style().get_px(Control::Slider, SliderProp::SliderWidth);
        self.slider_impl(bounds, text_left, text_right, value, min, max, thumb_w)
    }

    /// Slider drawn as a fill bar from the left edge instead of a thumb.
    pub fn slider_bar(
        &mut self,
        bounds: Rect,
        text_left: &str,
        text_right: &str,
        value: &mut f32,
        min: f32,
        max: f32,
    ) -> bool {
        self.slider_impl(bounds, text_left, text_right, value, min, max, 0.0)
    }

    fn slider_impl(
        &mut self,
        bounds: Rect,
        text_left: &str,
        text_right: &str,
        value: &mut f32,
        min: f32,
        max: f32,
        thumb_w: f32,
    ) -> bool {
        let (res, key) = self.resolve(bounds);

        let border_w = self.style().get_px(Control::Slider, BaseProp::BorderWidth);
        let padding = self.style().get_px(Control::Slider, SliderProp::SliderPadding);
        let track = bounds.inset(border_w + padding);

        let mut changed = false;
        if res.state == ControlState::Pressed && self.claim_drag(key, bounds) {
            // Value from the raw pointer position — the pointer may be far
            // outside the bounds mid-drag; only the value is clamped.
            let run = (track.size.x - thumb_w).max(1.0);
            let t = ((self.pointer().pos.x - track.origin.x - thumb_w * 0.5) / run)
                .clamp(0.0, 1.0);
            let new_value = min + t * (max - min);
            if new_value != *value {
                *value = new_value;
                changed = true;
            }
        }
        *value = value.clamp(min.min(max), max.max(min));

        // Frame + thumb (or fill bar when thumb_w is zero).
        self.draw_frame(bounds, Control::Slider, res.state);

        let span = (max - min).abs();
        let t = if span > 0.0 { ((*value - min) / (max - min)).clamp(0.0, 1.0) } else { 0.0 };
        let slider_rect = if thumb_w > 0.0 {
            Rect::new(
                track.origin.x + t * (track.size.x - thumb_w),
                track.origin.y,
                thumb_w,
                track.size.y,
            )
        } else {
            Rect::new(track.origin.x, track.origin.y, t * track.size.x, track.size.y)
        };
        let fill_state = if res.state == ControlState::Disabled {
            ControlState::Disabled
        } else {
            ControlState::Pressed
        };
        let fill = self.base_color(Control::Slider, fill_state);
        self.fill_rect(slider_rect, fill);

        self.draw_side_labels(bounds, Control::Slider, res.state, text_left, text_right);
        changed
    }

    /// Side labels shared by the slider family: `left` right-aligned
    /// before the bounds, `right` left-aligned after them.
    pub(crate) fn draw_side_labels(
        &mut self,
        bounds: Rect,
        control: Control,
        state: ControlState,
        left: &str,
        right: &str,
    ) {
        let padding = self.style().get_px(control, BaseProp::TextPadding);
        let color = self.text_color(control, state);
        let mut style = self.text_style(control);
        style.v_align = VAlign::Middle;

        if !left.is_empty() {
            let w = self.measure_text(left).x;
            style.h_align = HAlign::Right;
            let rect = Rect::new(
                bounds.origin.x - w - padding,
                bounds.origin.y,
                w,
                bounds.size.y,
            );
            self.draw_text_styled(left, rect, &style, color);
        }
        if !right.is_empty() {
            let w = self.measure_text(right).x;
            style.h_align = HAlign::Left;
            let rect = Rect::new(bounds.right() + padding, bounds.origin.y, w, bounds.size.y);
            self.draw_text_styled(right, rect, &style, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{frame, held, pressed, released, ui};
    use ishtar_core::coords::Vec2;

    // Border 1 + padding 1 → track x spans 2..198 (width 196).
    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 20.0);

    #[test]
    fn press_on_track_jumps_value() {
        let mut ui = ui();
        let mut value = 0.0f32;
        frame(&mut ui, pressed(Vec2::new(100.0, 10.0)));
        let changed = ui.slider_bar(BOUNDS, "", "", &mut value, 0.0, 1.0);
        assert!(changed);
        assert!((value - 0.5).abs() < 0.01, "value = {value}");
    }

    #[test]
    fn drag_beyond_bounds_keeps_tracking_and_clamps_value() {
        let mut ui = ui();
        let mut value = 0.0f32;

        frame(&mut ui, pressed(Vec2::new(100.0, 10.0)));
        ui.slider_bar(BOUNDS, "", "", &mut value, 0.0, 1.0);
        ui.end_frame();

        // Pointer leaves the control; the drag session keeps tracking it.
        frame(&mut ui, held(Vec2::new(10_000.0, -50.0)));
        let changed = ui.slider_bar(BOUNDS, "", "", &mut value, 0.0, 1.0);
        assert!(changed);
        assert_eq!(value, 1.0);
    }

    #[test]
    fn second_slider_is_suppressed_during_drag() {
        let mut ui = ui();
        let mut a = 0.0f32;
        let mut b = 0.25f32;
        let b_bounds = Rect::new(0.0, 40.0, 200.0, 20.0);

        frame(&mut ui, pressed(Vec2::new(100.0, 10.0)));
        ui.slider_bar(BOUNDS, "", "", &mut a, 0.0, 1.0);
        ui.slider_bar(b_bounds, "", "", &mut b, 0.0, 1.0);
        ui.end_frame();

        // Drag wanders over slider B; B must not move.
        frame(&mut ui, held(Vec2::new(150.0, 50.0)));
        ui.slider_bar(BOUNDS, "", "", &mut a, 0.0, 1.0);
        let b_changed = ui.slider_bar(b_bounds, "", "", &mut b, 0.0, 1.0);
        assert!(!b_changed);
        assert_eq!(b, 0.25);
        assert!(a > 0.5);
    }

    #[test]
    fn release_frame_commits_final_value() {
        let mut ui = ui();
        let mut value = 0.0f32;

        frame(&mut ui, pressed(Vec2::new(50.0, 10.0)));
        ui.slider_bar(BOUNDS, "", "", &mut value, 0.0, 1.0);
        ui.end_frame();

        frame(&mut ui, released(Vec2::new(198.0, 10.0)));
        ui.slider_bar(BOUNDS, "", "", &mut value, 0.0, 1.0);
        ui.end_frame();
        assert_eq!(value, 1.0);
    }

    #[test]
    fn value_clamps_into_range_without_interaction() {
        let mut ui = ui();
        let mut value = 7.0f32;
        frame(&mut ui, ishtar_core::input::PointerSample::default());
        ui.slider(BOUNDS, "", "", &mut value, 0.0, 1.0);
        assert_eq!(value, 1.0);
    }
}
