use ishtar_core::color::{hsv_to_rgb, Hsv, Rgba};
use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::{ColorPickerProp, Control};

use crate::context::Ui;

/// Hue-bar gradient stops: the six sector boundary colors, top to bottom.
const HUE_STOPS: [Rgba; 7] = [
    Rgba(0xff00_00ff), // red
    Rgba(0xffff_00ff), // yellow
    Rgba(0x00ff_00ff), // green
    Rgba(0x00ff_ffff), // cyan
    Rgba(0x0000_ffff), // blue
    Rgba(0xff00_ffff), // magenta
    Rgba(0xff00_00ff), // back to red
];

impl Ui {
    /// Saturation/value panel for a hue held in `hsv`.
    ///
    /// The caller owns the `Hsv` across frames — deriving it from rounded
    /// RGB every frame makes the hue jitter near gray; the picker never
    /// does that conversion internally. Returns `true` while dragging
    /// changed `s`/`v`.
    pub fn color_panel(&mut self, bounds: Rect, hsv: &mut Hsv) -> bool {
        let (res, key) = self.resolve(bounds);

        let mut changed = false;
        if res.state == ControlState::Pressed
            && self.claim_drag(key, bounds)
            && !bounds.is_empty()
        {
            let p = self.pointer().pos;
            let s = ((p.x - bounds.origin.x) / bounds.size.x).clamp(0.0, 1.0);
            let v = 1.0 - ((p.y - bounds.origin.y) / bounds.size.y).clamp(0.0, 1.0);
            if s != hsv.s || v != hsv.v {
                hsv.s = s;
                hsv.v = v;
                changed = true;
            }
        }

        // White → pure hue across the top, falling to black at the bottom.
        let pure = Rgba::from_normalized(hsv_to_rgb(Hsv::new(hsv.h, 1.0, 1.0)));
        self.gradient_rect(bounds, [Rgba::WHITE, pure, Rgba::BLACK, Rgba::BLACK]);

        // Selector cross-hair box at the current (s, v).
        let sel = self.style().get_px(Control::ColorPicker, ColorPickerProp::SelectorSize);
        let sx = bounds.origin.x + hsv.s * bounds.size.x - sel * 0.5;
        let sy = bounds.origin.y + (1.0 - hsv.v) * bounds.size.y - sel * 0.5;
        let color = self.border_color(Control::ColorPicker, res.state);
        self.fill_rect(Rect::new(sx, sy, sel, sel), color);

        changed
    }

    /// Vertical hue bar; drags `hue` through `[0, 360)`.
    pub fn hue_bar(&mut self, bounds: Rect, hue: &mut f32) -> bool {
        let (res, key) = self.resolve(bounds);

        let mut changed = false;
        if res.state == ControlState::Pressed
            && self.claim_drag(key, bounds)
            && bounds.size.y > 0.0
        {
            let t = ((self.pointer().pos.y - bounds.origin.y) / bounds.size.y).clamp(0.0, 1.0);
            let new_hue = (t * 360.0).min(359.999);
            if new_hue != *hue {
                *hue = new_hue;
                changed = true;
            }
        }

        // Six gradient segments through the color wheel.
        let seg_h = bounds.size.y / 6.0;
        for i in 0..6 {
            let seg = Rect::new(
                bounds.origin.x,
                bounds.origin.y + i as f32 * seg_h,
                bounds.size.x,
                seg_h,
            );
            let top = HUE_STOPS[i];
            let bottom = HUE_STOPS[i + 1];
            self.gradient_rect(seg, [top, top, bottom, bottom]);
        }

        // Selector strip at the current hue.
        let sel_h = self.style().get_px(Control::ColorPicker, ColorPickerProp::HueBarSelectorHeight);
        let overflow = self.style().get_px(Control::ColorPicker, ColorPickerProp::HueBarSelectorOverflow);
        let sy = bounds.origin.y + (*hue / 360.0) * bounds.size.y - sel_h * 0.5;
        let color = self.border_color(Control::ColorPicker, res.state);
        self.fill_rect(
            Rect::new(
                bounds.origin.x - overflow,
                sy,
                bounds.size.x + overflow * 2.0,
                sel_h,
            ),
            color,
        );

        changed
    }

    /// Saturation/value panel plus hue bar. Returns the picked color as
    /// packed RGBA; `hsv` is the caller-owned source of truth.
    pub fn color_picker(&mut self, bounds: Rect, hsv: &mut Hsv) -> Rgba {
        let bar_w = self.style().get_px(Control::ColorPicker, ColorPickerProp::HueBarWidth);
        let padding = self.style().get_px(Control::ColorPicker, ColorPickerProp::HueBarPadding);

        let panel = Rect::new(
            bounds.origin.x,
            bounds.origin.y,
            (bounds.size.x - bar_w - padding).max(0.0),
            bounds.size.y,
        );
        let bar = Rect::new(panel.right() + padding, bounds.origin.y, bar_w, bounds.size.y);

        self.color_panel(panel, hsv);
        self.hue_bar(bar, &mut hsv.h);

        Rgba::from_hsv(*hsv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::testing::{frame, held, pressed, ui};
    use ishtar_core::coords::Vec2;
    use ishtar_core::input::PointerSample;

    const PANEL: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn drag_sets_saturation_and_value() {
        let mut ui = ui();
        let mut hsv = Hsv::new(200.0, 0.5, 0.5);

        frame(&mut ui, pressed(Vec2::new(75.0, 25.0)));
        let changed = ui.color_panel(PANEL, &mut hsv);
        assert!(changed);
        assert!((hsv.s - 0.75).abs() < 1e-3);
        assert!((hsv.v - 0.75).abs() < 1e-3);
        // Hue untouched by the panel.
        assert_eq!(hsv.h, 200.0);
    }

    #[test]
    fn drag_outside_bounds_clamps_sv_to_unit_range() {
        let mut ui = ui();
        let mut hsv = Hsv::new(0.0, 0.5, 0.5);

        frame(&mut ui, pressed(Vec2::new(50.0, 50.0)));
        ui.color_panel(PANEL, &mut hsv);
        ui.end_frame();

        frame(&mut ui, held(Vec2::new(900.0, -900.0)));
        ui.color_panel(PANEL, &mut hsv);
        assert_eq!((hsv.s, hsv.v), (1.0, 1.0));
    }

    #[test]
    fn panel_gradient_corners_follow_hue() {
        let mut ui = ui();
        let mut hsv = Hsv::new(120.0, 0.5, 0.5); // green
        frame(&mut ui, PointerSample::default());
        ui.color_panel(PANEL, &mut hsv);
        match ui.draw_list().commands()[0] {
            DrawCmd::GradientRect { corners, .. } => {
                assert_eq!(corners[0], Rgba::WHITE);
                assert_eq!(corners[1], Rgba(0x00ff_00ff));
                assert_eq!(corners[2], Rgba::BLACK);
            }
            _ => panic!("expected gradient"),
        }
    }

    #[test]
    fn hue_bar_maps_pointer_to_degrees() {
        let mut ui = ui();
        let mut hue = 0.0f32;
        let bar = Rect::new(0.0, 0.0, 20.0, 360.0);

        frame(&mut ui, pressed(Vec2::new(10.0, 90.0)));
        let changed = ui.hue_bar(bar, &mut hue);
        assert!(changed);
        assert!((hue - 90.0).abs() < 1e-3);
    }

    #[test]
    fn hue_stays_below_360() {
        let mut ui = ui();
        let mut hue = 0.0f32;
        let bar = Rect::new(0.0, 0.0, 20.0, 100.0);

        frame(&mut ui, pressed(Vec2::new(10.0, 99.9)));
        ui.hue_bar(bar, &mut hue);
        assert!(hue < 360.0);
    }

    #[test]
    fn picker_returns_rgb_of_cached_hsv() {
        let mut ui = ui();
        let mut hsv = Hsv::new(0.0, 1.0, 1.0);
        frame(&mut ui, PointerSample::default());
        let rgba = ui.color_picker(Rect::new(0.0, 0.0, 130.0, 100.0), &mut hsv);
        assert_eq!(rgba, Rgba::new(255, 0, 0, 255));
    }

    #[test]
    fn panel_and_bar_drag_independently() {
        let mut ui = ui();
        let mut hsv = Hsv::new(10.0, 0.2, 0.2);
        let bounds = Rect::new(0.0, 0.0, 130.0, 100.0);
        // Panel is 0..100 wide (hue bar 20 + padding 10).

        frame(&mut ui, pressed(Vec2::new(50.0, 50.0)));
        ui.color_picker(bounds, &mut hsv);
        ui.end_frame();

        // While the panel owns the drag, wandering over the hue bar must
        // not move the hue.
        frame(&mut ui, held(Vec2::new(115.0, 50.0)));
        ui.color_picker(bounds, &mut hsv);
        assert_eq!(hsv.h, 10.0);
        assert_eq!(hsv.s, 1.0);
    }
}
