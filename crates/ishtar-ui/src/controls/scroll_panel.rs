use ishtar_core::coords::{Rect, Vec2};
use ishtar_core::interaction::ControlState;
use ishtar_core::scroll::{self, ScrollConfig};
use ishtar_core::style::{BaseProp, Control, ListViewProp, ScrollBarProp};

use crate::context::Ui;

impl Ui {
    /// Scrollable viewport over caller-drawn content of size `content`.
    ///
    /// `scroll` is the caller-owned content offset (non-positive per
    /// axis). Returns the visible view rectangle — the caller clips its
    /// content drawing to it and translates by `scroll`.
    pub fn scroll_panel(&mut self, bounds: Rect, content: Vec2, scroll: &mut Vec2) -> Rect {
        let cfg = ScrollConfig {
            bar_width: self.style().get_px(Control::ListView, ListViewProp::ScrollBarWidth),
            border_width: self.style().get_px(Control::Default, BaseProp::BorderWidth),
            min_thumb: self.style().get_px(Control::ScrollBar, ScrollBarProp::SliderMinLength),
            wheel_speed: self.style().get_px(Control::ScrollBar, ScrollBarProp::ScrollSpeed),
        };
        let geo = scroll::compute_geometry(bounds, content, &cfg);

        let (res, _) = self.resolve(bounds);

        // Panel chrome behind everything else.
        let border = self.border_color(Control::Default, res.state);
        let background = self.background_color();
        self.fill_rect(bounds, border);
        self.fill_rect(bounds.inset(cfg.border_width), background);

        // Wheel scrolls the vertical axis when present, else horizontal.
        let hovered = matches!(res.state, ControlState::Focused | ControlState::Pressed);
        let wheel = self.pointer().wheel;
        if hovered && wheel.y != 0.0 {
            if geo.v_bar.is_some() {
                *scroll = scroll::wheel_step(*scroll, Vec2::new(0.0, wheel.y), cfg.wheel_speed);
            } else if geo.h_bar.is_some() {
                *scroll = scroll::wheel_step(*scroll, Vec2::new(wheel.y, 0.0), cfg.wheel_speed);
            }
        }

        // Bars consume one declaration key each whether or not they show,
        // so later controls keep stable drag identities as content grows.
        match geo.h_bar {
            Some(bar) => scroll.x = self.scroll_bar(bar, scroll.x, geo.view.size.x, content.x),
            None => self.skip_keys(1),
        }
        match geo.v_bar {
            Some(bar) => scroll.y = self.scroll_bar(bar, scroll.y, geo.view.size.y, content.y),
            None => self.skip_keys(1),
        }

        *scroll = scroll::clamp_offset(*scroll, geo.view.size, content, cfg.border_width);
        geo.view
    }
}
