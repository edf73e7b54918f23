use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::scroll::{self, Axis};
use ishtar_core::style::{BaseProp, Control, ScrollBarProp};

use crate::context::Ui;

impl Ui {
    /// One scrollbar track. `offset` is the non-positive content offset
    /// for this axis; the clamped (possibly dragged) offset is returned.
    ///
    /// The axis follows the track shape: wider than tall is horizontal.
    /// Dragging anywhere on the track centers the thumb on the pointer,
    /// and the session keeps tracking the pointer outside the bounds.
    pub fn scroll_bar(&mut self, bounds: Rect, offset: f32, view_len: f32, content_len: f32) -> f32 {
        let axis = if bounds.size.x >= bounds.size.y { Axis::Horizontal } else { Axis::Vertical };

        let (res, key) = self.resolve(bounds);

        let border_w = self.style().get_px(Control::ScrollBar, BaseProp::BorderWidth);
        let padding = self.style().get_px(Control::ScrollBar, ScrollBarProp::SliderPadding);
        let min_thumb = self.style().get_px(Control::ScrollBar, ScrollBarProp::SliderMinLength);
        let track = bounds.inset(border_w + padding);

        let (track_start, track_len, pointer_pos) = match axis {
            Axis::Horizontal => (track.origin.x, track.size.x, self.pointer().pos.x),
            Axis::Vertical => (track.origin.y, track.size.y, self.pointer().pos.y),
        };

        let scrollable = (content_len - view_len).max(0.0);
        let mut offset = offset.clamp(-scrollable, 0.0);

        if res.state == ControlState::Pressed && self.claim_drag(key, bounds) && scrollable > 0.0 {
            let thumb_len = scroll::thumb(track, axis, view_len, content_len, offset, min_thumb);
            let len = match axis {
                Axis::Horizontal => thumb_len.size.x,
                Axis::Vertical => thumb_len.size.y,
            };
            let run = track_len - len;
            if run > 0.0 {
                // Center the thumb on the raw pointer position; the value
                // clamps, the pointer does not.
                let t = ((pointer_pos - track_start - len * 0.5) / run).clamp(0.0, 1.0);
                offset = -t * scrollable;
            }
        }

        self.draw_frame(bounds, Control::ScrollBar, res.state);
        let thumb = scroll::thumb(track, axis, view_len, content_len, offset, min_thumb);
        let color = self.border_color(Control::ScrollBar, res.state);
        self.fill_rect(thumb, color);

        offset
    }
}
