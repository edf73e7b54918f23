//! Scrollbar and scroll-panel geometry.
//!
//! Pure math, no state: the caller owns the scroll offset and passes it
//! back in each frame. Offsets follow the content-shift convention — a
//! panel scrolled down by 40px has `offset.y == -40.0`, and each axis is
//! clamped to `[-(content - view), 0]`, extended by the border width.

use crate::coords::{Rect, Vec2};

/// Scroll axis selector for the thumb helpers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Metrics the geometry pass needs from the style table.
#[derive(Debug, Copy, Clone)]
pub struct ScrollConfig {
    /// Width of a scrollbar track in pixels.
    pub bar_width: f32,
    /// Border width of the hosting panel.
    pub border_width: f32,
    /// Floor for the thumb length so it stays grabbable.
    pub min_thumb: f32,
    /// Pixels scrolled per wheel unit.
    pub wheel_speed: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            bar_width: 12.0,
            border_width: 1.0,
            min_thumb: 24.0,
            wheel_speed: 12.0,
        }
    }
}

/// Result of the bar-visibility / viewport pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollGeometry {
    /// Content viewport: bounds minus border minus the visible bars.
    pub view: Rect,
    /// Horizontal track along the bottom edge, when needed.
    pub h_bar: Option<Rect>,
    /// Vertical track along the right edge, when needed.
    pub v_bar: Option<Rect>,
}

/// Decides which scrollbars are needed and carves the viewport.
///
/// Visibility is decided against the raw viewport first, then rechecked
/// once against the viewport reduced by the *other* bar — a bar can become
/// necessary purely because the other one consumed space. Exactly one
/// recheck pass; near-threshold content ratios may over- or under-show a
/// bar, which is the accepted behavior, not an iteration seed.
pub fn compute_geometry(bounds: Rect, content: Vec2, cfg: &ScrollConfig) -> ScrollGeometry {
    let inner = bounds.inset(cfg.border_width);
    if inner.is_empty() {
        return ScrollGeometry { view: inner, h_bar: None, v_bar: None };
    }

    let h0 = content.x > inner.size.x;
    let v0 = content.y > inner.size.y;

    // Single recheck against the space left over by the other bar.
    let need_h = content.x > inner.size.x - if v0 { cfg.bar_width } else { 0.0 };
    let need_v = content.y > inner.size.y - if h0 { cfg.bar_width } else { 0.0 };

    let view = Rect::new(
        inner.origin.x,
        inner.origin.y,
        (inner.size.x - if need_v { cfg.bar_width } else { 0.0 }).max(0.0),
        (inner.size.y - if need_h { cfg.bar_width } else { 0.0 }).max(0.0),
    );

    let h_bar = need_h.then(|| Rect::new(view.origin.x, view.bottom(), view.size.x, cfg.bar_width));
    let v_bar = need_v.then(|| Rect::new(view.right(), view.origin.y, cfg.bar_width, view.size.y));

    ScrollGeometry { view, h_bar, v_bar }
}

/// Clamps a scroll offset to `[-(content - view) - border, 0]` per axis.
///
/// Axes where the content fits pin to zero.
pub fn clamp_offset(offset: Vec2, view: Vec2, content: Vec2, border_width: f32) -> Vec2 {
    let min_for = |content: f32, view: f32| {
        if content > view {
            -(content - view) - border_width
        } else {
            0.0
        }
    };
    Vec2::new(
        offset.x.clamp(min_for(content.x, view.x), 0.0),
        offset.y.clamp(min_for(content.y, view.y), 0.0),
    )
}

/// Thumb rectangle for one axis.
///
/// Length is `track × view/content`, floored to `min_thumb` and capped to
/// the track; position maps the (non-positive) offset onto the remaining
/// track run.
pub fn thumb(track: Rect, axis: Axis, view_len: f32, content_len: f32, offset: f32, min_thumb: f32) -> Rect {
    let track_len = match axis {
        Axis::Horizontal => track.size.x,
        Axis::Vertical => track.size.y,
    };

    let ratio = if content_len > 0.0 { (view_len / content_len).clamp(0.0, 1.0) } else { 1.0 };
    let len = (track_len * ratio).max(min_thumb).min(track_len);

    let scrollable = (content_len - view_len).max(0.0);
    let t = if scrollable > 0.0 { (-offset / scrollable).clamp(0.0, 1.0) } else { 0.0 };
    let start = t * (track_len - len);

    match axis {
        Axis::Horizontal => Rect::new(track.origin.x + start, track.origin.y, len, track.size.y),
        Axis::Vertical => Rect::new(track.origin.x, track.origin.y + start, track.size.x, len),
    }
}

/// Maps a pointer delta on the track (in pixels) to an offset delta.
///
/// Inverse of the thumb position mapping: dragging the thumb through the
/// whole free track run traverses the whole scrollable range.
pub fn thumb_drag_delta(track_len: f32, thumb_len: f32, view_len: f32, content_len: f32, pointer_delta: f32) -> f32 {
    let run = track_len - thumb_len;
    let scrollable = (content_len - view_len).max(0.0);
    if run <= 0.0 || scrollable <= 0.0 {
        return 0.0;
    }
    -pointer_delta * scrollable / run
}

/// Applies a wheel sample to an offset (positive wheel scrolls down, i.e.
/// pushes the offset negative). The caller clamps afterwards.
pub fn wheel_step(offset: Vec2, wheel: Vec2, speed: f32) -> Vec2 {
    offset - wheel * speed
}
