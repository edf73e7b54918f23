use ishtar_core::color::Rgba;
use ishtar_core::coords::{Rect, Vec2};
use ishtar_core::input::PointerSample;
use ishtar_core::interaction::{
    ControlState, DragArbiter, DragKey, InteractionFlags, Resolution, StateResolver,
};
use ishtar_core::style::{BaseProp, Control, GlobalProp, StyleTable};
use ishtar_core::text::{FontMetrics, HAlign, TextDraw, TextShaper, TextStyle, VAlign, WrapMode};

use crate::draw::{DrawCmd, DrawList};

/// Immediate-mode UI context.
///
/// Owns everything that used to be process-global: the style table, the
/// interaction flags, the exclusive-drag session, the active font, and the
/// per-frame draw stream. One context per window; all calls happen on one
/// thread.
///
/// A frame is: [`begin_frame`](Ui::begin_frame) with the host's pointer
/// sample, control declarations in a stable order (that order is z-order
/// and the identity source for drag sessions), then
/// [`end_frame`](Ui::end_frame) and draining the draw list.
pub struct Ui {
    style: StyleTable,
    flags: InteractionFlags,
    drag: DragArbiter,
    font: Box<dyn FontMetrics>,
    pointer: PointerSample,
    draw_list: DrawList,
    next_key: u64,
}

impl Ui {
    /// Builds a context with the compiled-in default skin.
    pub fn new(font: impl FontMetrics + 'static) -> Self {
        Self {
            style: StyleTable::new(),
            flags: InteractionFlags::new(),
            drag: DragArbiter::new(),
            font: Box::new(font),
            pointer: PointerSample::default(),
            draw_list: DrawList::new(),
            next_key: 0,
        }
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Starts a frame: stores the pointer sample, resets the declaration
    /// counter, and clears the draw stream.
    pub fn begin_frame(&mut self, pointer: PointerSample) {
        // A drag whose release frame has passed is over; clearing here (not
        // on the release frame) lets the owner commit its final value.
        if !pointer.down && !pointer.released {
            self.drag.release();
        }
        self.pointer = pointer;
        self.next_key = 0;
        self.draw_list.clear();
    }

    /// Ends the frame and hands back the recorded draw stream.
    pub fn end_frame(&mut self) -> &DrawList {
        if self.pointer.released {
            self.drag.release();
        }
        &self.draw_list
    }

    /// Draw stream of the current frame (also returned by `end_frame`).
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    // ── style & interaction flags ─────────────────────────────────────────

    pub fn style(&self) -> &StyleTable {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut StyleTable {
        &mut self.style
    }

    pub fn set_style(&mut self, control: Control, prop: impl Into<u16>, value: u32) {
        self.style.set(control, prop, value);
    }

    pub fn get_style(&self, control: Control, prop: impl Into<u16>) -> u32 {
        self.style.get(control, prop)
    }

    /// Re-enables interaction after [`disable`](Ui::disable).
    pub fn enable(&mut self) {
        self.flags.enabled = true;
    }

    /// Puts every control into the disabled state (no hit testing).
    pub fn disable(&mut self) {
        self.flags.enabled = false;
    }

    /// Suppresses pointer input everywhere while keeping normal visuals.
    pub fn lock(&mut self) {
        self.flags.locked = true;
    }

    pub fn unlock(&mut self) {
        self.flags.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.flags.locked
    }

    pub fn is_enabled(&self) -> bool {
        self.flags.enabled
    }

    /// Context-wide transparency applied to every draw command.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.flags.set_alpha(alpha);
    }

    /// Forces every control to resolve to `state` until cleared.
    pub fn force_state(&mut self, state: ControlState) {
        self.flags.forced = Some(state);
    }

    pub fn clear_forced_state(&mut self) {
        self.flags.forced = None;
    }

    /// Cancels an in-flight drag session.
    pub fn reset_drag(&mut self) {
        self.drag.reset();
    }

    /// Measures `text` with the current global text style (no wrapping).
    pub fn measure_text(&self, text: &str) -> Vec2 {
        let style = self.text_style(Control::Default);
        TextShaper::new(self.font.as_ref()).measure(text, &style)
    }

    // ── control plumbing ──────────────────────────────────────────────────

    /// Hands out the next declaration-sequence key. Controls composed of
    /// several interactive parts draw one key per part, in a fixed order.
    pub(crate) fn take_key(&mut self) -> DragKey {
        let key = DragKey(self.next_key);
        self.next_key += 1;
        key
    }

    /// Burns `n` keys without resolving, so controls whose interactive
    /// parts only exist in some frames (an open dropdown's item list) keep
    /// the sequence stable for everything declared after them.
    pub(crate) fn skip_keys(&mut self, n: usize) {
        self.next_key += n as u64;
    }

    /// Resolves interaction state for the control occupying `bounds`.
    pub(crate) fn resolve(&mut self, bounds: Rect) -> (Resolution, DragKey) {
        let key = self.take_key();
        let res = StateResolver::new(&self.flags, &self.drag, &self.pointer).resolve(bounds, key);
        (res, key)
    }

    /// Claims the drag session for `key` if this frame pressed inside
    /// `grab`. Returns `true` while `key` owns the session.
    pub(crate) fn claim_drag(&mut self, key: DragKey, grab: Rect) -> bool {
        if self.pointer.pressed && !self.drag.is_active() && grab.contains(self.pointer.pos) {
            self.drag.begin(key);
        }
        self.drag.owns(key)
    }

    pub(crate) fn drag_owns(&self, key: DragKey) -> bool {
        self.drag.owns(key)
    }

    // ── styled drawing helpers ────────────────────────────────────────────

    pub(crate) fn border_color(&self, control: Control, state: ControlState) -> Rgba {
        Rgba(self.style.get(control, state_offset(state)))
    }

    pub(crate) fn base_color(&self, control: Control, state: ControlState) -> Rgba {
        Rgba(self.style.get(control, state_offset(state) + 1))
    }

    pub(crate) fn text_color(&self, control: Control, state: ControlState) -> Rgba {
        Rgba(self.style.get(control, state_offset(state) + 2))
    }

    pub(crate) fn line_color(&self) -> Rgba {
        Rgba(self.style.get(Control::Default, GlobalProp::LineColor))
    }

    pub(crate) fn background_color(&self) -> Rgba {
        Rgba(self.style.get(Control::Default, GlobalProp::BackgroundColor))
    }

    /// Solid rectangle, faded by the context alpha.
    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        let color = color.fade(self.flags.alpha);
        self.draw_list.push(DrawCmd::Rect { rect, color });
    }

    /// 4-corner gradient rectangle, faded by the context alpha.
    pub(crate) fn gradient_rect(&mut self, rect: Rect, corners: [Rgba; 4]) {
        if rect.is_empty() {
            return;
        }
        let corners = corners.map(|c| c.fade(self.flags.alpha));
        self.draw_list.push(DrawCmd::GradientRect { rect, corners });
    }

    /// Border + base fill for a control frame in the given state.
    pub(crate) fn draw_frame(&mut self, bounds: Rect, control: Control, state: ControlState) {
        if bounds.is_empty() {
            return;
        }
        let border_w = self.style.get_px(control, BaseProp::BorderWidth);
        let border = self.border_color(control, state);
        let base = self.base_color(control, state);
        if border_w > 0.0 {
            self.fill_rect(bounds, border);
        }
        self.fill_rect(bounds.inset(border_w), base);
    }

    /// The control's text style, assembled from the style table.
    pub(crate) fn text_style(&self, control: Control) -> TextStyle {
        TextStyle {
            size: self.style.get_px(control, GlobalProp::TextSize).max(1.0),
            spacing: self.style.get_px(control, GlobalProp::TextSpacing),
            line_spacing: self.style.get_px(control, GlobalProp::TextLineSpacing),
            h_align: HAlign::from_style(self.style.get(control, BaseProp::TextAlignment)),
            v_align: VAlign::from_style(
                self.style.get(control, GlobalProp::TextAlignmentVertical),
            ),
            wrap: WrapMode::from_style(self.style.get(control, GlobalProp::TextWrapMode)),
            icon_size: 16.0,
        }
    }

    /// Inner text bounds: frame bounds minus border and text padding.
    pub(crate) fn text_bounds(&self, bounds: Rect, control: Control) -> Rect {
        let border_w = self.style.get_px(control, BaseProp::BorderWidth);
        let padding = self.style.get_px(control, BaseProp::TextPadding);
        Rect::new(
            bounds.origin.x + border_w + padding,
            bounds.origin.y + border_w,
            (bounds.size.x - (border_w + padding) * 2.0).max(0.0),
            (bounds.size.y - border_w * 2.0).max(0.0),
        )
    }

    /// Shapes and records `text` in the control's style and state color.
    pub(crate) fn draw_text(
        &mut self,
        control: Control,
        state: ControlState,
        text: &str,
        bounds: Rect,
    ) {
        let style = self.text_style(control);
        let color = self.text_color(control, state);
        self.draw_text_styled(text, bounds, &style, color);
    }

    /// Shapes and records `text` with an explicit style (used by controls
    /// that override alignment for side labels).
    pub(crate) fn draw_text_styled(
        &mut self,
        text: &str,
        bounds: Rect,
        style: &TextStyle,
        color: Rgba,
    ) {
        if text.is_empty() || bounds.is_empty() {
            return;
        }
        let color = color.fade(self.flags.alpha);
        let shaper = TextShaper::new(self.font.as_ref());
        for draw in shaper.layout(text, bounds, style) {
            match draw {
                TextDraw::Glyph { codepoint, pos } => self.draw_list.push(DrawCmd::Glyph {
                    codepoint,
                    pos,
                    size: style.size,
                    color,
                }),
                TextDraw::Icon { id, pos } => self.draw_list.push(DrawCmd::Icon {
                    id,
                    pos,
                    size: style.icon_size,
                    color,
                }),
            }
        }
    }
}

/// First style slot of the 3-color group for a state.
#[inline]
fn state_offset(state: ControlState) -> u16 {
    match state {
        ControlState::Normal => 0,
        ControlState::Focused => 3,
        ControlState::Pressed => 6,
        ControlState::Disabled => 9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{frame, pressed, released, ui};

    #[test]
    fn begin_frame_clears_draw_list() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        ui.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba::WHITE);
        assert_eq!(ui.draw_list().len(), 1);
        frame(&mut ui, PointerSample::default());
        assert!(ui.draw_list().is_empty());
    }

    #[test]
    fn alpha_fades_recorded_commands() {
        let mut ui = ui();
        ui.set_alpha(0.5);
        frame(&mut ui, PointerSample::default());
        ui.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba::new(10, 20, 30, 200));
        match ui.draw_list().commands()[0] {
            DrawCmd::Rect { color, .. } => assert_eq!(color.a(), 100),
            _ => panic!("expected rect"),
        }
    }

    #[test]
    fn keys_follow_declaration_order() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        assert_eq!(ui.take_key(), DragKey(0));
        ui.skip_keys(3);
        assert_eq!(ui.take_key(), DragKey(4));
        // Next frame restarts the sequence.
        frame(&mut ui, PointerSample::default());
        assert_eq!(ui.take_key(), DragKey(0));
    }

    #[test]
    fn drag_survives_release_frame_then_clears() {
        let mut ui = ui();
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);

        frame(&mut ui, pressed(Vec2::new(10.0, 10.0)));
        let (_, key) = ui.resolve(bounds);
        assert!(ui.claim_drag(key, bounds));
        ui.end_frame();

        // Release frame: still owner so the final value can be committed.
        frame(&mut ui, released(Vec2::new(300.0, 10.0)));
        let (res, key) = ui.resolve(bounds);
        assert!(ui.drag_owns(key));
        assert!(res.fired);
        ui.end_frame();

        // Next frame: session is gone.
        frame(&mut ui, PointerSample::default());
        let key = ui.take_key();
        assert!(!ui.drag_owns(key));
    }

    #[test]
    fn text_bounds_shrink_by_border_and_padding() {
        let mut ui = ui();
        ui.set_style(Control::Button, BaseProp::BorderWidth, 2);
        ui.set_style(Control::Button, BaseProp::TextPadding, 4);
        let inner = ui.text_bounds(Rect::new(0.0, 0.0, 100.0, 30.0), Control::Button);
        assert_eq!(inner, Rect::new(6.0, 2.0, 88.0, 26.0));
    }

    #[test]
    fn draw_frame_emits_border_then_base() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        ui.draw_frame(Rect::new(0.0, 0.0, 20.0, 20.0), Control::Button, ControlState::Normal);
        let cmds = ui.draw_list().commands();
        assert_eq!(cmds.len(), 2);
        match (&cmds[0], &cmds[1]) {
            (DrawCmd::Rect { rect: outer, .. }, DrawCmd::Rect { rect: inner, .. }) => {
                assert_eq!(*outer, Rect::new(0.0, 0.0, 20.0, 20.0));
                assert_eq!(*inner, Rect::new(1.0, 1.0, 18.0, 18.0));
            }
            _ => panic!("expected two rects"),
        }
    }
}
