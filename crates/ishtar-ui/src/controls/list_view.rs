use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::{BaseProp, Control, ListViewProp};

use crate::context::Ui;

impl Ui {
    /// Scrollable item list with single selection.
    ///
    /// `scroll_index` is the first visible item; `active` the selected
    /// item, toggled off when clicked again. Returns `true` when the
    /// selection changed.
    pub fn list_view(
        &mut self,
        bounds: Rect,
        items: &[&str],
        scroll_index: &mut usize,
        active: &mut Option<usize>,
    ) -> bool {
        let border_w = self.style().get_px(Control::ListView, BaseProp::BorderWidth);
        let item_h = self.style().get_px(Control::ListView, ListViewProp::ItemsHeight);
        let spacing = self.style().get_px(Control::ListView, ListViewProp::ItemsSpacing);
        let bar_w = self.style().get_px(Control::ListView, ListViewProp::ScrollBarWidth);
        let bar_on_left = self.style().get(Control::ListView, ListViewProp::ScrollBarSide) == 0;

        let step = item_h + spacing;
        let inner = bounds.inset(border_w);
        let visible = if step > 0.0 { (inner.size.y / step).floor() as usize } else { 0 };
        let use_bar = items.len() > visible && visible > 0;

        let items_bounds = if use_bar {
            let x = if bar_on_left { inner.origin.x + bar_w } else { inner.origin.x };
            Rect::new(x, inner.origin.y, (inner.size.x - bar_w).max(0.0), inner.size.y)
        } else {
            inner
        };

        let (res, _) = self.resolve(items_bounds);

        let max_index = items.len().saturating_sub(visible);
        *scroll_index = (*scroll_index).min(max_index);

        // Wheel moves one item per notch while hovered.
        let wheel = self.pointer().wheel.y;
        if matches!(res.state, ControlState::Focused | ControlState::Pressed) && wheel != 0.0 {
            let moved = *scroll_index as f32 + wheel;
            *scroll_index = moved.clamp(0.0, max_index as f32) as usize;
        }

        // Hit item from pointer math; declaration keys stay per-control,
        // not per-row.
        let hovered = if matches!(res.state, ControlState::Focused | ControlState::Pressed) {
            let row = ((self.pointer().pos.y - items_bounds.origin.y) / step).floor();
            let idx = *scroll_index + row.max(0.0) as usize;
            (row >= 0.0 && (row as usize) < visible && idx < items.len()).then_some(idx)
        } else {
            None
        };

        let mut changed = false;
        if res.fired {
            if let Some(idx) = hovered {
                *active = if *active == Some(idx) { None } else { Some(idx) };
                changed = true;
            }
        }

        // Chrome.
        let border = self.border_color(Control::ListView, res.state);
        let background = self.background_color();
        self.fill_rect(bounds, border);
        self.fill_rect(inner, background);

        // Visible rows.
        for (row, idx) in (*scroll_index..items.len()).take(visible).enumerate() {
            let row_bounds = Rect::new(
                items_bounds.origin.x,
                items_bounds.origin.y + row as f32 * step,
                items_bounds.size.x,
                item_h,
            );
            let state = if *active == Some(idx) {
                ControlState::Pressed
            } else if hovered == Some(idx) {
                ControlState::Focused
            } else {
                ControlState::Normal
            };
            if state != ControlState::Normal {
                self.draw_frame(row_bounds, Control::ListView, state);
            }
            let text_bounds = self.text_bounds(row_bounds, Control::ListView);
            self.draw_text(Control::ListView, state, items[idx], text_bounds);
        }

        // Scrollbar mirrors the item offset.
        if use_bar {
            let bar_x = if bar_on_left { inner.origin.x } else { inner.right() - bar_w };
            let bar = Rect::new(bar_x, inner.origin.y, bar_w, inner.size.y);
            let offset = -(*scroll_index as f32 * step);
            let new_offset = self.scroll_bar(
                bar,
                offset,
                visible as f32 * step,
                items.len() as f32 * step,
            );
            *scroll_index = ((-new_offset / step).round() as usize).min(max_index);
        } else {
            self.skip_keys(1);
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{frame, released, ui};
    use ishtar_core::coords::Vec2;
    use ishtar_core::input::PointerSample;

    // Border 1 → inner 198×120; item step 30 → 4 visible rows.
    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 122.0);
    const ITEMS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

    #[test]
    fn click_selects_row_under_pointer() {
        let mut ui = ui();
        let mut scroll = 0usize;
        let mut active = None;

        // Row 1 spans y 31..59.
        frame(&mut ui, released(Vec2::new(50.0, 40.0)));
        let changed = ui.list_view(BOUNDS, &ITEMS, &mut scroll, &mut active);
        assert!(changed);
        assert_eq!(active, Some(1));
    }

    #[test]
    fn clicking_selected_row_deselects() {
        let mut ui = ui();
        let mut scroll = 0usize;
        let mut active = Some(1);

        frame(&mut ui, released(Vec2::new(50.0, 40.0)));
        let changed = ui.list_view(BOUNDS, &ITEMS, &mut scroll, &mut active);
        assert!(changed);
        assert_eq!(active, None);
    }

    #[test]
    fn selection_accounts_for_scroll_offset() {
        let mut ui = ui();
        let mut scroll = 2usize;
        let mut active = None;

        frame(&mut ui, released(Vec2::new(50.0, 40.0)));
        ui.list_view(BOUNDS, &ITEMS, &mut scroll, &mut active);
        assert_eq!(active, Some(3));
    }

    #[test]
    fn wheel_advances_scroll_index_within_range() {
        let mut ui = ui();
        let mut scroll = 0usize;
        let mut active = None;
        let pointer = PointerSample {
            pos: Vec2::new(50.0, 40.0),
            wheel: Vec2::new(0.0, 5.0),
            ..Default::default()
        };

        frame(&mut ui, pointer);
        ui.list_view(BOUNDS, &ITEMS, &mut scroll, &mut active);
        // 6 items, 4 visible → max first index is 2.
        assert_eq!(scroll, 2);
    }

    #[test]
    fn short_list_needs_no_scrollbar_and_keeps_key_count() {
        let mut ui = ui();
        let mut scroll = 0usize;
        let mut active = None;

        frame(&mut ui, PointerSample::default());
        ui.list_view(BOUNDS, &ITEMS[..2], &mut scroll, &mut active);
        let short = ui.take_key().0;
        ui.end_frame();

        frame(&mut ui, PointerSample::default());
        ui.list_view(BOUNDS, &ITEMS, &mut scroll, &mut active);
        assert_eq!(ui.take_key().0, short);
    }
}
