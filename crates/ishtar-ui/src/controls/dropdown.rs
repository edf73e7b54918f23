use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::{Control, DropdownBoxProp};

use crate::context::Ui;

impl Ui {
    /// Dropdown selector. Clicking the header toggles `open`; clicking an
    /// item while open selects it and closes the list. Returns `true` when
    /// `active` changed.
    ///
    /// The item list overlaps whatever is declared after it, so declare
    /// dropdowns last among overlapping controls — declaration order is
    /// z-order.
    pub fn dropdown_box(
        &mut self,
        bounds: Rect,
        items: &[&str],
        active: &mut usize,
        open: &mut bool,
    ) -> bool {
        if items.is_empty() {
            return false;
        }
        *active = (*active).min(items.len() - 1);

        let spacing = self.style().get_px(Control::DropdownBox, DropdownBoxProp::ItemsSpacing);
        let item_h = bounds.size.y;

        let (res, _) = self.resolve(bounds);
        if res.fired {
            *open = !*open;
        }

        let mut changed = false;
        if *open {
            for (i, text) in items.iter().enumerate() {
                let item_bounds = Rect::new(
                    bounds.origin.x,
                    bounds.origin.y + (i as f32 + 1.0) * (item_h + spacing),
                    bounds.size.x,
                    item_h,
                );
                let (item_res, _) = self.resolve(item_bounds);
                if item_res.fired {
                    changed = *active != i;
                    *active = i;
                    *open = false;
                }
                let visual = if i == *active && item_res.state == ControlState::Normal {
                    ControlState::Pressed
                } else {
                    item_res.state
                };
                self.draw_frame(item_bounds, Control::DropdownBox, visual);
                let inner = self.text_bounds(item_bounds, Control::DropdownBox);
                self.draw_text(Control::DropdownBox, visual, text, inner);
            }
        } else {
            // Keep the declaration-key sequence identical whether or not
            // the list is showing, so controls declared after a dropdown
            // keep stable drag identities.
            self.skip_keys(items.len());
        }

        let header_state = if *open && res.state == ControlState::Normal {
            ControlState::Pressed
        } else {
            res.state
        };
        self.draw_frame(bounds, Control::DropdownBox, header_state);
        // Reserve the arrow strip on the right edge of the header.
        let arrow = self.style().get_px(Control::DropdownBox, DropdownBoxProp::ArrowPadding);
        let mut inner = self.text_bounds(bounds, Control::DropdownBox);
        inner.size.x = (inner.size.x - arrow).max(0.0);
        self.draw_text(Control::DropdownBox, header_state, items[*active], inner);

        changed
    }
}
