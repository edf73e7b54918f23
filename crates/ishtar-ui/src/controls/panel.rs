use ishtar_core::coords::Rect;
use ishtar_core::interaction::ControlState;
use ishtar_core::style::{BaseProp, Control};
use ishtar_core::text::{HAlign, VAlign};

use crate::context::Ui;

/// Height of a panel's optional title strip.
const TITLE_HEIGHT: f32 = 24.0;

impl Ui {
    /// Background panel with an optional title strip. Returns the content
    /// area (inside the border, below the title).
    pub fn panel(&mut self, bounds: Rect, title: Option<&str>) -> Rect {
        let mut content = bounds;
        if let Some(text) = title {
            let header = Rect::new(bounds.origin.x, bounds.origin.y, bounds.size.x, TITLE_HEIGHT);
            self.status_bar(header, text);
            content = Rect::new(
                bounds.origin.x,
                bounds.origin.y + TITLE_HEIGHT,
                bounds.size.x,
                (bounds.size.y - TITLE_HEIGHT).max(0.0),
            );
        }

        let border_w = self.style().get_px(Control::Default, BaseProp::BorderWidth).max(1.0);
        let line = self.line_color();
        let background = self.background_color();
        self.fill_rect(content, line);
        self.fill_rect(content.inset(border_w), background);

        content.inset(border_w)
    }

    /// Thin framed group with the title let into the top border.
    pub fn group_box(&mut self, bounds: Rect, title: &str) {
        let color = self.line_color();
        let w = bounds.size.x;
        let h = bounds.size.y;
        let (x, y) = (bounds.origin.x, bounds.origin.y);

        // Left, right, and bottom edges; the top edge is drawn by `line`
        // with the title text breaking it.
        self.fill_rect(Rect::new(x, y, 1.0, h), color);
        self.fill_rect(Rect::new(x + w - 1.0, y, 1.0, h), color);
        self.fill_rect(Rect::new(x, y + h - 1.0, w, 1.0), color);
        self.line(Rect::new(x, y, w, 1.0), title);
    }

    /// Horizontal separator with an optional inline label.
    pub fn line(&mut self, bounds: Rect, text: &str) {
        let color = self.line_color();
        let y = bounds.origin.y + bounds.size.y * 0.5;

        if text.is_empty() {
            self.fill_rect(Rect::new(bounds.origin.x, y, bounds.size.x, 1.0), color);
            return;
        }

        let state = if self.is_enabled() { ControlState::Normal } else { ControlState::Disabled };
        let text_w = self.measure_text(text).x;
        let gap_start = 12.0;
        let gap = text_w + 10.0;

        self.fill_rect(Rect::new(bounds.origin.x, y, gap_start - 2.0, 1.0), color);
        self.fill_rect(
            Rect::new(
                bounds.origin.x + gap_start + gap,
                y,
                (bounds.size.x - gap_start - gap).max(0.0),
                1.0,
            ),
            color,
        );

        let mut style = self.text_style(Control::Label);
        style.h_align = HAlign::Left;
        style.v_align = VAlign::Middle;
        let text_color = self.text_color(Control::Label, state);
        let label = Rect::new(
            bounds.origin.x + gap_start + 5.0,
            y - style.size * 0.5,
            text_w,
            style.size,
        );
        self.draw_text_styled(text, label, &style, text_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::testing::{frame, ui};
    use ishtar_core::input::PointerSample;

    #[test]
    fn panel_returns_content_inside_border() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        let content = ui.panel(Rect::new(0.0, 0.0, 100.0, 100.0), None);
        assert_eq!(content, Rect::new(1.0, 1.0, 98.0, 98.0));
        assert_eq!(ui.draw_list().len(), 2);
    }

    #[test]
    fn titled_panel_reserves_header() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        let content = ui.panel(Rect::new(0.0, 0.0, 100.0, 100.0), Some("T"));
        assert_eq!(content.origin.y, 25.0);
    }

    #[test]
    fn plain_line_is_one_rect() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        ui.line(Rect::new(0.0, 0.0, 100.0, 10.0), "");
        let cmds = ui.draw_list().commands();
        assert_eq!(cmds.len(), 1);
        match cmds[0] {
            DrawCmd::Rect { rect, .. } => assert_eq!(rect.size.y, 1.0),
            _ => panic!("expected rect"),
        }
    }

    #[test]
    fn labelled_line_breaks_around_text() {
        let mut ui = ui();
        frame(&mut ui, PointerSample::default());
        ui.line(Rect::new(0.0, 0.0, 200.0, 10.0), "ab");
        let rects: Vec<_> = ui
            .draw_list()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 2);
        assert!(rects[0].right() < rects[1].origin.x);
    }
}
