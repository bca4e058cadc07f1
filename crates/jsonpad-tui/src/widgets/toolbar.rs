//! Action toolbar with transient outcome labels

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use jsonpad_app::feedback::{Control, Feedback, LABEL_INVALID};

use crate::theme::{icons::IconSet, palette::PagePalette, styles};

pub struct Toolbar<'a> {
    feedback: &'a Feedback,
    palette: &'a PagePalette,
    icons: IconSet,
}

impl<'a> Toolbar<'a> {
    pub fn new(feedback: &'a Feedback, palette: &'a PagePalette, icons: IconSet) -> Self {
        Self {
            feedback,
            palette,
            icons,
        }
    }

    fn control_span(&self, control: Control) -> Span<'static> {
        let p = self.palette;
        let text = self.feedback.label(control);
        let style = if !self.feedback.is_flashing(control) {
            styles::text_primary(p)
        } else if text == LABEL_INVALID {
            styles::status_err(p)
        } else {
            styles::status_ok(p)
        };
        Span::styled(self.icons.label(text), style)
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let key = |k: &'static str| Span::styled(k, styles::key_hint(p));
        let plain = |t: &'static str| Span::styled(t, styles::text_primary(p));
        let gap = || Span::raw("  ");

        let line = Line::from(vec![
            Span::raw(" "),
            key("F2 "),
            plain("Format"),
            gap(),
            key("F3 "),
            plain("Minify"),
            gap(),
            key("F4 "),
            self.control_span(Control::Validate),
            gap(),
            key("F5 "),
            plain("Upload"),
            gap(),
            key("F6 "),
            plain("Download"),
            gap(),
            key("F7 "),
            self.control_span(Control::Copy),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(p.bg))
            .render(area, buf);
    }
}
