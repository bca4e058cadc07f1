//! Blocking alert dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette::PagePalette, styles};

use super::modal;

const MAX_WIDTH: u16 = 56;

pub struct AlertDialog<'a> {
    message: &'a str,
    palette: &'a PagePalette,
    icons: IconSet,
}

impl<'a> AlertDialog<'a> {
    pub fn new(message: &'a str, palette: &'a PagePalette, icons: IconSet) -> Self {
        Self {
            message,
            palette,
            icons,
        }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
        let text_width = width.saturating_sub(4).max(1) as usize;
        let message_rows = self.message.chars().count().div_ceil(text_width).max(1) as u16;
        let rect = modal::centered_rect(width, message_rows + 4, area);
        modal::prepare(buf, area, rect, p);

        let title = format!(" {} Alert ", self.icons.alert());
        let block = styles::modal_block(p, &title);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let lines = vec![
            Line::from(Span::styled(self.message, styles::text_primary(p))),
            Line::from(""),
            Line::from(Span::styled("Press Enter to dismiss", styles::text_muted(p))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK_PAGE;
    use jsonpad_app::config::IconMode;

    #[test]
    fn test_alert_renders_message() {
        let mut term = TestTerminal::new();
        term.render_widget(
            AlertDialog::new(
                "Please upload a valid JSON file.",
                &DARK_PAGE,
                IconSet::new(IconMode::Ascii),
            ),
            term.area(),
        );

        assert!(term.buffer_contains("! Alert"));
        assert!(term.buffer_contains("Please upload a valid JSON file."));
        assert!(term.buffer_contains("Press Enter to dismiss"));
    }

    #[test]
    fn test_long_alert_wraps_inside_compact_terminal() {
        let mut term = TestTerminal::compact();
        term.render_widget(
            AlertDialog::new(
                "Invalid JSON. Please format your JSON before downloading.",
                &DARK_PAGE,
                IconSet::new(IconMode::Ascii),
            ),
            term.area(),
        );

        assert!(term.buffer_contains("Invalid JSON."));
        assert!(term.buffer_contains("downloading."));
    }
}
