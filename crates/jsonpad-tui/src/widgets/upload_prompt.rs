//! Modal prompt for the path of a file to upload

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette::PagePalette, styles};

use super::modal;

pub struct UploadPrompt<'a> {
    path: &'a str,
    palette: &'a PagePalette,
}

impl<'a> UploadPrompt<'a> {
    pub fn new(path: &'a str, palette: &'a PagePalette) -> Self {
        Self { path, palette }
    }
}

impl Widget for UploadPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let rect = modal::centered_rect(64, 5, area);
        modal::prepare(buf, area, rect, p);

        let block = styles::modal_block(p, " Upload JSON file ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        // keep the tail of long paths in view
        let room = (inner.width as usize).saturating_sub(8);
        let skip = self.path.chars().count().saturating_sub(room);
        let shown: String = self.path.chars().skip(skip).collect();

        let lines = vec![
            Line::from(vec![
                Span::styled(" Path: ", styles::key_hint(p)),
                Span::styled(shown, styles::text_primary(p)),
                Span::styled("_", styles::accent_bold(p)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                " Enter to load, Esc to cancel",
                styles::text_muted(p),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
