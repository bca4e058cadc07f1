//! Editor theme picker

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use jsonpad_app::theme::{ThemeList as ThemeListState, EDITOR_THEMES};

use crate::theme::{palette::PagePalette, styles};

use super::modal;

pub struct ThemeList<'a> {
    list: &'a ThemeListState,
    current: &'a str,
    palette: &'a PagePalette,
}

impl<'a> ThemeList<'a> {
    pub fn new(list: &'a ThemeListState, current: &'a str, palette: &'a PagePalette) -> Self {
        Self {
            list,
            current,
            palette,
        }
    }
}

impl Widget for ThemeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let rect = modal::centered_rect(32, EDITOR_THEMES.len() as u16 + 4, area);
        modal::prepare(buf, area, rect, p);

        let block = styles::modal_block(p, " Editor theme ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let selected = self.list.selected_name();
        let mut lines: Vec<Line> = EDITOR_THEMES
            .iter()
            .map(|(name, label)| {
                let mark = if *name == self.current { "* " } else { "  " };
                let text = format!(" {}{:<24}", mark, label);
                if selected == Some(*name) {
                    Line::from(Span::styled(text, styles::focused_selected(p)))
                } else {
                    Line::from(Span::styled(text, styles::text_primary(p)))
                }
            })
            .collect();
        lines.push(Line::from(Span::styled(
            " Enter apply, Esc close",
            styles::text_muted(p),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK_PAGE;

    #[test]
    fn test_lists_every_theme() {
        let mut list = ThemeListState::default();
        list.sync("monokai");
        let mut term = TestTerminal::new();
        term.render_widget(ThemeList::new(&list, "monokai", &DARK_PAGE), term.area());

        for (_, label) in EDITOR_THEMES {
            assert!(term.buffer_contains(label), "missing {label}");
        }
        assert!(term.buffer_contains("* Monokai"));
    }

    #[test]
    fn test_selected_row_highlighted() {
        let mut list = ThemeListState::default();
        list.sync("github");
        list.select_next();
        let mut term = TestTerminal::new();
        term.render_widget(ThemeList::new(&list, "github", &DARK_PAGE), term.area());

        let content = term.content();
        let (y, line) = content
            .lines()
            .enumerate()
            .find(|(_, l)| l.contains("Monokai"))
            .unwrap();
        let x = line.chars().position(|c| c == 'M').unwrap() as u16;
        assert_eq!(term.buffer()[(x, y as u16)].bg, DARK_PAGE.accent);
    }
}
