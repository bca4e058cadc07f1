//! Header bar: app title, page mode toggle and current editor theme

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use jsonpad_app::theme::{theme_index, EDITOR_THEMES};
use jsonpad_core::ThemePreference;

use crate::theme::{icons::IconSet, palette::PagePalette, styles};

pub const APP_TITLE: &str = "JSON Formatter & Validator";

/// Display label of an editor theme, or the raw name when it is not listed
pub fn theme_label(name: &str) -> &str {
    theme_index(name).map_or(name, |i| EDITOR_THEMES[i].1)
}

pub struct Header<'a> {
    theme: &'a ThemePreference,
    palette: &'a PagePalette,
    icons: IconSet,
}

impl<'a> Header<'a> {
    pub fn new(theme: &'a ThemePreference, palette: &'a PagePalette, icons: IconSet) -> Self {
        Self {
            theme,
            palette,
            icons,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false).style(Style::default().bg(p.card_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold(p)),
        ]);
        Paragraph::new(title).render(inner, buf);

        let toggle = Line::from(vec![
            Span::styled("F8 ", styles::key_hint(p)),
            Span::styled(self.icons.toggle(self.theme.page), styles::text_primary(p)),
            Span::styled(format!(" {}", self.theme.page), styles::text_muted(p)),
            Span::styled("  F9 ", styles::key_hint(p)),
            Span::styled(
                theme_label(&self.theme.editor_theme).to_string(),
                styles::text_primary(p),
            ),
            Span::raw(" "),
        ]);
        Paragraph::new(toggle)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT_PAGE;
    use jsonpad_app::config::IconMode;
    use jsonpad_core::PageMode;

    #[test]
    fn test_theme_label() {
        assert_eq!(theme_label("solarized_dark"), "Solarized Dark");
        assert_eq!(theme_label("custom"), "custom");
    }

    #[test]
    fn test_header_shows_title_and_theme() {
        let mut term = TestTerminal::with_size(90, 3);
        let theme = ThemePreference::new(PageMode::Light, "tomorrow_night");
        let header = Header::new(&theme, &LIGHT_PAGE, IconSet::new(IconMode::Ascii));

        term.render_widget(header, term.area());

        assert!(term.line_contains(1, APP_TITLE));
        assert!(term.line_contains(1, "(dark) light"));
        assert!(term.line_contains(1, "Tomorrow Night"));
    }
}
