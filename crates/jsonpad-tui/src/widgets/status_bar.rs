//! Bottom line: key hints and last status, or the search bar while searching

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use jsonpad_app::state::{AppState, UiMode};
use jsonpad_app::surface::{SearchBox, SearchField, SearchMode};

use crate::theme::{icons::IconSet, palette::PagePalette, styles};

const HINTS: &[(&str, &str)] = &[
    ("Tab", "focus"),
    ("F8", "page"),
    ("F9", "themes"),
    ("F10", "fold"),
    ("^F", "find"),
    ("^R", "replace"),
    ("^Q", "quit"),
];

pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a PagePalette,
    icons: IconSet,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a PagePalette, icons: IconSet) -> Self {
        Self {
            state,
            palette,
            icons,
        }
    }

    fn search_line(&self, search: &'a SearchBox) -> Line<'a> {
        let p = self.palette;
        let field = |label: &'static str, text: &'a str, active: bool| {
            let mut spans = vec![
                Span::styled(label, styles::key_hint(p)),
                Span::styled(text, styles::text_primary(p)),
            ];
            if active {
                spans.push(Span::styled("_", styles::accent_bold(p)));
            }
            spans
        };

        let mut spans = vec![Span::styled(
            format!(" {} ", self.icons.search()),
            styles::accent_bold(p),
        )];
        spans.extend(field(
            "Find: ",
            &search.query,
            search.field == SearchField::Query,
        ));
        if search.mode == SearchMode::Replace {
            spans.push(Span::raw("  "));
            spans.extend(field(
                "Replace: ",
                &search.replacement,
                search.field == SearchField::Replacement,
            ));
        }

        if !search.query.is_empty() {
            let count = format!("  {} match{}", search.matches, if search.matches == 1 { "" } else { "es" });
            let style = if search.matches > 0 {
                styles::status_ok(p)
            } else {
                styles::status_err(p)
            };
            spans.push(Span::styled(count, style));
        }
        if let Some(status) = &search.status {
            spans.push(Span::styled(format!("  {}", status), styles::text_muted(p)));
        }
        Line::from(spans)
    }

    fn hint_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in HINTS {
            spans.push(Span::styled(*key, styles::key_hint(p)));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted(p)));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        buf.set_style(area, Style::default().bg(p.card_bg));

        let searching = matches!(self.state.ui_mode, UiMode::Find | UiMode::Replace);
        if let Some(search) = self.state.focused().search().filter(|_| searching) {
            Paragraph::new(self.search_line(search)).render(area, buf);
            return;
        }

        Paragraph::new(self.hint_line()).render(area, buf);
        if let Some(status) = &self.state.status {
            Paragraph::new(Span::styled(format!("{} ", status), styles::text_primary(p)))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK_PAGE;
    use insta::assert_snapshot;
    use jsonpad_app::config::IconMode;
    use jsonpad_app::surface::EditorCommand;
    use jsonpad_app::EditorSurface;

    fn render(state: &AppState, width: u16) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, 1);
        term.render_widget(
            StatusBar::new(state, &DARK_PAGE, IconSet::new(IconMode::Ascii)),
            term.area(),
        );
        term
    }

    #[test]
    fn test_hints_when_editing() {
        let state = AppState::new();
        let term = render(&state, 100);
        assert_snapshot!(
            term.line(0).trim_end(),
            @" Tab focus  F8 page  F9 themes  F10 fold  ^F find  ^R replace  ^Q quit"
        );
    }

    #[test]
    fn test_status_message_right_aligned() {
        let mut state = AppState::new();
        state.status = Some("Saved out.json".to_string());
        let term = render(&state, 100);
        assert!(term.line(0).ends_with("Saved out.json "));
    }

    #[test]
    fn test_find_bar() {
        let mut state = AppState::new();
        state.input.exec_command(EditorCommand::Find);
        state.ui_mode = UiMode::Find;
        state.input.search_input('x');

        let term = render(&state, 60);
        assert_snapshot!(term.line(0).trim_end(), @" / Find: x_  0 matches");
    }

    #[test]
    fn test_replace_bar_marks_active_field() {
        let mut state = AppState::new();
        state.input.exec_command(EditorCommand::Replace);
        state.ui_mode = UiMode::Replace;
        state.input.search_switch_field();
        state.input.search_input('y');

        let term = render(&state, 60);
        assert_snapshot!(term.line(0).trim_end(), @" / Find:   Replace: y_");
    }
}
