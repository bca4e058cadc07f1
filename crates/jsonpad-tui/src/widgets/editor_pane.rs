//! Editor pane: line-number gutter, JSON highlighting, folds, search matches
//! and the cursor of one [`TextSurface`].

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};
use regex::Regex;
use unicode_width::UnicodeWidthChar;

use jsonpad_app::config::EditorSettings;
use jsonpad_app::surface::{SearchBox, TextSurface, VisibleLine};

use crate::theme::{icons::IconSet, palette::EditorPalette, palette::PagePalette, styles};

/// Highlight class of a JSON token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Key,
    String,
    Number,
    Literal,
    Punctuation,
    Plain,
}

/// Split one line of JSON text into highlighted byte ranges.
///
/// Works line by line; an unterminated string runs to the end of the line.
pub fn tokenize(line: &str) -> Vec<(Range<usize>, TokenKind)> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            '"' => {
                let mut end = line.len();
                let mut escaped = false;
                for (i, c) in chars.by_ref() {
                    if escaped {
                        escaped = false;
                        continue;
                    }
                    match c {
                        '\\' => escaped = true,
                        '"' => {
                            end = i + 1;
                            break;
                        }
                        _ => {}
                    }
                }
                let kind = if line[end..].trim_start().starts_with(':') {
                    TokenKind::Key
                } else {
                    TokenKind::String
                };
                tokens.push((start..end, kind));
            }
            '{' | '}' | '[' | ']' | ',' | ':' => {
                tokens.push((start..start + 1, TokenKind::Punctuation));
            }
            '-' | '0'..='9' => {
                let mut end = start + 1;
                while let Some(&(i, c)) = chars.peek() {
                    if !(c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) {
                        break;
                    }
                    end = i + 1;
                    chars.next();
                }
                tokens.push((start..end, TokenKind::Number));
            }
            c if c.is_alphabetic() => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, c)) = chars.peek() {
                    if !(c.is_alphanumeric() || c == '_') {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                let kind = match &line[start..end] {
                    "true" | "false" | "null" => TokenKind::Literal,
                    _ => TokenKind::Plain,
                };
                tokens.push((start..end, kind));
            }
            c => tokens.push((start..start + c.len_utf8(), TokenKind::Plain)),
        }
    }
    tokens
}

fn token_style(kind: TokenKind, p: &EditorPalette) -> Style {
    let fg = match kind {
        TokenKind::Key => p.key,
        TokenKind::String => p.string,
        TokenKind::Number => p.number,
        TokenKind::Literal => p.literal,
        TokenKind::Punctuation => p.punctuation,
        TokenKind::Plain => p.fg,
    };
    Style::default().fg(fg)
}

/// Cell width of a char; control chars draw as one blank cell
fn cell_char(ch: char) -> (char, usize) {
    if ch.is_control() {
        (' ', 1)
    } else {
        (ch, ch.width().unwrap_or(0))
    }
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| cell_char(c).1).sum()
}

// ─────────────────────────────────────────────────────────────────
// Geometry
// ─────────────────────────────────────────────────────────────────

/// Text area of a pane, derived from its outer rect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneGeometry {
    /// Gutter columns, including the separating space
    pub gutter: u16,
    pub text_width: usize,
    pub rows: usize,
}

pub fn geometry(area: Rect, line_count: usize, settings: &EditorSettings) -> PaneGeometry {
    let inner = area.inner(Margin::new(1, 1));
    let gutter = if settings.line_numbers {
        line_count.max(1).to_string().len() as u16 + 1
    } else {
        0
    };
    PaneGeometry {
        gutter,
        text_width: inner.width.saturating_sub(gutter).max(1) as usize,
        rows: inner.height as usize,
    }
}

/// Screen rows a displayed line occupies
pub fn line_rows(line: &VisibleLine<'_>, icons: IconSet, text_width: usize, wrap: bool) -> usize {
    if !wrap {
        return 1;
    }
    let mut width = display_width(line.text);
    if let Some(tail) = line.fold_tail {
        width += display_width(icons.fold()) + display_width(tail);
    }
    width.div_ceil(text_width.max(1)).max(1)
}

// ─────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────

pub struct EditorPane<'a> {
    surface: &'a TextSurface,
    settings: &'a EditorSettings,
    page: &'a PagePalette,
    editor: EditorPalette,
    icons: IconSet,
    focused: bool,
}

impl<'a> EditorPane<'a> {
    pub fn new(
        surface: &'a TextSurface,
        settings: &'a EditorSettings,
        page: &'a PagePalette,
        editor: EditorPalette,
        icons: IconSet,
    ) -> Self {
        Self {
            surface,
            settings,
            page,
            editor,
            icons,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Styled cells of one displayed line, before wrapping
    fn styled_cells(&self, line: &VisibleLine<'_>, matcher: Option<&Regex>) -> Vec<(char, Style)> {
        let tokens = tokenize(line.text);
        let matches: Vec<Range<usize>> = matcher
            .map(|re| re.find_iter(line.text).map(|m| m.range()).collect())
            .unwrap_or_default();

        let mut cells = Vec::with_capacity(line.text.len());
        let mut token = tokens.iter().peekable();
        for (byte, ch) in line.text.char_indices() {
            while token.peek().is_some_and(|(range, _)| range.end <= byte) {
                token.next();
            }
            let mut style = token
                .peek()
                .map_or(Style::default().fg(self.editor.fg), |(_, kind)| {
                    token_style(*kind, &self.editor)
                });
            if matches.iter().any(|m| m.contains(&byte)) {
                style = style.bg(self.editor.match_bg);
            }
            cells.push((cell_char(ch).0, style));
        }

        if let Some(tail) = line.fold_tail {
            let marker = Style::default()
                .fg(self.editor.gutter)
                .add_modifier(Modifier::BOLD);
            cells.extend(self.icons.fold().chars().map(|c| (c, marker)));
            let punct = token_style(TokenKind::Punctuation, &self.editor);
            cells.extend(tail.chars().map(|c| (cell_char(c).0, punct)));
        }

        let (row, col) = self.surface.cursor();
        if self.focused && line.index == row {
            let cursor = Style::default()
                .fg(self.editor.bg)
                .bg(self.editor.cursor);
            match cells.get_mut(col) {
                Some((_, style)) => *style = style.patch(cursor),
                None => cells.push((' ', cursor)),
            }
        }
        cells
    }

    /// Horizontal offset keeping the cursor visible when lines do not wrap
    fn horizontal_offset(&self, text_width: usize) -> usize {
        if self.settings.wrap || !self.focused {
            return 0;
        }
        let (row, col) = self.surface.cursor();
        let before: usize = self.surface.lines()[row]
            .chars()
            .take(col)
            .map(|c| cell_char(c).1)
            .sum();
        (before + 1).saturating_sub(text_width)
    }
}

/// Break cells into rows no wider than `width`
fn wrap_cells(cells: &[(char, Style)], width: usize) -> Vec<Vec<(char, Style)>> {
    let mut rows = vec![Vec::new()];
    let mut used = 0;
    for &(ch, style) in cells {
        let w = cell_char(ch).1;
        if used + w > width && used > 0 {
            rows.push(Vec::new());
            used = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push((ch, style));
        }
        used += w;
    }
    rows
}

/// Cells visible after skipping `offset` columns, clipped to `width`
fn clip_cells(cells: &[(char, Style)], offset: usize, width: usize) -> Vec<(char, Style)> {
    let mut skipped = 0;
    let mut used = 0;
    let mut out = Vec::new();
    for &(ch, style) in cells {
        let w = cell_char(ch).1;
        if skipped < offset {
            skipped += w;
            continue;
        }
        if used + w > width {
            break;
        }
        out.push((ch, style));
        used += w;
    }
    out
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.page;
        let role = self.surface.role();

        let mut title = format!(" {} ", role.title());
        if self.surface.is_folded() {
            title.push_str("[folded] ");
        }
        let title_style = if self.focused {
            styles::accent_bold(p)
        } else {
            styles::text_muted(p)
        };

        let block = styles::glass_block(p, self.focused)
            .title(Line::styled(title, title_style))
            .style(Style::default().bg(self.editor.bg).fg(self.editor.fg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let geo = geometry(area, self.surface.lines().len(), self.settings);
        let text_x = inner.x + geo.gutter;
        let bottom = inner.y + inner.height;
        let matcher = self.surface.search().and_then(SearchBox::matcher);
        let offset = self.horizontal_offset(geo.text_width);
        let cursor_row = self.surface.cursor().0;
        let number_width = geo.gutter.saturating_sub(1) as usize;

        let mut y = inner.y;
        for line in self.surface.visible_lines().iter().skip(self.surface.scroll()) {
            if y >= bottom {
                break;
            }

            let cells = self.styled_cells(line, matcher.as_ref());
            let rows = if self.settings.wrap {
                wrap_cells(&cells, geo.text_width)
            } else {
                vec![clip_cells(&cells, offset, geo.text_width)]
            };

            for (i, row) in rows.iter().enumerate() {
                if y >= bottom {
                    break;
                }

                if geo.gutter > 0 {
                    let mut gutter_style = Style::default().fg(self.editor.gutter);
                    if self.focused && line.index == cursor_row {
                        gutter_style = gutter_style.add_modifier(Modifier::BOLD);
                    }
                    let label = if i == 0 {
                        format!("{:>number_width$} ", line.index + 1)
                    } else {
                        " ".repeat(geo.gutter as usize)
                    };
                    buf.set_string(inner.x, y, label, gutter_style);
                }

                let mut x = text_x;
                let mut tmp = [0u8; 4];
                for &(ch, style) in row {
                    buf.set_string(x, y, &*ch.encode_utf8(&mut tmp), style);
                    x += cell_char(ch).1 as u16;
                }
                y += 1;
            }
        }
    }
}
