//! Editor surfaces
//!
//! The controller talks to the two editors only through [`EditorSurface`].
//! [`TextSurface`] is the terminal implementation: a line buffer with a
//! cursor, a search box, and an all-or-nothing fold view used by the Output
//! pane.

use jsonpad_core::SurfaceRole;
use regex::{NoExpand, Regex, RegexBuilder};
use tracing::{debug, warn};

/// Commands a surface can execute on request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Open the search box
    Find,
    /// Open the search box with the replacement field
    Replace,
    /// Collapse every nested object/array
    FoldAll,
}

/// Where the cursor lands after a programmatic `set_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPlacement {
    #[default]
    Start,
    End,
}

/// Narrow contract between the controller and an editor
#[cfg_attr(test, mockall::automock)]
pub trait EditorSurface {
    /// Full buffer text, lines joined with `\n`
    fn get_value(&self) -> String;

    /// Replace the buffer
    fn set_value(&mut self, text: &str, cursor: CursorPlacement);

    /// Switch color theme
    fn set_theme(&mut self, name: &str);

    /// Active color theme name
    fn theme(&self) -> String;

    fn exec_command(&mut self, command: EditorCommand);
}

// ─────────────────────────────────────────────────────────────────
// Search box
// ─────────────────────────────────────────────────────────────────

/// Which search box variant is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Find,
    Replace,
}

/// Field receiving typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Query,
    Replacement,
}

/// Search box state (case-insensitive literal match)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub mode: SearchMode,
    pub query: String,
    pub replacement: String,
    pub field: SearchField,
    /// Number of matches for `query` in the buffer
    pub matches: usize,
    /// Result of the last find/replace, shown in the search bar
    pub status: Option<String>,
}

impl SearchBox {
    fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            query: String::new(),
            replacement: String::new(),
            field: SearchField::Query,
            matches: 0,
            status: None,
        }
    }

    /// Matcher for the current query, `None` while the query is empty
    pub fn matcher(&self) -> Option<Regex> {
        if self.query.is_empty() {
            return None;
        }
        match RegexBuilder::new(&regex::escape(&self.query))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Failed to build search matcher: {}", e);
                None
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Fold view
// ─────────────────────────────────────────────────────────────────

/// Marker drawn in place of a folded block
pub const FOLD_MARKER: &str = "⋯";

/// One displayed line of a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleLine<'a> {
    /// Index into the buffer
    pub index: usize,
    pub text: &'a str,
    /// Closing text appended after [`FOLD_MARKER`] when this line opens a fold
    pub fold_tail: Option<&'a str>,
}

/// Multi-line blocks nested below the root value, outermost first.
///
/// Returns `(open_line, close_line)` pairs that do not overlap.
fn fold_ranges(lines: &[String]) -> Vec<(usize, usize)> {
    let mut stack: Vec<usize> = Vec::new();
    let mut candidates = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let mut in_string = false;
        let mut escaped = false;
        for ch in line.chars() {
            if in_string {
                match ch {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match ch {
                '"' => in_string = true,
                '{' | '[' => stack.push(index),
                '}' | ']' => {
                    if let Some(open) = stack.pop() {
                        // depth after pop is the opener's depth; root sits at 0
                        if open != index && !stack.is_empty() {
                            candidates.push((open, index));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    candidates.sort_unstable();
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (open, close) in candidates {
        match ranges.last() {
            Some(&(_, last_close)) if open <= last_close => {}
            _ => ranges.push((open, close)),
        }
    }
    ranges
}

// ─────────────────────────────────────────────────────────────────
// TextSurface
// ─────────────────────────────────────────────────────────────────

/// Line-buffer editor
#[derive(Debug, Clone)]
pub struct TextSurface {
    role: SurfaceRole,
    lines: Vec<String>,
    /// Cursor line
    row: usize,
    /// Cursor column, in chars
    col: usize,
    /// First displayed line, as an index into `visible_lines()`
    scroll: usize,
    theme: String,
    tab_size: usize,
    folds: Vec<(usize, usize)>,
    search: Option<SearchBox>,
}

impl TextSurface {
    pub fn new(role: SurfaceRole, theme: impl Into<String>, tab_size: usize) -> Self {
        Self {
            role,
            lines: vec![String::new()],
            row: 0,
            col: 0,
            scroll: 0,
            theme: theme.into(),
            tab_size,
            folds: Vec::new(),
            search: None,
        }
    }

    pub fn role(&self) -> SurfaceRole {
        self.role
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(line, column)` of the cursor
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn is_folded(&self) -> bool {
        !self.folds.is_empty()
    }

    pub fn search(&self) -> Option<&SearchBox> {
        self.search.as_ref()
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map_or(line.len(), |(idx, _)| idx)
    }

    fn current_byte(&self) -> usize {
        Self::byte_index(&self.lines[self.row], self.col)
    }

    /// Any buffer mutation drops folds
    fn touch(&mut self) {
        self.folds.clear();
        self.refresh_match_count();
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.newline();
            return;
        }
        let at = self.current_byte();
        self.lines[self.row].insert(at, ch);
        self.col += 1;
        self.touch();
    }

    /// Insert text that may span several lines (paste)
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut parts = text.split('\n');
        let first = parts.next().unwrap_or_default();

        let at = self.current_byte();
        let tail = self.lines[self.row].split_off(at);
        self.lines[self.row].push_str(first);
        self.col += first.chars().count();

        for part in parts {
            self.row += 1;
            self.lines.insert(self.row, part.to_string());
            self.col = part.chars().count();
        }
        self.lines[self.row].push_str(&tail);
        self.touch();
    }

    /// Insert spaces up to the next tab stop
    pub fn insert_tab(&mut self) {
        let width = self.tab_size.max(1);
        let spaces = width - (self.col % width);
        self.insert_str(&" ".repeat(spaces));
    }

    pub fn newline(&mut self) {
        let at = self.current_byte();
        let rest = self.lines[self.row].split_off(at);
        self.row += 1;
        self.lines.insert(self.row, rest);
        self.col = 0;
        self.touch();
    }

    /// Delete the char before the cursor, joining lines at column 0.
    ///
    /// Returns whether the buffer changed.
    pub fn backspace(&mut self) -> bool {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let start = Self::byte_index(line, self.col - 1);
            let end = Self::byte_index(line, self.col);
            line.replace_range(start..end, "");
            self.col -= 1;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
        } else {
            return false;
        }
        self.touch();
        true
    }

    /// Delete the char under the cursor, joining lines at line end.
    ///
    /// Returns whether the buffer changed.
    pub fn delete(&mut self) -> bool {
        if self.col < self.line_len(self.row) {
            let line = &mut self.lines[self.row];
            let start = Self::byte_index(line, self.col);
            let end = Self::byte_index(line, self.col + 1);
            line.replace_range(start..end, "");
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        } else {
            return false;
        }
        self.touch();
        true
    }

    // ─────────────────────────────────────────────────────────
    // Cursor movement
    // ─────────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if let Some(prev) = self.visible_step(-1) {
            self.row = prev;
            self.col = self.line_len(prev);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if let Some(next) = self.visible_step(1) {
            self.row = next;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.move_vertical(-1);
    }

    pub fn move_down(&mut self) {
        self.move_vertical(1);
    }

    pub fn page_up(&mut self, rows: usize) {
        self.move_vertical(-(rows.max(1) as isize));
    }

    pub fn page_down(&mut self, rows: usize) {
        self.move_vertical(rows.max(1) as isize);
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }

    fn move_vertical(&mut self, delta: isize) {
        let visible = self.visible_indices();
        let pos = visible.iter().position(|&i| i == self.row).unwrap_or(0);
        let target = (pos as isize + delta).clamp(0, visible.len() as isize - 1) as usize;
        self.row = visible[target];
        self.col = self.col.min(self.line_len(self.row));
    }

    /// Neighbouring visible line in the given direction
    fn visible_step(&self, delta: isize) -> Option<usize> {
        let visible = self.visible_indices();
        let pos = visible.iter().position(|&i| i == self.row)?;
        let target = pos as isize + delta;
        if target < 0 {
            return None;
        }
        visible.get(target as usize).copied()
    }

    // ─────────────────────────────────────────────────────────
    // Folding
    // ─────────────────────────────────────────────────────────

    /// Collapse every multi-line block nested below the root value
    pub fn fold_all(&mut self) {
        self.folds = fold_ranges(&self.lines);
        let row = self.row;
        let hidden_by = self
            .folds
            .iter()
            .find(|(open, close)| row > *open && row <= *close)
            .map(|&(open, _)| open);
        if let Some(open) = hidden_by {
            self.row = open;
            self.col = self.col.min(self.line_len(open));
        }
        self.scroll = 0;
        debug!("{}: folded {} blocks", self.role, self.folds.len());
    }

    pub fn unfold_all(&mut self) {
        self.folds.clear();
    }

    /// Lines as displayed, with folded blocks collapsed into their opener
    pub fn visible_lines(&self) -> Vec<VisibleLine<'_>> {
        let mut out = Vec::with_capacity(self.lines.len());
        let mut folds = self.folds.iter().peekable();
        let mut index = 0;
        while index < self.lines.len() {
            match folds.peek() {
                Some(&&(open, close)) if open == index => {
                    out.push(VisibleLine {
                        index,
                        text: &self.lines[index],
                        fold_tail: Some(self.lines[close].trim_start()),
                    });
                    folds.next();
                    index = close + 1;
                }
                _ => {
                    out.push(VisibleLine {
                        index,
                        text: &self.lines[index],
                        fold_tail: None,
                    });
                    index += 1;
                }
            }
        }
        out
    }

    fn visible_indices(&self) -> Vec<usize> {
        self.visible_lines().iter().map(|l| l.index).collect()
    }

    /// Adjust the scroll offset so the cursor line fits in `viewport` rows.
    ///
    /// `height_of` reports how many rows a displayed line occupies (wrapping).
    pub fn scroll_into_view<F>(&mut self, viewport: usize, height_of: F)
    where
        F: Fn(&VisibleLine<'_>) -> usize,
    {
        let viewport = viewport.max(1);
        let visible = self.visible_lines();
        let cursor = visible
            .iter()
            .position(|l| l.index == self.row)
            .unwrap_or(0);

        let mut scroll = self.scroll.min(visible.len().saturating_sub(1));
        if cursor < scroll {
            scroll = cursor;
        } else {
            let rows = |from: usize| -> usize {
                visible[from..=cursor]
                    .iter()
                    .map(|l| height_of(l).max(1))
                    .sum()
            };
            while scroll < cursor && rows(scroll) > viewport {
                scroll += 1;
            }
        }
        self.scroll = scroll;
    }

    // ─────────────────────────────────────────────────────────
    // Search / replace
    // ─────────────────────────────────────────────────────────

    pub fn open_search(&mut self, mode: SearchMode) {
        match &mut self.search {
            Some(search) => {
                search.mode = mode;
                search.field = SearchField::Query;
            }
            None => self.search = Some(SearchBox::new(mode)),
        }
        self.refresh_match_count();
    }

    pub fn close_search(&mut self) {
        self.search = None;
    }

    /// Type into the active search field
    pub fn search_input(&mut self, ch: char) {
        if let Some(search) = &mut self.search {
            match search.field {
                SearchField::Query => search.query.push(ch),
                SearchField::Replacement => search.replacement.push(ch),
            }
            search.status = None;
        }
        self.refresh_match_count();
    }

    pub fn search_backspace(&mut self) {
        if let Some(search) = &mut self.search {
            match search.field {
                SearchField::Query => search.query.pop(),
                SearchField::Replacement => search.replacement.pop(),
            };
            search.status = None;
        }
        self.refresh_match_count();
    }

    /// Toggle between query and replacement (replace mode only)
    pub fn search_switch_field(&mut self) {
        if let Some(search) = &mut self.search {
            if search.mode == SearchMode::Replace {
                search.field = match search.field {
                    SearchField::Query => SearchField::Replacement,
                    SearchField::Replacement => SearchField::Query,
                };
            }
        }
    }

    fn refresh_match_count(&mut self) {
        let text = self.get_value();
        if let Some(search) = &mut self.search {
            search.matches = search
                .matcher()
                .map_or(0, |re| re.find_iter(&text).count());
        }
    }

    /// Move the cursor to the next match after it, wrapping at the end.
    ///
    /// Returns whether a match was found.
    pub fn find_next(&mut self) -> bool {
        let Some(re) = self.search.as_ref().and_then(SearchBox::matcher) else {
            return false;
        };

        let total = self.lines.len();
        let start_byte = Self::byte_index(&self.lines[self.row], self.col + 1);

        // Rest of the cursor line, then every following line, wrapping to the
        // cursor line's head
        let mut found = None;
        for step in 0..=total {
            let row = (self.row + step) % total;
            let line = &self.lines[row];
            let m = match step {
                0 => line.get(start_byte..).and_then(|rest| {
                    re.find(rest).map(|m| start_byte + m.start())
                }),
                _ if step == total => re
                    .find(line)
                    .filter(|m| m.start() < start_byte)
                    .map(|m| m.start()),
                _ => re.find(line).map(|m| m.start()),
            };
            if let Some(byte) = m {
                found = Some((row, line[..byte].chars().count()));
                break;
            }
        }

        let status = match found {
            Some((row, col)) => {
                if self.folds.iter().any(|(open, close)| row > *open && row <= *close) {
                    self.unfold_all();
                }
                self.row = row;
                self.col = col;
                None
            }
            None => Some("No results".to_string()),
        };
        if let Some(search) = &mut self.search {
            search.status = status;
        }
        found.is_some()
    }

    /// Replace every match with the replacement text, verbatim.
    ///
    /// Returns the number of replacements.
    pub fn replace_all(&mut self) -> usize {
        let Some(search) = &self.search else {
            return 0;
        };
        let Some(re) = search.matcher() else {
            return 0;
        };
        let replacement = search.replacement.clone();

        let text = self.get_value();
        let count = re.find_iter(&text).count();
        if count > 0 {
            let replaced = re.replace_all(&text, NoExpand(&replacement)).into_owned();
            self.set_value(&replaced, CursorPlacement::Start);
        }

        if let Some(search) = &mut self.search {
            search.status = Some(format!(
                "Replaced {} occurrence{}",
                count,
                if count == 1 { "" } else { "s" }
            ));
        }
        count
    }
}

impl EditorSurface for TextSurface {
    fn get_value(&self) -> String {
        self.lines.join("\n")
    }

    fn set_value(&mut self, text: &str, cursor: CursorPlacement) {
        let normalized = text.replace("\r\n", "\n");
        self.lines = normalized.split('\n').map(str::to_string).collect();
        match cursor {
            CursorPlacement::Start => {
                self.row = 0;
                self.col = 0;
            }
            CursorPlacement::End => {
                self.row = self.lines.len() - 1;
                self.col = self.line_len(self.row);
            }
        }
        self.scroll = 0;
        self.touch();
    }

    fn set_theme(&mut self, name: &str) {
        self.theme = name.to_string();
    }

    fn theme(&self) -> String {
        self.theme.clone()
    }

    fn exec_command(&mut self, command: EditorCommand) {
        match command {
            EditorCommand::Find => self.open_search(SearchMode::Find),
            EditorCommand::Replace => self.open_search(SearchMode::Replace),
            EditorCommand::FoldAll => self.fold_all(),
        }
    }
}
