//! Screen layout definitions for the TUI
//!
//! The two editor panes sit side by side on wide terminals and stack
//! vertically below [`STACK_BELOW_WIDTH`] columns.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals narrower than this stack Input above Output
pub const STACK_BELOW_WIDTH: u16 = 80;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, toggle glyph and editor theme (glass container)
    pub header: Rect,

    /// One row of actions with their transient labels
    pub toolbar: Rect,

    pub input: Rect,
    pub output: Rect,

    /// Key hints, search bar or last status message
    pub status: Rect,
}

impl ScreenAreas {
    pub fn stacked(&self) -> bool {
        self.input.x == self.output.x && self.input.y != self.output.y
    }
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(1), // Toolbar
        Constraint::Min(4),    // Editor panes
        Constraint::Length(1), // Status line
    ])
    .split(area);

    let panes = if area.width < STACK_BELOW_WIDTH {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[2])
    } else {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2])
    };

    ScreenAreas {
        header: rows[0],
        toolbar: rows[1],
        input: panes[0],
        output: panes[1],
        status: rows[3],
    }
}
