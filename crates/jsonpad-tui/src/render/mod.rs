//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use jsonpad_app::state::{AppState, UiMode};
use jsonpad_app::surface::EditorSurface;
use jsonpad_core::SurfaceRole;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::icons::IconSet;
use crate::theme::palette::{EditorPalette, PagePalette};
use crate::widgets::{self, editor_pane};

/// Render the complete UI.
///
/// Only view bookkeeping is written back to state: the page height used by
/// PageUp/PageDown and each surface's scroll offset.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let page = PagePalette::for_mode(state.theme.page);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(Block::default().style(Style::default().bg(page.bg)), area);

    let areas = layout::create(area);

    let input_lines = state.input.lines().len();
    state.page_rows = editor_pane::geometry(areas.input, input_lines, &state.settings.editor)
        .rows
        .max(1);
    follow_cursor(state, SurfaceRole::Input, areas.input, icons);
    follow_cursor(state, SurfaceRole::Output, areas.output, icons);

    frame.render_widget(widgets::Header::new(&state.theme, &page, icons), areas.header);
    frame.render_widget(
        widgets::Toolbar::new(&state.feedback, &page, icons),
        areas.toolbar,
    );

    for (role, pane_area) in [
        (SurfaceRole::Input, areas.input),
        (SurfaceRole::Output, areas.output),
    ] {
        let surface = state.surface(role);
        let editor = EditorPalette::for_theme(&surface.theme(), state.theme.page);
        let pane = widgets::EditorPane::new(surface, &state.settings.editor, &page, editor, icons)
            .focused(state.focus == role);
        frame.render_widget(pane, pane_area);
    }

    frame.render_widget(widgets::StatusBar::new(state, &page, icons), areas.status);

    match state.ui_mode {
        UiMode::Editing | UiMode::Find | UiMode::Replace => {}
        UiMode::UploadPrompt => {
            frame.render_widget(widgets::UploadPrompt::new(&state.upload_path, &page), area);
        }
        UiMode::ThemeSelect => {
            frame.render_widget(
                widgets::ThemeList::new(&state.theme_list, &state.theme.editor_theme, &page),
                area,
            );
        }
        UiMode::Alert => {
            if let Some(message) = &state.alert {
                frame.render_widget(widgets::AlertDialog::new(message, &page, icons), area);
            }
        }
    }
}

/// Scroll a surface so its cursor line is inside the pane
fn follow_cursor(state: &mut AppState, role: SurfaceRole, area: Rect, icons: IconSet) {
    let wrap = state.settings.editor.wrap;
    let line_count = state.surface(role).lines().len();
    let geo = editor_pane::geometry(area, line_count, &state.settings.editor);
    state.surface_mut(role).scroll_into_view(geo.rows, |line| {
        editor_pane::line_rows(line, icons, geo.text_width, wrap)
    });
}
