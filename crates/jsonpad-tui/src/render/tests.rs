//! Full-screen rendering tests

use super::view;
use crate::test_utils::TestTerminal;
use jsonpad_app::handler::update;
use jsonpad_app::message::{EditOp, Message};
use jsonpad_app::state::{AppState, UiMode};
use jsonpad_app::surface::EditorSurface;
use jsonpad_core::{PageMode, SurfaceRole};

fn render_screen(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn type_into(state: &mut AppState, text: &str) {
    for c in text.chars() {
        let mut msg = Some(Message::Edit(EditOp::Insert(c)));
        while let Some(m) = msg {
            msg = update(state, m).message;
        }
    }
}

#[test]
fn test_initial_screen() {
    let mut state = AppState::new();
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("JSON Formatter & Validator"));
    assert!(term.buffer_contains(" Input "));
    assert!(term.buffer_contains(" Output "));
    assert!(term.buffer_contains("F4 Validate"));
    assert!(term.buffer_contains("^Q quit"));
}

#[test]
fn test_typed_input_renders_pretty_output() {
    let mut state = AppState::new();
    type_into(&mut state, "{\"a\":1}");
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("1 {\"a\":1}"));
    assert!(term.buffer_contains("2     \"a\": 1"));
}

#[test]
fn test_invalid_input_shows_sentinel() {
    let mut state = AppState::new();
    type_into(&mut state, "{");
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Invalid JSON"));
}

#[test]
fn test_page_rows_follow_pane_height() {
    let mut state = AppState::new();
    render_screen(&mut state);

    // 24 rows: header 3, toolbar 1, status 1, pane borders 2
    assert_eq!(state.page_rows, 17);
}

#[test]
fn test_scroll_follows_cursor() {
    let mut state = AppState::new();
    let long: String = (0..40).map(|i| format!("{i}\n")).collect();
    state.input.set_value(&long, jsonpad_app::surface::CursorPlacement::End);

    let term = render_screen(&mut state);

    assert!(state.input.scroll() > 0);
    assert!(term.buffer_contains("41 "));
}

#[test]
fn test_dark_mode_header() {
    let mut state = AppState::new();
    state.themes().toggle();
    let term = render_screen(&mut state);

    assert_eq!(state.theme.page, PageMode::Dark);
    assert!(term.buffer_contains("dark"));
    assert!(term.buffer_contains("Monokai"));
}

#[test]
fn test_focus_moves_title_highlight() {
    let mut state = AppState::new();
    state.focus = SurfaceRole::Output;
    let term = render_screen(&mut state);
    assert!(term.buffer_contains(" Output "));
}

#[test]
fn test_upload_prompt_overlay() {
    let mut state = AppState::new();
    state.ui_mode = UiMode::UploadPrompt;
    state.upload_path = "in.json".to_string();
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Path: in.json_"));
}

#[test]
fn test_alert_overlay() {
    let mut state = AppState::new();
    state.show_alert("Please upload a valid JSON file.");
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Please upload a valid JSON file."));
}

#[test]
fn test_theme_list_overlay() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenThemeList);
    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Editor theme"));
    assert!(term.buffer_contains("* GitHub"));
}

#[test]
fn test_compact_terminal_stacks_panes() {
    let mut state = AppState::new();
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &mut state));

    let content = term.content();
    let input_row = content.lines().position(|l| l.contains(" Input ")).unwrap();
    let output_row = content.lines().position(|l| l.contains(" Output ")).unwrap();
    assert!(output_row > input_row);
}
