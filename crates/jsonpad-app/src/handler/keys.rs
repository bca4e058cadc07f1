//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{EditOp, Message};
use crate::state::{AppState, UiMode};
use crate::surface::{SearchField, SearchMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+Q / Ctrl+C quit from anywhere
    if key.is_quit() {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Editing => handle_key_editing(state, key),
        UiMode::UploadPrompt => handle_key_upload_prompt(key),
        UiMode::Find | UiMode::Replace => handle_key_search(state, key),
        UiMode::ThemeSelect => handle_key_theme_select(key),
        UiMode::Alert => handle_key_alert(key),
    }
}

/// Handle key events while typing into a surface
fn handle_key_editing(state: &AppState, key: InputKey) -> Option<Message> {
    let role = state.focus;

    match key {
        InputKey::Tab | InputKey::BackTab => Some(Message::SwitchFocus),

        // ─────────────────────────────────────────────────────────
        // Toolbar
        // ─────────────────────────────────────────────────────────
        InputKey::F(2) => Some(Message::Format { role }),
        InputKey::F(3) => Some(Message::Minify { role }),
        InputKey::F(4) => Some(Message::Validate),
        InputKey::F(5) | InputKey::CharCtrl('o') => Some(Message::OpenUploadPrompt),
        InputKey::F(6) | InputKey::CharCtrl('s') => Some(Message::Download),
        InputKey::F(7) | InputKey::CharCtrl('y') => Some(Message::Copy),
        InputKey::F(8) => Some(Message::ToggleTheme),
        InputKey::F(9) => Some(Message::OpenThemeList),
        InputKey::F(10) => Some(Message::ToggleFold),
        InputKey::CharCtrl('f') => Some(Message::OpenFind),
        InputKey::CharCtrl('r') => Some(Message::OpenReplace),

        // ─────────────────────────────────────────────────────────
        // Buffer editing
        // ─────────────────────────────────────────────────────────
        InputKey::CharCtrl('t') => Some(Message::Edit(EditOp::Tab)),
        InputKey::Char(c) => Some(Message::Edit(EditOp::Insert(c))),
        InputKey::Enter => Some(Message::Edit(EditOp::Newline)),
        InputKey::Backspace => Some(Message::Edit(EditOp::Backspace)),
        InputKey::Delete => Some(Message::Edit(EditOp::Delete)),
        InputKey::Left => Some(Message::Edit(EditOp::Left)),
        InputKey::Right => Some(Message::Edit(EditOp::Right)),
        InputKey::Up => Some(Message::Edit(EditOp::Up)),
        InputKey::Down => Some(Message::Edit(EditOp::Down)),
        InputKey::Home => Some(Message::Edit(EditOp::Home)),
        InputKey::End => Some(Message::Edit(EditOp::End)),
        InputKey::PageUp => Some(Message::Edit(EditOp::PageUp)),
        InputKey::PageDown => Some(Message::Edit(EditOp::PageDown)),

        _ => None,
    }
}

/// Handle key events in the upload path prompt
fn handle_key_upload_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelUploadPrompt),
        InputKey::Enter => Some(Message::SubmitUploadPrompt),
        InputKey::Backspace => Some(Message::UploadPromptBackspace),
        InputKey::Char(c) => Some(Message::UploadPromptInput(c)),
        _ => None,
    }
}

/// Handle key events while the search box is open
fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    let search = state.focused().search();
    let replacing = search.is_some_and(|s| s.mode == SearchMode::Replace);

    match key {
        InputKey::Esc => Some(Message::CloseSearch),
        InputKey::Enter => {
            if replacing && search.is_some_and(|s| s.field == SearchField::Replacement) {
                Some(Message::ReplaceAll)
            } else {
                Some(Message::FindNext)
            }
        }
        InputKey::CharCtrl('r') if replacing => Some(Message::ReplaceAll),
        InputKey::Tab | InputKey::BackTab => Some(Message::SearchSwitchField),
        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}

/// Handle key events in the editor theme list
fn handle_key_theme_select(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ThemeListPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::ThemeListNext),
        InputKey::Enter => Some(Message::ConfirmThemeList),
        InputKey::Esc | InputKey::F(9) => Some(Message::CloseThemeList),
        _ => None,
    }
}

/// Handle key events while an alert is shown
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        _ => None,
    }
}
