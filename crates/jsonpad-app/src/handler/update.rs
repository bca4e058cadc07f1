//! Main update function - handles state transitions (TEA pattern)

use std::path::{Path, PathBuf};

use jsonpad_core::prelude::*;
use jsonpad_core::SurfaceRole;

use crate::controller::check_upload;
use crate::feedback::{Control, LABEL_COPIED, LABEL_INVALID, LABEL_VALID};
use crate::message::{EditOp, Message};
use crate::state::{AppState, UiMode};
use crate::surface::{EditorCommand, EditorSurface};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => handle_paste(state, &text),

        Message::Quit => {
            info!("Quit requested");
            state.quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editing
        // ─────────────────────────────────────────────────────────
        Message::SwitchFocus => {
            state.focus = state.focus.other();
            UpdateResult::none()
        }

        Message::Edit(op) => handle_edit(state, op),

        Message::InputEdited => {
            state.controller().input_changed();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Intents
        // ─────────────────────────────────────────────────────────
        Message::Format { role } => {
            state.controller().format(role);
            UpdateResult::none()
        }

        Message::Minify { role } => {
            state.controller().minify(role);
            UpdateResult::none()
        }

        Message::Validate => {
            let result = state.controller().validate();
            let label = if result.ok { LABEL_VALID } else { LABEL_INVALID };
            flash_label(state, Control::Validate, label)
        }

        Message::Download => handle_download(state),

        Message::Copy => UpdateResult::action(UpdateAction::CopyToClipboard {
            text: state.controller().copy_text(),
        }),

        Message::ToggleFold => {
            if state.output.is_folded() {
                state.output.unfold_all();
            } else {
                state.output.exec_command(EditorCommand::FoldAll);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload
        // ─────────────────────────────────────────────────────────
        Message::OpenUploadPrompt => {
            state.upload_path.clear();
            state.ui_mode = UiMode::UploadPrompt;
            UpdateResult::none()
        }

        Message::UploadPromptInput(c) => {
            state.upload_path.push(c);
            UpdateResult::none()
        }

        Message::UploadPromptBackspace => {
            state.upload_path.pop();
            UpdateResult::none()
        }

        Message::CancelUploadPrompt => {
            state.upload_path.clear();
            state.ui_mode = UiMode::Editing;
            UpdateResult::none()
        }

        Message::SubmitUploadPrompt => {
            state.ui_mode = UiMode::Editing;
            let raw = std::mem::take(&mut state.upload_path);
            let raw = raw.trim();
            if raw.is_empty() {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::UploadFile {
                path: expand_home(raw),
            })
        }

        Message::UploadFile { path } => match check_upload(&path) {
            Ok(()) => {
                debug!("Reading upload {:?}", path);
                UpdateResult::action(UpdateAction::ReadFile { path })
            }
            Err(e) => {
                state.show_alert(e.alert_message());
                UpdateResult::none()
            }
        },

        Message::FileLoaded { path, content } => {
            state.controller().upload(&content);
            state.status = Some(format!("Loaded {}", path.display()));
            UpdateResult::none()
        }

        Message::FileReadFailed { path, error } => {
            state.show_alert(Error::file_read(path, error).alert_message());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Background results
        // ─────────────────────────────────────────────────────────
        Message::DownloadSaved { path } => {
            info!("Saved download to {:?}", path);
            state.status = Some(format!("Saved {}", path.display()));
            UpdateResult::none()
        }

        Message::DownloadFailed { path, error } => {
            state.show_alert(Error::download_write(path, error).alert_message());
            UpdateResult::none()
        }

        Message::ClipboardCopied => flash_label(state, Control::Copy, LABEL_COPIED),

        Message::ClipboardFailed { error } => {
            state.show_alert(Error::clipboard(error).alert_message());
            UpdateResult::none()
        }

        Message::RevertLabel {
            control,
            generation,
        } => {
            if !state.feedback.revert(control, generation) {
                trace!("Skipped stale revert for {:?}", control);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.themes().toggle();
            UpdateResult::none()
        }

        Message::OpenThemeList => {
            let current = state.theme.editor_theme.clone();
            state.theme_list.sync(&current);
            state.ui_mode = UiMode::ThemeSelect;
            UpdateResult::none()
        }

        Message::ThemeListNext => {
            state.theme_list.select_next();
            UpdateResult::none()
        }

        Message::ThemeListPrevious => {
            state.theme_list.select_previous();
            UpdateResult::none()
        }

        Message::ConfirmThemeList => {
            state.ui_mode = UiMode::Editing;
            match state.theme_list.selected_name() {
                Some(name) => UpdateResult::message(Message::SelectEditorTheme {
                    name: name.to_string(),
                }),
                None => UpdateResult::none(),
            }
        }

        Message::CloseThemeList => {
            let current = state.theme.editor_theme.clone();
            state.theme_list.sync(&current);
            state.ui_mode = UiMode::Editing;
            UpdateResult::none()
        }

        Message::SelectEditorTheme { name } => {
            state.themes().select_editor_theme(&name);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::OpenFind => {
            state.focused_mut().exec_command(EditorCommand::Find);
            state.ui_mode = UiMode::Find;
            UpdateResult::none()
        }

        Message::OpenReplace => {
            state.focused_mut().exec_command(EditorCommand::Replace);
            state.ui_mode = UiMode::Replace;
            UpdateResult::none()
        }

        Message::SearchInput(c) => {
            state.focused_mut().search_input(c);
            UpdateResult::none()
        }

        Message::SearchBackspace => {
            state.focused_mut().search_backspace();
            UpdateResult::none()
        }

        Message::SearchSwitchField => {
            state.focused_mut().search_switch_field();
            UpdateResult::none()
        }

        Message::FindNext => {
            state.focused_mut().find_next();
            UpdateResult::none()
        }

        Message::ReplaceAll => {
            let count = state.focused_mut().replace_all();
            if count > 0 && state.focus == SurfaceRole::Input {
                UpdateResult::message(Message::InputEdited)
            } else {
                UpdateResult::none()
            }
        }

        Message::CloseSearch => {
            state.focused_mut().close_search();
            state.ui_mode = UiMode::Editing;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Alerts
        // ─────────────────────────────────────────────────────────
        Message::ShowAlert { message } => {
            state.show_alert(message);
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }
    }
}

/// Show a transient label and schedule its revert
fn flash_label(state: &mut AppState, control: Control, label: &str) -> UpdateResult {
    let generation = state.feedback.flash(control, label);
    UpdateResult::action(UpdateAction::ScheduleLabelRevert {
        control,
        generation,
        delay_ms: state.settings.ui.feedback_ms,
    })
}

fn handle_edit(state: &mut AppState, op: EditOp) -> UpdateResult {
    let page = state.page_rows;
    let surface = state.focused_mut();

    let changed = match op {
        EditOp::Insert(c) => {
            surface.insert_char(c);
            true
        }
        EditOp::Tab => {
            surface.insert_tab();
            true
        }
        EditOp::Newline => {
            surface.newline();
            true
        }
        EditOp::Backspace => surface.backspace(),
        EditOp::Delete => surface.delete(),
        EditOp::Left => {
            surface.move_left();
            false
        }
        EditOp::Right => {
            surface.move_right();
            false
        }
        EditOp::Up => {
            surface.move_up();
            false
        }
        EditOp::Down => {
            surface.move_down();
            false
        }
        EditOp::Home => {
            surface.move_home();
            false
        }
        EditOp::End => {
            surface.move_end();
            false
        }
        EditOp::PageUp => {
            surface.page_up(page);
            false
        }
        EditOp::PageDown => {
            surface.page_down(page);
            false
        }
    };

    if changed && state.focus == SurfaceRole::Input {
        UpdateResult::message(Message::InputEdited)
    } else {
        UpdateResult::none()
    }
}

fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    match state.ui_mode {
        UiMode::Editing => {
            if text.is_empty() {
                return UpdateResult::none();
            }
            state.focused_mut().insert_str(text);
            if state.focus == SurfaceRole::Input {
                UpdateResult::message(Message::InputEdited)
            } else {
                UpdateResult::none()
            }
        }
        UiMode::UploadPrompt => {
            state
                .upload_path
                .extend(text.chars().filter(|c| !c.is_control()));
            UpdateResult::none()
        }
        UiMode::Find | UiMode::Replace => {
            for c in text.chars().filter(|c| !c.is_control()) {
                state.focused_mut().search_input(c);
            }
            UpdateResult::none()
        }
        UiMode::ThemeSelect | UiMode::Alert => UpdateResult::none(),
    }
}

fn handle_download(state: &mut AppState) -> UpdateResult {
    let epoch_ms = chrono::Utc::now().timestamp_millis();
    match state.controller().prepare_download(epoch_ms) {
        Ok(download) => UpdateResult::action(UpdateAction::WriteDownload {
            path: state.download_dir.join(download.file_name),
            contents: download.contents,
        }),
        Err(e) => {
            state.show_alert(e.alert_message());
            UpdateResult::none()
        }
    }
}

/// Expand a leading `~/` in a typed path
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(raw),
        },
        None => Path::new(raw).to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_expand_home() {
        let temp = tempfile::tempdir().unwrap();
        let previous = std::env::var_os("HOME");
        std::env::set_var("HOME", temp.path());

        assert_eq!(expand_home("~/data/in.json"), temp.path().join("data/in.json"));
        assert_eq!(expand_home("/abs/in.json"), PathBuf::from("/abs/in.json"));
        assert_eq!(expand_home("rel.json"), PathBuf::from("rel.json"));

        match previous {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }
}
