//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use jsonpad_core::prelude::*;
use jsonpad_core::{PersistedSession, SurfaceRole, ThemePreference};

use crate::config::Settings;
use crate::controller::Controller;
use crate::feedback::Feedback;
use crate::store::{MemoryStore, SessionStore};
use crate::surface::{EditorSurface, TextSurface};
use crate::theme::{ThemeCoordinator, ThemeList};

/// Rows moved by PageUp/PageDown before the first render reports a height
const DEFAULT_PAGE_ROWS: usize = 20;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Typing into the focused surface
    #[default]
    Editing,

    /// Entering a path to upload
    UploadPrompt,

    /// Search box open on the focused surface
    Find,

    /// Search box with replacement field open on the focused surface
    Replace,

    /// Editor theme list
    ThemeSelect,

    /// Blocking alert; any dismiss key returns to Editing
    Alert,
}

/// Complete application state
pub struct AppState {
    pub ui_mode: UiMode,

    /// Surface receiving keystrokes
    pub focus: SurfaceRole,

    pub input: TextSurface,
    pub output: TextSurface,

    pub store: Box<dyn SessionStore + Send>,

    pub theme: ThemePreference,
    pub theme_list: ThemeList,

    /// Transient toolbar labels
    pub feedback: Feedback,

    /// Message of the open alert
    pub alert: Option<String>,

    /// Path typed into the upload prompt
    pub upload_path: String,

    /// One-line status shown in the footer (last saved download, etc.)
    pub status: Option<String>,

    pub settings: Settings,

    /// Where downloads are written
    pub download_dir: PathBuf,

    /// Height of an editor pane in rows, updated on render
    pub page_rows: usize,

    quitting: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("ui_mode", &self.ui_mode)
            .field("focus", &self.focus)
            .field("theme", &self.theme)
            .field("alert", &self.alert)
            .field("quitting", &self.quitting)
            .finish_non_exhaustive()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default settings and a volatile store
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Box::new(MemoryStore::new()))
    }

    pub fn with_settings(settings: Settings, store: Box<dyn SessionStore + Send>) -> Self {
        let theme = ThemePreference::default();
        let tab_size = settings.editor.tab_size;
        let download_dir = settings.download.resolve_directory();

        let mut theme_list = ThemeList::default();
        theme_list.sync(&theme.editor_theme);

        Self {
            ui_mode: UiMode::Editing,
            focus: SurfaceRole::Input,
            input: TextSurface::new(SurfaceRole::Input, theme.editor_theme.clone(), tab_size),
            output: TextSurface::new(SurfaceRole::Output, theme.editor_theme.clone(), tab_size),
            store,
            theme,
            theme_list,
            feedback: Feedback::new(),
            alert: None,
            upload_path: String::new(),
            status: None,
            settings,
            download_dir,
            page_rows: DEFAULT_PAGE_ROWS,
            quitting: false,
        }
    }

    /// Controller over both surfaces and the store
    pub fn controller(&mut self) -> Controller<'_> {
        Controller {
            input: &mut self.input,
            output: &mut self.output,
            store: self.store.as_mut(),
        }
    }

    /// Theme coordinator over preference, list, surfaces and store
    pub fn themes(&mut self) -> ThemeCoordinator<'_> {
        ThemeCoordinator {
            preference: &mut self.theme,
            list: &mut self.theme_list,
            input: &mut self.input,
            output: &mut self.output,
            store: self.store.as_mut(),
        }
    }

    pub fn surface(&self, role: SurfaceRole) -> &TextSurface {
        match role {
            SurfaceRole::Input => &self.input,
            SurfaceRole::Output => &self.output,
        }
    }

    pub fn surface_mut(&mut self, role: SurfaceRole) -> &mut TextSurface {
        match role {
            SurfaceRole::Input => &mut self.input,
            SurfaceRole::Output => &mut self.output,
        }
    }

    pub fn focused(&self) -> &TextSurface {
        self.surface(self.focus)
    }

    pub fn focused_mut(&mut self) -> &mut TextSurface {
        self.surface_mut(self.focus)
    }

    /// Apply a persisted session: themes first, then non-blank input
    pub fn restore_session(&mut self, session: &PersistedSession) {
        self.themes()
            .set_theme(session.theme.page, &session.theme.editor_theme);
        if self.controller().restore(session) {
            info!("Restored {} bytes of input", session.input.len());
        }
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("Alert: {}", message);
        self.alert = Some(message);
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = UiMode::Editing;
    }

    /// Flush Input and mark the app for exit
    pub fn quit(&mut self) {
        if !self.quitting {
            self.controller().flush();
            self.quitting = true;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Whether the input and output themes agree with the preference
    pub fn themes_in_sync(&self) -> bool {
        self.input.theme() == self.theme.editor_theme
            && self.output.theme() == self.theme.editor_theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KEY_EDITOR_THEME, KEY_JSON_INPUT};
    use jsonpad_core::PageMode;

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.ui_mode, UiMode::Editing);
        assert_eq!(state.focus, SurfaceRole::Input);
        assert_eq!(state.theme, ThemePreference::default());
        assert!(state.themes_in_sync());
        assert_eq!(state.theme_list.selected_name(), Some("github"));
        assert!(!state.should_quit());
    }

    #[test]
    fn test_restore_session_applies_themes_then_input() {
        let mut state = AppState::new();
        let session = PersistedSession {
            input: r#"{"x":1}"#.to_string(),
            theme: ThemePreference::new(PageMode::Dark, "twilight"),
        };

        state.restore_session(&session);

        assert_eq!(state.theme.page, PageMode::Dark);
        assert!(state.themes_in_sync());
        assert_eq!(state.input.get_value(), r#"{"x":1}"#);
        assert_eq!(state.output.get_value(), "{\n    \"x\": 1\n}");
        assert_eq!(state.store.get(KEY_EDITOR_THEME).as_deref(), Some("twilight"));
    }

    #[test]
    fn test_quit_flushes_input() {
        let mut state = AppState::new();
        state.input.insert_str("[1]");
        state.quit();

        assert!(state.should_quit());
        assert_eq!(state.store.get(KEY_JSON_INPUT).as_deref(), Some("[1]"));
    }

    #[test]
    fn test_alert_lifecycle() {
        let mut state = AppState::new();
        state.show_alert("boom");
        assert_eq!(state.ui_mode, UiMode::Alert);
        assert_eq!(state.alert.as_deref(), Some("boom"));

        state.dismiss_alert();
        assert_eq!(state.ui_mode, UiMode::Editing);
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_focused_surface_follows_focus() {
        let mut state = AppState::new();
        assert_eq!(state.focused().role(), SurfaceRole::Input);
        state.focus = SurfaceRole::Output;
        assert_eq!(state.focused_mut().role(), SurfaceRole::Output);
    }
}
