//! Core domain types shared by the app and TUI crates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Editor theme paired with [`PageMode::Light`].
pub const DEFAULT_LIGHT_EDITOR_THEME: &str = "github";

/// Editor theme paired with [`PageMode::Dark`].
pub const DEFAULT_DARK_EDITOR_THEME: &str = "monokai";

/// Page-wide visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageMode {
    #[default]
    Light,
    Dark,
}

impl PageMode {
    /// Value stored under the `pageTheme` key
    pub fn as_str(&self) -> &'static str {
        match self {
            PageMode::Light => "light",
            PageMode::Dark => "dark",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            PageMode::Light => PageMode::Dark,
            PageMode::Dark => PageMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, PageMode::Dark)
    }

    /// Editor theme selected when the page is toggled into this mode
    pub fn paired_editor_theme(&self) -> &'static str {
        match self {
            PageMode::Light => DEFAULT_LIGHT_EDITOR_THEME,
            PageMode::Dark => DEFAULT_DARK_EDITOR_THEME,
        }
    }

    /// Glyph shown on the toggle control.
    ///
    /// Shows the mode a press would switch to: a sun while dark, a moon while light.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            PageMode::Light => "🌙",
            PageMode::Dark => "🌞",
        }
    }
}

impl fmt::Display for PageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(PageMode::Light),
            "dark" => Ok(PageMode::Dark),
            other => Err(format!("unknown page theme: {other}")),
        }
    }
}

/// Which of the two editor surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceRole {
    #[default]
    Input,
    Output,
}

impl SurfaceRole {
    pub fn other(self) -> Self {
        match self {
            SurfaceRole::Input => SurfaceRole::Output,
            SurfaceRole::Output => SurfaceRole::Input,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SurfaceRole::Input => "Input",
            SurfaceRole::Output => "Output",
        }
    }
}

impl fmt::Display for SurfaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Page mode and editor color theme, updated together on toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreference {
    pub page: PageMode,
    pub editor_theme: String,
}

impl ThemePreference {
    pub fn new(page: PageMode, editor_theme: impl Into<String>) -> Self {
        Self {
            page,
            editor_theme: editor_theme.into(),
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::new(PageMode::Light, DEFAULT_LIGHT_EDITOR_THEME)
    }
}

/// Durable snapshot restored at startup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedSession {
    pub input: String,
    pub theme: ThemePreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_mode_round_trip_str() {
        for mode in [PageMode::Light, PageMode::Dark] {
            assert_eq!(mode.as_str().parse::<PageMode>().unwrap(), mode);
        }
        assert!("Dark".parse::<PageMode>().is_err());
        assert!("".parse::<PageMode>().is_err());
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(PageMode::Light.toggled(), PageMode::Dark);
        assert_eq!(PageMode::Light.toggled().toggled(), PageMode::Light);
        assert_eq!(PageMode::Dark.toggled().toggled(), PageMode::Dark);
    }

    #[test]
    fn test_paired_editor_themes() {
        assert_eq!(PageMode::Light.paired_editor_theme(), "github");
        assert_eq!(PageMode::Dark.paired_editor_theme(), "monokai");
    }

    #[test]
    fn test_toggle_glyph() {
        assert_eq!(PageMode::Dark.toggle_glyph(), "🌞");
        assert_eq!(PageMode::Light.toggle_glyph(), "🌙");
    }

    #[test]
    fn test_defaults() {
        let session = PersistedSession::default();
        assert_eq!(session.input, "");
        assert_eq!(session.theme.page, PageMode::Light);
        assert_eq!(session.theme.editor_theme, "github");
    }

    #[test]
    fn test_surface_role_other() {
        assert_eq!(SurfaceRole::Input.other(), SurfaceRole::Output);
        assert_eq!(SurfaceRole::Output.other(), SurfaceRole::Input);
        assert_eq!(SurfaceRole::Output.to_string(), "Output");
    }
}
