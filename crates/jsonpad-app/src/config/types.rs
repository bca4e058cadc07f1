//! Configuration types for jsonpad
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub download: DownloadSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

/// Editor surface options
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Spaces inserted when Tab is pressed inside an editor
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Soft-wrap long lines
    #[serde(default = "default_true")]
    pub wrap: bool,

    /// Show the line-number gutter
    #[serde(default = "default_true")]
    pub line_numbers: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            wrap: true,
            line_numbers: true,
        }
    }
}

fn default_tab_size() -> usize {
    2
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode for the TUI.
///
/// Controls whether the header uses emoji glyphs (default) or ASCII
/// fallbacks for terminals without emoji support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Emoji and box-drawing glyphs (default)
    #[default]
    Unicode,
    /// Plain ASCII for limited terminals
    Ascii,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long transient labels ("Valid ✔", "Copied ✔") stay up, in milliseconds
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,

    /// Icon mode: "unicode" (default) or "ascii"
    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            feedback_ms: default_feedback_ms(),
            icons: IconMode::default(),
        }
    }
}

fn default_feedback_ms() -> u64 {
    2000
}

/// Download settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DownloadSettings {
    /// Directory for `formatted<ms>.json` files (empty = current directory)
    #[serde(default)]
    pub directory: String,
}

impl DownloadSettings {
    /// Resolve the effective download directory
    pub fn resolve_directory(&self) -> PathBuf {
        if self.directory.trim().is_empty() {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        } else {
            PathBuf::from(&self.directory)
        }
    }
}

/// Session storage settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Path to the session file (empty = data dir default)
    #[serde(default)]
    pub session_file: String,
}

impl StorageSettings {
    /// Resolve the effective session file path
    pub fn resolve_session_file(&self) -> PathBuf {
        if self.session_file.trim().is_empty() {
            jsonpad_core::logging::data_directory().join("session.toml")
        } else {
            PathBuf::from(&self.session_file)
        }
    }
}
