//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use jsonpad_core::SurfaceRole;

use crate::feedback::Control;
use crate::input_key::InputKey;

/// Cursor and buffer operations applied to the focused surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Tab,
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste into the focused surface
    Paste(String),

    /// Quit, flushing the session (Ctrl+Q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────
    /// Move focus to the other surface
    SwitchFocus,
    Edit(EditOp),
    /// Input's buffer changed through the keyboard
    InputEdited,

    // ─────────────────────────────────────────────────────────
    // Intents
    // ─────────────────────────────────────────────────────────
    Format { role: SurfaceRole },
    Minify { role: SurfaceRole },
    Validate,
    Download,
    Copy,
    /// Fold or unfold everything in Output
    ToggleFold,

    // ─────────────────────────────────────────────────────────
    // Upload
    // ─────────────────────────────────────────────────────────
    OpenUploadPrompt,
    UploadPromptInput(char),
    UploadPromptBackspace,
    SubmitUploadPrompt,
    CancelUploadPrompt,
    /// Upload a file by path (prompt, CLI argument)
    UploadFile { path: PathBuf },
    FileLoaded { path: PathBuf, content: String },
    FileReadFailed { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────
    // Background results
    // ─────────────────────────────────────────────────────────
    DownloadSaved { path: PathBuf },
    DownloadFailed { path: PathBuf, error: String },
    ClipboardCopied,
    ClipboardFailed { error: String },
    /// Timer fired for a transient label
    RevertLabel { control: Control, generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    OpenThemeList,
    ThemeListNext,
    ThemeListPrevious,
    /// Apply the highlighted theme list entry
    ConfirmThemeList,
    CloseThemeList,
    SelectEditorTheme { name: String },

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    OpenFind,
    OpenReplace,
    SearchInput(char),
    SearchBackspace,
    SearchSwitchField,
    FindNext,
    ReplaceAll,
    CloseSearch,

    // ─────────────────────────────────────────────────────────
    // Alerts
    // ─────────────────────────────────────────────────────────
    ShowAlert { message: String },
    DismissAlert,
}
