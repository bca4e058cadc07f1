//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

use crate::codec::SyntaxError;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Document Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid JSON: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Please upload a valid JSON file (got {media_type}).")]
    UnsupportedFileType { media_type: String },

    #[error("Failed to read {path}: {reason}")]
    FileRead { path: PathBuf, reason: String },

    #[error("Invalid JSON. Please format your JSON before downloading.")]
    DownloadValidation,

    #[error("Failed to write {path}: {reason}")]
    DownloadWrite { path: PathBuf, reason: String },

    #[error("Failed to copy to clipboard: {reason}")]
    ClipboardWrite { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration/Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Session store error: {message}")]
    Store { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn unsupported_file_type(media_type: impl Into<String>) -> Self {
        Self::UnsupportedFileType {
            media_type: media_type.into(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn download_write(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DownloadWrite {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn clipboard(reason: impl Into<String>) -> Self {
        Self::ClipboardWrite {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Text shown in the alert overlay for a user-facing error
    pub fn alert_message(&self) -> String {
        match self {
            Error::UnsupportedFileType { .. } => "Please upload a valid JSON file.".to_string(),
            Error::ClipboardWrite { .. } => "Failed to copy to clipboard.".to_string(),
            other => other.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn test_error_display_messages() {
        let err = Error::DownloadValidation;
        assert_eq!(
            err.to_string(),
            "Invalid JSON. Please format your JSON before downloading."
        );

        let err = Error::unsupported_file_type("text/plain");
        assert!(err.to_string().contains("Please upload a valid JSON file"));
        assert!(err.to_string().contains("text/plain"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_syntax() {
        let syntax = codec::parse("{").unwrap_err();
        let err: Error = syntax.into();
        assert!(matches!(err, Error::Syntax(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_alert_messages() {
        assert_eq!(
            Error::unsupported_file_type("text/plain").alert_message(),
            "Please upload a valid JSON file."
        );
        assert_eq!(
            Error::clipboard("no display").alert_message(),
            "Failed to copy to clipboard."
        );
        assert_eq!(
            Error::DownloadValidation.alert_message(),
            "Invalid JSON. Please format your JSON before downloading."
        );
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::config("test");
        let _ = Error::store("test");
        let _ = Error::file_read("/tmp/a.json", "denied");
        let _ = Error::download_write("/tmp/formatted1.json", "disk full");
    }

    #[test]
    fn test_path_errors_include_path() {
        let err = Error::file_read("/data/in.json", "permission denied");
        assert!(err.to_string().contains("/data/in.json"));
        assert!(err.to_string().contains("permission denied"));
    }
}
