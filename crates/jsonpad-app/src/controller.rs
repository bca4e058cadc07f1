//! Format/validate controller
//!
//! Every user intent is one read-transform-write transaction over the two
//! surfaces and the session store. Nothing here performs I/O beyond the store;
//! file reads/writes and the clipboard are done by the action layer, which
//! feeds results back in (`upload`) or consumes what the controller prepares
//! (`prepare_download`, `copy_text`).

use std::path::Path;

use jsonpad_core::prelude::*;
use jsonpad_core::{codec, PersistedSession, RenderMode, SurfaceRole, Transform};

use crate::store::{persist, SessionStore, KEY_JSON_INPUT};
use crate::surface::{CursorPlacement, EditorSurface};

/// Media type accepted by upload
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Media type for an uploaded file, derived from its extension
pub fn media_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => JSON_MEDIA_TYPE,
        Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
        Some(ext) if ext.eq_ignore_ascii_case("csv") => "text/csv",
        Some(ext) if ext.eq_ignore_ascii_case("xml") => "application/xml",
        _ => "application/octet-stream",
    }
}

/// Reject anything that isn't JSON before it is read
pub fn check_upload(path: &Path) -> Result<()> {
    let media_type = media_type_for(path);
    if media_type != JSON_MEDIA_TYPE {
        return Err(Error::unsupported_file_type(media_type));
    }
    Ok(())
}

/// Name of a download artifact created at `epoch_ms`
pub fn download_file_name(epoch_ms: i64) -> String {
    format!("formatted{epoch_ms}.json")
}

/// Download artifact ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub contents: String,
}

/// Borrowed view over the surfaces and store an intent operates on
pub struct Controller<'a> {
    pub input: &'a mut dyn EditorSurface,
    pub output: &'a mut dyn EditorSurface,
    pub store: &'a mut dyn SessionStore,
}

impl Controller<'_> {
    fn surface(&mut self, role: SurfaceRole) -> &mut dyn EditorSurface {
        match role {
            SurfaceRole::Input => &mut *self.input,
            SurfaceRole::Output => &mut *self.output,
        }
    }

    /// React to a change of Input's buffer: persist it and re-render Output
    pub fn input_changed(&mut self) {
        let text = self.input.get_value();
        persist(self.store, KEY_JSON_INPUT, &text);

        let result = codec::transform(&text, RenderMode::Pretty);
        self.output.set_value(&result.text, CursorPlacement::Start);
    }

    /// Programmatic write to Input; counts as a change
    pub fn set_input(&mut self, text: &str) {
        self.input.set_value(text, CursorPlacement::Start);
        self.input_changed();
    }

    /// Load uploaded file content into Input (Output follows)
    pub fn upload(&mut self, content: &str) {
        info!("Uploaded {} bytes", content.len());
        self.set_input(content);
    }

    /// Re-render a surface in place
    pub fn reformat(&mut self, role: SurfaceRole, mode: RenderMode) -> bool {
        let source = self.surface(role).get_value();
        let result = codec::transform(&source, mode);
        debug!("{} {} -> ok={}", mode, role, result.ok);

        self.surface(role)
            .set_value(&result.text, CursorPlacement::Start);
        if role == SurfaceRole::Input {
            self.input_changed();
        }
        result.ok
    }

    /// Pretty-print a surface in place
    pub fn format(&mut self, role: SurfaceRole) -> bool {
        self.reformat(role, RenderMode::Pretty)
    }

    /// Compact a surface in place
    pub fn minify(&mut self, role: SurfaceRole) -> bool {
        self.reformat(role, RenderMode::Compact)
    }

    /// Render Input into Output, reporting whether it parsed
    pub fn validate(&mut self) -> Transform {
        let result = codec::transform(&self.input.get_value(), RenderMode::Pretty);
        self.output.set_value(&result.text, CursorPlacement::Start);
        info!("Validate: {}", if result.ok { "valid" } else { "invalid" });
        result
    }

    /// Re-derive the pretty form of Output for download
    pub fn prepare_download(&self, epoch_ms: i64) -> Result<Download> {
        let result = codec::transform(&self.output.get_value(), RenderMode::Pretty);
        if !result.ok {
            debug!("Download blocked: Output is not valid JSON");
            return Err(Error::DownloadValidation);
        }
        Ok(Download {
            file_name: download_file_name(epoch_ms),
            contents: result.text,
        })
    }

    /// Output text, verbatim, for the clipboard
    pub fn copy_text(&self) -> String {
        self.output.get_value()
    }

    /// Write Input to the store (session end)
    pub fn flush(&mut self) {
        let text = self.input.get_value();
        persist(self.store, KEY_JSON_INPUT, &text);
    }

    /// Restore saved input; blank input is left alone.
    ///
    /// Returns whether anything was restored.
    pub fn restore(&mut self, session: &PersistedSession) -> bool {
        if session.input.trim().is_empty() {
            return false;
        }
        self.set_input(&session.input);
        true
    }
}
