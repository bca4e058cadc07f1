//! Startup and shutdown for the TUI runner
//!
//! - `startup`: restore the saved session and queue a startup upload
//! - `shutdown`: flush the input buffer before exit

use std::path::PathBuf;

use jsonpad_app::message::Message;
use jsonpad_app::state::AppState;
use jsonpad_app::store::load_session;
use jsonpad_core::prelude::*;
use tokio::sync::mpsc;

/// Bring state to where the previous session left off.
///
/// Themes are applied before the input so the first render already uses them;
/// a blank saved input leaves the surfaces empty. A file given on the command
/// line is uploaded through the normal message path.
pub fn startup(
    state: &mut AppState,
    restore: bool,
    upload: Option<PathBuf>,
    msg_tx: &mpsc::Sender<Message>,
) {
    if restore {
        let session = load_session(state.store.as_ref());
        debug!(
            "Restoring session: page={}, editor={}",
            session.theme.page, session.theme.editor_theme
        );
        state.restore_session(&session);
    } else {
        info!("Session restore disabled");
    }

    if let Some(path) = upload {
        if let Err(e) = msg_tx.try_send(Message::UploadFile { path }) {
            warn!("Failed to queue startup upload: {}", e);
        }
    }
}

/// Persist the input buffer one last time
pub fn shutdown(state: &mut AppState) {
    state.quit();
    info!("jsonpad shutting down");
}
