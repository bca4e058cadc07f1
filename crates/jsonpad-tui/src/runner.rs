//! Main TUI runner - entry point and event loop

use std::path::PathBuf;
use std::sync::Arc;

use jsonpad_app::clipboard::{ClipboardSink, SystemClipboard};
use jsonpad_app::config::Settings;
use jsonpad_app::message::Message;
use jsonpad_app::process::process_message;
use jsonpad_app::signals;
use jsonpad_app::state::AppState;
use jsonpad_app::store::SessionStore;
use jsonpad_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, startup, terminal};

/// Everything the binary resolves before the terminal is taken over
pub struct RunOptions {
    pub settings: Settings,
    pub store: Box<dyn SessionStore + Send>,
    /// Restore the saved session on start
    pub restore: bool,
    /// File to upload once the UI is up
    pub upload: Option<PathBuf>,
}

/// Run the TUI until the user quits or a signal arrives
pub async fn run(options: RunOptions) -> Result<()> {
    terminal::install_panic_hook();

    let RunOptions {
        settings,
        store,
        restore,
        upload,
    } = options;

    let mut state = AppState::with_settings(settings, store);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    startup::startup(&mut state, restore, upload, &msg_tx);
    signals::spawn_signal_handler(msg_tx.clone());

    let clipboard: Arc<dyn ClipboardSink> = Arc::new(SystemClipboard::new());

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        warn!("{}", e);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &clipboard);

    startup::shutdown(&mut state);
    terminal::disable_paste();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    clipboard: &Arc<dyn ClipboardSink>,
) -> Result<()> {
    while !state.should_quit() {
        // Results from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, clipboard);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, clipboard);
        }
    }

    Ok(())
}
