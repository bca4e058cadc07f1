//! Terminal setup and restoration

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use jsonpad_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::execute!(std::io::stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Ask the terminal to deliver pastes as one event
pub fn enable_paste() -> Result<()> {
    crossterm::execute!(std::io::stdout(), EnableBracketedPaste)
        .map_err(|e| Error::TerminalInit(format!("bracketed paste: {}", e)))
}

pub fn disable_paste() {
    if let Err(e) = crossterm::execute!(std::io::stdout(), DisableBracketedPaste) {
        warn!("Failed to disable bracketed paste: {}", e);
    }
}
