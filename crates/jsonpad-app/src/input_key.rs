//! Terminal-independent key events.
//!
//! The TUI converts crossterm events into [`InputKey`] at its boundary so the
//! handler layer can be driven (and tested) without a terminal.

/// A single key press as seen by the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Printable character (already shifted)
    Char(char),
    /// Character pressed together with Ctrl
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,

    /// Function key F1-F12
    F(u8),
}

impl InputKey {
    /// Keys that quit from any mode
    pub fn is_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('q') | InputKey::CharCtrl('c'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_plain_chars_differ() {
        assert_ne!(InputKey::CharCtrl('s'), InputKey::Char('s'));
        assert_eq!(InputKey::F(2), InputKey::F(2));
    }

    #[test]
    fn test_quit_keys() {
        assert!(InputKey::CharCtrl('q').is_quit());
        assert!(InputKey::CharCtrl('c').is_quit());
        assert!(!InputKey::Char('q').is_quit());
        assert!(!InputKey::Esc.is_quit());
    }
}
