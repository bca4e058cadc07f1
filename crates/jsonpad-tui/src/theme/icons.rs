//! Glyphs for the TUI.
//!
//! `IconSet` resolves each slot from the configured `IconMode`:
//! - `IconMode::Unicode`: the glyphs shown by default
//! - `IconMode::Ascii`: plain fallbacks for terminals without emoji fonts

use jsonpad_app::config::IconMode;
use jsonpad_app::surface::FOLD_MARKER;
use jsonpad_core::PageMode;

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Toggle glyph: the mode a press would switch to
    pub fn toggle(&self, page: PageMode) -> &'static str {
        match self.mode {
            IconMode::Unicode => page.toggle_glyph(),
            IconMode::Ascii => match page {
                PageMode::Light => "(dark)",
                PageMode::Dark => "(light)",
            },
        }
    }

    pub fn fold(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => FOLD_MARKER,
            IconMode::Ascii => "...",
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{26a0}", // ⚠
            IconMode::Ascii => "!",
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2315}", // ⌕
            IconMode::Ascii => "/",
        }
    }

    /// Rewrite the check/cross marks of a transient label
    pub fn label(&self, text: &str) -> String {
        match self.mode {
            IconMode::Unicode => text.to_string(),
            IconMode::Ascii => text.replace('\u{2714}', "+").replace('\u{2718}', "x"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonpad_app::feedback::{LABEL_COPIED, LABEL_INVALID, LABEL_VALID};

    #[test]
    fn test_unicode_toggle_matches_page_glyph() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.toggle(PageMode::Light), "🌙");
        assert_eq!(icons.toggle(PageMode::Dark), "🌞");
    }

    #[test]
    fn test_ascii_fallbacks() {
        let icons = IconSet::new(IconMode::Ascii);
        assert_eq!(icons.toggle(PageMode::Light), "(dark)");
        assert_eq!(icons.fold(), "...");
        assert!(icons.alert().is_ascii());
        assert!(icons.search().is_ascii());
    }

    #[test]
    fn test_label_marks() {
        let ascii = IconSet::new(IconMode::Ascii);
        assert_eq!(ascii.label(LABEL_VALID), "Valid +");
        assert_eq!(ascii.label(LABEL_INVALID), "Invalid x");
        assert_eq!(ascii.label(LABEL_COPIED), "Copied +");

        let unicode = IconSet::new(IconMode::Unicode);
        assert_eq!(unicode.label(LABEL_VALID), LABEL_VALID);
    }
}
