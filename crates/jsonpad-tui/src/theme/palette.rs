//! Color palettes for the page chrome and the editor surfaces.
//!
//! The page palette follows the light/dark page mode. Editor palettes are
//! keyed by editor theme name and are independent of the page mode, except
//! that an unknown name falls back to the page mode's paired default.

use jsonpad_core::PageMode;
use ratatui::style::Color;

/// Colors for everything outside the editor panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePalette {
    pub bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,
    pub border_dim: Color,
    pub border_active: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub contrast_fg: Color,
    pub status_ok: Color,
    pub status_err: Color,
    pub key_hint: Color,
}

pub const LIGHT_PAGE: PagePalette = PagePalette {
    bg: Color::Rgb(250, 250, 250),
    card_bg: Color::Rgb(240, 242, 245),
    popup_bg: Color::Rgb(255, 255, 255),
    border_dim: Color::Rgb(200, 204, 210),
    border_active: Color::Rgb(9, 105, 218),
    accent: Color::Rgb(9, 105, 218),
    text_primary: Color::Rgb(36, 41, 47),
    text_muted: Color::Rgb(110, 119, 129),
    contrast_fg: Color::Rgb(255, 255, 255),
    status_ok: Color::Rgb(26, 127, 55),
    status_err: Color::Rgb(207, 34, 46),
    key_hint: Color::Rgb(154, 103, 0),
};

pub const DARK_PAGE: PagePalette = PagePalette {
    bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(88, 166, 255),
    text_primary: Color::Rgb(201, 209, 217),
    text_muted: Color::Rgb(125, 133, 144),
    contrast_fg: Color::Rgb(10, 12, 16),
    status_ok: Color::Rgb(16, 185, 129),
    status_err: Color::Rgb(244, 63, 94),
    key_hint: Color::Rgb(234, 179, 8),
};

impl PagePalette {
    pub fn for_mode(mode: PageMode) -> Self {
        match mode {
            PageMode::Light => LIGHT_PAGE,
            PageMode::Dark => DARK_PAGE,
        }
    }
}

/// Colors for one editor theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorPalette {
    pub bg: Color,
    pub fg: Color,
    pub gutter: Color,
    pub key: Color,
    pub string: Color,
    pub number: Color,
    pub literal: Color,
    pub punctuation: Color,
    pub cursor: Color,
    pub match_bg: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

pub const GITHUB: EditorPalette = EditorPalette {
    bg: rgb(0xffffff),
    fg: rgb(0x24292e),
    gutter: rgb(0x959da5),
    key: rgb(0x005cc5),
    string: rgb(0x032f62),
    number: rgb(0x005cc5),
    literal: rgb(0xd73a49),
    punctuation: rgb(0x24292e),
    cursor: rgb(0x24292e),
    match_bg: rgb(0xfff5b1),
};

pub const MONOKAI: EditorPalette = EditorPalette {
    bg: rgb(0x272822),
    fg: rgb(0xf8f8f2),
    gutter: rgb(0x8f908a),
    key: rgb(0xa6e22e),
    string: rgb(0xe6db74),
    number: rgb(0xae81ff),
    literal: rgb(0xae81ff),
    punctuation: rgb(0xf8f8f2),
    cursor: rgb(0xf8f8f0),
    match_bg: rgb(0x75715e),
};

pub const DRACULA: EditorPalette = EditorPalette {
    bg: rgb(0x282a36),
    fg: rgb(0xf8f8f2),
    gutter: rgb(0x6272a4),
    key: rgb(0x8be9fd),
    string: rgb(0xf1fa8c),
    number: rgb(0xbd93f9),
    literal: rgb(0xff79c6),
    punctuation: rgb(0xf8f8f2),
    cursor: rgb(0xf8f8f0),
    match_bg: rgb(0x44475a),
};

pub const SOLARIZED_LIGHT: EditorPalette = EditorPalette {
    bg: rgb(0xfdf6e3),
    fg: rgb(0x586e75),
    gutter: rgb(0x93a1a1),
    key: rgb(0x268bd2),
    string: rgb(0x2aa198),
    number: rgb(0xd33682),
    literal: rgb(0xb58900),
    punctuation: rgb(0x586e75),
    cursor: rgb(0x000000),
    match_bg: rgb(0xeee8d5),
};

pub const SOLARIZED_DARK: EditorPalette = EditorPalette {
    bg: rgb(0x002b36),
    fg: rgb(0x93a1a1),
    gutter: rgb(0x586e75),
    key: rgb(0x268bd2),
    string: rgb(0x2aa198),
    number: rgb(0xd33682),
    literal: rgb(0xb58900),
    punctuation: rgb(0x93a1a1),
    cursor: rgb(0xd30102),
    match_bg: rgb(0x073642),
};

pub const TOMORROW: EditorPalette = EditorPalette {
    bg: rgb(0xffffff),
    fg: rgb(0x4d4d4c),
    gutter: rgb(0x8e908c),
    key: rgb(0x4271ae),
    string: rgb(0x718c00),
    number: rgb(0xf5871f),
    literal: rgb(0xc82829),
    punctuation: rgb(0x4d4d4c),
    cursor: rgb(0xaeafad),
    match_bg: rgb(0xd6d6d6),
};

pub const TOMORROW_NIGHT: EditorPalette = EditorPalette {
    bg: rgb(0x1d1f21),
    fg: rgb(0xc5c8c6),
    gutter: rgb(0x969896),
    key: rgb(0x81a2be),
    string: rgb(0xb5bd68),
    number: rgb(0xde935f),
    literal: rgb(0xcc6666),
    punctuation: rgb(0xc5c8c6),
    cursor: rgb(0xaeafad),
    match_bg: rgb(0x373b41),
};

pub const TWILIGHT: EditorPalette = EditorPalette {
    bg: rgb(0x141414),
    fg: rgb(0xf8f8f8),
    gutter: rgb(0x5f5a60),
    key: rgb(0x9b859d),
    string: rgb(0x8f9d6a),
    number: rgb(0xcf6a4c),
    literal: rgb(0xcf6a4c),
    punctuation: rgb(0xf8f8f8),
    cursor: rgb(0xa7a7a7),
    match_bg: rgb(0x3c403b),
};

impl EditorPalette {
    /// Palette for an editor theme name.
    ///
    /// Unknown names render with the paired default of `page`.
    pub fn for_theme(name: &str, page: PageMode) -> Self {
        match name {
            "github" => GITHUB,
            "monokai" => MONOKAI,
            "dracula" => DRACULA,
            "solarized_light" => SOLARIZED_LIGHT,
            "solarized_dark" => SOLARIZED_DARK,
            "tomorrow" => TOMORROW,
            "tomorrow_night" => TOMORROW_NIGHT,
            "twilight" => TWILIGHT,
            _ => Self::for_theme(page.paired_editor_theme(), page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonpad_app::theme::EDITOR_THEMES;

    #[test]
    fn test_page_palettes_differ() {
        assert_ne!(PagePalette::for_mode(PageMode::Light), PagePalette::for_mode(PageMode::Dark));
    }

    #[test]
    fn test_rgb_helper() {
        assert_eq!(rgb(0x0a0b0c), Color::Rgb(10, 11, 12));
    }

    #[test]
    fn test_every_listed_theme_has_a_palette() {
        for (name, _) in EDITOR_THEMES {
            let light = EditorPalette::for_theme(name, PageMode::Light);
            let dark = EditorPalette::for_theme(name, PageMode::Dark);
            assert_eq!(light, dark, "{name} depends on page mode");
        }
    }

    #[test]
    fn test_unknown_theme_uses_paired_default() {
        assert_eq!(EditorPalette::for_theme("nope", PageMode::Light), GITHUB);
        assert_eq!(EditorPalette::for_theme("nope", PageMode::Dark), MONOKAI);
        assert_eq!(EditorPalette::for_theme("", PageMode::Dark), MONOKAI);
    }
}
