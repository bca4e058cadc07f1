//! Semantic style builders over a [`PagePalette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::PagePalette;

// --- Text styles ---
pub fn text_primary(p: &PagePalette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_muted(p: &PagePalette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent_bold(p: &PagePalette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn key_hint(p: &PagePalette) -> Style {
    Style::default().fg(p.key_hint).add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_ok(p: &PagePalette) -> Style {
    Style::default().fg(p.status_ok).add_modifier(Modifier::BOLD)
}

pub fn status_err(p: &PagePalette) -> Style {
    Style::default().fg(p.status_err).add_modifier(Modifier::BOLD)
}

/// Highlighted row in a list
pub fn focused_selected(p: &PagePalette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &PagePalette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
}

pub fn modal_block<'a>(p: &PagePalette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg).fg(p.text_primary))
}
