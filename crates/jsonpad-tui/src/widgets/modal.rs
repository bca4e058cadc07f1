//! Shared modal overlay utilities.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette::PagePalette;

/// Center a fixed-size rect within an area, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell of `area` so the modal on top stands out
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &PagePalette) {
    let dim_style = Style::default().fg(palette.text_muted).bg(palette.bg);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Dim the screen and clear the modal's own rect
pub fn prepare(buf: &mut Buffer, screen: Rect, modal: Rect, palette: &PagePalette) {
    dim_background(buf, screen, palette);
    Clear.render(modal, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK_PAGE;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 30, 5);
        assert_eq!(centered_rect(60, 10, area), Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn test_dim_background_sets_muted_fg() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area, &DARK_PAGE);
        assert_eq!(buf[(3, 1)].fg, DARK_PAGE.text_muted);
        assert_eq!(buf[(0, 0)].bg, DARK_PAGE.bg);
    }
}
