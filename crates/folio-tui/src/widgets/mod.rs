//! Reusable rendering and input pieces shared by the screens.

pub mod form;
pub mod pane;
pub mod section;
pub mod sub_tabs;

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders},
};

use crate::theme;

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(area.x + x, area.y + y, width, height)
}

/// Rounded section frame with admin key hints along the bottom border.
pub fn section_block<'a>(title: &'a str, hints: Line<'a>, focused: bool) -> Block<'a> {
    let border = if focused {
        theme::border_focused()
    } else {
        theme::border_default()
    };
    Block::default()
        .title(format!(" {title} "))
        .title_style(theme::title_style())
        .title_bottom(hints)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}
