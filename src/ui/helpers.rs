use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};

use crate::color::HexColor;

pub fn to_color(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// White on dark fills, black on light ones.
pub fn label_color(fill: HexColor) -> Color {
    to_color(fill.label_contrast())
}

pub fn lock_label(locked: bool) -> &'static str {
    if locked { "[locked]" } else { "[unlocked]" }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
