use ratatui::style::Color;

/// Chrome colors around the palette; the cells use their own colors.
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Locked cell marker
    pub fn locked() -> Color {
        Color::Yellow
    }

    /// Status messages
    pub fn status() -> Color {
        Color::LightGreen
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Headings inside popups
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
