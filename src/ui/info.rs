use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub const WELCOME: &str = "Welcome to HexSplash!";

pub fn build_info_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        WELCOME,
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Cells"));
    lines.extend(section_lines(&[
        "Enter/r: Click on the color view to change it to a randomised color",
        "l: Press the lock to lock or unlock the view from being randomised",
        "Left/Right, Up/Down, Tab/Shift+Tab, 1-5: Choose a color view",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Palette"));
    lines.extend(section_lines(&[
        "Space/g: Generate new colors for every unlocked view",
        "u: Unlock all locks",
        "s: Export your palette",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("App"));
    lines.extend(section_lines(&[
        "i/?: View this modal",
        "App Settings: ~/.config/hexsplash/config.toml",
        "q: Quit",
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close.",
        Style::default().fg(Theme::dim()),
    )));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
