mod helpers;
mod info;
mod palette;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, SharePopup};
use helpers::centered_rect;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw<S>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  HexSplash  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "palette generator",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} locked", app.palette.locked_count()),
            Style::default().fg(Theme::locked()),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(chrome_block());
    frame.render_widget(header, layout[0]);

    palette::render_cells(frame, layout[1], app);

    let footer = Paragraph::new(Text::from(footer_line(app)))
        .alignment(Alignment::Left)
        .block(chrome_block());
    frame.render_widget(footer, layout[2]);

    if app.info_visible {
        render_info_popup(frame);
    }
    if let Some(popup) = &app.share_popup {
        render_share_popup(frame, popup);
    }
}

fn chrome_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn footer_line<S>(app: &App<S>) -> Line<'_> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Theme::status()),
        ));
    }
    Line::from(Span::styled(
        " Enter: Roll  space: Generate  l: Lock  u: Unlock all  s: Share  ?: Info  q: Quit",
        Style::default().fg(Theme::dim()),
    ))
}

fn render_info_popup(frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(info::build_info_text())
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(chrome_block().title(" Info "));
    frame.render_widget(popup, area);
}

fn render_share_popup(frame: &mut Frame, popup: &SharePopup) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(
            "Share palette",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", popup.format.label()),
            Style::default().fg(Theme::secondary()),
        ),
    ]));
    lines.push(Line::from(""));
    lines.extend(popup.payload.lines().map(|line| {
        Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(Theme::text()),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab: switch format. Enter: save file. Esc: cancel.",
        Style::default().fg(Theme::dim()),
    )));

    let popup_widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(chrome_block().title(" Share "));
    frame.render_widget(popup_widget, area);
}
