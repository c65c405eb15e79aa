use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{label_color, lock_label, to_color};
use crate::app::App;
use crate::types::{Cell, PALETTE_SIZE};

/// One full-width band per cell, filled with the cell's color.
pub fn render_cells<S>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
        .split(area);

    for (index, cell) in app.palette.cells().iter().enumerate() {
        let selected = index == app.selected_index;
        frame.render_widget(cell_widget(index, cell, selected), rows[index]);
    }
}

fn cell_widget(index: usize, cell: &Cell, selected: bool) -> Paragraph<'static> {
    let fill = to_color(cell.color);
    let label = label_color(cell.color);

    let mut hex_style = Style::default().fg(label).add_modifier(Modifier::BOLD);
    if selected {
        hex_style = hex_style.add_modifier(Modifier::UNDERLINED);
    }
    let lock_style = if cell.locked {
        Style::default().fg(label).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(label)
    };

    let line = Line::from(vec![
        Span::styled(if selected { "> " } else { "  " }, hex_style),
        Span::styled(format!("{}  ", index + 1), Style::default().fg(label)),
        Span::styled(cell.color.to_string(), hex_style),
        Span::raw("  "),
        Span::styled(lock_label(cell.locked), lock_style),
    ]);

    let border_type = if selected {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    Paragraph::new(Text::from(line))
        .alignment(Alignment::Left)
        .style(Style::default().bg(fill))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(if selected { label } else { fill })),
        )
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::color::{HexColor, RandomSource};
    use crate::config::Config;
    use crate::palette::Palette;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| render_cells(frame, frame.area(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_every_hex_and_lock_state() {
        let colors = ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"]
            .map(|hex| hex.parse::<HexColor>().unwrap());
        let mut app = App::new(
            Palette::with_colors(colors, RandomSource::seeded(1)),
            Config::default(),
        );
        app.palette.toggle_lock(2);

        let screen = render(&app);
        for hex in ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"] {
            assert!(screen.contains(hex), "missing {hex}");
        }
        assert_eq!(screen.matches("[locked]").count(), 1);
        assert_eq!(screen.matches("[unlocked]").count(), 4);
    }
}
