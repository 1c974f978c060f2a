//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Cell, Move, rules};

use super::app::App;

/// Renders the title, the board and the status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new(app.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move  enter/space or 1-9 play  r new game  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let highlight = winning_cells(app);
    for row in 0..Move::SIZE {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, row, &highlight);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize, highlight: &[Move]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..Move::SIZE {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        if let Ok(at) = Move::new(row, col) {
            draw_cell(frame, cols[col * 2], app, at, highlight.contains(&at));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, at: Move, winning: bool) {
    let cell = app.game().board().get(at);
    let symbol = format!(" {} ", app.symbol(cell));

    let mut style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Player => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Opponent => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if cell == Cell::Opponent && app.game().last_move() == Some(at) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if winning {
        style = style.bg(Color::Green);
    }
    if at == *app.cursor() && app.game().is_active() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically centered in the three-line slot.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn winning_cells(app: &App) -> Vec<Move> {
    app.game()
        .outcome()
        .winner()
        .and_then(|mark| rules::winning_line(app.game().board(), mark))
        .map(Vec::from)
        .unwrap_or_default()
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
