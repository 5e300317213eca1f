use crate::config::{DisplayConfig, PieceColor};
use crate::game::{Board, Cell, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::GameOutcome;

/// Terminal colors for each player's pieces, resolved from the config once.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    player_one: Color,
    player_two: Color,
}

impl Theme {
    pub fn from_display(display: &DisplayConfig) -> Self {
        Theme {
            player_one: terminal_color(display.player_one),
            player_two: terminal_color(display.player_two),
        }
    }

    pub fn player_color(&self, player: Player) -> Color {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

fn terminal_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Blue => Color::Blue,
        PieceColor::Green => Color::Green,
        PieceColor::Magenta => Color::Magenta,
        PieceColor::Cyan => Color::Cyan,
        PieceColor::White => Color::White,
    }
}

pub fn render(
    frame: &mut Frame,
    board: &Board,
    current: Player,
    outcome: Option<GameOutcome>,
    selected_column: usize,
    message: &Option<String>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(board.rows() as u16 + 4), // Board
            Constraint::Length(3),                    // Message
            Constraint::Length(3),                    // Controls
        ])
        .split(frame.area());

    render_header(frame, current, outcome, theme, chunks[0]);
    render_board(frame, board, selected_column, theme, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    current: Player,
    outcome: Option<GameOutcome>,
    theme: &Theme,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match outcome {
        Some(GameOutcome::Winner(player)) => (
            format!("{} wins!", player.name()),
            theme.player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Game Over: Draw".to_string(), Color::Gray),
        None => (
            format!("Current Player: {}", current.name()),
            theme.player_color(current),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    theme: &Theme,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.cols() {
        let label = format!(" {} ", (col + 1) % 10);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border, sized to the configured width
    let span = "═".repeat(board.cols() * 3 + 1);
    lines.push(Line::from(format!("  ╔{span}╗")));

    // Board rows
    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.cols() {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::One => (" ● ", theme.player_color(Player::One)),
                Cell::Two => (" ● ", theme.player_color(Player::Two)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!("  ╚{span}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..board.cols() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←/→ or 1-9: Select  |  Enter/Space: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
