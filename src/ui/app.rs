use crate::config::AppConfig;
use crate::game::{Board, Player, TurnController};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::game_view::{self, Theme};

/// How a finished round ended.
///
/// The board only answers yes/no questions about wins and fullness; the
/// shell derives the outcome right after each placement, while the winning
/// player is still the one to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

pub struct App {
    board: Board,
    turns: TurnController,
    selected_column: usize,
    outcome: Option<GameOutcome>,
    should_quit: bool,
    message: Option<String>,
    theme: Theme,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let board = Board::new(config.board.rows, config.board.cols);
        let selected_column = board.cols() / 2; // Start in middle
        App {
            board,
            turns: TurnController::new(),
            selected_column,
            outcome: None,
            should_quit: false,
            message: None,
            theme: Theme::from_display(&config.display),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.board.cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Columns are labelled 1-based, so '1' picks the first one
                if let Some(col) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    if col < self.board.cols() {
                        self.selected_column = col;
                    }
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Start a fresh round on the same board
    fn restart(&mut self) {
        self.board = Board::new(self.board.rows(), self.board.cols());
        self.turns = TurnController::new();
        self.outcome = None;
        self.selected_column = self.board.cols() / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.outcome.is_some() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let col = self.selected_column;
        // The board treats dropping into a full column as a contract
        // violation, so ask before placing.
        if self.board.is_column_full(col).unwrap_or(true) {
            self.message = Some("Column is full!".to_string());
            return;
        }

        let player = self.turns.current();
        if let Err(err) = self.board.place(col, player) {
            // The check above makes this unreachable; surface it rather than
            // dropping the move silently.
            self.message = Some(err.to_string());
            return;
        }

        if self.board.has_four_in_a_row(player) {
            self.outcome = Some(GameOutcome::Winner(player));
            self.message = Some(format!("{} wins!", player.name()));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            self.message = Some("It's a draw!".to_string());
        } else {
            self.turns.advance();
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(
            frame,
            &self.board,
            self.turns.current(),
            self.outcome,
            self.selected_column,
            &self.message,
            &self.theme,
        );
    }
}
