//! Core Connect Four game logic: the gravity-fed board with four-in-a-row
//! detection, player identity, and turn alternation.

mod board;
mod player;
mod turn;

pub use board::{Board, BoardError, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use turn::TurnController;
