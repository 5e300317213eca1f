//! # Connect Four
//!
//! The classic two-player connection game in the terminal. Pieces drop to
//! the lowest free cell of a column, and the first player to line up four
//! of their own in a straight line wins. Board dimensions are configurable;
//! the four-in-a-row rule is not.
//!
//! ## Modules
//!
//! - [`game`]: board, players, and turn order
//! - [`ui`]: terminal UI for interactive play
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
