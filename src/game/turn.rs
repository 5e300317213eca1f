use super::player::Player;

/// Tracks whose turn it is.
///
/// The driving loop owns one of these next to the [`Board`](super::Board),
/// asking for the current player before each move and advancing afterwards.
/// Player one always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    current: Player,
}

impl TurnController {
    /// Create a controller with player one to move.
    pub fn new() -> Self {
        TurnController {
            current: Player::One,
        }
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Hand the turn to the other player.
    pub fn advance(&mut self) {
        self.current = self.current.other();
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
