use super::board::Cell;

/// Identity of one of the two players.
///
/// This is pure identity: which glyph or color a player's pieces get on
/// screen is decided by the rendering layer, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to the board marker they place
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_marker() {
        assert_eq!(Player::One.to_cell(), Cell::One);
        assert_eq!(Player::Two.to_cell(), Cell::Two);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "Player 1");
        assert_eq!(Player::Two.name(), "Player 2");
    }
}
