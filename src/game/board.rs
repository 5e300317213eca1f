use super::player::Player;

/// Default number of rows for a standard board.
pub const DEFAULT_ROWS: usize = 6;
/// Default number of columns for a standard board.
pub const DEFAULT_COLS: usize = 7;

/// Connect Four is played to four in a row regardless of board size.
const WIN_LENGTH: usize = 4;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// Errors signalled by board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The requested column does not exist on this board.
    #[error("column {column} is out of range (the board has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },
    /// Every cell in the requested column is already occupied.
    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// The Connect Four grid.
///
/// Cells are addressed as `(row, col)` with row 0 at the top, so a piece
/// dropped into a column comes to rest at the highest row index still empty.
/// Each column keeps a cursor to its next free row; a column whose cursor is
/// gone is full.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    next_free_row: Vec<Option<usize>>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            next_free_row: vec![Some(rows - 1); cols],
        }
    }

    /// Number of rows on this board.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns on this board.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Next free row of the column, or `None` when the column is full.
    fn cursor(&self, col: usize) -> Result<Option<usize>, BoardError> {
        self.next_free_row
            .get(col)
            .copied()
            .ok_or(BoardError::ColumnOutOfRange {
                column: col,
                columns: self.cols,
            })
    }

    /// Check if a column has no free cell left.
    pub fn is_column_full(&self, col: usize) -> Result<bool, BoardError> {
        Ok(self.cursor(col)?.is_none())
    }

    /// Drop a piece for `player` into a column.
    ///
    /// The piece comes to rest on the lowest empty cell. Dropping into a
    /// column that does not exist or has no room left is an error and leaves
    /// the board untouched.
    pub fn place(&mut self, col: usize, player: Player) -> Result<(), BoardError> {
        let row = self
            .cursor(col)?
            .ok_or(BoardError::ColumnFull { column: col })?;
        self.set(row, col, player.to_cell());
        // A cursor already on the top row runs off the board here, which is
        // what marks the column as full.
        self.next_free_row[col] = row.checked_sub(1);
        Ok(())
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        self.next_free_row.iter().all(|cursor| cursor.is_none())
    }

    /// Check if `player` has four of their pieces in a straight line.
    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        let target = player.to_cell();
        self.check_horizontal(target)
            || self.check_vertical(target)
            || self.check_diagonal_down(target)
            || self.check_diagonal_up(target)
    }

    /// Check if the game has ended, either by a win or by a full board.
    pub fn is_game_over(&self) -> bool {
        self.is_full()
            || self.has_four_in_a_row(Player::One)
            || self.has_four_in_a_row(Player::Two)
    }

    /// Check for a horizontal run (left-right).
    fn check_horizontal(&self, target: Cell) -> bool {
        for row in 0..self.rows {
            for col in 0..self.cols.saturating_sub(WIN_LENGTH - 1) {
                if (0..WIN_LENGTH).all(|i| self.get(row, col + i) == target) {
                    return true;
                }
            }
        }
        false
    }

    /// Check for a vertical run (stacked in one column).
    fn check_vertical(&self, target: Cell) -> bool {
        for row in 0..self.rows.saturating_sub(WIN_LENGTH - 1) {
            for col in 0..self.cols {
                if (0..WIN_LENGTH).all(|i| self.get(row + i, col) == target) {
                    return true;
                }
            }
        }
        false
    }

    /// Check for a diagonal run (top-left to bottom-right, \).
    fn check_diagonal_down(&self, target: Cell) -> bool {
        for row in 0..self.rows.saturating_sub(WIN_LENGTH - 1) {
            for col in 0..self.cols.saturating_sub(WIN_LENGTH - 1) {
                if (0..WIN_LENGTH).all(|i| self.get(row + i, col + i) == target) {
                    return true;
                }
            }
        }
        false
    }

    /// Check for a diagonal run (bottom-left to top-right, /).
    fn check_diagonal_up(&self, target: Cell) -> bool {
        for row in 0..self.rows.saturating_sub(WIN_LENGTH - 1) {
            for col in (WIN_LENGTH - 1)..self.cols {
                if (0..WIN_LENGTH).all(|i| self.get(row + i, col - i) == target) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
