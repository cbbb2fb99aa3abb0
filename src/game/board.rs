use std::fmt;

use crate::error::BoardError;

use super::player::Player;

/// Standard Connect Four height.
pub const ROWS: usize = 6;
/// Standard Connect Four width.
pub const COLS: usize = 7;

/// The 6x7 board used by regular games.
pub type StandardBoard = Board<ROWS, COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    One,
    Two,
}

impl Cell {
    /// Decode the integer form used by list-of-lists boards (0, 1 or 2).
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::One),
            2 => Some(Cell::Two),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::One => 1,
            Cell::Two => 2,
        }
    }

    /// The player occupying this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }
}

/// A rectangular grid of cells. Row 0 is the top.
///
/// Dimensions are part of the type, so a board can't be ragged. Dynamic input
/// goes through [`Board::try_from_rows`], which rejects anything that does not
/// fit `ROWS x COLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const R: usize, const C: usize> {
    cells: [[Cell; C]; R],
}

impl<const R: usize, const C: usize> Board<R, C> {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; C]; R],
        }
    }

    pub fn from_cells(cells: [[Cell; C]; R]) -> Self {
        Board { cells }
    }

    /// Build a board from integer codes, rejecting anything outside {0, 1, 2}.
    pub fn from_codes(codes: &[[u8; C]; R]) -> Result<Self, BoardError> {
        let mut cells = [[Cell::Empty; C]; R];
        for (row, line) in codes.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                cells[row][col] =
                    Cell::from_code(value).ok_or(BoardError::InvalidCell { row, col, value })?;
            }
        }
        Ok(Board { cells })
    }

    /// Build a board from a dynamically sized list of rows.
    pub fn try_from_rows<T: AsRef<[u8]>>(rows: &[T]) -> Result<Self, BoardError> {
        if rows.len() != R {
            return Err(BoardError::RowCount {
                expected: R,
                found: rows.len(),
            });
        }

        let mut codes = [[0u8; C]; R];
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != C {
                return Err(BoardError::RowLength {
                    row,
                    expected: C,
                    found: line.len(),
                });
            }
            codes[row].copy_from_slice(line);
        }
        Self::from_codes(&codes)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Cell; C]; R] {
        &self.cells
    }

    pub fn codes(&self) -> [[u8; C]; R] {
        self.cells.map(|line| line.map(Cell::code))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= C {
            return true;
        }
        match self.cells.first() {
            Some(top) => top[col] != Cell::Empty,
            None => true,
        }
    }

    /// Return a copy of this board with a piece dropped into `col`.
    ///
    /// The piece lands in the lowest empty row, as in a real game.
    pub fn with_drop(mut self, col: usize, player: Player) -> Result<Self, BoardError> {
        if col >= C {
            return Err(BoardError::InvalidColumn { col, width: C });
        }
        if self.is_column_full(col) {
            return Err(BoardError::ColumnFull(col));
        }

        let row = (0..R)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(BoardError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(self)
    }
}

impl<const R: usize, const C: usize> Default for Board<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize> fmt::Display for Board<R, C> {
    /// One `[a, b, c]` line of codes per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, cell) in line.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", cell.code())?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
