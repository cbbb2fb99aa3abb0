use super::board::Board;
use super::player::Player;
use super::winner::Winner;

/// Number of aligned pieces needed to win.
pub const RUN_LENGTH: usize = 4;

/// A line direction a run of four can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right (`\`).
    DiagonalDownRight,
    /// Top-right to bottom-left (`/`).
    DiagonalDownLeft,
}

impl Direction {
    /// Scanner order used when resolving a winner.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::DiagonalDownRight => "diagonal down-right",
            Direction::DiagonalDownLeft => "diagonal down-left",
        }
    }

    /// Start cells of every window of [`RUN_LENGTH`] cells that fits on a
    /// `rows x cols` board, top to bottom then left to right.
    pub fn windows(self, rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
        let (row_starts, col_starts) = match self {
            Direction::Horizontal => (0..rows, 0..starts(cols)),
            Direction::Vertical => (0..starts(rows), 0..cols),
            Direction::DiagonalDownRight => (0..starts(rows), 0..starts(cols)),
            // The window walks left, so its start needs RUN_LENGTH - 1 columns to its left.
            Direction::DiagonalDownLeft => (0..starts(rows), RUN_LENGTH - 1..cols),
        };
        row_starts.flat_map(move |row| col_starts.clone().map(move |col| (row, col)))
    }

    /// The `step`-th cell of the window starting at `start`.
    fn offset(self, (row, col): (usize, usize), step: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col + step),
            Direction::Vertical => (row + step, col),
            Direction::DiagonalDownRight => (row + step, col + step),
            Direction::DiagonalDownLeft => (row + step, col - step),
        }
    }
}

/// How many window starts fit along a dimension of length `len`.
fn starts(len: usize) -> usize {
    (len + 1).saturating_sub(RUN_LENGTH)
}

/// Four aligned cells held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub owner: Player,
    pub direction: Direction,
    /// `(row, col)` of each cell, starting from the scan origin.
    pub cells: [(usize, usize); RUN_LENGTH],
}

/// Find the first run of four along `direction`.
///
/// Runs of empty cells are never reported.
pub fn scan<const R: usize, const C: usize>(
    board: &Board<R, C>,
    direction: Direction,
) -> Option<Run> {
    direction.windows(R, C).find_map(|start| {
        let cells: [(usize, usize); RUN_LENGTH] =
            std::array::from_fn(|step| direction.offset(start, step));
        let owner = board.get(start.0, start.1).owner()?;
        cells
            .iter()
            .all(|&(row, col)| board.get(row, col) == owner.to_cell())
            .then_some(Run {
                owner,
                direction,
                cells,
            })
    })
}

pub fn check_horizontal<const R: usize, const C: usize>(board: &Board<R, C>) -> Winner {
    scan(board, Direction::Horizontal).into()
}

pub fn check_vertical<const R: usize, const C: usize>(board: &Board<R, C>) -> Winner {
    scan(board, Direction::Vertical).into()
}

pub fn check_diagonal_down_right<const R: usize, const C: usize>(board: &Board<R, C>) -> Winner {
    scan(board, Direction::DiagonalDownRight).into()
}

pub fn check_diagonal_down_left<const R: usize, const C: usize>(board: &Board<R, C>) -> Winner {
    scan(board, Direction::DiagonalDownLeft).into()
}
