use tracing::debug;

use super::board::Board;
use super::player::Player;
use super::scan::{scan, Direction, Run};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winner {
    #[default]
    NoWinner,
    Player(Player),
}

impl Winner {
    /// Integer form of the result: 0 for no winner, otherwise the player number.
    pub fn code(self) -> u8 {
        match self {
            Winner::NoWinner => 0,
            Winner::Player(player) => player.code(),
        }
    }
}

impl From<Option<Player>> for Winner {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Winner::NoWinner, Winner::Player)
    }
}

impl From<Option<Run>> for Winner {
    fn from(run: Option<Run>) -> Self {
        run.map(|run| run.owner).into()
    }
}

/// Find the run that decides the game, trying each direction in
/// [`Direction::PRIORITY`] order.
///
/// A board holding several runs reports whichever one the scan reaches first.
pub fn find_winning_run<const R: usize, const C: usize>(board: &Board<R, C>) -> Option<Run> {
    let run = Direction::PRIORITY
        .iter()
        .find_map(|&direction| scan(board, direction))?;
    debug!(
        player = run.owner.code(),
        direction = run.direction.name(),
        row = run.cells[0].0,
        col = run.cells[0].1,
        "winning run found"
    );
    Some(run)
}

/// Determine the winner of a board, if any.
pub fn check_winner<const R: usize, const C: usize>(board: &Board<R, C>) -> Winner {
    find_winning_run(board).into()
}
