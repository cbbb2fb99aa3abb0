//! Reference positions with known outcomes.

use crate::error::BoardError;

use super::board::{StandardBoard, COLS, ROWS};
use super::player::Player;
use super::winner::Winner;

/// A named board together with the result it should produce.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub codes: [[u8; COLS]; ROWS],
    pub expected: Winner,
}

impl Sample {
    pub fn board(&self) -> Result<StandardBoard, BoardError> {
        StandardBoard::from_codes(&self.codes)
    }
}

/// Player One wins along a `/` diagonal ending in the bottom-left area.
pub const DIAGONAL_WIN: Sample = Sample {
    name: "board 1",
    codes: [
        [0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 0, 0],
        [0, 2, 2, 1, 1, 0, 0],
        [0, 2, 1, 2, 2, 0, 1],
        [2, 1, 1, 1, 2, 0, 2],
    ],
    expected: Winner::Player(Player::One),
};

/// Player Two wins across row 3.
pub const HORIZONTAL_WIN: Sample = Sample {
    name: "board 2",
    codes: [
        [0, 0, 2, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 0, 0],
        [0, 2, 2, 2, 2, 1, 0],
        [0, 1, 1, 2, 2, 2, 0],
        [2, 2, 1, 1, 1, 2, 0],
    ],
    expected: Winner::Player(Player::Two),
};

pub const NO_WIN: Sample = Sample {
    name: "board 3",
    codes: [
        [0, 0, 0, 2, 0, 0, 0],
        [0, 0, 0, 1, 0, 0, 0],
        [0, 0, 1, 1, 2, 2, 0],
        [0, 1, 2, 1, 2, 2, 0],
        [0, 2, 2, 0, 1, 1, 0],
        [0, 1, 1, 2, 1, 2, 0],
    ],
    expected: Winner::NoWinner,
};

pub fn all() -> [Sample; 3] {
    [DIAGONAL_WIN, HORIZONTAL_WIN, NO_WIN]
}
