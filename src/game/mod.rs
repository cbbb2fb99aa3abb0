//! Core Connect Four logic: board representation, players, line scanners and
//! the winner resolver.

mod board;
mod player;
pub mod samples;
mod scan;
mod winner;

pub use board::{Board, Cell, StandardBoard, COLS, ROWS};
pub use player::Player;
pub use scan::{
    check_diagonal_down_left, check_diagonal_down_right, check_horizontal, check_vertical, scan,
    Direction, Run, RUN_LENGTH,
};
pub use winner::{check_winner, find_winning_run, Winner};
