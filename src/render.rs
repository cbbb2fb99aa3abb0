//! Plain-text rendering of boards and results.

use crate::config::DisplayConfig;
use crate::game::{Board, Run, Winner};

/// Render a board one row per line, cells separated by a space.
pub fn render_board<const R: usize, const C: usize>(
    board: &Board<R, C>,
    display: &DisplayConfig,
) -> String {
    let mut lines = Vec::with_capacity(R);
    for row in board.rows() {
        let glyphs: Vec<&str> = row.iter().map(|&cell| display.glyph(cell)).collect();
        lines.push(glyphs.join(" "));
    }
    lines.join("\n")
}

pub fn render_verdict(winner: Winner, display: &DisplayConfig) -> String {
    match winner {
        Winner::Player(player) => format!("Winner is {}", display.label(player)),
        Winner::NoWinner => "No winner".to_string(),
    }
}

/// Describe where a run sits, e.g. `horizontal from (3, 1) to (3, 4)`.
pub fn describe_run(run: &Run) -> String {
    let (first, last) = (run.cells[0], run.cells[run.cells.len() - 1]);
    format!(
        "{} from ({}, {}) to ({}, {})",
        run.direction.name(),
        first.0,
        first.1,
        last.0,
        last.1
    )
}
