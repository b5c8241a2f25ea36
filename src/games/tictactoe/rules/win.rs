//! Win detection logic for tic-tac-toe.

use super::super::{Board, GameStatus, LINES, Line, Mark};
use super::draw::is_full;
use tracing::instrument;

/// Returns the first complete line in fixed order, with its owner.
///
/// Rows are checked before columns, columns before diagonals.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.map(|i| board.get(i).unwrap_or_default());
        (a != Mark::Empty && a == b && b == c).then_some((line, a))
    })
}

/// Classifies the board.
///
/// A complete line wins; otherwise a full board is a draw.
#[instrument]
pub fn check_outcome(board: &Board) -> GameStatus {
    if let Some(status) = winning_line(board).and_then(|(_, mark)| GameStatus::won_by(mark)) {
        return status;
    }
    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
