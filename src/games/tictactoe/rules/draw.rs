//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|m| *m != Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_outcome;
    use super::*;
    use crate::games::tictactoe::GameStatus;

    const X: Mark = Mark::Player;
    const O: Mark = Mark::Agent;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(4, X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_cells([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert_eq!(check_outcome(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert_eq!(check_outcome(&board), GameStatus::PlayerWon);
    }
}
