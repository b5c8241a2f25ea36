//! Line-completion search shared by the win and block heuristics.

use super::super::{Board, LINES, Mark};
use tracing::instrument;

/// Finds the empty cell that would give `mark` three in a row.
///
/// Scans lines in fixed order and returns the empty cell of the first
/// line holding exactly two `mark`s and one empty cell.
#[instrument]
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&i| board.get(i) == Some(mark))
            .count();
        let mut empty = line.iter().copied().filter(|&i| board.get(i) == Some(Mark::Empty));
        match (owned, empty.next(), empty.next()) {
            (2, Some(cell), None) => Some(cell),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_in_top_row() {
        let mut board = Board::new();
        board.set(0, Mark::Player).unwrap();
        board.set(1, Mark::Player).unwrap();
        assert_eq!(find_completing_cell(&board, Mark::Player), Some(2));
        assert_eq!(find_completing_cell(&board, Mark::Agent), None);
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let mut board = Board::new();
        board.set(0, Mark::Player).unwrap();
        board.set(1, Mark::Player).unwrap();
        board.set(2, Mark::Agent).unwrap();
        assert_eq!(find_completing_cell(&board, Mark::Player), None);
    }

    #[test]
    fn test_gap_in_the_middle() {
        let mut board = Board::new();
        board.set(2, Mark::Agent).unwrap();
        board.set(6, Mark::Agent).unwrap();
        assert_eq!(find_completing_cell(&board, Mark::Agent), Some(4));
    }

    #[test]
    fn test_empty_mark_never_completes() {
        assert_eq!(find_completing_cell(&Board::new(), Mark::Empty), None);
    }
}
