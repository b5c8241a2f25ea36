//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) snapshot. Nothing here
//! mutates the board; the turn controller owns every write.

pub mod completion;
pub mod draw;
pub mod win;

pub use completion::find_completing_cell;
pub use draw::is_full;
pub use win::{check_outcome, winning_line};

use super::{Board, Mark};
use crate::error::GameError;
use tracing::instrument;

/// Returns true iff the cell at `index` is empty.
///
/// # Errors
///
/// Returns [`GameError::InvalidIndex`] if `index` is not in 0-8.
#[instrument]
pub fn is_cell_empty(board: &Board, index: usize) -> Result<bool, GameError> {
    board
        .get(index)
        .map(|mark| mark == Mark::Empty)
        .ok_or(GameError::InvalidIndex(index))
}
