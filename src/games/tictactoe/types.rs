//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Corner cells in row-major order.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Three cell indices that win the game when uniformly marked.
pub type Line = [usize; 3];

/// Rows, then columns, then diagonals.
///
/// The order decides which line is reported when several are complete
/// and which threat `find_completing_cell` finds first.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// The symbol occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// The human player's mark (X).
    Player,
    /// The heuristic agent's mark (O).
    Agent,
}

impl Mark {
    /// Single-character symbol used when printing the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Agent => 'O',
            Mark::Empty => ' ',
        }
    }
}

/// Whose move is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Turn {
    /// The human moves next.
    #[display("human")]
    Human,
    /// The agent moves next.
    #[display("agent")]
    Agent,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine marks in row-major order.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the mark at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Sets the mark at the given index.
    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::InvalidIndex(index))?;
        *cell = mark;
        Ok(())
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Indices of every empty cell, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|m| **m != Mark::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// With `show_positions`, empty cells show their 1-based number.
    pub fn display(&self, show_positions: bool) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Mark::Empty if show_positions => char::from(b'1' + index as u8),
                    mark => mark.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// The human completed a line.
    #[display("you win")]
    PlayerWon,
    /// The agent completed a line.
    #[display("agent wins")]
    AgentWon,
    /// Board is full with no completed line.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// True for every status except `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Status reported when `mark` owns a complete line.
    pub fn won_by(mark: Mark) -> Option<Self> {
        match mark {
            Mark::Player => Some(GameStatus::PlayerWon),
            Mark::Agent => Some(GameStatus::AgentWon),
            Mark::Empty => None,
        }
    }
}

/// Authoritative game state owned by the turn controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Cached classification of `board`.
    status: GameStatus,
    /// Whose move is next.
    turn: Turn,
    /// Set between an accepted human move and the agent's reply.
    processing: bool,
    /// Bumped on every reset so stale agent tickets can be ignored.
    generation: u64,
}

impl GameState {
    /// Creates a fresh game with the human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            turn: Turn::Human,
            processing: false,
            generation: 0,
        }
    }

    /// Places a mark; the caller has already validated the move.
    pub(super) fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        self.board.set(index, mark)
    }

    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(super) fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
    }

    pub(super) fn set_processing(&mut self, processing: bool) {
        self.processing = processing;
    }

    /// Clears the board and advances the generation.
    pub(super) fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new();
        self.generation = generation;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
