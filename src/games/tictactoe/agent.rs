//! Heuristic opponent.
//!
//! The agent walks a fixed-priority decision list and plays the cell
//! picked by the first rule that applies:
//!
//! 1. [`HeuristicRule::WinNow`] completes one of its own lines.
//! 2. [`HeuristicRule::Block`] fills the human's completing cell.
//! 3. [`HeuristicRule::Center`] takes the center.
//! 4. [`HeuristicRule::Corner`] takes a random empty corner.
//! 5. [`HeuristicRule::AnyRemaining`] takes a random empty cell.
//!
//! There is no lookahead; the agent can be beaten. Corners are always
//! preferred over edges.

use super::position::Position;
use super::rng::AgentRng;
use super::rules::find_completing_cell;
use super::types::{Board, CENTER, Mark};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// One entry of the agent's decision list, in priority order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum HeuristicRule {
    /// Complete an agent line.
    #[display("win now")]
    WinNow,
    /// Stop the human from completing a line.
    #[display("block")]
    Block,
    /// Take the center.
    #[display("center")]
    Center,
    /// Take a random empty corner.
    #[display("corner")]
    Corner,
    /// Take any random empty cell.
    #[display("any remaining")]
    AnyRemaining,
}

impl HeuristicRule {
    /// Rules in the order the agent tries them.
    pub fn priority_order() -> impl Iterator<Item = HeuristicRule> {
        HeuristicRule::iter()
    }

    /// Returns the cell this rule would play, or `None` if it does not apply.
    ///
    /// Only `Corner` and `AnyRemaining` draw from `rng`.
    #[instrument(skip(rng))]
    pub fn select(self, board: &Board, rng: &mut AgentRng) -> Option<usize> {
        match self {
            HeuristicRule::WinNow => find_completing_cell(board, Mark::Agent),
            HeuristicRule::Block => find_completing_cell(board, Mark::Player),
            HeuristicRule::Center => (board.get(CENTER) == Some(Mark::Empty)).then_some(CENTER),
            HeuristicRule::Corner => {
                let open: Vec<usize> = Position::CORNERS
                    .into_iter()
                    .map(Position::to_index)
                    .filter(|&i| board.get(i) == Some(Mark::Empty))
                    .collect();
                rng.choose(&open).copied()
            }
            HeuristicRule::AnyRemaining => rng.choose(&board.empty_cells()).copied(),
        }
    }
}

/// A cell chosen by the agent and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct AgentChoice {
    /// Cell index (0-8).
    pub index: usize,
    /// Rule that produced the cell.
    pub rule: HeuristicRule,
}

/// Fixed-priority heuristic opponent.
#[derive(Debug, Clone)]
pub struct HeuristicAgent {
    rng: AgentRng,
}

impl HeuristicAgent {
    /// Creates an agent drawing tie-breaks from `rng`.
    pub fn new(rng: AgentRng) -> Self {
        Self { rng }
    }

    /// Creates an agent with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(AgentRng::new(seed))
    }

    /// Seed of the agent's RNG.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Picks the agent's next cell without touching the board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvariantViolation`] if the board has no empty
    /// cell. A full board must already have been classified as finished.
    #[instrument(skip(self))]
    pub fn choose_cell(&mut self, board: &Board) -> Result<AgentChoice, GameError> {
        if board.empty_cells().is_empty() {
            return Err(GameError::InvariantViolation(
                "agent asked to move on a full board".to_string(),
            ));
        }

        for rule in HeuristicRule::priority_order() {
            if let Some(index) = rule.select(board, &mut self.rng) {
                debug!(%rule, index, "Agent rule matched");
                return Ok(AgentChoice::new(index, rule));
            }
        }

        // AnyRemaining matches whenever a cell is empty.
        Err(GameError::InvariantViolation(
            "no heuristic rule matched a board with empty cells".to_string(),
        ))
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new(AgentRng::from_entropy())
    }
}
