//! Turn controller: the only owner and writer of the game state.
//!
//! A round is a human move followed by the agent's reply:
//!
//! ```text
//! apply_player_move ──► InProgress + processing ──► run_agent_move ──► InProgress
//!         │                                                │
//!         └────────────► Terminal ◄────────────────────────┘
//! ```
//!
//! The pause between the two calls belongs to the presentation layer.
//! While it lasts the controller is `processing` and ignores human input.
//! Only [`TurnController::reset_game`] leaves a terminal state.

use super::agent::{AgentChoice, HeuristicAgent};
use super::events::{GameListener, NoopListener};
use super::rules::{check_outcome, is_cell_empty, winning_line};
use super::scoreboard::Scoreboard;
use super::types::{Board, GameState, GameStatus, Mark, Turn};
use crate::error::{GameError, IllegalMove};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Handle for a pending agent reply.
///
/// Goes stale when the game is reset before the reply runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentTicket {
    generation: u64,
}

impl AgentTicket {
    /// Game generation the ticket was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of [`TurnController::apply_player_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMoveOutcome {
    /// Move ignored; nothing changed and no events fired.
    Rejected(IllegalMove),
    /// Move placed; the agent should reply once the caller's delay elapses.
    AgentPending(AgentTicket),
    /// Move placed and it ended the game.
    Finished(GameStatus),
}

/// Result of [`TurnController::run_agent_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMoveOutcome {
    /// No agent reply was pending, or the ticket was stale.
    NotPending,
    /// The agent placed a mark.
    Placed {
        /// Cell and rule chosen.
        choice: AgentChoice,
        /// Status after the move.
        status: GameStatus,
    },
}

/// Owns the game state, applies moves and drives the agent.
#[derive(Debug)]
pub struct TurnController<L = NoopListener> {
    state: GameState,
    agent: HeuristicAgent,
    scoreboard: Scoreboard,
    listener: L,
}

impl TurnController<NoopListener> {
    /// Creates a controller without a listener.
    pub fn new(agent: HeuristicAgent) -> Self {
        Self::with_listener(agent, NoopListener)
    }

    /// Creates a controller whose agent uses a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(HeuristicAgent::seeded(seed))
    }
}

impl<L: GameListener> TurnController<L> {
    /// Creates a controller that reports to `listener`.
    pub fn with_listener(agent: HeuristicAgent, listener: L) -> Self {
        Self {
            state: GameState::new(),
            agent,
            scoreboard: Scoreboard::default(),
            listener,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        *self.state.status()
    }

    /// True while an agent reply is pending.
    pub fn is_processing(&self) -> bool {
        *self.state.processing()
    }

    /// Side to move.
    pub fn turn(&self) -> Turn {
        *self.state.turn()
    }

    /// Full state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Results of every game finished by this controller.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The agent driving the automated side.
    pub fn agent(&self) -> &HeuristicAgent {
        &self.agent
    }

    /// The listener receiving events.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Ticket for the agent reply pending right now, if any.
    pub fn pending_ticket(&self) -> Option<AgentTicket> {
        self.is_processing().then(|| self.ticket())
    }

    /// Places the human's mark at `index`.
    ///
    /// Moves on an occupied cell, after the game ended, or while the agent
    /// is thinking are ignored and reported as [`PlayerMoveOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] if `index` is not in 0-8.
    #[instrument(skip(self), fields(generation = *self.state.generation()))]
    pub fn apply_player_move(&mut self, index: usize) -> Result<PlayerMoveOutcome, GameError> {
        let empty = is_cell_empty(self.state.board(), index)?;

        let illegal = if self.status().is_terminal() {
            Some(IllegalMove::GameOver)
        } else if self.is_processing() {
            Some(IllegalMove::AgentThinking)
        } else if !empty {
            Some(IllegalMove::Occupied(index))
        } else {
            None
        };
        if let Some(reason) = illegal {
            debug!(%reason, "Ignoring player move");
            return Ok(PlayerMoveOutcome::Rejected(reason));
        }

        self.state.place(index, Mark::Player)?;
        self.listener.on_cell_marked(index, Mark::Player);

        let status = check_outcome(self.state.board());
        if status.is_terminal() {
            self.finish(status);
            return Ok(PlayerMoveOutcome::Finished(status));
        }

        self.state.set_processing(true);
        self.hand_turn_to(Turn::Agent);
        Ok(PlayerMoveOutcome::AgentPending(self.ticket()))
    }

    /// Lets the agent reply to the human's last move.
    ///
    /// Does nothing unless a reply is pending.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvariantViolation`] if the agent is asked to
    /// move with no empty cell, or picks an occupied one.
    #[instrument(skip(self), fields(generation = *self.state.generation()))]
    pub fn run_agent_move(&mut self) -> Result<AgentMoveOutcome, GameError> {
        if !self.is_processing() || self.status().is_terminal() {
            debug!("No agent move pending");
            return Ok(AgentMoveOutcome::NotPending);
        }

        let choice = self.agent.choose_cell(self.state.board()).inspect_err(|e| {
            error!(error = %e, board = ?self.state.board(), "Agent could not move");
        })?;
        if !is_cell_empty(self.state.board(), choice.index)? {
            let e = GameError::InvariantViolation(format!(
                "agent chose occupied cell {}",
                choice.index
            ));
            error!(error = %e, "Agent could not move");
            return Err(e);
        }

        self.state.place(choice.index, Mark::Agent)?;
        self.state.set_processing(false);
        self.listener.on_cell_marked(choice.index, Mark::Agent);
        debug!(index = choice.index, rule = %choice.rule, "Agent moved");

        let status = check_outcome(self.state.board());
        if status.is_terminal() {
            self.finish(status);
        } else {
            self.hand_turn_to(Turn::Human);
        }
        Ok(AgentMoveOutcome::Placed { choice, status })
    }

    /// Runs the agent reply promised by `ticket`.
    ///
    /// A ticket issued before the latest reset is ignored.
    ///
    /// # Errors
    ///
    /// Same as [`TurnController::run_agent_move`].
    #[instrument(skip(self))]
    pub fn run_scheduled_agent_move(
        &mut self,
        ticket: AgentTicket,
    ) -> Result<AgentMoveOutcome, GameError> {
        if ticket != self.ticket() {
            debug!(current = *self.state.generation(), "Dropping stale agent ticket");
            return Ok(AgentMoveOutcome::NotPending);
        }
        self.run_agent_move()
    }

    /// Clears the board and hands the first move to the human.
    ///
    /// Any pending agent ticket becomes stale. The scoreboard is kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.state.reset();
        info!(generation = *self.state.generation(), "Game reset");
        self.listener.on_turn_changed(Turn::Human);
    }

    fn ticket(&self) -> AgentTicket {
        AgentTicket {
            generation: *self.state.generation(),
        }
    }

    fn hand_turn_to(&mut self, turn: Turn) {
        self.state.set_turn(turn);
        self.listener.on_turn_changed(turn);
    }

    fn finish(&mut self, status: GameStatus) {
        let line = winning_line(self.state.board()).map(|(line, _)| line);
        self.state.set_status(status);
        self.state.set_processing(false);
        self.scoreboard.record(status);
        info!(%status, ?line, "Game over");
        self.listener.on_game_ended(status, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_not_pending_on_fresh_game() {
        let mut game = TurnController::seeded(0);
        assert_eq!(game.run_agent_move(), Ok(AgentMoveOutcome::NotPending));
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_pending_ticket_tracks_processing() {
        let mut game = TurnController::seeded(0);
        assert_eq!(game.pending_ticket(), None);
        let outcome = game.apply_player_move(0).unwrap();
        let PlayerMoveOutcome::AgentPending(ticket) = outcome else {
            panic!("expected agent to be pending, got {outcome:?}");
        };
        assert_eq!(game.pending_ticket(), Some(ticket));
        game.run_agent_move().unwrap();
        assert_eq!(game.pending_ticket(), None);
    }
}
