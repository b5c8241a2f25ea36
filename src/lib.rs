//! Tic-tac-toe engine with a heuristic opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a board (cell checks, win and draw
//!   detection, line-completion search)
//! - **Agent**: fixed-priority decision list (win, block, center, corner, any)
//! - **Controller**: owns the game state, sequences human and agent turns,
//!   and reports events to a listener
//!
//! Rendering, input capture and the agent's "thinking" pause belong to the
//! caller.
//!
//! # Example
//!
//! ```
//! use tictac_agent::{AgentMoveOutcome, GameStatus, PlayerMoveOutcome, TurnController};
//!
//! # fn example() -> Result<(), tictac_agent::GameError> {
//! let mut game = TurnController::seeded(42);
//!
//! if let PlayerMoveOutcome::AgentPending(ticket) = game.apply_player_move(4)? {
//!     // ... caller waits here ...
//!     let reply = game.run_scheduled_agent_move(ticket)?;
//!     assert!(matches!(reply, AgentMoveOutcome::Placed { .. }));
//! }
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod games;

// Crate-level exports - Configuration
pub use config::GameConfig;

// Crate-level exports - Errors
pub use error::{ConfigError, GameError, IllegalMove};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AgentChoice, AgentMoveOutcome, AgentRng, AgentTicket, Board, CELL_COUNT, CENTER, CORNERS,
    EventLog, GameEvent, GameListener, GameState, GameStatus, HeuristicAgent, HeuristicRule,
    LINES, Line, Mark, NoopListener, PlayerMoveOutcome, Position, Scoreboard, Turn,
    TurnController,
};

/// Board evaluation functions.
pub mod rules {
    pub use crate::games::tictactoe::rules::{
        check_outcome, find_completing_cell, is_cell_empty, is_full, winning_line,
    };
}
