//! Tic-tac-toe against a heuristic agent.

mod agent;
mod controller;
mod events;
mod position;
mod rng;
pub mod rules;
mod scoreboard;
mod types;

pub use agent::{AgentChoice, HeuristicAgent, HeuristicRule};
pub use controller::{AgentMoveOutcome, AgentTicket, PlayerMoveOutcome, TurnController};
pub use events::{EventLog, GameEvent, GameListener, NoopListener};
pub use position::Position;
pub use rng::AgentRng;
pub use scoreboard::Scoreboard;
pub use types::{Board, CELL_COUNT, CENTER, CORNERS, GameState, GameStatus, LINES, Line, Mark, Turn};
