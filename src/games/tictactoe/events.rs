//! Notifications sent from the turn controller to its presentation layer.

use super::types::{GameStatus, Line, Mark, Turn};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use tracing::warn;

/// Something the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    CellMarked {
        /// Cell index (0-8).
        index: usize,
        /// Mark placed.
        mark: Mark,
    },
    /// The game reached a terminal status.
    GameEnded {
        /// Final status.
        status: GameStatus,
        /// Line to highlight, if someone won.
        winning_line: Option<Line>,
    },
    /// The side to move changed.
    TurnChanged(Turn),
}

/// Receives controller callbacks. Every method defaults to a no-op.
pub trait GameListener {
    /// A mark was placed at `index`.
    fn on_cell_marked(&mut self, _index: usize, _mark: Mark) {}

    /// The game ended.
    fn on_game_ended(&mut self, _status: GameStatus, _winning_line: Option<Line>) {}

    /// The side to move changed.
    fn on_turn_changed(&mut self, _turn: Turn) {}
}

/// Listener that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl GameListener for NoopListener {}

/// Listener that records events in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameListener for EventLog {
    fn on_cell_marked(&mut self, index: usize, mark: Mark) {
        self.events.push(GameEvent::CellMarked { index, mark });
    }

    fn on_game_ended(&mut self, status: GameStatus, winning_line: Option<Line>) {
        self.events.push(GameEvent::GameEnded {
            status,
            winning_line,
        });
    }

    fn on_turn_changed(&mut self, turn: Turn) {
        self.events.push(GameEvent::TurnChanged(turn));
    }
}

/// Forwards events over a channel; a closed receiver is logged and ignored.
impl GameListener for mpsc::Sender<GameEvent> {
    fn on_cell_marked(&mut self, index: usize, mark: Mark) {
        forward(self, GameEvent::CellMarked { index, mark });
    }

    fn on_game_ended(&mut self, status: GameStatus, winning_line: Option<Line>) {
        forward(
            self,
            GameEvent::GameEnded {
                status,
                winning_line,
            },
        );
    }

    fn on_turn_changed(&mut self, turn: Turn) {
        forward(self, GameEvent::TurnChanged(turn));
    }
}

fn forward(tx: &mpsc::Sender<GameEvent>, event: GameEvent) {
    if let Err(e) = tx.send(event) {
        warn!(event = ?e.0, "Event receiver dropped");
    }
}
