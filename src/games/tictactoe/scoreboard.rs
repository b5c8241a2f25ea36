//! Running tally of finished games.

use super::types::GameStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Results recorded by one controller, from the human's point of view.
///
/// Survives `reset_game`; only a new controller starts from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games the human won.
    wins: u32,
    /// Games the agent won.
    losses: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Records a finished game. `InProgress` is ignored.
    #[instrument]
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::PlayerWon => self.wins += 1,
            GameStatus::AgentWon => self.losses += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Number of finished games.
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Human win rate as a percentage (0.0-100.0).
    pub fn win_rate(&self) -> f64 {
        if self.total_games() == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_games()) * 100.0
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} / Agent {} / Draws {}",
            self.wins, self.losses, self.draws
        )
    }
}
