//! Game configuration loaded from TOML.

use crate::error::ConfigError;
use crate::games::tictactoe::{AgentRng, HeuristicAgent};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// ```toml
/// seed = 42
/// thinking_delay_ms = 500
/// show_positions = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Fixed seed for the agent's tie-breaks; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before the agent replies, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// Show 1-9 in empty cells when printing the board.
    #[serde(default = "default_show_positions")]
    show_positions: bool,
}

fn default_thinking_delay_ms() -> u64 {
    500
}

fn default_show_positions() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            thinking_delay_ms: default_thinking_delay_ms(),
            show_positions: default_show_positions(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the thinking delay.
    pub fn with_thinking_delay_ms(mut self, delay_ms: u64) -> Self {
        self.thinking_delay_ms = delay_ms;
        self
    }

    /// Builds the agent described by this config.
    pub fn build_agent(&self) -> HeuristicAgent {
        match self.seed {
            Some(seed) => HeuristicAgent::seeded(seed),
            None => HeuristicAgent::new(AgentRng::from_entropy()),
        }
    }
}
