//! Command-line interface for tictac_agent.

use clap::{Parser, Subcommand};

/// Tic-tac-toe against a heuristic agent
#[derive(Parser, Debug)]
#[command(name = "tictac_agent")]
#[command(about = "Play tic-tac-toe against a heuristic agent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to the game config file
        #[arg(short, long, default_value = "tictac_agent.toml")]
        config: std::path::PathBuf,

        /// Fixed agent seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Agent thinking delay in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print every game event as a JSON line on stderr
        #[arg(long)]
        json_events: bool,
    },

    /// Print the agent's decision order
    Rules,
}
