//! tictac_agent - terminal front end
//!
//! Reads moves from stdin, waits out the agent's thinking delay and
//! renders the events the controller emits.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use std::sync::mpsc;
use std::time::Duration;
use tictac_agent::{
    AgentMoveOutcome, GameConfig, GameEvent, HeuristicRule, Mark, PlayerMoveOutcome, Position,
    TurnController,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Game = TurnController<mpsc::Sender<GameEvent>>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
            json_events,
        } => run_play(&config, seed, delay_ms, json_events),
        Command::Rules => {
            print_rules();
            Ok(())
        }
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictac_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_rules() {
    println!("The agent plays the first rule that applies:");
    for (rank, rule) in HeuristicRule::priority_order().enumerate() {
        println!("  {}. {}", rank + 1, rule);
    }
}

/// Interactive game loop on stdin/stdout.
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &std::path::Path,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    json_events: bool,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if seed.is_some() {
        config = config.with_seed(seed);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_thinking_delay_ms(delay_ms);
    }

    let (event_tx, event_rx) = mpsc::channel();
    let mut game: Game = TurnController::with_listener(config.build_agent(), event_tx);
    info!(seed = game.agent().seed(), "Starting game");

    println!("You are X. Enter 1-9 or a position name, 'r' to restart, 'q' to quit.");
    println!("{}\n", game.board().display(*config.show_positions()));

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read stdin")?;
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "restart" => {
                game.reset_game();
                drain_events(&event_rx, json_events);
                println!("New game.\n{}\n", game.board().display(*config.show_positions()));
                continue;
            }
            _ => {}
        }

        let Some(position) = Position::from_label_or_number(input) else {
            let open: Vec<String> = Position::valid_moves(game.board())
                .iter()
                .map(|p| format!("{} ({})", p.to_index() + 1, p.short()))
                .collect();
            println!("Unrecognised move '{}'. Open cells: {}", input, open.join(", "));
            continue;
        };

        match game.apply_player_move(position.to_index())? {
            PlayerMoveOutcome::Rejected(reason) => {
                println!("{}.", reason);
                continue;
            }
            PlayerMoveOutcome::Finished(_) => {}
            PlayerMoveOutcome::AgentPending(ticket) => {
                drain_events(&event_rx, json_events);
                println!("{}\n", game.board().display(*config.show_positions()));
                println!("Agent is thinking...");
                std::thread::sleep(Duration::from_millis(*config.thinking_delay_ms()));
                if let AgentMoveOutcome::Placed { choice, .. } =
                    game.run_scheduled_agent_move(ticket)?
                {
                    match Position::from_index(choice.index) {
                        Some(position) => println!("Agent plays {} ({}).", position, choice.rule),
                        None => println!("Agent plays cell {} ({}).", choice.index, choice.rule),
                    }
                }
            }
        }

        let ended = drain_events(&event_rx, json_events);
        println!("{}\n", game.board().display(*config.show_positions()));
        if ended {
            println!("{}  [{}]", game.status(), game.scoreboard());
            println!("Enter 'r' to play again or 'q' to quit.");
        }
    }

    info!(score = %game.scoreboard(), "Session finished");
    Ok(())
}

/// Prints pending events; returns true if the game ended.
fn drain_events(rx: &mpsc::Receiver<GameEvent>, json: bool) -> bool {
    let mut ended = false;
    for event in rx.try_iter() {
        if json {
            match serde_json::to_string(&event) {
                Ok(line) => eprintln!("{}", line),
                Err(e) => tracing::warn!(error = %e, "Failed to encode event"),
            }
        }
        match event {
            GameEvent::GameEnded { winning_line, .. } => {
                ended = true;
                if let Some(line) = winning_line {
                    let cells: Vec<String> = line.iter().map(|i| (i + 1).to_string()).collect();
                    println!("Winning line: {}", cells.join("-"));
                }
            }
            GameEvent::CellMarked {
                mark: Mark::Player,
                index,
            } => tracing::debug!(index, "Player marked cell"),
            GameEvent::CellMarked { .. } | GameEvent::TurnChanged(_) => {}
        }
    }
    ended
}
