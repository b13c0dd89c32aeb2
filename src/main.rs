//! Strictly Timeline - Unified CLI
//!
//! Terminal play and headless replay over the same reducer.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_timeline::{Action, AppConfig, GameState, ViewModel};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { board_size, config } => run_play(board_size, config),
        Command::Replay {
            board_size,
            jump,
            json,
            indices,
        } => run_replay(board_size, jump, json, indices),
    }
}

/// Run the terminal frontend
fn run_play(board_size: Option<usize>, config_path: std::path::PathBuf) -> Result<()> {
    let mut config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if let Some(size) = board_size {
        config = config.with_board_size(size)?;
    }

    tui::run_tui(&config)
}

/// Apply moves headlessly and print the result
#[instrument(skip(indices), fields(moves = indices.len()))]
fn run_replay(board_size: usize, jump: Option<usize>, json: bool, indices: Vec<usize>) -> Result<()> {
    initialize_stderr_tracing();

    let config = AppConfig::default().with_board_size(board_size)?;
    let mut state = GameState::new(*config.board_size());

    let actions = indices
        .into_iter()
        .map(Action::PlaceMark)
        .chain(jump.map(Action::JumpTo));
    for action in actions {
        let outcome = state.apply(action.clone());
        if !outcome.is_applied() {
            warn!(?action, ?outcome, "Replay action had no effect");
        }
    }

    let view = ViewModel::from_state(&state);
    info!(status = %view.status_text, step = view.current_step, "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}\n\n{}", state.current_board().display(), view.status_text);
        for entry in &view.move_list {
            let marker = if entry.step == view.current_step { '>' } else { ' ' };
            println!("{marker} {}", entry.label);
        }
    }

    Ok(())
}

#[instrument]
fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_timeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
