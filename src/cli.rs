//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};

/// Strictly Timeline - N-in-a-row tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "N-in-a-row tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Board edge length (overrides the config file)
        #[arg(short, long)]
        board_size: Option<usize>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = strictly_timeline::DEFAULT_CONFIG_PATH)]
        config: std::path::PathBuf,
    },

    /// Apply a sequence of moves and print the resulting position
    Replay {
        /// Board edge length
        #[arg(short, long, default_value_t = strictly_timeline::DEFAULT_BOARD_SIZE)]
        board_size: usize,

        /// Step to jump to after all moves are placed
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view model as JSON instead of a text board
        #[arg(long)]
        json: bool,

        /// Row-major square indices, played alternately by X and O
        indices: Vec<usize>,
    },
}
