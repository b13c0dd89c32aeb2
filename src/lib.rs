//! Strictly Timeline library - N-in-a-row tic-tac-toe with time travel
//!
//! The game core is a pure reducer over an explicit [`GameState`]. Frontends
//! send [`Action`]s and draw the [`ViewModel`] derived after each one.
//!
//! # Architecture
//!
//! - **Rules**: win detection over every row, column and both diagonals
//! - **Reducer**: history, step pointer, move-order flag and board size
//! - **Invariants / contracts**: checkable statements of what the reducer guarantees
//! - **View**: the read-only model a renderer consumes
//! - **Config**: TOML settings shared by the frontends
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{Action, GameState, Player, reduce};
//!
//! let state = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .fold(GameState::new(3), |s, i| reduce(&s, Action::PlaceMark(i)));
//!
//! let winner = state.current_winner().unwrap();
//! assert_eq!(winner.player, Player::X);
//! assert_eq!(winner.line, vec![0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Action, Board, BoardError, CellHighlight, CellView, DEFAULT_BOARD_SIZE, GAME_START_LABEL,
    GameState, GameStatus, MAX_BOARD_SIZE, Move, MoveEntry, Outcome, Player, Rejection, Square,
    ViewModel, WinningLine, calculate_winner, parse_board_size, reduce,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{is_draw, lines};

// Crate-level exports - Invariants and contracts
pub use games::tictactoe::contracts::{Contract, PlaceMarkContract};
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
