//! N-in-a-row tic-tac-toe with history and time travel.
//!
//! - [`types`]: board, squares, players, move coordinates
//! - [`rules`]: win and draw detection
//! - [`reducer`]: the state transitions driven by [`Action`]
//! - [`view`]: the read-only model handed to renderers

mod action;
pub mod contracts;
pub mod invariants;
mod reducer;
pub mod rules;
mod state;
pub mod types;
mod view;

pub use action::{Action, Outcome, Rejection};
pub use reducer::{parse_board_size, reduce};
pub use rules::{WinningLine, calculate_winner};
pub use state::{GAME_START_LABEL, GameState, MoveEntry};
pub use types::{
    Board, BoardError, DEFAULT_BOARD_SIZE, GameStatus, MAX_BOARD_SIZE, Move, Player, Square,
};
pub use view::{CellHighlight, CellView, ViewModel};
