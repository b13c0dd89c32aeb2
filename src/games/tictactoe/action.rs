//! First-class action types.
//!
//! Actions are the user intents a frontend sends to the reducer. They are
//! plain data, so they can be logged, serialized and replayed.

use serde::{Deserialize, Serialize};

/// A user intent understood by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the active player's mark at a row-major index.
    PlaceMark(usize),
    /// Move the step pointer to an existing history entry.
    JumpTo(usize),
    /// Flip the display order of the move list.
    ReverseOrder,
    /// Start over on a fresh board of the current size.
    ResetGame,
    /// Validate raw board-size input without applying it.
    SetPendingBoardSize(String),
    /// Apply the validated pending board size and start over.
    CommitBoardSize,
}

/// Why an action left the state untouched.
///
/// These are idle outcomes, not failures: clicking a filled square or a
/// disabled control simply does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The index does not name a square on the current board.
    #[display("Position {_0} is out of bounds")]
    OutOfBounds(usize),
    /// The square is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(usize),
    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The step does not exist in the history.
    #[display("Step {_0} is not in the history")]
    StepOutOfRange(usize),
    /// Commit requested without a valid pending board size.
    #[display("Pending board size is not valid")]
    PendingSizeInvalid,
}

/// Result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The state changed (or a flag was updated).
    Applied,
    /// The action was absorbed; the state is unchanged.
    Ignored(Rejection),
}

impl Outcome {
    /// Returns true if the action was applied.
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
