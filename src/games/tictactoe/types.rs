//! Core domain types for N-in-a-row tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Largest board edge the frontends will open.
pub const MAX_BOARD_SIZE: usize = 32;

/// Board edge used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player whose turn it is.
    pub fn to_move(x_is_next: bool) -> Self {
        if x_is_next { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Error returned by board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index does not name a square on this board.
    #[display("Position {index} out of bounds (board has {len} squares)")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of squares on the board.
        len: usize,
    },
}

/// Square N×N board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Edge length.
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board with `size` rows and columns.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns the edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of squares.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), BoardError> {
        let len = self.squares.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds { index, len })?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out-of-bounds indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Counts occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their index so the output can be fed back to
    /// `replay`.
    pub fn display(&self) -> String {
        let width = self.len().saturating_sub(1).to_string().len().max(1);
        let mut result = String::new();
        for row in 0..self.size {
            let cells: Vec<String> = (0..self.size)
                .map(|col| {
                    let index = row * self.size + col;
                    let symbol = match self.squares[index] {
                        Square::Empty => index.to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    format!("{symbol:>width$}")
                })
                .collect();
            result.push_str(&cells.join("|"));
            if row + 1 < self.size {
                result.push('\n');
                result.push_str(&vec!["-".repeat(width); self.size].join("+"));
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Coordinates of a placed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column, counted from the left.
    pub col: usize,
    /// Row, counted from the top.
    pub row: usize,
}

impl Move {
    /// Converts a row-major index into coordinates on a board of `size`.
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            col: index % size,
            row: index / size,
        }
    }

    /// Converts back into a row-major index on a board of `size`.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Current status of the game, derived from the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; carries the player to move.
    InProgress(Player),
    /// A player owns a full line.
    Won(Player),
    /// Every square was filled without a winner.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::Won(player) => write!(f, "Winner: {player}"),
            GameStatus::InProgress(player) => write!(f, "Next player: {player}"),
        }
    }
}
