//! Game state: history, step pointer and board-size configuration.

use super::rules::{self, WinningLine};
use super::{Board, GameStatus, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Label of the first move-list entry.
pub const GAME_START_LABEL: &str = "Go to game start";

/// One entry of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
}

/// Complete game state.
///
/// Owned by the caller and changed only through [`GameState::apply`] or
/// [`reduce`](super::reduce). Serializable for inspection only; a state
/// is never rebuilt from outside data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Board snapshots; index 0 is the empty board.
    pub(super) history: Vec<Board>,
    /// Move that produced each snapshot; index 0 has none.
    pub(super) location: Vec<Option<Move>>,
    /// Index of the snapshot being shown.
    pub(super) step_number: usize,
    /// Whether X places the next mark.
    pub(super) x_is_next: bool,
    /// Square of the move shown after a jump.
    pub(super) clicked_index: Option<usize>,
    /// Whether the move list is shown newest first.
    pub(super) reversed: bool,
    /// Edge length of the active board.
    pub(super) board_size: usize,
    /// Last valid board size typed by the user.
    pub(super) pending_board_size: usize,
    /// Whether the last board-size input was valid.
    pub(super) pending_board_size_valid: bool,
}

impl GameState {
    /// Creates a fresh game on a board of edge `board_size`.
    #[instrument]
    pub fn new(board_size: usize) -> Self {
        Self {
            history: vec![Board::new(board_size)],
            location: vec![None],
            step_number: 0,
            x_is_next: true,
            clicked_index: None,
            reversed: false,
            board_size,
            pending_board_size: board_size,
            pending_board_size_valid: false,
        }
    }

    /// Returns every board snapshot.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the move behind every snapshot.
    pub fn location(&self) -> &[Option<Move>] {
        &self.location
    }

    /// Returns the step currently shown.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        Player::to_move(self.x_is_next)
    }

    /// Returns the highlighted square, if any.
    pub fn clicked_index(&self) -> Option<usize> {
        self.clicked_index
    }

    /// Returns whether the move list is reversed.
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Returns the active board edge length.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Returns the pending board size.
    pub fn pending_board_size(&self) -> usize {
        self.pending_board_size
    }

    /// Returns whether the pending board size may be committed.
    pub fn pending_board_size_valid(&self) -> bool {
        self.pending_board_size_valid
    }

    /// Returns the index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step_number]
    }

    /// Returns the owned line on the current board, if any.
    pub fn current_winner(&self) -> Option<WinningLine> {
        rules::calculate_winner(self.current_board())
    }

    /// Returns the status of the current step.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_board(), self.step_number, self.x_is_next)
    }

    /// Returns the status line shown to the player.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Returns the move list in display order.
    #[instrument(skip(self), fields(steps = self.history.len(), reversed = self.reversed))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let len = self.history.len();
        (0..len)
            .map(|m| if self.reversed { len - 1 - m } else { m })
            .map(|step| MoveEntry {
                step,
                label: self.move_label(step),
            })
            .collect()
    }

    fn move_label(&self, step: usize) -> String {
        match self.location[step] {
            Some(mv) if step > 0 => format!("Go to move #{step} {mv}"),
            _ => GAME_START_LABEL.to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new(4);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.location(), &[None]);
        assert_eq!(state.current_board().len(), 16);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.pending_board_size(), 4);
        assert!(!state.pending_board_size_valid());
        assert_eq!(state.status_text(), "Next player: X");
    }

    #[test]
    fn test_move_list_of_new_game() {
        let state = GameState::default();
        assert_eq!(
            state.move_list(),
            vec![MoveEntry {
                step: 0,
                label: GAME_START_LABEL.to_string()
            }]
        );
    }
}
