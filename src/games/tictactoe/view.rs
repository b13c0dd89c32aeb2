//! Read-only view model derived from the game state.
//!
//! Frontends call [`ViewModel::from_state`] after every action and draw
//! only what it contains.

use super::rules::WinningLine;
use super::state::MoveEntry;
use super::{GameState, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a square should be emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellHighlight {
    /// No emphasis.
    #[default]
    None,
    /// Part of the winning line.
    Winner,
    /// The most recently played or jumped-to square.
    LastClicked,
}

/// One square as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Square contents.
    pub square: Square,
    /// Emphasis to apply.
    pub highlight: CellHighlight,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Squares of the current step in row-major order.
    pub board: Vec<CellView>,
    /// Owned line on the current board.
    pub winner: Option<WinningLine>,
    /// Highlighted square.
    pub clicked_index: Option<usize>,
    /// Board edge length.
    pub board_size: usize,
    /// Status line.
    pub status_text: String,
    /// Move list in display order.
    pub move_list: Vec<MoveEntry>,
    /// Step currently shown.
    pub current_step: usize,
    /// Text of the sort toggle.
    pub sort_button_label: String,
    /// Whether the pending board size can be committed.
    pub board_size_input_enabled: bool,
}

impl ViewModel {
    /// Derives the view for the current state.
    #[instrument(skip(state), fields(step = state.step_number(), size = state.board_size()))]
    pub fn from_state(state: &GameState) -> Self {
        let winner = state.current_winner();
        let clicked_index = state.clicked_index();

        let board = state
            .current_board()
            .squares()
            .iter()
            .enumerate()
            .map(|(i, &square)| CellView {
                square,
                highlight: highlight(i, winner.as_ref(), clicked_index),
            })
            .collect();

        let sort_button_label = if state.reversed() {
            "Sort ascending"
        } else {
            "Sort descending"
        };

        Self {
            board,
            winner,
            clicked_index,
            board_size: state.board_size(),
            status_text: state.status_text(),
            move_list: state.move_list(),
            current_step: state.step_number(),
            sort_button_label: sort_button_label.to_string(),
            board_size_input_enabled: state.pending_board_size_valid(),
        }
    }

    /// Returns the cells of row `row`.
    pub fn row(&self, row: usize) -> &[CellView] {
        let start = row * self.board_size;
        &self.board[start..start + self.board_size]
    }
}

/// Winning squares outrank the last-clicked square.
fn highlight(index: usize, winner: Option<&WinningLine>, clicked: Option<usize>) -> CellHighlight {
    if winner.is_some_and(|w| w.contains(index)) {
        CellHighlight::Winner
    } else if clicked == Some(index) {
        CellHighlight::LastClicked
    } else {
        CellHighlight::None
    }
}
