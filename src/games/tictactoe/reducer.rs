//! The game-state reducer.
//!
//! Every user intent goes through [`GameState::apply`]. Rejected actions
//! leave the state untouched and are reported as [`Outcome::Ignored`].

use super::action::{Action, Outcome, Rejection};
use super::contracts::{Contract, PlaceMarkContract};
use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, GameState, Move, Square};
use tracing::{debug, error, info, instrument};

/// Computes the state that follows `action`, leaving `state` untouched.
#[instrument(skip(state), fields(step = state.step_number(), size = state.board_size()))]
pub fn reduce(state: &GameState, action: Action) -> GameState {
    let mut next = state.clone();
    next.apply(action);
    next
}

/// Parses raw board-size input.
///
/// Accepts one or more ASCII digits and nothing else. The size must be
/// positive and its square count must fit in `usize`.
#[instrument]
pub fn parse_board_size(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<usize>()
        .ok()
        .filter(|&size| size > 0 && size.checked_mul(size).is_some())
}

impl GameState {
    /// Applies an action in place.
    #[instrument(skip(self), fields(step = self.step_number, size = self.board_size))]
    pub fn apply(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::PlaceMark(index) => self.place_mark(index),
            Action::JumpTo(step) => self.jump_to(step),
            Action::ReverseOrder => {
                self.reversed = !self.reversed;
                Outcome::Applied
            }
            Action::ResetGame => {
                self.reset(self.board_size);
                Outcome::Applied
            }
            Action::SetPendingBoardSize(raw) => {
                self.set_pending_board_size(&raw);
                Outcome::Applied
            }
            Action::CommitBoardSize => self.commit_board_size(),
        };

        match outcome {
            Outcome::Applied => self.verify(),
            Outcome::Ignored(rejection) => debug!(%rejection, "Action ignored"),
        }
        outcome
    }

    fn place_mark(&mut self, index: usize) -> Outcome {
        if let Err(rejection) = PlaceMarkContract::pre(self, &index) {
            return Outcome::Ignored(rejection);
        }
        let before = cfg!(debug_assertions).then(|| self.clone());

        let player = self.current_player();
        let mut board = self.current_board().clone();
        if let Err(e) = board.set(index, Square::Occupied(player)) {
            // Bounds were checked by the contract.
            error!(error = %e, "Board rejected a checked index");
            return Outcome::Ignored(Rejection::OutOfBounds(index));
        }

        self.history.truncate(self.step_number + 1);
        self.location.truncate(self.step_number + 1);
        self.history.push(board);
        self.location.push(Some(Move::from_index(index, self.board_size)));
        self.step_number = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
        debug!(index, %player, step = self.step_number, "Mark placed");

        if let Some(before) = before
            && let Err(violations) = PlaceMarkContract::post(&before, self)
        {
            error!(?violations, "PlaceMark postcondition failed");
        }
        Outcome::Applied
    }

    fn jump_to(&mut self, step: usize) -> Outcome {
        if step >= self.history.len() {
            return Outcome::Ignored(Rejection::StepOutOfRange(step));
        }
        self.step_number = step;
        self.x_is_next = step % 2 == 0;
        self.clicked_index = self.location[step].map(|mv| mv.to_index(self.board_size));
        debug!(step, clicked = ?self.clicked_index, "Jumped");
        Outcome::Applied
    }

    fn set_pending_board_size(&mut self, raw: &str) {
        match parse_board_size(raw) {
            Some(size) => {
                self.pending_board_size = size;
                self.pending_board_size_valid = true;
            }
            None => self.pending_board_size_valid = false,
        }
        debug!(
            raw,
            pending = self.pending_board_size,
            valid = self.pending_board_size_valid,
            "Board size input"
        );
    }

    fn commit_board_size(&mut self) -> Outcome {
        if !self.pending_board_size_valid {
            return Outcome::Ignored(Rejection::PendingSizeInvalid);
        }
        self.reset(self.pending_board_size);
        info!(size = self.board_size, "Board resized");
        Outcome::Applied
    }

    fn reset(&mut self, board_size: usize) {
        self.history = vec![Board::new(board_size)];
        self.location = vec![None];
        self.step_number = 0;
        self.x_is_next = true;
        self.clicked_index = None;
        self.reversed = false;
        self.board_size = board_size;
    }

    fn verify(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            error!(?violations, "Game invariants violated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn play(size: usize, indices: &[usize]) -> GameState {
        let mut state = GameState::new(size);
        for &i in indices {
            assert!(state.apply(Action::PlaceMark(i)).is_applied(), "move {i}");
        }
        state
    }

    #[test]
    fn test_place_mark_appends_and_toggles() {
        let state = play(3, &[4]);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step_number(), 1);
        assert!(!state.x_is_next());
        assert_eq!(
            state.current_board().get(4),
            Some(Square::Occupied(Player::X))
        );
        assert_eq!(state.location()[1], Some(Move { col: 1, row: 1 }));
        assert_eq!(state.clicked_index(), None);
    }

    #[test]
    fn test_coordinates_use_board_size() {
        let state = play(5, &[7]);
        assert_eq!(state.location()[1], Some(Move { col: 2, row: 1 }));
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut state = play(3, &[4]);
        let before = state.clone();
        assert_eq!(
            state.apply(Action::PlaceMark(4)),
            Outcome::Ignored(Rejection::SquareOccupied(4))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut state = GameState::new(3);
        assert_eq!(
            state.apply(Action::PlaceMark(9)),
            Outcome::Ignored(Rejection::OutOfBounds(9))
        );
        assert_eq!(state, GameState::new(3));
    }

    #[test]
    fn test_jump_to_sets_turn_and_highlight() {
        let mut state = play(4, &[0, 5, 6]);
        assert!(state.apply(Action::JumpTo(2)).is_applied());
        assert_eq!(state.step_number(), 2);
        assert!(state.x_is_next());
        assert_eq!(state.clicked_index(), Some(5));
        assert_eq!(state.history().len(), 4);
    }

    #[test]
    fn test_place_mark_keeps_jump_highlight() {
        let mut state = play(3, &[0, 4, 8]);
        state.apply(Action::JumpTo(1));
        assert_eq!(state.clicked_index(), Some(0));
        assert!(state.apply(Action::PlaceMark(2)).is_applied());
        assert_eq!(state.clicked_index(), Some(0));
    }

    #[test]
    fn test_jump_to_start_clears_highlight() {
        let mut state = play(3, &[0]);
        state.apply(Action::JumpTo(0));
        assert_eq!(state.clicked_index(), None);
    }

    #[test]
    fn test_jump_past_end_is_ignored() {
        let mut state = play(3, &[0]);
        let before = state.clone();
        assert_eq!(
            state.apply(Action::JumpTo(2)),
            Outcome::Ignored(Rejection::StepOutOfRange(2))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_keeps_board_size() {
        let mut state = play(4, &[0, 1]);
        state.apply(Action::ReverseOrder);
        state.apply(Action::ResetGame);
        assert_eq!(state, GameState::new(4));
    }

    #[test]
    fn test_parse_board_size() {
        assert_eq!(parse_board_size("5"), Some(5));
        assert_eq!(parse_board_size("007"), Some(7));
        assert_eq!(parse_board_size(""), None);
        assert_eq!(parse_board_size("abc"), None);
        assert_eq!(parse_board_size("+4"), None);
        assert_eq!(parse_board_size(" 4"), None);
        assert_eq!(parse_board_size("0"), None);
        assert_eq!(parse_board_size("33"), Some(33));
        assert_eq!(parse_board_size("100"), Some(100));
        assert_eq!(parse_board_size(&usize::MAX.to_string()), None);
        assert_eq!(parse_board_size("99999999999999999999999"), None);
    }

    #[test]
    fn test_pending_size_above_frontend_limit_is_valid() {
        let mut state = GameState::new(3);
        state.apply(Action::SetPendingBoardSize("33".to_string()));
        assert!(state.pending_board_size_valid());
        assert_eq!(state.pending_board_size(), 33);
        assert_eq!(state.board_size(), 3);
    }

    #[test]
    fn test_commit_without_valid_input_is_ignored() {
        let mut state = GameState::new(3);
        state.apply(Action::SetPendingBoardSize("x".to_string()));
        assert_eq!(
            state.apply(Action::CommitBoardSize),
            Outcome::Ignored(Rejection::PendingSizeInvalid)
        );
        assert_eq!(state.board_size(), 3);
    }

    #[test]
    fn test_commit_resizes_and_resets() {
        let mut state = play(3, &[0, 1]);
        state.apply(Action::SetPendingBoardSize("4".to_string()));
        assert_eq!(state.board_size(), 3);
        assert!(state.apply(Action::CommitBoardSize).is_applied());
        assert_eq!(state.board_size(), 4);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_board().len(), 16);
        assert_eq!(state.step_number(), 0);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = GameState::new(3);
        let next = reduce(&state, Action::PlaceMark(0));
        assert_eq!(state, GameState::new(3));
        assert_eq!(next.history().len(), 2);
    }
}
