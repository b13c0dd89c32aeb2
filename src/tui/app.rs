//! Application state and key handling.

use crossterm::event::KeyCode;
use strictly_timeline::{Action, GameState, MAX_BOARD_SIZE, Outcome, ViewModel};
use tracing::{debug, instrument};

use super::input::move_cursor;

/// Which widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys drive the board and the history.
    #[default]
    Board,
    /// Keys edit the board-size field.
    BoardSize,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: usize,
    mode: InputMode,
    size_input: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application on a board of edge `board_size`.
    pub fn new(board_size: usize) -> Self {
        Self {
            state: GameState::new(board_size),
            cursor: 0,
            mode: InputMode::default(),
            size_input: String::new(),
            should_quit: false,
        }
    }

    /// Gets the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Derives the view for the current state.
    pub fn view(&self) -> ViewModel {
        ViewModel::from_state(&self.state)
    }

    /// Gets the cursor square.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Gets the text typed into the board-size field.
    pub fn size_input(&self) -> &str {
        &self.size_input
    }

    /// Returns true when the typed size can be opened by this frontend.
    pub fn can_commit_size(&self) -> bool {
        self.state.pending_board_size_valid() && self.state.pending_board_size() <= MAX_BOARD_SIZE
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            InputMode::Board => self.handle_board_key(key),
            InputMode::BoardSize => self.handle_size_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        let step = self.state.step_number();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Action::PlaceMark(self.cursor));
            }
            KeyCode::Char('[') => {
                if let Some(prev) = step.checked_sub(1) {
                    self.dispatch(Action::JumpTo(prev));
                }
            }
            KeyCode::Char(']') => {
                self.dispatch(Action::JumpTo(step + 1));
            }
            KeyCode::Home => {
                self.dispatch(Action::JumpTo(0));
            }
            KeyCode::End => {
                self.dispatch(Action::JumpTo(self.state.last_step()));
            }
            KeyCode::Char('s') => {
                self.dispatch(Action::ReverseOrder);
            }
            KeyCode::Char('r') => {
                self.dispatch(Action::ResetGame);
            }
            KeyCode::Char('b') => self.mode = InputMode::BoardSize,
            arrow => self.cursor = move_cursor(self.cursor, arrow, self.state.board_size()),
        }
    }

    fn handle_size_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.mode = InputMode::Board,
            KeyCode::Enter if !self.can_commit_size() => {
                debug!(
                    pending = self.state.pending_board_size(),
                    "Board size not committable"
                );
            }
            KeyCode::Enter => {
                if self.dispatch(Action::CommitBoardSize).is_applied() {
                    self.cursor = 0;
                    self.size_input.clear();
                    self.mode = InputMode::Board;
                }
            }
            KeyCode::Backspace => {
                self.size_input.pop();
                self.dispatch(Action::SetPendingBoardSize(self.size_input.clone()));
            }
            KeyCode::Char(c) => {
                self.size_input.push(c);
                self.dispatch(Action::SetPendingBoardSize(self.size_input.clone()));
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.state.apply(action);
        debug!(?outcome, "Action dispatched");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timeline::{Player, Square};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.handle_key(key);
        }
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(3);
        press(&mut app, &[KeyCode::Right, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.cursor(), 4);
        assert_eq!(
            app.state().current_board().get(4),
            Some(Square::Occupied(Player::X))
        );
    }

    #[test]
    fn test_history_navigation() {
        let mut app = App::new(3);
        press(&mut app, &[KeyCode::Enter, KeyCode::Right, KeyCode::Char(' ')]);
        assert_eq!(app.state().step_number(), 2);

        press(&mut app, &[KeyCode::Char('[')]);
        assert_eq!(app.state().step_number(), 1);
        press(&mut app, &[KeyCode::Home, KeyCode::Char('[')]);
        assert_eq!(app.state().step_number(), 0);
        press(&mut app, &[KeyCode::End, KeyCode::Char(']')]);
        assert_eq!(app.state().step_number(), 2);
    }

    #[test]
    fn test_reverse_and_reset() {
        let mut app = App::new(3);
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('s')]);
        assert!(app.state().reversed());
        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.state(), &GameState::new(3));
    }

    #[test]
    fn test_board_size_entry() {
        let mut app = App::new(3);
        press(
            &mut app,
            &[
                KeyCode::Right,
                KeyCode::Char('b'),
                KeyCode::Char('5'),
                KeyCode::Char('x'),
            ],
        );
        assert_eq!(app.mode(), InputMode::BoardSize);
        assert!(!app.view().board_size_input_enabled);

        // Commit is ignored while the input is invalid.
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.state().board_size(), 3);

        press(&mut app, &[KeyCode::Backspace, KeyCode::Enter]);
        assert_eq!(app.state().board_size(), 5);
        assert_eq!(app.mode(), InputMode::Board);
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.size_input(), "");
    }

    #[test]
    fn test_board_size_above_limit_is_not_committed() {
        let mut app = App::new(3);
        press(&mut app, &[KeyCode::Char('b'), KeyCode::Char('3')]);
        press(&mut app, &[KeyCode::Char('3')]);
        assert!(app.view().board_size_input_enabled);
        assert!(!app.can_commit_size());

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.state().board_size(), 3);
        assert_eq!(app.mode(), InputMode::BoardSize);

        press(&mut app, &[KeyCode::Backspace, KeyCode::Enter]);
        assert_eq!(app.state().board_size(), 3);
        assert_eq!(app.mode(), InputMode::Board);
    }

    #[test]
    fn test_escape_leaves_size_mode_then_quits() {
        let mut app = App::new(3);
        press(&mut app, &[KeyCode::Char('b'), KeyCode::Esc]);
        assert_eq!(app.mode(), InputMode::Board);
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
