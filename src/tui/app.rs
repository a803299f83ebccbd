//! Application state and gesture handling.

use super::input::{self, UiAction};
use crate::game::{GameState, Position};
use crossterm::event::KeyCode;
use tracing::debug;

/// Main application state: the current game value plus UI-only extras.
///
/// The game state is replaced wholesale on every transition; the app
/// never mutates a `GameState` in place.
pub struct App {
    state: GameState,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(descending: bool) -> Self {
        let state = GameState::new();
        let state = if descending {
            state.toggle_order()
        } else {
            state
        };
        Self {
            state,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a resolved gesture to the game state.
    pub fn apply(&mut self, action: UiAction) {
        debug!(?action, "applying action");
        self.state = match action {
            UiAction::Place(pos) => self.state.apply_move(pos),
            UiAction::Jump(step) => self.state.jump_to(step),
            UiAction::ToggleOrder => self.state.toggle_order(),
        };
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('o') => self.apply(UiAction::ToggleOrder),
            KeyCode::Enter | KeyCode::Char(' ') => self.apply(UiAction::Place(self.cursor)),
            KeyCode::Char('[') => {
                let step = self.state.step_number().saturating_sub(1);
                self.apply(UiAction::Jump(step));
            }
            KeyCode::Char(']') => {
                self.apply(UiAction::Jump(self.state.step_number() + 1));
            }
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                // Keys 1-9 address cells directly, left to right, top to bottom.
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    self.cursor = pos;
                    self.apply(UiAction::Place(pos));
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state().history().len(), 2);
        assert_eq!(
            app.state().current().location(),
            &Some(Position::Center)
        );
    }

    #[test]
    fn test_digit_places_on_cell() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(
            app.state().current().location(),
            &Some(Position::TopLeft)
        );
        assert_eq!(app.state().next_player(), Player::O);
    }

    #[test]
    fn test_bracket_keys_step_through_history() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.state().step_number(), 2);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.state().step_number(), 1);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.state().step_number(), 2);
        // Already at the tail: no-op.
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.state().step_number(), 2);
    }

    #[test]
    fn test_descending_start() {
        let app = App::new(true);
        assert!(!app.state().ascending());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(false);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
