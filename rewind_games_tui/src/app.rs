//! Application state and input handling.

use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use rewind_games::{Game, GameStatus, Position};
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    game: Game,
    status_message: String,
    list_state: ListState,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            game: Game::new(),
            status_message: "Player X's turn. Press 1-9 to place a mark.".to_string(),
            list_state,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets mutable access to the move-list selection state.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Handles a key press that is not handled by the main loop.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.make_move(pos);
                }
            }
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter => self.jump_to_selected(),
            KeyCode::Char('s') => self.toggle_sort(),
            _ => {}
        }
    }

    /// Makes a move at the given position.
    #[instrument(skip(self))]
    fn make_move(&mut self, pos: Position) {
        debug!(%pos, "Making move");

        match self.game.play(pos) {
            Ok(()) => {
                self.status_message = match self.game.status() {
                    GameStatus::InProgress { next } => format!("Player {}'s turn", next),
                    GameStatus::Won(win) => {
                        format!(
                            "Player {} wins! Press 'r' to restart or 'q' to quit.",
                            win.player()
                        )
                    }
                    GameStatus::Draw => {
                        "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string()
                    }
                };
                self.select_step(self.game.step());
            }
            Err(e) => {
                // Occupied square or finished game: report and carry on.
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    /// Moves the move-list selection up.
    fn select_previous(&mut self) {
        let count = self.game.history().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves the move-list selection down.
    fn select_next(&mut self) {
        let count = self.game.history().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Jumps to the history entry currently selected in the move list.
    #[instrument(skip(self))]
    fn jump_to_selected(&mut self) {
        let entries = self.game.sorted_moves();
        let Some(row) = self.list_state.selected() else {
            return;
        };
        let Some(step) = entries.get(row).map(|e| *e.step()) else {
            return;
        };
        drop(entries);

        // Rows always come from sorted_moves, so the jump cannot miss.
        if self.game.jump_to(step).is_ok() {
            debug!(step, "Jumped via move list");
            self.status_message = match self.game.status() {
                GameStatus::InProgress { next } => {
                    format!("Viewing move #{}. Player {}'s turn from here.", step, next)
                }
                GameStatus::Won(win) => format!("Winner: {}", win.player()),
                GameStatus::Draw => "Draw".to_string(),
            };
        }
    }

    /// Flips the move-list sort order, keeping the same entry selected.
    fn toggle_sort(&mut self) {
        let selected_step = self
            .list_state
            .selected()
            .and_then(|row| self.game.sorted_moves().get(row).map(|e| *e.step()));
        self.game.toggle_sort();
        if let Some(step) = selected_step {
            self.select_step(step);
        }
    }

    /// Selects the move-list row displaying the given step.
    fn select_step(&mut self, step: usize) {
        let row = self
            .game
            .sorted_moves()
            .iter()
            .position(|e| *e.step() == step)
            .unwrap_or(0);
        self.list_state.select(Some(row));
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::new();
        self.status_message = "Player X's turn. Press 1-9 to place a mark.".to_string();
        self.list_state.select(Some(0));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_games::Player;

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().next_player(), Player::O);
    }

    #[test]
    fn test_invalid_move_keeps_state_and_reports() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), 2);
        assert!(app.status_message().starts_with("Invalid move"));
    }

    #[test]
    fn test_enter_jumps_to_selected_entry() {
        let mut app = App::new();
        for key in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        // Select the game-start row (row 0 under ascending order).
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().step(), 0);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_sort_toggle_keeps_selection_on_entry() {
        let mut app = App::new();
        for key in ['1', '5'] {
            app.handle_key(KeyCode::Char(key));
        }
        // Latest move (step 2) is selected; after toggling it sits at row 0.
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.list_state_mut().selected(), Some(0));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().step(), 2);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut app = App::new();
        for key in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.restart();
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().step(), 0);
    }
}
