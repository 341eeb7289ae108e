//! Application state and logic.

use crate::input::{self, Action};
use crate::prefs::{KeyValueStore, Preference, Preferences};
use crossterm::event::KeyCode;
use strictly_cube::{Cell, GameController, GameEvent, GameStatus};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Owns the game controller; the renderer only reads through accessors.
pub struct App<S> {
    game: GameController,
    cursor: Cell,
    prefs: Preferences,
    store: S,
    status_message: String,
    running: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Creates the app, loading preferences from `store`.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        let prefs = Preferences::load(&store);
        Self {
            game: GameController::new(),
            cursor: Cell::CENTER,
            prefs,
            store,
            status_message: "Player X's turn.".to_string(),
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Current preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// The backing preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for(key) else {
            return;
        };
        debug!(?action, "Handling action");

        match action {
            Action::Navigate(key) => {
                self.cursor = input::move_cursor(self.cursor, key, &self.prefs);
            }
            Action::Select => self.select(),
            Action::Reset => self.game.reset(),
            Action::ResetScores => self.game.reset_score(),
            Action::Toggle(pref) => self.toggle(pref),
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
        }

        self.apply_events();
    }

    /// Plays the cursor cell if it is still open.
    fn select(&mut self) {
        if self.game.status().is_over() {
            self.status_message = format!("{}. Press 'r' to play again.", self.game.status());
            return;
        }
        if !self.game.is_cell_empty(self.cursor) {
            self.status_message = format!("Cell {} is taken.", self.cursor);
            return;
        }
        if let Err(e) = self.game.make_move(self.cursor) {
            self.status_message = format!("Move error: {}", e);
        }
    }

    fn toggle(&mut self, pref: Preference) {
        match self.prefs.toggle(pref, &mut self.store) {
            Ok(value) => {
                let state = if value { "on" } else { "off" };
                self.status_message = format!("{}: {}", pref.label(), state);
            }
            Err(e) => {
                warn!(error = %e, "Failed to save preference");
                self.status_message = format!("Could not save preference: {}", e.message);
            }
        }
    }

    /// Turns controller events into display state.
    fn apply_events(&mut self) {
        for event in self.game.drain_events() {
            debug!(?event, "Applying game event");
            match event {
                GameEvent::MoveMade(action) => {
                    self.status_message = format!(
                        "{} played {}. Player {}'s turn.",
                        action.player,
                        action.cell,
                        self.game.current_player()
                    );
                }
                GameEvent::GameOver { winner } => {
                    self.status_message = match winner {
                        Some(player) => {
                            format!("Player {} wins! Press 'r' to play again.", player)
                        }
                        None => "Draw! Press 'r' to play again.".to_string(),
                    };
                }
                GameEvent::BoardCleared => {
                    self.cursor = Cell::CENTER;
                    self.status_message = "New game. Player X's turn.".to_string();
                }
                GameEvent::ScoresReset => {
                    self.status_message = "Scores reset.".to_string();
                }
            }
        }
    }

    /// Text for the turn indicator.
    pub fn turn_label(&self) -> String {
        match self.game.status() {
            GameStatus::Playing => format!("Player {} to move", self.game.current_player()),
            status => status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;
    use strictly_cube::Player;

    fn app() -> App<MemoryStore> {
        App::new(MemoryStore::default())
    }

    #[test]
    fn test_select_places_mark() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert!(!app.game().is_cell_empty(Cell::CENTER));
        assert_eq!(app.game().current_player(), Player::O);
        assert!(app.status_message().contains("X played (1, 1, 1)"));
    }

    #[test]
    fn test_select_taken_cell_is_ignored() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.game().board().occupied_count(), 1);
        assert_eq!(app.status_message(), "Cell (1, 1, 1) is taken.");
    }

    #[test]
    fn test_reset_recenters_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.cursor(), Cell::CENTER);
        assert_eq!(app.game().board().occupied_count(), 0);
        assert_eq!(app.status_message(), "New game. Player X's turn.");
    }

    #[test]
    fn test_toggle_persists() {
        let mut app = app();
        app.handle_key(KeyCode::Char('p'));
        assert!(!app.prefs().get(Preference::ShowPanel));
        assert_eq!(app.store().get("show_panel").as_deref(), Some("false"));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Esc);
        assert!(!app.is_running());
    }
}
