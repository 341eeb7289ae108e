//! Key bindings and cursor movement over the cube.

use crate::prefs::{Preference, Preferences};
use crossterm::event::KeyCode;
use strictly_cube::Cell;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Navigate(KeyCode),
    /// Play the cell under the cursor.
    Select,
    /// Start a new game.
    Reset,
    /// Zero both scores.
    ResetScores,
    /// Flip a preference.
    Toggle(Preference),
    /// Leave the game.
    Quit,
}

/// Maps a key to an action; unbound keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Char('[')
        | KeyCode::Char(']') => Some(Action::Navigate(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('s') => Some(Action::ResetScores),
        KeyCode::Char('h') => Some(Action::Toggle(Preference::InvertHorizontal)),
        KeyCode::Char('v') => Some(Action::Toggle(Preference::InvertVertical)),
        KeyCode::Char('p') => Some(Action::Toggle(Preference::ShowPanel)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell; moves off the cube leave it in place.
///
/// Left/right walk x, up/down walk y, and the page keys (or brackets) walk
/// between layers. Inversion preferences flip the x and y senses.
pub fn move_cursor(cursor: Cell, key: KeyCode, prefs: &Preferences) -> Cell {
    let h = if prefs.get(Preference::InvertHorizontal) { -1 } else { 1 };
    let v = if prefs.get(Preference::InvertVertical) { -1 } else { 1 };

    let step = match key {
        KeyCode::Right => (h, 0, 0),
        KeyCode::Left => (-h, 0, 0),
        KeyCode::Down => (0, v, 0),
        KeyCode::Up => (0, -v, 0),
        KeyCode::PageDown | KeyCode::Char(']') => (0, 0, 1),
        KeyCode::PageUp | KeyCode::Char('[') => (0, 0, -1),
        _ => return cursor,
    };
    cursor.offset(step).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;

    fn cell(x: u8, y: u8, z: u8) -> Cell {
        Cell::new(x, y, z).unwrap()
    }

    #[test]
    fn test_arrows_walk_layer() {
        let prefs = Preferences::default();
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Right, &prefs), cell(2, 1, 1));
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Up, &prefs), cell(1, 0, 1));
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::PageDown, &prefs), cell(1, 1, 2));
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Char('['), &prefs), cell(1, 1, 0));
    }

    #[test]
    fn test_edges_hold_cursor() {
        let prefs = Preferences::default();
        let corner = cell(0, 0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Left, &prefs), corner);
        assert_eq!(move_cursor(corner, KeyCode::Up, &prefs), corner);
        assert_eq!(move_cursor(corner, KeyCode::PageUp, &prefs), corner);
    }

    #[test]
    fn test_inversion_flips_sense() {
        let mut store = MemoryStore::default();
        let mut prefs = Preferences::default();
        prefs.set(Preference::InvertHorizontal, true, &mut store).unwrap();
        prefs.set(Preference::InvertVertical, true, &mut store).unwrap();

        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Right, &prefs), cell(0, 1, 1));
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::Up, &prefs), cell(1, 2, 1));
        // Layers are not affected
        assert_eq!(move_cursor(Cell::CENTER, KeyCode::PageDown, &prefs), cell(1, 1, 2));
    }

    #[test]
    fn test_bindings() {
        assert_eq!(action_for(KeyCode::Enter), Some(Action::Select));
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            action_for(KeyCode::Char('p')),
            Some(Action::Toggle(Preference::ShowPanel))
        );
        assert_eq!(action_for(KeyCode::Char('z')), None);
    }
}
