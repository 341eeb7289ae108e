//! Tests for the file-backed preference store and key-driven play.

use crossterm::event::KeyCode;
use strictly_cube::{GameStatus, Player};
use strictly_cube_tui::{App, KeyValueStore, MemoryStore, Preference, Preferences, TomlFileStore};

#[test]
fn test_missing_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = TomlFileStore::open(dir.path().join("prefs.toml")).unwrap();
    assert_eq!(store.get("show_panel"), None);
    assert_eq!(Preferences::load(&store), Preferences::default());
}

#[test]
fn test_changes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    let mut store = TomlFileStore::open(&path).unwrap();
    let mut prefs = Preferences::load(&store);
    prefs
        .set(Preference::InvertHorizontal, true, &mut store)
        .unwrap();
    prefs.toggle(Preference::ShowPanel, &mut store).unwrap();

    let reopened = TomlFileStore::open(&path).unwrap();
    let loaded = Preferences::load(&reopened);
    assert!(loaded.get(Preference::InvertHorizontal));
    assert!(!loaded.get(Preference::InvertVertical));
    assert!(!loaded.get(Preference::ShowPanel));
}

#[test]
fn test_hand_written_booleans_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "invert_vertical = true\nshow_panel = false\n").unwrap();

    let prefs = Preferences::load(&TomlFileStore::open(&path).unwrap());
    assert!(prefs.get(Preference::InvertVertical));
    assert!(!prefs.get(Preference::ShowPanel));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "show_panel = = true").unwrap();

    let err = TomlFileStore::open(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
}

#[test]
fn test_keyboard_game_to_a_win() {
    let mut app = App::new(MemoryStore::default());
    // Cursor starts at the center of the cube
    let keys = [
        // X (1,1,1)
        KeyCode::Enter,
        // O (2,1,1)
        KeyCode::Right,
        KeyCode::Enter,
        // X (2,1,0)
        KeyCode::Char('['),
        KeyCode::Enter,
        // O (1,1,0)
        KeyCode::Left,
        KeyCode::Enter,
        // X (0,1,2) completes (2,1,0)-(1,1,1)-(0,1,2)
        KeyCode::Left,
        KeyCode::Char(']'),
        KeyCode::Char(']'),
        KeyCode::Enter,
    ];
    for key in keys {
        app.handle_key(key);
    }

    assert_eq!(app.game().status(), GameStatus::Won(Player::X));
    assert_eq!(app.status_message(), "Player X wins! Press 'r' to play again.");
    assert_eq!(app.game().scores().get(Player::X), 1);

    // Further selections are refused until reset
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.game().board().occupied_count(), 5);

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.game().status(), GameStatus::Playing);
    assert_eq!(app.game().scores().get(Player::X), 1);
}
