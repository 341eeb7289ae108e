//! Strictly Cube terminal front end
//!
//! Renders the cube as three layer slices, turns key presses into cursor
//! moves and cell selections for the [`strictly_cube`] controller, and keeps
//! the user's preferences in a small key-value store.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod prefs;
mod ui;

pub use app::App;
pub use cli::{Cli, Command, PrefsAction};
pub use input::{Action, action_for, move_cursor};
pub use prefs::{KeyValueStore, MemoryStore, Preference, Preferences, PrefsError, TomlFileStore};
pub use ui::draw;
