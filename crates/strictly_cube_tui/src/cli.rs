//! Command-line interface for strictly_cube.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Cube - 3x3x3 tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_cube")]
#[command(about = "3x3x3 tic-tac-toe for two local players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Preference file (created on first change)
    #[arg(long, global = true, default_value = "strictly_cube_prefs.toml")]
    pub prefs: PathBuf,

    /// Log file (the terminal belongs to the game)
    #[arg(long, global = true, default_value = "strictly_cube.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game
    Play,

    /// Inspect or change stored preferences
    Prefs {
        /// Preference operation
        #[command(subcommand)]
        action: PrefsAction,
    },
}

/// Preference operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PrefsAction {
    /// Print every preference
    Show,

    /// Set one preference
    Set {
        /// Preference key (invert_horizontal, invert_vertical, show_panel)
        key: String,

        /// New value (true or false)
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["strictly_cube"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.prefs, PathBuf::from("strictly_cube_prefs.toml"));
    }

    #[test]
    fn test_prefs_set() {
        let cli = Cli::try_parse_from([
            "strictly_cube",
            "prefs",
            "set",
            "show_panel",
            "false",
            "--prefs",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Prefs {
                action: PrefsAction::Set {
                    key: "show_panel".to_string(),
                    value: "false".to_string(),
                },
            })
        );
        assert_eq!(cli.prefs, PathBuf::from("custom.toml"));
    }
}
