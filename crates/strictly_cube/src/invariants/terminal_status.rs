//! Terminal status invariant: the status agrees with the lines on the board.

use super::Invariant;
use crate::rules::{all_lines, find_winner, line_owner};
use crate::{GameController, GameStatus};

/// Invariant: `Playing` has no completed line, `Won(p)` has a completed line
/// of `p`, and `Draw` has a full board.
pub struct TerminalStatusInvariant;

impl Invariant<GameController> for TerminalStatusInvariant {
    fn holds(game: &GameController) -> bool {
        match game.status() {
            GameStatus::Playing => find_winner(game.board()).is_none(),
            GameStatus::Won(player) => all_lines()
                .iter()
                .any(|line| line_owner(game.board(), line) == Some(player)),
            GameStatus::Draw => game.board().is_full(),
        }
    }

    fn description() -> &'static str {
        "Status matches the completed lines on the board"
    }
}
