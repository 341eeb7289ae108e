//! Turn parity invariant: the player to move matches the mark counts.

use super::Invariant;
use crate::{GameController, GameStatus, Player};

/// Invariant: during play, X is to move exactly when mark counts are equal.
pub struct TurnParityInvariant;

impl Invariant<GameController> for TurnParityInvariant {
    fn holds(game: &GameController) -> bool {
        if game.status() != GameStatus::Playing {
            return true;
        }
        let even = game.board().count(Player::X) == game.board().count(Player::O);
        (game.current_player() == Player::X) == even
    }

    fn description() -> &'static str {
        "Player to move matches mark parity"
    }
}
