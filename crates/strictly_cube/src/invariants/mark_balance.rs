//! Mark balance invariant: X never trails O and leads by at most one.

use super::Invariant;
use crate::{GameController, Player};

/// Invariant: X marks equal O marks, or exceed them by one.
///
/// X moves first and players alternate, so no other count is reachable.
pub struct MarkBalanceInvariant;

impl Invariant<GameController> for MarkBalanceInvariant {
    fn holds(game: &GameController) -> bool {
        let x_marks = game.board().count(Player::X);
        let o_marks = game.board().count(Player::O);
        x_marks == o_marks || x_marks == o_marks + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or lead by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_holds_through_play() {
        let mut game = GameController::new();
        assert!(MarkBalanceInvariant::holds(&game));
        for i in [1, 2, 3] {
            game.make_move(Cell::from_index(i).unwrap()).unwrap();
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }
}
