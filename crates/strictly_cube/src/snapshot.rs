//! Owned read model for renderers.

use super::action::Move;
use super::rules::Line;
use super::turn::Scoreboard;
use super::{Board, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything a renderer displays.
///
/// Readers on another thread take a snapshot instead of sharing the
/// controller.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board contents.
    board: Board,
    /// Game status.
    status: GameStatus,
    /// Player to move.
    current_player: Player,
    /// Session scores.
    scores: Scoreboard,
    /// Most recent move of this game.
    last_move: Option<Move>,
    /// Completed line, once won.
    winning_line: Option<Line>,
}

impl GameSnapshot {
    pub(crate) fn new(
        board: Board,
        status: GameStatus,
        current_player: Player,
        scores: Scoreboard,
        last_move: Option<Move>,
        winning_line: Option<Line>,
    ) -> Self {
        Self {
            board,
            status,
            current_player,
            scores,
            last_move,
            winning_line,
        }
    }
}
