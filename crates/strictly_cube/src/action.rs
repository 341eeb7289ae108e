//! Moves and the events they produce.

use super::rules::Line;
use super::{Cell, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the mark was placed on.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: Cell) -> Self {
        Self { player, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Reason a move was not accepted.
///
/// Both variants are benign: the board and status are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Cell),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Play continues with `next` to move.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The move completed a line.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// The move filled the board without completing a line.
    Draw,
}

/// Notification for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade(Move),
    /// The game ended; `None` means a draw.
    GameOver {
        /// Winner, if any.
        winner: Option<Player>,
    },
    /// The board was cleared; transient highlights should be dropped.
    BoardCleared,
    /// Both scores were set back to zero.
    ScoresReset,
}
