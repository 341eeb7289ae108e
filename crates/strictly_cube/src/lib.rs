//! Strictly Cube - 3x3x3 tic-tac-toe game logic
//!
//! Board state, win detection over the 13 line directions of the cube, and
//! a controller that owns turn order, status and score.
//!
//! # Example
//!
//! ```
//! use strictly_cube::{Cell, GameController, GameStatus, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameController::new();
//! for (x, y, z) in [(0, 0, 0), (0, 1, 0), (1, 1, 1), (0, 1, 1), (2, 2, 2)] {
//!     game.make_move(Cell::new(x, y, z)?)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
pub mod invariants;
pub mod rules;
mod snapshot;
mod turn;
mod types;

pub use action::{GameEvent, Move, MoveError, MoveOutcome};
pub use controller::GameController;
pub use rules::Line;
pub use snapshot::GameSnapshot;
pub use turn::{PlayerTracker, Scoreboard};
pub use types::{Board, BoardError, CELL_COUNT, Cell, GameStatus, Player, SIDE, Square};
