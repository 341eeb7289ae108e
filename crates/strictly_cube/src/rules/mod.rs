//! Game rules for 3x3x3 tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The incremental win check
//! in [`win`] is what the controller uses after each move; the global scans
//! in [`lines`] back invariants and tests.

pub mod lines;
pub mod win;

pub use lines::{all_lines, completed_lines, find_winner, line_owner};
pub use win::{DIRECTIONS, Direction, check_win, winning_line};

/// Marks in a row needed to win.
pub const LINE_LENGTH: usize = 3;

/// Three collinear cells, ordered along their direction.
pub type Line = [super::Cell; LINE_LENGTH];
