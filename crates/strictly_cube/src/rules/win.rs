//! Incremental win detection around the last placed mark.

use super::{LINE_LENGTH, Line};
use crate::{Board, Cell, Player, Square};
use tracing::instrument;

/// A step between neighbouring cells.
pub type Direction = (i8, i8, i8);

/// The 13 undirected line directions of the cube, one sense each.
pub const DIRECTIONS: [Direction; 13] = [
    // Axes
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
    // Face diagonals
    (1, 1, 0),
    (1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    // Space diagonals
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
];

fn reverse((dx, dy, dz): Direction) -> Direction {
    (-dx, -dy, -dz)
}

/// Counts `player`'s marks in a row starting next to `cell` along `dir`.
fn run_length(board: &Board, cell: Cell, player: Player, dir: Direction) -> usize {
    let mut count = 0;
    let mut cursor = cell;
    while let Some(next) = cursor.offset(dir)
        && board.get(next) == Square::Occupied(player)
    {
        count += 1;
        cursor = next;
    }
    count
}

/// Checks whether the mark just placed at `cell` completes a line for `player`.
///
/// Only the 13 directions through `cell` are walked, so the cost does not
/// depend on how many lines the board has.
#[instrument(skip(board))]
pub fn check_win(board: &Board, cell: Cell, player: Player) -> bool {
    winning_line(board, cell, player).is_some()
}

/// Returns the line completed by the mark at `cell`, if any.
///
/// Cells are ordered from the end furthest against the winning direction.
/// Callers that also need the cells should use this instead of
/// [`check_win`], which walks the same directions.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, cell: Cell, player: Player) -> Option<Line> {
    DIRECTIONS.iter().find_map(|&dir| {
        let ahead = run_length(board, cell, player, dir);
        let behind = run_length(board, cell, player, reverse(dir));
        if 1 + ahead + behind < LINE_LENGTH {
            return None;
        }
        let start = (0..behind).try_fold(cell, |c, _| c.offset(reverse(dir)))?;
        let middle = start.offset(dir)?;
        Some([start, middle, middle.offset(dir)?])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: u8, y: u8, z: u8) -> Cell {
        Cell::new(x, y, z).unwrap()
    }

    fn board_with(player: Player, cells: &[Cell]) -> Board {
        let mut board = Board::new();
        for c in cells {
            board.place_piece(*c, player).unwrap();
        }
        board
    }

    #[test]
    fn test_directions_are_distinct_lines() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            for b in &DIRECTIONS[i + 1..] {
                assert_ne!(*a, *b);
                assert_ne!(reverse(*a), *b);
            }
        }
    }

    #[test]
    fn test_axis_win_from_any_end() {
        let line = [cell(0, 2, 1), cell(1, 2, 1), cell(2, 2, 1)];
        let board = board_with(Player::X, &line);
        for c in line {
            assert!(check_win(&board, c, Player::X));
            assert!(!check_win(&board, c, Player::O));
        }
    }

    #[test]
    fn test_face_diagonal_win() {
        let line = [cell(2, 0, 0), cell(1, 0, 1), cell(0, 0, 2)];
        let board = board_with(Player::O, &line);
        assert!(check_win(&board, line[0], Player::O));
        // Found along (1, 0, -1), so the line starts at the high-z end
        assert_eq!(
            winning_line(&board, line[0], Player::O),
            Some([line[2], line[1], line[0]])
        );
    }

    #[test]
    fn test_space_diagonal_win() {
        let line = [cell(2, 0, 2), cell(1, 1, 1), cell(0, 2, 0)];
        let board = board_with(Player::X, &line);
        assert!(check_win(&board, Cell::CENTER, Player::X));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_with(Player::X, &[cell(0, 0, 0), cell(1, 0, 0)]);
        assert!(!check_win(&board, cell(1, 0, 0), Player::X));
        assert_eq!(winning_line(&board, cell(1, 0, 0), Player::X), None);
    }

    #[test]
    fn test_opponent_mark_blocks_line() {
        let mut board = board_with(Player::X, &[cell(0, 0, 0), cell(2, 0, 0)]);
        board.place_piece(cell(1, 0, 0), Player::O).unwrap();
        assert!(!check_win(&board, cell(2, 0, 0), Player::X));
        assert!(!check_win(&board, cell(1, 0, 0), Player::O));
    }

    #[test]
    fn test_bent_shape_is_not_a_line() {
        // (0,0,0) (1,1,0) (2,1,0) share no direction
        let board = board_with(Player::O, &[cell(0, 0, 0), cell(1, 1, 0), cell(2, 1, 0)]);
        assert!(!check_win(&board, cell(1, 1, 0), Player::O));
    }

    #[test]
    fn test_winning_line_ordered_from_start() {
        let board = board_with(Player::X, &[cell(0, 0, 0), cell(1, 1, 1), cell(2, 2, 2)]);
        assert_eq!(
            winning_line(&board, Cell::CENTER, Player::X),
            Some([cell(0, 0, 0), cell(1, 1, 1), cell(2, 2, 2)])
        );
    }

    #[test]
    fn test_check_win_matches_winning_line() {
        let mut board = board_with(Player::X, &[cell(0, 0, 0), cell(1, 1, 1), cell(2, 2, 2)]);
        board.place_piece(cell(1, 0, 0), Player::O).unwrap();
        board.place_piece(cell(2, 0, 0), Player::O).unwrap();
        for c in Cell::ALL {
            for player in [Player::X, Player::O] {
                assert_eq!(
                    check_win(&board, c, player),
                    winning_line(&board, c, player).is_some()
                );
            }
        }
    }
}
