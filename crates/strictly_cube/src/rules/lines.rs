//! Whole-board line enumeration.

use super::win::DIRECTIONS;
use super::Line;
use crate::{Board, Cell, Player, Square};
use tracing::instrument;

/// Enumerates all 49 lines of the cube.
///
/// A line is emitted once, from the cell with no neighbour behind it.
pub fn all_lines() -> Vec<Line> {
    Cell::ALL
        .iter()
        .flat_map(|&start| DIRECTIONS.iter().map(move |&dir| (start, dir)))
        .filter_map(|(start, (dx, dy, dz))| {
            if start.offset((-dx, -dy, -dz)).is_some() {
                return None;
            }
            let middle = start.offset((dx, dy, dz))?;
            let end = middle.offset((dx, dy, dz))?;
            Some([start, middle, end])
        })
        .collect()
}

/// Returns the player holding every cell of `line`, if one does.
pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    match line.map(|c| board.get(c)) {
        [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)] if a == b && b == c => {
            Some(a)
        }
        _ => None,
    }
}

/// Lists every completed line with its owner, in [`all_lines`] order.
pub fn completed_lines(board: &Board) -> Vec<(Player, Line)> {
    all_lines()
        .into_iter()
        .filter_map(|line| line_owner(board, &line).map(|owner| (owner, line)))
        .collect()
}

/// Scans every line for a winner.
///
/// Used to check invariants; move handling uses the incremental
/// [`check_win`](super::check_win) instead.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Player> {
    all_lines().iter().find_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_49_lines() {
        let lines = all_lines();
        assert_eq!(lines.len(), 49);

        // 27 axis lines, 18 face diagonals, 4 space diagonals
        let through_center = lines.iter().filter(|l| l[1] == Cell::CENTER).count();
        assert_eq!(through_center, 13);
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    fn test_find_winner_column() {
        let mut board = Board::new();
        for z in 0..3 {
            board
                .place_piece(Cell::new(2, 1, z).unwrap(), Player::O)
                .unwrap();
        }
        assert_eq!(find_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let mut board = Board::new();
        let line = [
            Cell::new(0, 0, 0).unwrap(),
            Cell::new(0, 1, 0).unwrap(),
            Cell::new(0, 2, 0).unwrap(),
        ];
        board.place_piece(line[0], Player::X).unwrap();
        board.place_piece(line[1], Player::O).unwrap();
        board.place_piece(line[2], Player::X).unwrap();
        assert_eq!(line_owner(&board, &line), None);
    }

    #[test]
    fn test_completed_lines_lists_each_owner() {
        let mut board = Board::new();
        for x in 0..3 {
            board
                .place_piece(Cell::new(x, 0, 0).unwrap(), Player::X)
                .unwrap();
            board
                .place_piece(Cell::new(x, 2, 2).unwrap(), Player::O)
                .unwrap();
        }
        let owners: Vec<Player> = completed_lines(&board).iter().map(|(p, _)| *p).collect();
        assert_eq!(owners, vec![Player::X, Player::O]);
        assert!(completed_lines(&Board::new()).is_empty());
    }
}
