//! Core domain types for 3x3x3 tic-tac-toe.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cells along each edge of the cube.
pub const SIDE: u8 = 3;

/// Total number of cells in the cube.
pub const CELL_COUNT: usize = 27;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Recognises a marker symbol, ignoring case.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }

    /// The marker symbol drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Errors building a cell or a board position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A coordinate lies outside `0..SIDE`.
    #[display("Cell ({x}, {y}, {z}) is outside the 3x3x3 cube")]
    OutOfRange {
        /// Requested x.
        x: u8,
        /// Requested y.
        y: u8,
        /// Requested z.
        z: u8,
    },

    /// Mark counts cannot come from alternating play starting with X.
    #[display("Unbalanced position: {x_marks} X marks against {o_marks} O marks")]
    Unbalanced {
        /// Number of X marks on the board.
        x_marks: usize,
        /// Number of O marks on the board.
        o_marks: usize,
    },

    /// Marks were placed after a line was already complete.
    #[display("Position continues after {winner} completed a line")]
    PlayAfterWin {
        /// Owner of the first completed line found.
        winner: Player,
    },
}

impl std::error::Error for BoardError {}

/// Coordinate of one of the 27 cells.
///
/// Construction is checked, so every `Cell` value lies inside the cube.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "[u8; 3]", into = "[u8; 3]")]
#[display("({x}, {y}, {z})")]
pub struct Cell {
    x: u8,
    y: u8,
    z: u8,
}

impl Cell {
    /// All 27 cells in index order (x fastest, then y, then z).
    pub const ALL: [Cell; CELL_COUNT] = {
        let mut cells = [Cell { x: 0, y: 0, z: 0 }; CELL_COUNT];
        let mut i = 0;
        while i < CELL_COUNT {
            cells[i] = Cell {
                x: (i % 3) as u8,
                y: (i / 3 % 3) as u8,
                z: (i / 9) as u8,
            };
            i += 1;
        }
        cells
    };

    /// The center of the cube.
    pub const CENTER: Cell = Cell { x: 1, y: 1, z: 1 };

    /// Creates a cell, rejecting coordinates outside the cube.
    pub fn new(x: u8, y: u8, z: u8) -> Result<Self, BoardError> {
        if x < SIDE && y < SIDE && z < SIDE {
            Ok(Self { x, y, z })
        } else {
            Err(BoardError::OutOfRange { x, y, z })
        }
    }

    /// Creates a cell from its linear index (0-26).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Linear index of this cell (0-26).
    pub fn index(self) -> usize {
        self.x as usize + 3 * self.y as usize + 9 * self.z as usize
    }

    /// X coordinate.
    pub fn x(self) -> u8 {
        self.x
    }

    /// Y coordinate.
    pub fn y(self) -> u8 {
        self.y
    }

    /// Z coordinate (layer).
    pub fn z(self) -> u8 {
        self.z
    }

    /// Steps one cell along `(dx, dy, dz)`, or `None` past the boundary.
    pub fn offset(self, (dx, dy, dz): (i8, i8, i8)) -> Option<Self> {
        let step = |c: u8, d: i8| c.checked_add_signed(d).filter(|&v| v < SIDE);
        Some(Self {
            x: step(self.x, dx)?,
            y: step(self.y, dy)?,
            z: step(self.z, dz)?,
        })
    }
}

impl TryFrom<[u8; 3]> for Cell {
    type Error = BoardError;

    fn try_from([x, y, z]: [u8; 3]) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

impl From<Cell> for [u8; 3] {
    fn from(cell: Cell) -> Self {
        [cell.x, cell.y, cell.z]
    }
}

/// 3x3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in cell index order (0-26).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_cell_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Places a player's mark on an empty cell.
    ///
    /// An occupied cell is left untouched and reported as
    /// [`MoveError::CellOccupied`].
    #[instrument(skip(self))]
    pub fn place_piece(&mut self, cell: Cell, player: Player) -> Result<(), MoveError> {
        if !self.is_cell_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }
        self.squares[cell.index()] = Square::Occupied(player);
        Ok(())
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELL_COUNT];
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares in cell index order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the three layers side by side, `z = 0` on the left.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..SIDE {
            let layers = (0..SIDE)
                .map(|z| {
                    (0..SIDE)
                        .map(|x| match self.squares[Cell { x, y, z }.index()] {
                            Square::Empty => '.',
                            Square::Occupied(p) => p.symbol(),
                        })
                        .map(String::from)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{layers}")?;
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Playing")]
    Playing,
    /// Game ended in a win.
    #[display("Player {_0} wins")]
    Won(Player),
    /// Game ended with a full board and no line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }
}
