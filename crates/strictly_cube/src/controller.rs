//! Game controller: the single authority over legal play.

use super::action::{GameEvent, Move, MoveError, MoveOutcome};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{self, Line};
use super::snapshot::GameSnapshot;
use super::turn::{PlayerTracker, Scoreboard};
use super::{Board, BoardError, Cell, GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Owns the board, turn order and status of one session.
///
/// All mutation goes through [`GameController::make_move`] and
/// [`GameController::reset`]. Presentation code reads accessors or takes a
/// [`GameSnapshot`], and drains [`GameEvent`]s after each call.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    status: GameStatus,
    players: PlayerTracker,
    last_move: Option<Move>,
    winning_line: Option<Line>,
    events: Vec<GameEvent>,
}

impl GameController {
    /// Creates a controller with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::Playing,
            players: PlayerTracker::new(),
            last_move: None,
            winning_line: None,
            events: Vec::new(),
        }
    }

    /// Restores a position reached by alternating play from X.
    ///
    /// The player to move follows from the mark counts. A position holding a
    /// completed line is restored as won by its owner, who keeps the turn,
    /// provided that owner moved last and the opponent has no line. Scores
    /// start at zero either way.
    #[instrument(skip(board), fields(occupied = board.occupied_count()))]
    pub fn from_board(board: Board) -> Result<Self, BoardError> {
        let x_marks = board.count(Player::X);
        let o_marks = board.count(Player::O);
        let to_move = match x_marks.checked_sub(o_marks) {
            Some(0) => Player::X,
            Some(1) => Player::O,
            _ => return Err(BoardError::Unbalanced { x_marks, o_marks }),
        };

        let completed = rules::completed_lines(&board);
        let (status, current, winning_line) = match completed.first() {
            None => (GameStatus::Playing, to_move, None),
            Some(&(winner, line)) => {
                let last_mover = to_move.opponent();
                let both_won = completed.iter().any(|(owner, _)| *owner != winner);
                if winner != last_mover || both_won {
                    warn!(%winner, lines = completed.len(), "Rejected position: play after a win");
                    return Err(BoardError::PlayAfterWin { winner });
                }
                (GameStatus::Won(winner), winner, Some(line))
            }
        };

        let mut players = PlayerTracker::new();
        players.set_current(current);
        debug!(%current, %status, "Position restored");

        Ok(Self {
            board,
            status,
            players,
            last_move: None,
            winning_line,
            events: Vec::new(),
        })
    }

    /// Places the current player's mark on `cell`.
    ///
    /// A win is checked before a full board, so a move doing both wins.
    /// The winner keeps the turn. Rejected moves change nothing.
    #[instrument(skip(self), fields(player = %self.players.current_player()))]
    pub fn make_move(&mut self, cell: Cell) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            warn!(status = %self.status, "Move rejected: game over");
            return Err(MoveError::GameOver);
        }

        let player = self.players.current_player();
        if let Err(e) = self.board.place_piece(cell, player) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let action = Move::new(player, cell);
        self.last_move = Some(action);
        self.events.push(GameEvent::MoveMade(action));
        debug!(%action, "Mark placed");

        // winning_line is check_win plus the cells to highlight
        let outcome = if let Some(line) = rules::winning_line(&self.board, cell, player) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            self.players.add_score(player);
            self.events.push(GameEvent::GameOver {
                winner: Some(player),
            });
            info!(winner = %player, ?line, "Game won");
            MoveOutcome::Won {
                winner: player,
                line,
            }
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            self.events.push(GameEvent::GameOver { winner: None });
            info!("Game drawn");
            MoveOutcome::Draw
        } else {
            self.players.switch_player();
            MoveOutcome::Continue {
                next: self.players.current_player(),
            }
        };

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Invariant violated after {action}"
        );

        Ok(outcome)
    }

    /// Clears the board for a new game; X moves first. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::Playing;
        self.players.reset_turn();
        self.last_move = None;
        self.winning_line = None;
        self.events.push(GameEvent::BoardCleared);
        info!("Board cleared");
    }

    /// Sets both scores back to zero.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.players.reset_score();
        self.events.push(GameEvent::ScoresReset);
    }

    /// Returns true if `cell` can still be played.
    pub fn is_cell_empty(&self, cell: Cell) -> bool {
        self.board.is_cell_empty(cell)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move (the winner once the game is won).
    pub fn current_player(&self) -> Player {
        self.players.current_player()
    }

    /// Returns the turn and score tracker.
    pub fn players(&self) -> &PlayerTracker {
        &self.players
    }

    /// Returns the session scores.
    pub fn scores(&self) -> Scoreboard {
        self.players.scores()
    }

    /// Returns the most recent accepted move of this game.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the completed line once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Takes all events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Copies the readable state for a renderer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board.clone(),
            self.status,
            self.players.current_player(),
            self.players.scores(),
            self.last_move,
            self.winning_line,
        )
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
