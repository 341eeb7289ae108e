//! Turn order and score bookkeeping.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per player for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn slot(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }
}

/// Tracks whose turn it is and the running score.
///
/// The score survives [`PlayerTracker::reset_turn`]; only
/// [`PlayerTracker::reset_score`] clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTracker {
    current: Player,
    scores: Scoreboard,
}

impl PlayerTracker {
    /// X to move, no wins recorded.
    pub fn new() -> Self {
        Self {
            current: Player::X,
            scores: Scoreboard::default(),
        }
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.current))]
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Gives the turn back to X.
    pub fn reset_turn(&mut self) {
        self.current = Player::X;
    }

    pub(crate) fn set_current(&mut self, player: Player) {
        self.current = player;
    }

    /// Records a win for `player`.
    #[instrument(skip(self))]
    pub fn add_score(&mut self, player: Player) {
        *self.scores.slot(player) += 1;
        debug!(score = self.scores.get(player), "Score updated");
    }

    /// Records a win for the marker `symbol`.
    ///
    /// Symbols other than X or O are ignored.
    #[instrument(skip(self))]
    pub fn add_score_symbol(&mut self, symbol: char) {
        match Player::from_symbol(symbol) {
            Some(player) => self.add_score(player),
            None => debug!("Ignoring unrecognized marker"),
        }
    }

    /// Wins recorded for `player`.
    pub fn score(&self, player: Player) -> u32 {
        self.scores.get(player)
    }

    /// Both scores.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Clears both scores.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.scores = Scoreboard::default();
    }
}

impl Default for PlayerTracker {
    fn default() -> Self {
        Self::new()
    }
}
