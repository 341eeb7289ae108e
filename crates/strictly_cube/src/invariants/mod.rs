//! First-class invariants for 3x3x3 tic-tac-toe.
//!
//! Invariants are logical properties of a
//! [`GameController`](crate::GameController) that must hold after every
//! accepted move. The controller checks them in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn violation_if<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        violation_if::<S, I1>(state, &mut violations);
        violation_if::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        violation_if::<S, I1>(state, &mut violations);
        violation_if::<S, I2>(state, &mut violations);
        violation_if::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

pub mod mark_balance;
pub mod terminal_status;
pub mod turn_parity;

pub use mark_balance::MarkBalanceInvariant;
pub use terminal_status::TerminalStatusInvariant;
pub use turn_parity::TurnParityInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnParityInvariant,
    TerminalStatusInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, GameController, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameController::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameController::new();
        for i in [0, 13, 26, 4, 8] {
            game.make_move(Cell::from_index(i).unwrap()).unwrap();
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&GameController::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_restored_win() {
        let mut board = Board::new();
        for x in 0..3 {
            board.place_piece(Cell::new(x, 0, 0).unwrap(), Player::X).unwrap();
        }
        board.place_piece(Cell::new(0, 2, 2).unwrap(), Player::O).unwrap();
        board.place_piece(Cell::new(2, 2, 2).unwrap(), Player::O).unwrap();

        let game = GameController::from_board(board).unwrap();
        assert_eq!(game.status(), crate::GameStatus::Won(Player::X));
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}
