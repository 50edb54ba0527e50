//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties every board reachable by legal play
//! satisfies. The rule functions assume them; boards built from outside
//! input are checked against them before use.

mod balanced_marks;
mod single_winner;

pub use balanced_marks::BalancedMarks;
pub use single_winner::AtMostOneWinner;

use super::Board;

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
/// Implemented for tuples so sets compose without allocation or dispatch.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a reachable board satisfies.
pub type BoardInvariants = (BalancedMarks, AtMostOneWinner);

/// Checks `board` against [`BoardInvariants`].
pub fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_empty_board_holds() {
        assert!(check_board(&Board::new()).is_ok());
    }

    #[test]
    fn test_reports_every_violation() {
        // Four O marks and two complete lines.
        let o = Square::Occupied(Player::O);
        let x = Square::Occupied(Player::X);
        let board = Board::from_squares([o, o, o, x, x, x, o, Square::Empty, Square::Empty]);

        let violations = check_board(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, BalancedMarks::description());
        assert_eq!(violations[1].description, AtMostOneWinner::description());
    }
}
