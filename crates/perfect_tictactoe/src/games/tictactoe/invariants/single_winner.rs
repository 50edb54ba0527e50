//! Single winner invariant: the game stops at the first completed line.

use super::super::rules::win::has_line;
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X and O do not both own a complete line.
pub struct AtMostOneWinner;

impl Invariant<Board> for AtMostOneWinner {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "X and O do not both have three in a row"
    }
}
