//! Balanced marks invariant: X never trails O and leads by at most one.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// Players alternate starting with X, so no other count is reachable.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}
