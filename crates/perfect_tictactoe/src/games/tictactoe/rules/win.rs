//! Win detection and scoring for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Every line that wins the game: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Whether `player` owns any complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Returns the winner of the game, if there is one.
///
/// X is checked before O. Under alternating play both can never own a
/// line at once, but the order keeps the answer deterministic for any board.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_line(board, player))
}

/// Scores a board from X's point of view: 1 if X has won, -1 if O has won,
/// 0 otherwise.
///
/// Only meaningful on terminal boards; an unfinished game also scores 0.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert_eq!(utility(&board), 1);
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO. XO. .OX".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
        assert_eq!(utility(&board), -1);
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "XO. OX. ..X".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO XO. O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
        assert_eq!(utility(&board), -1);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. O.. ...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_x_checked_first() {
        let board = Board::from_squares([
            Square::Occupied(Player::O),
            Square::Occupied(Player::O),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Empty,
            Square::Empty,
            Square::Empty,
        ]);
        assert_eq!(winner(&board), Some(Player::X));
    }
}
