//! Turn order, legal actions and the transition function.

use super::super::{Action, Board, InvalidMoveError, Player, Position, Square};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Returns the starting board: all nine squares empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next.
///
/// X moves first, so O is to move exactly when X has more marks.
#[instrument(level = "trace")]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty square as an action, in row-major order.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    Position::ALL
        .iter()
        .filter(|&&pos| board.is_empty(pos))
        .map(|&pos| pos.to_action())
        .collect()
}

/// Returns the board that results from the player to move taking `action`.
///
/// # Errors
///
/// Returns [`InvalidMoveError::OutOfBounds`] if the coordinates are off the
/// grid and [`InvalidMoveError::Occupied`] if the square is taken. The input
/// board is never modified.
#[instrument(level = "trace")]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidMoveError> {
    let pos = action.position().ok_or(InvalidMoveError::OutOfBounds {
        row: action.row,
        col: action.col,
    })?;

    if !board.is_empty(pos) {
        debug!(position = %pos, "Rejected move onto occupied square");
        return Err(InvalidMoveError::Occupied(pos));
    }

    Ok(board.with(pos, Square::Occupied(player(board))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player(&initial_state()), Player::X);
    }

    #[test]
    fn test_turns_alternate() {
        let board = initial_state();
        let board = result(&board, Action::new(1, 1)).unwrap();
        assert_eq!(player(&board), Player::O);
        let board = result(&board, Action::new(0, 0)).unwrap();
        assert_eq!(player(&board), Player::X);
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_initial_actions_cover_grid() {
        let all = actions(&initial_state());
        assert_eq!(all.len(), 9);
        for row in 0..3 {
            for col in 0..3 {
                assert!(all.contains(&Action::new(row, col)));
            }
        }
    }

    #[test]
    fn test_actions_skip_occupied() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let legal = actions(&board);
        assert_eq!(legal.len(), 7);
        assert!(!legal.contains(&Action::new(0, 0)));
        assert!(!legal.contains(&Action::new(1, 1)));
    }

    #[test]
    fn test_result_does_not_mutate_input() {
        let board = initial_state();
        let next = result(&board, Action::new(2, 2)).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.filled(), 1);
    }

    #[test]
    fn test_result_rejects_occupied() {
        let board = initial_state().with(Position::Center, Square::Occupied(Player::X));
        assert_eq!(
            result(&board, Action::new(1, 1)),
            Err(InvalidMoveError::Occupied(Position::Center))
        );
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        let board = initial_state();
        assert_eq!(
            result(&board, Action::new(0, 3)),
            Err(InvalidMoveError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(
            result(&board, Action::new(7, 1)),
            Err(InvalidMoveError::OutOfBounds { row: 7, col: 1 })
        );
    }
}
