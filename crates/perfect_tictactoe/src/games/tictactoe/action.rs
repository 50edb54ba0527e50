//! Actions and move errors for tic-tac-toe.
//!
//! An action is only a coordinate pair; whether it is playable depends on
//! the board it is applied to.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A request to mark the square at `(row, col)`.
///
/// Coordinates are not range-checked on construction so that off-board
/// requests can be expressed and rejected by [`result`](super::rules::result).
/// Ordering is row-major.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Action {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Action {
    /// The board position this action targets, `None` if it is off the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_coords(self.row, self.col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when an action cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveError {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Square ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for InvalidMoveError {}
