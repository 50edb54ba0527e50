//! Perfect-play tic-tac-toe.
//!
//! Exhaustive minimax over the full game tree: given any board, find whose
//! turn it is, the legal moves, whether the game is over, and the move that
//! is optimal against an optimal opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Action`], [`Position`]
//! - **Rules**: [`initial_state`], [`player`], [`actions`], [`result`],
//!   [`winner`], [`terminal`], [`utility`]
//! - **Search**: [`minimax`], [`max_value`], [`min_value`], [`Searcher`]
//! - **Console**: [`ConsoleGame`], [`self_play`], [`Analysis`] drive the
//!   above from a terminal; configured through [`PlayConfig`]
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{initial_state, minimax, result, Action, Board};
//!
//! // X threatens the top row and should finish it.
//! let board: Board = "XX. OO. ...".parse()?;
//! assert_eq!(minimax(&board), Some(Action::new(0, 2)));
//!
//! // Moves produce new boards; the original is untouched.
//! let start = initial_state();
//! let next = result(&start, Action::new(1, 1))?;
//! assert_eq!(start.filled(), 0);
//! assert_eq!(next.filled(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, PlayConfig};

// Crate-level exports - Console front end
pub use console::{Analysis, ConsoleGame, describe_utility, self_play, verdict};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, BoardParseError, InvalidMoveError, MoveOrder, Outcome, Player, Position,
    Searcher, Square, actions, initial_state, is_draw, is_full, max_value, min_value, minimax,
    player, result, terminal, utility, winner,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AtMostOneWinner, BalancedMarks, Invariant, InvariantSet, InvariantViolation, check_board,
};
