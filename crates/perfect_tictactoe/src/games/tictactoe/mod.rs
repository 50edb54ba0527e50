//! Tic-tac-toe: board model, rules and perfect-play search.

mod action;
pub mod invariants;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{Action, InvalidMoveError};
pub use position::Position;
pub use rules::{
    actions, initial_state, is_draw, is_full, player, result, terminal, utility, winner,
};
pub use search::{max_value, min_value, minimax, MoveOrder, Outcome, Searcher};
pub use types::{Board, BoardParseError, Player, Square};
