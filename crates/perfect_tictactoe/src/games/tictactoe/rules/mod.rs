//! Game rules for tic-tac-toe.
//!
//! Pure functions of a [`Board`](super::Board): nothing here mutates its
//! input, and `result` is the only operation that can fail.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full, terminal};
pub use turn::{actions, initial_state, player, result};
pub use win::{utility, winner};
