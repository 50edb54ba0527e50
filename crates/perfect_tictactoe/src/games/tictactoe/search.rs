//! Exhaustive minimax search.
//!
//! X maximizes [`utility`] and O minimizes it. Every line of play is
//! searched to the end of the game: no pruning, no caching, no depth limit.
//! A game lasts at most nine plies, so the tree is small enough for that.

use super::rules::{actions, player, result, terminal, utility};
use super::{Action, Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Value of a position under optimal play, with the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Outcome {
    /// Game result from X's point of view: 1, 0 or -1.
    pub utility: i8,
    /// Best move for the side to play; `None` only on a terminal board.
    pub action: Option<Action>,
}

/// Order in which the searcher tries moves.
///
/// The ordering only decides which of several equally good moves is
/// returned; the utility is the same under every ordering.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MoveOrder {
    /// Top-left to bottom-right.
    #[default]
    RowMajor,
    /// Bottom-right to top-left.
    Reversed,
    /// Center, then corners, then edges.
    CenterFirst,
}

impl MoveOrder {
    /// Puts `candidates` in this order.
    pub fn arrange(self, candidates: impl IntoIterator<Item = Action>) -> Vec<Action> {
        let mut ordered: Vec<Action> = candidates.into_iter().collect();
        match self {
            MoveOrder::RowMajor => ordered.sort(),
            MoveOrder::Reversed => ordered.sort_by(|a, b| b.cmp(a)),
            MoveOrder::CenterFirst => ordered.sort_by_key(|&a| (center_first_rank(a), a)),
        }
        ordered
    }
}

fn center_first_rank(action: Action) -> u8 {
    match action.position() {
        Some(Position::Center) => 0,
        Some(
            Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight,
        ) => 1,
        _ => 2,
    }
}

/// Minimax searcher.
///
/// Among equally good moves the first one tried under [`MoveOrder`] is kept,
/// so results are reproducible for a given ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_new::new)]
pub struct Searcher {
    order: MoveOrder,
}

impl Searcher {
    /// The move ordering this searcher uses.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Returns the optimal action for the player to move, or `None` if the
    /// game is over.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn minimax(&self, board: &Board) -> Option<Action> {
        let outcome = self.solve(board);
        debug!(
            utility = outcome.utility,
            action = ?outcome.action,
            "Search complete"
        );
        outcome.action
    }

    /// Value of `board` under optimal play plus the move achieving it.
    ///
    /// Maximizes when X is to move and minimizes when O is. On a terminal
    /// board the action is `None`.
    #[instrument(level = "debug", skip(self), fields(order = %self.order))]
    pub fn solve(&self, board: &Board) -> Outcome {
        if terminal(board) {
            return Outcome::new(utility(board), None);
        }

        match player(board) {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }

    /// Best outcome for X, who picks the move with the highest value.
    pub fn max_value(&self, board: &Board) -> Outcome {
        if terminal(board) {
            return Outcome::new(utility(board), None);
        }

        // Below every reachable utility, so the first move always replaces it.
        let mut best = Outcome::new(i8::MIN, None);
        for action in self.order.arrange(actions(board)) {
            let Some(next) = successor(board, action) else {
                continue;
            };
            let value = self.min_value(&next).utility;
            if value > best.utility {
                best = Outcome::new(value, Some(action));
            }
        }
        best
    }

    /// Best outcome for O, who picks the move with the lowest value.
    pub fn min_value(&self, board: &Board) -> Outcome {
        if terminal(board) {
            return Outcome::new(utility(board), None);
        }

        let mut best = Outcome::new(i8::MAX, None);
        for action in self.order.arrange(actions(board)) {
            let Some(next) = successor(board, action) else {
                continue;
            };
            let value = self.max_value(&next).utility;
            if value < best.utility {
                best = Outcome::new(value, Some(action));
            }
        }
        best
    }
}

/// Applies an action produced by [`actions`]. Those never fail on a
/// well-formed board, but a failure is logged and the branch skipped rather
/// than aborting the search.
fn successor(board: &Board, action: Action) -> Option<Board> {
    match result(board, action) {
        Ok(next) => Some(next),
        Err(e) => {
            error!(error = %e, %action, "Legal action rejected by the rules");
            None
        }
    }
}

/// Returns the optimal action for the player to move using row-major move
/// ordering, or `None` if the game is over.
pub fn minimax(board: &Board) -> Option<Action> {
    Searcher::default().minimax(board)
}

/// [`Searcher::max_value`] with row-major move ordering.
pub fn max_value(board: &Board) -> Outcome {
    Searcher::default().max_value(board)
}

/// [`Searcher::min_value`] with row-major move ordering.
pub fn min_value(board: &Board) -> Outcome {
    Searcher::default().min_value(board)
}
