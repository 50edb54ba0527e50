//! Line-oriented console front end.
//!
//! Talks to the rules and the searcher only through the public surface, over
//! any reader and writer so games can be scripted.

use crate::games::tictactoe::{
    Action, Board, Player, Position, Searcher, initial_state, player, result, terminal, winner,
};
use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Describes a finished board: who won, or a draw.
pub fn verdict(board: &Board) -> String {
    match winner(board) {
        Some(player) => format!("{} wins", player),
        None => "Draw".to_string(),
    }
}

/// Human-readable description of a utility value.
pub fn describe_utility(utility: i8) -> &'static str {
    match utility {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}

fn describe_action(action: Action) -> String {
    match action.position() {
        Some(pos) => format!("{} {}", action, pos.label()),
        None => action.to_string(),
    }
}

/// Interactive game between a human and the perfect player.
#[derive(Debug)]
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    human: Player,
    searcher: Searcher,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a game where the human plays `human` and the computer searches
    /// with `searcher`.
    pub fn new(input: R, output: W, human: Player, searcher: Searcher) -> Self {
        Self {
            input,
            output,
            human,
            searcher,
        }
    }

    /// Plays one game to the end and returns the final board.
    ///
    /// # Errors
    ///
    /// Fails if the input ends before the game does or the output cannot be
    /// written.
    #[instrument(skip(self), fields(human = %self.human, order = %self.searcher.order()))]
    pub fn run(mut self) -> Result<Board> {
        info!("Starting console game");
        writeln!(
            self.output,
            "You play {}. Enter a square number (1-9) or name (e.g. center).",
            self.human
        )?;

        let mut board = initial_state();
        while !terminal(&board) {
            board = if player(&board) == self.human {
                writeln!(self.output, "\n{}\n", board.display_numbered())?;
                self.human_turn(&board)?
            } else {
                self.computer_turn(&board)?
            };
        }

        writeln!(self.output, "\n{}\n\n{}", board, verdict(&board))?;
        info!(verdict = %verdict(&board), "Game over");
        Ok(board)
    }

    fn human_turn(&mut self, board: &Board) -> Result<Board> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before the game finished");
            }

            let Some(pos) = Position::from_label_or_number(&line) else {
                writeln!(self.output, "Unrecognized square {:?}", line.trim())?;
                continue;
            };

            match result(board, pos.to_action()) {
                Ok(next) => {
                    debug!(position = %pos, "Human move accepted");
                    return Ok(next);
                }
                Err(e) => {
                    warn!(error = %e, "Rejected human move");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn computer_turn(&mut self, board: &Board) -> Result<Board> {
        let action = self
            .searcher
            .minimax(board)
            .ok_or_else(|| anyhow!("No move found on an unfinished board"))?;
        let next = result(board, action).context("Search chose an illegal move")?;
        writeln!(self.output, "Computer plays {}", describe_action(action))?;
        Ok(next)
    }
}

/// Plays the perfect player against itself from the empty board, printing
/// each move, and returns the final board.
///
/// # Errors
///
/// Fails if the output cannot be written.
#[instrument(skip(output), fields(order = %searcher.order()))]
pub fn self_play<W: Write>(searcher: Searcher, mut output: W) -> Result<Board> {
    let mut board = initial_state();
    while let Some(action) = searcher.minimax(&board) {
        let mover = player(&board);
        board = result(&board, action).context("Search chose an illegal move")?;
        writeln!(output, "{} plays {}", mover, describe_action(action))?;
    }
    writeln!(output, "\n{}\n\n{}", board, verdict(&board))?;
    info!(verdict = %verdict(&board), "Self-play finished");
    Ok(board)
}

/// Result of analysing a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analysed board, in display form.
    pub board: String,
    /// Side to move, `None` once the game is over.
    pub to_move: Option<Player>,
    /// Value under optimal play from X's point of view.
    pub utility: i8,
    /// Optimal move, `None` once the game is over.
    pub action: Option<Action>,
    /// The square the optimal move marks.
    pub position: Option<Position>,
}

impl Analysis {
    /// Solves `board` with `searcher`.
    #[instrument(skip(searcher))]
    pub fn of(board: &Board, searcher: &Searcher) -> Self {
        let outcome = searcher.solve(board);
        Self {
            board: board.to_string(),
            to_move: (!terminal(board)).then(|| player(board)),
            utility: outcome.utility,
            action: outcome.action,
            position: outcome.action.and_then(|a| a.position()),
        }
    }

    /// Writes the analysis as text.
    pub fn write_text<W: Write>(&self, mut output: W) -> Result<()> {
        writeln!(output, "{}\n", self.board)?;
        match (self.to_move, self.action) {
            (Some(mover), Some(action)) => {
                writeln!(output, "{} to move", mover)?;
                writeln!(output, "Value: {} ({})", self.utility, describe_utility(self.utility))?;
                writeln!(output, "Best move: {}", describe_action(action))?;
            }
            _ => {
                writeln!(output, "Game over")?;
                writeln!(output, "Value: {}", self.utility)?;
            }
        }
        Ok(())
    }

    /// Writes the analysis as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, mut output: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut output, self)?;
        writeln!(output)?;
        Ok(())
    }
}
