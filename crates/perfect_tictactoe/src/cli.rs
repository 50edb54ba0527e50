//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use perfect_tictactoe::{Board, DEFAULT_CONFIG_PATH, MoveOrder, Player};

/// Perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Tic-tac-toe against an exhaustive minimax player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the computer
    Play {
        /// Side you play (x moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Move ordering for the computer (row-major, reversed, center-first)
        #[arg(long)]
        order: Option<MoveOrder>,
    },

    /// Print the value and best move for a board
    Solve {
        /// Nine cells, row-major: X, O and . for empty (e.g. "XX.OO....")
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Move ordering used to break ties between equally good moves
        #[arg(long)]
        order: Option<MoveOrder>,
    },

    /// Let the computer play both sides
    Selfplay {
        /// Move ordering used to break ties between equally good moves
        #[arg(long)]
        order: Option<MoveOrder>,
    },
}
