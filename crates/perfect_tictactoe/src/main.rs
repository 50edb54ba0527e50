//! perfect_tictactoe - console driver
//!
//! Play against, analyse with, or watch the perfect minimax player.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe::{
    Analysis, Board, ConsoleGame, MoveOrder, PlayConfig, Player, Searcher, self_play,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play { human, order } => run_play(config, human, order),
        Command::Solve { board, json, order } => run_solve(&config, board, json, order),
        Command::Selfplay { order } => run_selfplay(&config, order),
    }
}

/// Logs go to stderr so stdout carries only the game.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn searcher(config: &PlayConfig, order: Option<MoveOrder>) -> Searcher {
    Searcher::new(order.unwrap_or(*config.move_order()))
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: PlayConfig, human: Option<Player>, order: Option<MoveOrder>) -> Result<()> {
    let config = match human {
        Some(human) => config.with_human(human),
        None => config,
    };
    let searcher = searcher(&config, order);

    let stdin = std::io::stdin();
    let game = ConsoleGame::new(stdin.lock(), std::io::stdout(), *config.human(), searcher);
    let board = game.run()?;
    info!(filled = board.filled(), "Interactive game finished");
    Ok(())
}

/// Solve a single position
#[instrument(skip(config))]
fn run_solve(config: &PlayConfig, board: Board, json: bool, order: Option<MoveOrder>) -> Result<()> {
    let analysis = Analysis::of(&board, &searcher(config, order));
    let stdout = std::io::stdout();
    if json {
        analysis.write_json(stdout.lock())
    } else {
        analysis.write_text(stdout.lock())
    }
}

/// Watch the computer play itself
#[instrument(skip(config))]
fn run_selfplay(config: &PlayConfig, order: Option<MoveOrder>) -> Result<()> {
    self_play(searcher(config, order), std::io::stdout())?;
    Ok(())
}
