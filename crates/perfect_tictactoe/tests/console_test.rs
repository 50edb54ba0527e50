//! Tests for the scripted console front end.

use std::io::Cursor;

use perfect_tictactoe::{
    Analysis, Board, ConsoleGame, MoveOrder, Player, Searcher, self_play, terminal, winner,
};

/// Every square in order; a human reading this plays the lowest free square
/// each turn, so the script never runs out before the game ends.
const EVERY_SQUARE: &str = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";

fn run_scripted(script: &str, human: Player) -> (anyhow::Result<Board>, String) {
    let mut output = Vec::new();
    let game = ConsoleGame::new(
        Cursor::new(script.as_bytes()),
        &mut output,
        human,
        Searcher::default(),
    );
    let result = game.run();
    (result, String::from_utf8(output).expect("UTF-8 output"))
}

#[test]
fn test_computer_never_loses_as_o() {
    let (result, output) = run_scripted(EVERY_SQUARE, Player::X);
    let board = result.expect("Game should finish");
    assert!(terminal(&board));
    assert_ne!(winner(&board), Some(Player::X));
    assert!(output.contains("You play X"));
    assert!(output.contains("Computer plays"));
}

#[test]
fn test_computer_never_loses_as_x() {
    let (result, output) = run_scripted(EVERY_SQUARE, Player::O);
    let board = result.expect("Game should finish");
    assert!(terminal(&board));
    assert_ne!(winner(&board), Some(Player::O));
    assert!(output.contains("You play O"));
}

#[test]
fn test_bad_input_is_reprompted() {
    // Center, then gibberish, then the center again (taken), then EOF.
    let (result, output) = run_scripted("center\nabc\n5\n", Player::X);
    assert!(result.is_err());
    assert!(output.contains("Unrecognized square \"abc\""));
    assert!(output.contains("Square Center is already occupied"));
}

#[test]
fn test_self_play_draws() {
    let mut output = Vec::new();
    let board = self_play(Searcher::new(MoveOrder::CenterFirst), &mut output).unwrap();
    assert_eq!(winner(&board), None);
    assert!(terminal(&board));

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("X plays (1, 1) Center"));
    assert!(text.trim_end().ends_with("Draw"));
}

#[test]
fn test_analysis_text() {
    let board: Board = "XX. OO. ...".parse().unwrap();
    let mut output = Vec::new();
    Analysis::of(&board, &Searcher::default())
        .write_text(&mut output)
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("X to move"));
    assert!(text.contains("Value: 1 (X wins with best play)"));
    assert!(text.contains("Best move: (0, 2) Top-right"));
}
