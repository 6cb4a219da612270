use super::*;
use crate::RulesError;

fn find(game: &Game, text: &str) -> Move {
    game.legal_moves()
        .into_iter()
        .find(|m| m.to_string() == text)
        .unwrap_or_else(|| panic!("{text} should be legal"))
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv = find(game, text);
        game.play(mv).unwrap();
    }
}

#[test]
fn clones_are_fully_independent() {
    let original = Game::new();
    let mut clone = original.clone();

    play_all(&mut clone, &["e2e4", "e7e5"]);

    assert_eq!(original.ply(), 0);
    assert_eq!(clone.ply(), 2);
    assert_eq!(original.position(), &Position::initial());

    // A second clone of the original is unaffected by the first one.
    let mut sibling = original.clone();
    play_all(&mut sibling, &["d2d4"]);
    assert_eq!(clone.ply(), 2);
    assert_eq!(original.ply(), 0);
}

#[test]
fn play_rejects_illegal_moves() {
    let mut game = Game::new();
    let err = game.play(Move::new(12, 36)).unwrap_err(); // e2e5
    assert!(matches!(err, RulesError::IllegalMove(_)));
    assert_eq!(game.ply(), 0);
}

#[test]
fn fools_mate_is_checkmate() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert_eq!(
        game.outcome(),
        Some((Outcome::BlackWins, EndMethod::Checkmate))
    );

    // Nothing more can be played.
    let err = game.play(Move::new(8, 16)).unwrap_err();
    assert!(matches!(err, RulesError::GameOver));
}

#[test]
fn outcome_is_none_in_progress() {
    let mut game = Game::new();
    assert_eq!(game.outcome(), None);
    play_all(&mut game, &["e2e4"]);
    assert_eq!(game.outcome(), None);
}

#[test]
fn knight_shuffle_draws_by_repetition() {
    let mut game = Game::new();
    // The start position recurs after every four plies; the third
    // occurrence ends the game.
    play_all(
        &mut game,
        &[
            "g1f3", "g8f6", "f3g1", "f6g8", //
            "g1f3", "g8f6", "f3g1", "f6g8",
        ],
    );

    assert_eq!(
        game.outcome(),
        Some((Outcome::Draw, EndMethod::ThreefoldRepetition))
    );
}

#[test]
fn movetext_numbers_move_pairs() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "e7e5", "g1f3"]);
    assert_eq!(game.movetext(), "1. e2e4 e7e5 2. g1f3");

    play_all(&mut game, &["b8c6"]);
    assert_eq!(game.movetext(), "1. e2e4 e7e5 2. g1f3 b8c6");
}

#[test]
fn from_fen_carries_the_side_to_move() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert_eq!(game.turn(), Side::White);
    assert!(game.legal_moves().iter().any(|m| m.castling));
}
