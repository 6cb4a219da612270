use super::*;

#[test]
fn report_of_an_unfinished_game_is_open() {
    let game = Game::new();
    let report = GameReport::from_game(&game, 9, 3);

    assert_eq!(report.result, "*");
    assert_eq!(report.method, None);
    assert_eq!(report.plies, 0);
}

#[test]
fn report_of_a_mated_game_names_the_method() {
    let game =
        Game::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    let report = GameReport::from_game(&game, 9, 3);

    assert_eq!(report.result, "1-0");
    assert_eq!(report.method.as_deref(), Some("checkmate"));
}

#[test]
fn report_serializes_to_json() {
    let game = Game::new();
    let report = GameReport::from_game(&game, 9, 3);
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"search_depth\":3"));
}
