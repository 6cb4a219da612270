use super::*;
use crate::position::Position;

#[test]
fn startpos_has_twenty_moves() {
    let moves = legal_moves(&Position::initial());
    assert_eq!(moves.len(), 20);
}

#[test]
fn reply_to_e4_has_twenty_moves() {
    let mut pos = Position::initial();
    pos.apply(Move::new(parse_square("e2").unwrap(), parse_square("e4").unwrap()));
    assert_eq!(legal_moves(&pos).len(), 20);
}

#[test]
fn kiwipete_has_forty_eight_moves() {
    // Kiwipete: the classic movegen stress position.
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    assert_eq!(legal_moves(&pos).len(), 48);
}

#[test]
fn pinned_pieces_cannot_expose_the_king() {
    let pos = Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -").unwrap();
    assert_eq!(legal_moves(&pos).len(), 14);
}

#[test]
fn promotion_generates_all_four_choices() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let moves = legal_moves(&pos);

    let promotions: Vec<_> = moves.iter().filter(|m| m.promotion.is_some()).collect();
    assert_eq!(promotions.len(), 4);
    assert_eq!(moves.len(), 7); // four promotions plus three king steps
}

#[test]
fn en_passant_is_generated() {
    let pos = Position::from_fen("k7/8/8/3pP3/8/8/8/K7 w - d6 0 1").unwrap();
    let moves = legal_moves(&pos);

    let ep: Vec<_> = moves.iter().filter(|m| m.en_passant).collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to_string(), "e5d6");
}

#[test]
fn castling_through_an_attacked_square_is_rejected() {
    // Black rook on f4 covers f1: short castling is out, long is fine.
    let pos = Position::from_fen("r3k2r/8/8/8/5r2/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castles: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.castling)
        .collect();

    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to_string(), "e1c1");
}

#[test]
fn both_castles_when_the_path_is_clear() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castles: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.castling)
        .map(|m| m.to_string())
        .collect();

    assert_eq!(castles, vec!["e1g1", "e1c1"]);
}

#[test]
fn no_moves_when_checkmated() {
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(pos.in_check(Side::Black));
}
