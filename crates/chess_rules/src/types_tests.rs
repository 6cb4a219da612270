use super::*;

#[test]
fn square_indexing_round_trips() {
    assert_eq!(parse_square("a1"), Some(0));
    assert_eq!(parse_square("h1"), Some(7));
    assert_eq!(parse_square("a8"), Some(56));
    assert_eq!(parse_square("h8"), Some(63));
    assert_eq!(parse_square("e4"), Some(28));
    for sq in 0..64u8 {
        assert_eq!(parse_square(&square_name(sq)), Some(sq));
    }
}

#[test]
fn parse_square_rejects_garbage() {
    assert_eq!(parse_square(""), None);
    assert_eq!(parse_square("e9"), None);
    assert_eq!(parse_square("i1"), None);
    assert_eq!(parse_square("e44"), None);
}

#[test]
fn square_bounds() {
    assert_eq!(square(0, 0), Some(0));
    assert_eq!(square(7, 7), Some(63));
    assert_eq!(square(-1, 0), None);
    assert_eq!(square(0, 8), None);
}

#[test]
fn move_display_is_coordinate_notation() {
    let mv = Move::new(12, 28);
    assert_eq!(mv.to_string(), "e2e4");

    let promo = Move::promoting(52, 60, PieceType::Queen);
    assert_eq!(promo.to_string(), "e7e8q");
}
