//! Material-count evaluation.

use chess_rules::{PieceType, Position};

/// Scores a position from the perspective of the side to move.
///
/// Each occupied square contributes its piece's material value, added for
/// the mover's pieces and subtracted for the opponent's. Positive means the
/// side to move is materially ahead. Pure and deterministic; no positional
/// terms.
pub fn evaluate(pos: &Position) -> f64 {
    let mut score = 0.0;
    for sq in 0..64u8 {
        if let Some(piece) = pos.piece_at(sq) {
            let value = piece_value(piece.ty);
            if piece.side == pos.turn() {
                score += value;
            } else {
                score -= value;
            }
        }
    }
    score
}

#[inline]
pub fn piece_value(ty: PieceType) -> f64 {
    match ty {
        PieceType::Pawn => 1.0,
        PieceType::Knight => 3.0,
        PieceType::Bishop => 3.0,
        PieceType::Rook => 5.0,
        PieceType::Queen => 9.0,
        PieceType::King => 100.0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
