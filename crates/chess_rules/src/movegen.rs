use crate::position::{
    Position, DIAGONAL_DIRS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONAL_DIRS,
};
use crate::types::*;

const PROMOTION_CHOICES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// All legal moves for the side to move, in generation order (scanning
/// squares a1..h8). An empty result means checkmate or stalemate.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    pseudo_moves(pos, &mut moves);

    // Discard moves that leave the mover's own king attacked.
    let mover = pos.turn();
    moves.retain(|&mv| {
        let mut next = pos.clone();
        next.apply(mv);
        !next.in_check(mover)
    });
    moves
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(pc) if pc.side == pos.turn() => pc,
            _ => continue,
        };
        match pc.ty {
            PieceType::Pawn => pawn_moves(pos, from, pc.side, out),
            PieceType::Knight => step_moves(pos, from, pc.side, &KNIGHT_DELTAS, out),
            PieceType::Bishop => slide_moves(pos, from, pc.side, &DIAGONAL_DIRS, out),
            PieceType::Rook => slide_moves(pos, from, pc.side, &ORTHOGONAL_DIRS, out),
            PieceType::Queen => {
                slide_moves(pos, from, pc.side, &DIAGONAL_DIRS, out);
                slide_moves(pos, from, pc.side, &ORTHOGONAL_DIRS, out);
            }
            PieceType::King => {
                step_moves(pos, from, pc.side, &KING_DELTAS, out);
                castle_moves(pos, from, pc.side, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, side: Side, out: &mut Vec<Move>) {
    let promo_rank = match side {
        Side::White => 7,
        Side::Black => 0,
    };
    if rank_of(to) == promo_rank {
        for ty in PROMOTION_CHOICES {
            out.push(Move::promoting(from, to, ty));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn pawn_moves(pos: &Position, from: u8, side: Side, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let (dir, start_rank) = match side {
        Side::White => (1, 1),
        Side::Black => (-1, 6),
    };

    if let Some(to) = square(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, side, out);
            if r == start_rank {
                if let Some(two) = square(f, r + 2 * dir) {
                    if pos.piece_at(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let to = match square(f + df, r + dir) {
            Some(to) => to,
            None => continue,
        };
        match pos.piece_at(to) {
            Some(target) if target.side != side => push_pawn_move(from, to, side, out),
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn step_moves(pos: &Position, from: u8, side: Side, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in deltas {
        if let Some(to) = square(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(target) if target.side != side => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn slide_moves(pos: &Position, from: u8, side: Side, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = square(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(target) => {
                    if target.side != side {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn castle_moves(pos: &Position, from: u8, side: Side, out: &mut Vec<Move>) {
    // Home square, short/long rights, and the squares the king crosses.
    let (home, short, long) = match side {
        Side::White => (4u8, pos.castling.white_short, pos.castling.white_long),
        Side::Black => (60u8, pos.castling.black_short, pos.castling.black_long),
    };
    if from != home || pos.in_check(side) {
        return;
    }

    let enemy = side.opponent();
    let clear = |sqs: &[u8]| sqs.iter().all(|&s| pos.piece_at(s).is_none());
    let safe = |sqs: &[u8]| sqs.iter().all(|&s| !pos.is_attacked(s, enemy));

    if short && clear(&[home + 1, home + 2]) && safe(&[home + 1, home + 2]) {
        let mut mv = Move::new(home, home + 2);
        mv.castling = true;
        out.push(mv);
    }
    if long && clear(&[home - 1, home - 2, home - 3]) && safe(&[home - 1, home - 2]) {
        let mut mv = Move::new(home, home - 2);
        mv.castling = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
