use std::fmt;

use crate::errors::RulesError;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_short: bool,
    pub white_long: bool,
    pub black_short: bool,
    pub black_long: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_short: true,
            white_long: true,
            black_short: true,
            black_long: true,
        }
    }

    pub fn none() -> Self {
        Self {
            white_short: false,
            white_long: false,
            black_short: false,
            black_long: false,
        }
    }
}

/// A snapshot of the board: piece placement, side to move, and the state
/// needed to judge legality (castling rights, en-passant square, clocks).
///
/// Fields are deliberately private outside the crate; everything downstream
/// goes through the read-only query surface plus [`Position::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) turn: Side,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<u8>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard starting position.
    pub fn initial() -> Self {
        let mut pos = Self::empty();
        let back = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for (file, &ty) in back.iter().enumerate() {
            pos.squares[file] = Some(Piece::new(Side::White, ty));
            pos.squares[8 + file] = Some(Piece::new(Side::White, PieceType::Pawn));
            pos.squares[48 + file] = Some(Piece::new(Side::Black, PieceType::Pawn));
            pos.squares[56 + file] = Some(Piece::new(Side::Black, ty));
        }
        pos.castling = CastlingRights::all();
        pos
    }

    /// An empty board with White to move. Intended for tests and for
    /// building positions piece by piece.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            turn: Side::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let invalid = |why: &str| RulesError::InvalidFen(format!("{why} in '{fen}'"));

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(invalid("expected at least 4 fields"));
        }

        let mut pos = Self::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("expected 8 ranks"));
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as i8; // FEN lists rank 8 first
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let ty = PieceType::from_letter(ch)
                        .ok_or_else(|| invalid("unknown piece letter"))?;
                    let side = if ch.is_uppercase() {
                        Side::White
                    } else {
                        Side::Black
                    };
                    let sq = square(file, rank).ok_or_else(|| invalid("rank overflows"))?;
                    pos.squares[sq as usize] = Some(Piece::new(side, ty));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(invalid("rank does not cover 8 files"));
            }
        }

        pos.turn = match parts[1] {
            "w" => Side::White,
            "b" => Side::Black,
            _ => return Err(invalid("bad side-to-move field")),
        };

        if parts[2] != "-" {
            for ch in parts[2].chars() {
                match ch {
                    'K' => pos.castling.white_short = true,
                    'Q' => pos.castling.white_long = true,
                    'k' => pos.castling.black_short = true,
                    'q' => pos.castling.black_long = true,
                    _ => return Err(invalid("bad castling field")),
                }
            }
        }

        pos.en_passant = if parts[3] == "-" {
            None
        } else {
            Some(parse_square(parts[3]).ok_or_else(|| invalid("bad en-passant square"))?)
        };

        if let Some(hm) = parts.get(4) {
            pos.halfmove_clock = hm.parse().map_err(|_| invalid("bad halfmove clock"))?;
        }
        if let Some(fm) = parts.get(5) {
            pos.fullmove_number = fm.parse().map_err(|_| invalid("bad fullmove number"))?;
        }

        Ok(pos)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, piece: Option<Piece>) {
        self.squares[sq as usize] = piece;
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn king_square(&self, side: Side) -> Option<u8> {
        (0..64u8).find(|&sq| {
            self.squares[sq as usize] == Some(Piece::new(side, PieceType::King))
        })
    }

    pub fn in_check(&self, side: Side) -> bool {
        match self.king_square(side) {
            Some(ksq) => self.is_attacked(ksq, side.opponent()),
            None => false,
        }
    }

    /// Whether `by` attacks the square `target`.
    pub fn is_attacked(&self, target: u8, by: Side) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        let holds = |f: i8, r: i8, ty: PieceType| -> bool {
            square(f, r)
                .and_then(|s| self.piece_at(s))
                .map_or(false, |pc| pc.side == by && pc.ty == ty)
        };

        // Pawns attack diagonally toward the enemy, so look one rank back
        // toward the attacker's side.
        let dr = match by {
            Side::White => -1,
            Side::Black => 1,
        };
        if holds(tf - 1, tr + dr, PieceType::Pawn) || holds(tf + 1, tr + dr, PieceType::Pawn) {
            return true;
        }

        for (df, dr) in KNIGHT_DELTAS {
            if holds(tf + df, tr + dr, PieceType::Knight) {
                return true;
            }
        }
        for (df, dr) in KING_DELTAS {
            if holds(tf + df, tr + dr, PieceType::King) {
                return true;
            }
        }

        let slider = |dirs: &[(i8, i8)], ty: PieceType| -> bool {
            for &(df, dr) in dirs {
                let mut f = tf + df;
                let mut r = tr + dr;
                while let Some(sq) = square(f, r) {
                    if let Some(pc) = self.piece_at(sq) {
                        if pc.side == by && (pc.ty == ty || pc.ty == PieceType::Queen) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
            false
        };

        slider(&DIAGONAL_DIRS, PieceType::Bishop) || slider(&ORTHOGONAL_DIRS, PieceType::Rook)
    }

    /// Advance the position by exactly one ply.
    ///
    /// `mv` must come from move generation for this position; applying
    /// anything else leaves the position in an unspecified state.
    pub fn apply(&mut self, mv: Move) {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        let mut is_capture = self.piece_at(mv.to).is_some();

        if mv.en_passant {
            // The captured pawn sits behind the destination square.
            let dr = match moved.side {
                Side::White => -1,
                Side::Black => 1,
            };
            if let Some(cap_sq) = square(file_of(mv.to), rank_of(mv.to) + dr) {
                self.set_piece(cap_sq, None);
                is_capture = true;
            }
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));

        if moved.ty == PieceType::Pawn {
            let promo_rank = match moved.side {
                Side::White => 7,
                Side::Black => 0,
            };
            if rank_of(mv.to) == promo_rank {
                let ty = mv.promotion.unwrap_or(PieceType::Queen);
                self.set_piece(mv.to, Some(Piece::new(moved.side, ty)));
            }
        }

        if mv.castling && moved.ty == PieceType::King {
            // The king move carries the rook with it.
            let rook_hop = match (moved.side, mv.to) {
                (Side::White, 6) => Some((7u8, 5u8)),
                (Side::White, 2) => Some((0u8, 3u8)),
                (Side::Black, 62) => Some((63u8, 61u8)),
                (Side::Black, 58) => Some((56u8, 59u8)),
                _ => None,
            };
            if let Some((from, to)) = rook_hop {
                let rook = self.piece_at(from);
                self.set_piece(from, None);
                self.set_piece(to, rook);
            }
        }

        self.update_castling_rights(moved, mv);

        // Double pawn push leaves an en-passant square behind the pawn.
        self.en_passant = None;
        if moved.ty == PieceType::Pawn {
            let fr = rank_of(mv.from);
            let tr = rank_of(mv.to);
            if (fr - tr).abs() == 2 {
                self.en_passant = square(file_of(mv.from), (fr + tr) / 2);
            }
        }

        if moved.ty == PieceType::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if self.turn == Side::Black {
            self.fullmove_number += 1;
        }
        self.turn = self.turn.opponent();
    }

    fn update_castling_rights(&mut self, moved: Piece, mv: Move) {
        // A king or rook leaving its home square loses the right for good,
        // as does a rook being captured on its home square.
        let touched = |sq: u8| mv.from == sq || mv.to == sq;
        if moved.ty == PieceType::King {
            match moved.side {
                Side::White => {
                    self.castling.white_short = false;
                    self.castling.white_long = false;
                }
                Side::Black => {
                    self.castling.black_short = false;
                    self.castling.black_long = false;
                }
            }
        }
        if touched(0) {
            self.castling.white_long = false;
        }
        if touched(7) {
            self.castling.white_short = false;
        }
        if touched(56) {
            self.castling.black_long = false;
        }
        if touched(63) {
            self.castling.black_short = false;
        }
    }

    /// Neither side can possibly deliver checkmate.
    pub fn insufficient_material(&self) -> bool {
        let mut knights = 0u32;
        let mut light_bishops = 0u32;
        let mut dark_bishops = 0u32;
        for sq in 0..64u8 {
            let pc = match self.piece_at(sq) {
                Some(pc) => pc,
                None => continue,
            };
            match pc.ty {
                PieceType::King => {}
                PieceType::Pawn | PieceType::Rook | PieceType::Queen => return false,
                PieceType::Knight => knights += 1,
                PieceType::Bishop => {
                    if (file_of(sq) + rank_of(sq)) % 2 == 0 {
                        dark_bishops += 1;
                    } else {
                        light_bishops += 1;
                    }
                }
            }
        }
        let minors = knights + light_bishops + dark_bishops;
        // Lone minor, or bishops confined to one square color.
        minors <= 1 || (knights == 0 && (light_bishops == 0 || dark_bishops == 0))
    }

    /// Hash used for threefold-repetition detection. FNV-style mix over
    /// placement, side to move, castling rights, and the en-passant square.
    pub fn repetition_key(&self) -> u64 {
        fn mix(mut h: u64, x: u64) -> u64 {
            h ^= x;
            h.wrapping_mul(0x100000001b3)
        }

        let mut h = 0xcbf29ce484222325u64;
        h = mix(
            h,
            match self.turn {
                Side::White => 1,
                Side::Black => 2,
            },
        );
        h = mix(h, if self.castling.white_short { 3 } else { 5 });
        h = mix(h, if self.castling.white_long { 7 } else { 11 });
        h = mix(h, if self.castling.black_short { 13 } else { 17 });
        h = mix(h, if self.castling.black_long { 19 } else { 23 });
        if let Some(ep) = self.en_passant {
            h = mix(h, 29 + ep as u64);
        }
        for (i, sq) in self.squares.iter().enumerate() {
            let v = match sq {
                Some(pc) => {
                    let side_bit = match pc.side {
                        Side::White => 0u64,
                        Side::Black => 1,
                    };
                    (i as u64) ^ (side_bit << 6) ^ ((pc.ty as u64 + 1) << 7)
                }
                None => i as u64,
            };
            h = mix(h, v);
        }
        h
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

impl fmt::Display for Position {
    /// ASCII board, rank 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8i8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let sq = (rank as u8) * 8 + file;
                let ch = match self.piece_at(sq) {
                    Some(pc) => pc.letter(),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
