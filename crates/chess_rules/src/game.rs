use std::fmt;

use crate::errors::RulesError;
use crate::movegen::legal_moves;
use crate::position::Position;
use crate::types::{Move, Side};

/// Final result of a game, from White's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WhiteWins => write!(f, "1-0"),
            Outcome::BlackWins => write!(f, "0-1"),
            Outcome::Draw => write!(f, "1/2-1/2"),
        }
    }
}

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndMethod {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for EndMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndMethod::Checkmate => "checkmate",
            EndMethod::Stalemate => "stalemate",
            EndMethod::FiftyMoveRule => "fifty-move rule",
            EndMethod::ThreefoldRepetition => "threefold repetition",
            EndMethod::InsufficientMaterial => "insufficient material",
        };
        write!(f, "{s}")
    }
}

/// A game in progress: the current position plus the move history and the
/// repetition bookkeeping that position snapshots alone cannot provide.
///
/// Cloning a `Game` yields a fully independent session; moves played on the
/// clone never touch the original or any sibling clone. Search engines lean
/// on this to explore variations speculatively.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    moves: Vec<Move>,
    /// Repetition key of every position seen, including the starting one.
    keys: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::initial())
    }

    pub fn from_position(position: Position) -> Self {
        let keys = vec![position.repetition_key()];
        Self {
            position,
            moves: Vec::new(),
            keys,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Side {
        self.position.turn()
    }

    /// Number of plies played so far.
    pub fn ply(&self) -> u32 {
        self.moves.len() as u32
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    /// Play a move, validating it against the legal-move list first.
    pub fn play(&mut self, mv: Move) -> Result<(), RulesError> {
        if self.outcome().is_some() {
            return Err(RulesError::GameOver);
        }
        if !self.legal_moves().contains(&mv) {
            return Err(RulesError::IllegalMove(mv));
        }
        self.apply_move(mv);
        Ok(())
    }

    /// Advance by a move already known to be legal (i.e. taken from
    /// [`Game::legal_moves`]). No validation is performed.
    pub fn apply_move(&mut self, mv: Move) {
        self.position.apply(mv);
        self.moves.push(mv);
        self.keys.push(self.position.repetition_key());
    }

    /// `None` while the game is still in progress.
    pub fn outcome(&self) -> Option<(Outcome, EndMethod)> {
        if self.legal_moves().is_empty() {
            if self.position.in_check(self.turn()) {
                let outcome = match self.turn() {
                    Side::White => Outcome::BlackWins,
                    Side::Black => Outcome::WhiteWins,
                };
                return Some((outcome, EndMethod::Checkmate));
            }
            return Some((Outcome::Draw, EndMethod::Stalemate));
        }
        if self.position.halfmove_clock() >= 100 {
            return Some((Outcome::Draw, EndMethod::FiftyMoveRule));
        }
        if self.repetitions_of_current() >= 3 {
            return Some((Outcome::Draw, EndMethod::ThreefoldRepetition));
        }
        if self.position.insufficient_material() {
            return Some((Outcome::Draw, EndMethod::InsufficientMaterial));
        }
        None
    }

    fn repetitions_of_current(&self) -> usize {
        let current = match self.keys.last() {
            Some(&k) => k,
            None => return 0,
        };
        self.keys.iter().filter(|&&k| k == current).count()
    }

    /// The played moves in numbered coordinate notation,
    /// e.g. `1. e2e4 e7e5 2. g1f3`.
    pub fn movetext(&self) -> String {
        let mut text = String::new();
        for (i, pair) in self.moves.chunks(2).enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(&format!("{}. {}", i + 1, pair[0]));
            if let Some(reply) = pair.get(1) {
                text.push_str(&format!(" {reply}"));
            }
        }
        text
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
