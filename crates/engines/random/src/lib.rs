//! Random Mover
//!
//! Picks uniformly at random among the legal moves. Used for the opening
//! plies before the search takes over, and handy as a baseline opponent.

use chess_rules::{Game, Move, Mover};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed variant, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Mover for RandomMover {
    fn choose(&mut self, game: &Game) -> Option<Move> {
        game.legal_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}
