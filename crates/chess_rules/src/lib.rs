//! Chess rules engine: board state, legal move generation, and full-game
//! bookkeeping (outcome detection, move records, repetition tracking).
//!
//! Engine crates build on top of this; nothing here evaluates positions or
//! picks moves beyond enumerating what is legal.

pub mod errors;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod position;
pub mod types;

pub use errors::RulesError;
pub use game::{EndMethod, Game, Outcome};
pub use movegen::legal_moves;
pub use perft::perft;
pub use position::{CastlingRights, Position};
pub use types::*;

// =============================================================================
// Mover trait — implemented by anything that can pick a move for the side
// to move (random mover, search engines, ...)
// =============================================================================

/// A move-selection policy.
///
/// Implementations never mutate the game they are handed; the driver applies
/// the chosen move itself.
pub trait Mover {
    /// Pick a move for the side to move, or `None` if the game has no
    /// legal moves.
    fn choose(&mut self, game: &Game) -> Option<Move>;

    /// Human-readable name for log lines.
    fn name(&self) -> &str;
}
