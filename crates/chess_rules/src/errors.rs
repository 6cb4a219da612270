use thiserror::Error;

use crate::types::Move;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("game is already over")]
    GameOver,
}
